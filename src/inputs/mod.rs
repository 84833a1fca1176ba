mod vertex;
pub use vertex::Vertex;
