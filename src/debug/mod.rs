//! SVG snapshots of clipped diagrams, configured through `VORONOI_SVG_*` environment variables.

pub(crate) mod env;
pub(crate) mod svg;
