use crate::inputs::Vertex;

/// A caller-side vertex type carrying an id next to its position.
#[derive(Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct VTest {
    pub id: u32,
    x: f64,
    y: f64,
}

impl VTest {
    pub fn new(id: u32, x: f64, y: f64) -> Self { VTest { id, x, y } }
}

impl std::fmt::Debug for VTest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} ({}, {})", self.id, self.x, self.y)
    }
}

impl Vertex for VTest {
    type Coordinate = f64;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate { self.x }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate { self.y }
}

pub fn numbered<I: IntoIterator<Item=(f64, f64)>>(coords: I) -> Vec<VTest> {
    coords.into_iter()
        .enumerate()
        .map(|(i, (x, y))| VTest::new(i as u32, x, y))
        .collect()
}
