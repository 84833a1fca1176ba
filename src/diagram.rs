use num_traits::real::Real;

#[cfg(feature = "debugging")]
use std::fmt;

#[cfg(feature = "debugging")]
use crate::debug;
use crate::{Vertex, clip::clip_region, delaunay::DelaunayTriangulation, errors::VoronoiError, geometry::{BoundingBox, Point, Polygon}, region::{Region, build_regions}};

/// A Voronoi diagram: for every vertex, the part of the plane closer to it than to any other vertex.
///
/// Regions are derived from a [DelaunayTriangulation] and may be unbounded; [VoronoiDiagram::polygons]
/// clips them to a box. Vertices are addressed by their insertion index.
///
/// Every insertion rebuilds all regions, so inserting `n` vertices one at a time costs `O(n²)`.
/// Prefer building from the whole vertex set when it is known up front.
#[derive(Debug, Clone, PartialEq)]
pub struct VoronoiDiagram<V, C> {
    triangulation: DelaunayTriangulation<V, C>,
    regions: Vec<Region<C>>,
}

impl<V, C: Real> Default for VoronoiDiagram<V, C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V, C: Real> VoronoiDiagram<V, C> {
    /// A diagram without vertices or regions.
    pub fn empty() -> Self {
        Self {
            triangulation: DelaunayTriangulation::empty(),
            regions: Vec::new(),
        }
    }

    /// Builds the diagram of `vertices`, each located with `position`.
    ///
    /// Fails with [VoronoiError::CoincidentVertices] if two vertices share a position.
    pub fn from_vertices_by<I, F>(vertices: I, position: F) -> Result<Self, VoronoiError<V>>
    where I: IntoIterator<Item=V>, F: Fn(&V) -> Point<C> {
        let triangulation = DelaunayTriangulation::from_vertices_by(vertices, position)?;
        Ok(Self::from_delaunay_triangulation(triangulation))
    }

    pub fn from_delaunay_triangulation(triangulation: DelaunayTriangulation<V, C>) -> Self {
        let regions = derive_regions(&triangulation);
        Self {
            triangulation,
            regions,
        }
    }

    /// Adds `vertex`, returning its index, and rebuilds every region.
    ///
    /// If the position of `vertex` is already taken the diagram is left untouched.
    pub fn insert_vertex_by<F>(&mut self, vertex: V, position: F) -> Result<usize, VoronoiError<V>>
    where V: Clone, F: Fn(&V) -> Point<C> {
        let index = self.triangulation.insert_vertex_by(vertex, position)?;
        self.regions = derive_regions(&self.triangulation);
        Ok(index)
    }

    pub fn vertices(&self) -> &[V] {
        self.triangulation.vertices()
    }

    pub fn len(&self) -> usize {
        self.triangulation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangulation.is_empty()
    }

    /// The unclipped regions, ordered by vertex index.
    pub fn regions(&self) -> &[Region<C>] {
        &self.regions
    }

    pub fn region(&self, index: usize) -> Option<&Region<C>> {
        self.regions.binary_search_by_key(&index, Region::vertex)
            .ok()
            .map(|i| &self.regions[i])
    }

    /// The region of the vertex at `index` clipped to `bounds`, or `None` if it misses the box.
    pub fn polygon(&self, index: usize, bounds: &BoundingBox<C>) -> Option<Polygon<C>> {
        clip_region(bounds, self.region(index)?)
    }

    /// Every region clipped to `bounds`, paired with its vertex. Regions outside the box are left out.
    pub fn polygons(&self, bounds: &BoundingBox<C>) -> Vec<(&V, Polygon<C>)> {
        let cells: Vec<(usize, Polygon<C>)> = self.regions.iter()
            .filter_map(|region| clip_region(bounds, region).map(|polygon| (region.vertex(), polygon)))
            .collect();

        #[cfg(feature = "debugging")]
        self.output_svg(bounds, &cells);

        let vertices = self.vertices();
        cells.into_iter()
            .map(|(vi, polygon)| (&vertices[vi], polygon))
            .collect()
    }

    pub fn delaunay_triangulation(&self) -> &DelaunayTriangulation<V, C> {
        &self.triangulation
    }

    pub fn into_delaunay_triangulation(self) -> DelaunayTriangulation<V, C> {
        self.triangulation
    }

    #[cfg(feature = "debugging")]
    fn output_svg(&self, bounds: &BoundingBox<C>, cells: &[(usize, Polygon<C>)]) {
        use debug::svg::{SvgContext, SvgDiagramStyle, SvgOutput, SvgOutputLevel};

        let svg_context = match SvgContext::from_env(bounds) {
            Some(svg_context) => svg_context,
            None => return,
        };
        let path = svg_context.output_path.join(format!("{:03}", svg_context.snapshot));
        if std::fs::create_dir(&path).is_err() {
            return;
        }

        let clipped = ClippedDiagram {
            sites: self.triangulation.positions(),
            cells,
        };
        let mut svg = SvgOutput::new(&svg_context, SvgDiagramStyle::new(svg_context.show_labels));
        let _ = svg.append_element(&clipped, &());
        let _ = svg.save(path.join("diagram.svg"));

        if svg_context.output_level >= SvgOutputLevel::AllRegions {
            for (vi, _) in cells {
                let mut svg = SvgOutput::new(&svg_context, SvgDiagramStyle::highlight_region(*vi, svg_context.show_labels));
                let _ = svg.append_element(&clipped, &());
                let _ = svg.save(path.join(format!("{:03}.svg", vi)));
            }
        }
    }
}

impl<V: Vertex> VoronoiDiagram<V, V::Coordinate> {
    pub fn from_vertices<I: IntoIterator<Item=V>>(vertices: I) -> Result<Self, VoronoiError<V>> {
        Self::from_vertices_by(vertices, <V as Vertex>::position)
    }

    pub fn insert_vertex(&mut self, vertex: V) -> Result<usize, VoronoiError<V>>
    where V: Clone {
        self.insert_vertex_by(vertex, <V as Vertex>::position)
    }
}

impl<C: Real> VoronoiDiagram<Point<C>, C> {
    /// Builds the diagram of bare points.
    pub fn from_points<I: IntoIterator<Item=Point<C>>>(points: I) -> Result<Self, VoronoiError<Point<C>>> {
        Self::from_vertices_by(points, |p| *p)
    }

    pub fn insert_point(&mut self, point: Point<C>) -> Result<usize, VoronoiError<Point<C>>> {
        self.insert_vertex_by(point, |p| *p)
    }
}

fn derive_regions<V, C: Real>(triangulation: &DelaunayTriangulation<V, C>) -> Vec<Region<C>> {
    let faces = triangulation.faces();
    let mut regions = build_regions(triangulation.positions(), &faces);
    regions.sort_by_key(Region::vertex);

    tracing::debug!(
        vertices = triangulation.len(),
        faces = faces.len(),
        regions = regions.len(),
        collinear = !faces.iter().any(|face| face.is_triangle()),
        "Derived Voronoi regions"
    );
    regions
}

#[cfg(feature = "debugging")]
struct ClippedDiagram<'a, C> {
    sites: &'a [Point<C>],
    cells: &'a [(usize, Polygon<C>)],
}

#[cfg(feature = "debugging")]
impl<'a, C: Real> debug::svg::SvgElement<debug::svg::SvgDiagramStyle, ()> for ClippedDiagram<'a, C> {
    fn write_svg<'b>(&self, svg_output: &mut debug::svg::SvgOutput<'b, debug::svg::SvgDiagramStyle>, _state: &()) -> fmt::Result {
        use svg_fmt::*;
        use fmt::Write;
        use debug::svg::{SvgElementStyle, circle, svg_point};

        for (vi, cell) in self.cells {
            let vs: Vec<[f32; 2]> = cell.vertices().iter().map(svg_point).collect();
            let outline = polygon(&vs)
                .stroke(Stroke::Color(rgb(255, 0, 255), svg_output.context.percent(0.3)));
            match svg_output.style.get_region_style(*vi) {
                SvgElementStyle::Standard => writeln!(svg_output, "{}", outline.fill(Fill::None))?,
                SvgElementStyle::Highlight => writeln!(svg_output, "{}", outline.fill(Fill::Color(rgb(255, 126, 0))))?,
            }
        }

        let r = svg_output.context.percent(0.5);
        for (vi, site) in self.sites.iter().enumerate() {
            let [x, y] = svg_point(site);
            writeln!(svg_output, "{}",
                circle(x, y, r)
                    .fill(blue())
            )?;

            if svg_output.style.add_labels {
                let gap = svg_output.context.percent(1.0);
                writeln!(svg_output, "{}",
                    text(x - gap, y, vi.to_string())
                        .color(black())
                        .align(Align::Right)
                        .size(svg_output.context.percent(2.0))
                )?;
            }
        }
        Ok(())
    }
}
