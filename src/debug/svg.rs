use std::{fmt, io, path, sync::atomic::{AtomicU32, Ordering}};

use num_traits::real::Real;

use crate::{debug, geometry::{BoundingBox, Point}};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum SvgOutputLevel {
    None,
    ResultOnly,
    AllRegions,
}

pub(crate) struct SvgOutput<'a, Style> {
    pub context: &'a SvgContext,
    pub style: Style,
    content: String,
}

impl<'a, Style> SvgOutput<'a, Style> {
    pub fn new(context: &'a SvgContext, style: Style) -> Self {
        Self {
            context,
            style,
            content: String::new(),
        }
    }

    pub fn append_element<State, E: SvgElement<Style, State>>(&mut self, element: &E, state: &State) -> fmt::Result {
        element.write_svg(self, state)
    }

    pub fn save<P: AsRef<path::Path>>(self, file_name: P) -> io::Result<()> {
        use std::io::Write;

        let path = self.context.output_path.join(file_name);
        let f = std::fs::File::create(path)?;
        let mut w = io::BufWriter::new(&f);

        // Elements are written with y negated, see `svg_point`
        writeln!(w, "<svg viewBox=\"{}, {}, {}, {}\" xmlns=\"http://www.w3.org/2000/svg\">", self.context.view_x_min, -self.context.view_y_max, self.context.view_w(), self.context.view_h())?;
        writeln!(w, "{}", self.content)?;
        writeln!(w, "</svg>")?;
        Ok(())
    }
}

impl<'a, Style> fmt::Write for SvgOutput<'a, Style> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.content.write_str(s)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum SvgElementStyle {
    Standard,
    Highlight,
}

pub(crate) struct SvgDiagramStyle {
    highlight: Option<usize>,
    pub add_labels: bool,
}

impl SvgDiagramStyle {
    pub fn new(add_labels: bool) -> Self {
        Self {
            highlight: None,
            add_labels,
        }
    }

    pub fn highlight_region(vertex: usize, add_labels: bool) -> Self {
        Self {
            highlight: Some(vertex),
            add_labels,
        }
    }

    pub fn get_region_style(&self, vertex: usize) -> SvgElementStyle {
        if self.highlight == Some(vertex) {
            SvgElementStyle::Highlight
        } else {
            SvgElementStyle::Standard
        }
    }
}

pub(crate) struct SvgContext {
    pub output_path: path::PathBuf,
    pub output_level: SvgOutputLevel,
    pub view_x_min: f32,
    pub view_x_max: f32,
    pub view_y_min: f32,
    pub view_y_max: f32,
    pub show_labels: bool,
    pub snapshot: u32,
}

// Diagrams are immutable while clipped, so snapshots are numbered process wide
static NEXT_SNAPSHOT: AtomicU32 = AtomicU32::new(0);

impl SvgContext {
    /// A context framing `bounds`, or `None` if SVG output is disabled.
    pub fn from_env<C: Real>(bounds: &BoundingBox<C>) -> Option<Self> {
        let output_path = debug::env::svg::output_path()?;
        let output_level = debug::env::svg::output_level();
        let show_labels = debug::env::svg::show_labels();

        if output_level == SvgOutputLevel::None {
            return None;
        }

        let mut view_x_min = to_f32(bounds.min_x());
        let mut view_x_max = to_f32(bounds.max_x());
        let mut view_y_min = to_f32(bounds.min_y());
        let mut view_y_max = to_f32(bounds.max_y());

        let w = view_x_max - view_x_min;
        let h = view_y_max - view_y_min;
        let margin_scale = 0.1;
        view_x_min -= w * margin_scale;
        view_x_max += w * margin_scale;
        view_y_min -= h * margin_scale;
        view_y_max += h * margin_scale;

        Some(Self {
            output_path,
            output_level,
            view_x_min,
            view_x_max,
            view_y_min,
            view_y_max,
            show_labels,
            snapshot: NEXT_SNAPSHOT.fetch_add(1, Ordering::Relaxed),
        })
    }

    pub fn view_w(&self) -> f32 { self.view_x_max - self.view_x_min }
    pub fn view_h(&self) -> f32 { self.view_y_max - self.view_y_min }

    pub fn view_min_size(&self) -> f32 { self.view_w().min(self.view_h()) }

    pub fn percent(&self, p: f32) -> f32 { self.view_min_size() * p / 100.0 }
}

pub(crate) trait SvgElement<Style, State=()> {
    fn write_svg<'a>(&self, svg_output: &mut SvgOutput<'a, Style>, state: &State) -> fmt::Result;
}

pub(crate) fn to_f32<C: Real>(c: C) -> f32 {
    c.to_f32().unwrap_or(f32::NAN)
}

/// SVG coordinates of `p`. SVG's y axis points down, so y is negated to keep counterclockwise loops counterclockwise.
pub(crate) fn svg_point<C: Real>(p: &Point<C>) -> [f32; 2] {
    [to_f32(p.x()), -to_f32(p.y())]
}

// svg_fmt has no constructor for Circle, and its fields differ between 0.4 releases
pub(crate) struct Dot {
    x: f32,
    y: f32,
    radius: f32,
    fill: svg_fmt::Color,
}

pub(crate) fn circle(x: f32, y: f32, radius: f32) -> Dot {
    Dot { x, y, radius, fill: svg_fmt::black() }
}

impl Dot {
    pub fn fill(mut self, color: svg_fmt::Color) -> Self {
        self.fill = color;
        self
    }
}

impl fmt::Display for Dot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, r#"<circle cx="{}" cy="{}" r="{}" style="fill:{}" />"#, self.x, self.y, self.radius, self.fill)
    }
}
