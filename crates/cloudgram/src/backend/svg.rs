//! SVG file backend.
//!
//! Every finished diagram is written to `<output dir>/<file name>.svg`, where
//! the file name is the diagram name with its words joined by `_` and lower
//! cased. Elements are placed one after another along the configured
//! [`Direction`]; no further layout is attempted.

mod layer;

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, error, info};
use svg::{
    Document,
    node::element::{Definitions, Line, Marker, Path as SvgPath, Rectangle, Text},
};

use cloudgram_core::{color::Color, element::Element};

use super::{Backend, ElementHandle, Error};
use crate::{
    CloudgramError,
    config::{AppConfig, Direction},
};
use layer::{LayeredOutput, RenderLayer};

const ELEMENT_WIDTH: f32 = 120.0;
const ELEMENT_HEIGHT: f32 = 60.0;
const LABEL_HEIGHT: f32 = 24.0;
const SPACING: f32 = 80.0;
const MARGIN: f32 = 40.0;
const ARROW_MARKER_ID: &str = "arrowhead";
const FALLBACK_FILE_STEM: &str = "diagrams_image";

#[derive(Debug, Clone, Copy, PartialEq)]
struct Point {
    x: f32,
    y: f32,
}

/// Diagram being assembled between `open` and `finish`.
#[derive(Debug)]
struct Canvas {
    name: String,
    elements: Vec<Element>,
    connections: Vec<(ElementHandle, ElementHandle)>,
}

/// Backend writing each diagram to an SVG file.
#[derive(Debug)]
pub struct SvgBackend {
    output_dir: PathBuf,
    direction: Direction,
    background: Option<Color>,
    canvas: Option<Canvas>,
    written: Vec<PathBuf>,
}

impl SvgBackend {
    /// Creates a backend writing into `output_dir` with default styling.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            direction: Direction::default(),
            background: None,
            canvas: None,
            written: Vec::new(),
        }
    }

    /// Creates a backend from the output and style sections of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CloudgramError::Config`] if the background color is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, CloudgramError> {
        let background = config
            .style()
            .background_color()
            .map_err(CloudgramError::Config)?;

        Ok(Self::new(config.output().directory())
            .with_direction(config.style().direction())
            .with_background(background))
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Paths of all files written so far, oldest first.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Returns the file name used for a diagram called `diagram_name`.
    ///
    /// ```
    /// # use cloudgram::backend::svg::SvgBackend;
    /// assert_eq!(SvgBackend::file_name("My new diagram"), "my_new_diagram.svg");
    /// assert_eq!(SvgBackend::file_name("  "), "diagrams_image.svg");
    /// ```
    pub fn file_name(diagram_name: &str) -> String {
        let stem = diagram_name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .to_lowercase();

        if stem.is_empty() {
            format!("{FALLBACK_FILE_STEM}.svg")
        } else {
            format!("{stem}.svg")
        }
    }

    fn canvas(&mut self) -> &mut Canvas {
        self.canvas.get_or_insert_with(|| Canvas {
            name: String::new(),
            elements: Vec::new(),
            connections: Vec::new(),
        })
    }

    /// Center of the element in `slot` when `count` elements are placed.
    fn position(&self, slot: usize, count: usize) -> Point {
        let slot = if self.direction.is_reversed() {
            count - 1 - slot
        } else {
            slot
        };
        let slot = slot as f32;

        if self.direction.is_horizontal() {
            Point {
                x: MARGIN + ELEMENT_WIDTH / 2.0 + slot * (ELEMENT_WIDTH + SPACING),
                y: MARGIN + ELEMENT_HEIGHT / 2.0,
            }
        } else {
            Point {
                x: MARGIN + ELEMENT_WIDTH / 2.0,
                y: MARGIN
                    + ELEMENT_HEIGHT / 2.0
                    + slot * (ELEMENT_HEIGHT + LABEL_HEIGHT + SPACING),
            }
        }
    }

    fn document_size(&self, count: usize) -> (f32, f32) {
        let count = count as f32;
        let along = |size: f32| (count * (size + SPACING) - SPACING).max(0.0);

        if self.direction.is_horizontal() {
            (
                2.0 * MARGIN + along(ELEMENT_WIDTH),
                2.0 * MARGIN + ELEMENT_HEIGHT + LABEL_HEIGHT,
            )
        } else {
            (
                2.0 * MARGIN + ELEMENT_WIDTH,
                2.0 * MARGIN + along(ELEMENT_HEIGHT + LABEL_HEIGHT),
            )
        }
    }

    fn render_document(&self, canvas: &Canvas) -> Document {
        let count = canvas.elements.len();
        let positions: Vec<Point> = (0..count).map(|slot| self.position(slot, count)).collect();
        let (width, height) = self.document_size(count);

        let mut output = LayeredOutput::new();

        if let Some(background) = &self.background {
            output.add_to_layer(
                RenderLayer::Background,
                Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", width)
                    .set("height", height)
                    .set("fill", background),
            );
        }

        for (element, &center) in canvas.elements.iter().zip(&positions) {
            render_element(&mut output, element, center);
        }

        for &(source, target) in &canvas.connections {
            let (Some(&from), Some(&to)) =
                (positions.get(source.index()), positions.get(target.index()))
            else {
                debug!(source = source.index(), target = target.index(); "Skipping connection with unknown handle");
                continue;
            };
            output.add_to_layer(RenderLayer::Arrow, render_connection(from, to));
        }

        let marker = Marker::new()
            .set("id", ARROW_MARKER_ID)
            .set("viewBox", "0 0 10 10")
            .set("refX", 10)
            .set("refY", 5)
            .set("markerWidth", 8)
            .set("markerHeight", 8)
            .set("orient", "auto-start-reverse")
            .add(SvgPath::new().set("d", "M 0 0 L 10 5 L 0 10 z").set("fill", "#545B64"));

        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height)
            .set("data-diagram", canvas.name.as_str())
            .add(Definitions::new().add(marker));

        for group in output.render() {
            doc = doc.add(group);
        }
        doc
    }

    fn write_document(&self, path: &Path, doc: &Document) -> Result<(), Error> {
        info!(path = path.display().to_string(); "Creating SVG file");

        fs::create_dir_all(&self.output_dir)?;
        let mut file = match File::create(path) {
            Ok(file) => file,
            Err(err) => {
                error!(path = path.display().to_string(), err:err; "Failed to create SVG file");
                return Err(Error::Io(err));
            }
        };

        if let Err(err) = write!(file, "{doc}") {
            error!(path = path.display().to_string(), err:err; "Failed to write SVG content");
            return Err(Error::Io(err));
        }

        Ok(())
    }
}

fn render_element(output: &mut LayeredOutput, element: &Element, center: Point) {
    let accent = element.provider().accent_color();

    output.add_to_layer(
        RenderLayer::Content,
        Rectangle::new()
            .set("x", center.x - ELEMENT_WIDTH / 2.0)
            .set("y", center.y - ELEMENT_HEIGHT / 2.0)
            .set("width", ELEMENT_WIDTH)
            .set("height", ELEMENT_HEIGHT)
            .set("rx", 6)
            .set("fill", accent)
            .set("fill-opacity", 0.15_f32)
            .set("stroke", accent)
            .set("stroke-width", 2)
            .set("data-provider", element.provider().name())
            .set("data-category", element.category()),
    );

    output.add_to_layer(
        RenderLayer::Text,
        Text::new(element.service())
            .set("x", center.x)
            .set("y", center.y)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle")
            .set("font-family", "sans-serif")
            .set("font-size", 14)
            .set("font-weight", "bold")
            .set("fill", accent),
    );

    output.add_to_layer(
        RenderLayer::Text,
        Text::new(element.label())
            .set("x", center.x)
            .set("y", center.y + ELEMENT_HEIGHT / 2.0 + LABEL_HEIGHT / 2.0)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle")
            .set("font-family", "sans-serif")
            .set("font-size", 12),
    );
}

fn render_connection(from: Point, to: Point) -> Box<dyn svg::Node> {
    if from == to {
        // Self relationship: loop over the top edge
        let top = from.y - ELEMENT_HEIGHT / 2.0;
        let data = format!(
            "M {} {} C {} {}, {} {}, {} {}",
            from.x - 15.0,
            top,
            from.x - 30.0,
            top - 40.0,
            from.x + 30.0,
            top - 40.0,
            from.x + 15.0,
            top
        );
        return Box::new(
            SvgPath::new()
                .set("d", data)
                .set("fill", "none")
                .set("stroke", "#545B64")
                .set("stroke-width", 1.5_f32)
                .set("marker-end", format!("url(#{ARROW_MARKER_ID})")),
        );
    }

    let start = boundary_point(from, to);
    let end = boundary_point(to, from);
    Box::new(
        Line::new()
            .set("x1", start.x)
            .set("y1", start.y)
            .set("x2", end.x)
            .set("y2", end.y)
            .set("stroke", "#545B64")
            .set("stroke-width", 1.5_f32)
            .set("marker-end", format!("url(#{ARROW_MARKER_ID})")),
    )
}

/// Point where the segment from `center` towards `towards` leaves the element box.
fn boundary_point(center: Point, towards: Point) -> Point {
    let dx = towards.x - center.x;
    let dy = towards.y - center.y;
    let half_width = ELEMENT_WIDTH / 2.0;
    let half_height = ELEMENT_HEIGHT / 2.0;

    let scale_x = if dx == 0.0 { f32::INFINITY } else { half_width / dx.abs() };
    let scale_y = if dy == 0.0 { f32::INFINITY } else { half_height / dy.abs() };
    let scale = scale_x.min(scale_y);
    if !scale.is_finite() {
        return center;
    }

    Point {
        x: center.x + dx * scale,
        y: center.y + dy * scale,
    }
}

impl Backend for SvgBackend {
    fn open(&mut self, name: &str, show: bool) -> Result<(), Error> {
        if let Some(canvas) = &self.canvas {
            return Err(Error::Render(format!(
                "diagram `{}` is still open",
                canvas.name
            )));
        }
        if show {
            info!(diagram = name; "Interactive display is not available, diagram is only written to disk");
        }
        self.canvas = Some(Canvas {
            name: name.to_string(),
            elements: Vec::new(),
            connections: Vec::new(),
        });
        Ok(())
    }

    fn create_element(&mut self, element: &Element) -> ElementHandle {
        let canvas = self.canvas();
        canvas.elements.push(element.clone());
        ElementHandle::new(canvas.elements.len() - 1)
    }

    fn connect(&mut self, source: ElementHandle, target: ElementHandle) {
        self.canvas().connections.push((source, target));
    }

    fn finish(&mut self) -> Result<(), Error> {
        let canvas = self
            .canvas
            .take()
            .ok_or_else(|| Error::Render("no diagram is open".to_string()))?;

        let doc = self.render_document(&canvas);
        debug!(
            elements = canvas.elements.len(),
            connections = canvas.connections.len();
            "SVG document rendered"
        );

        let path = self.output_dir.join(Self::file_name(&canvas.name));
        self.write_document(&path, &doc)?;
        self.written.push(path);
        Ok(())
    }
}
