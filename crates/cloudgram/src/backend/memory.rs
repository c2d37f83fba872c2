//! In-memory recording backend.

use log::debug;

use cloudgram_core::element::Element;

use super::{Backend, ElementHandle, Error};

/// A diagram captured by [`RecordingBackend`].
#[derive(Debug, Clone, Default)]
pub struct RecordedDiagram {
    name: String,
    show: bool,
    elements: Vec<Element>,
    connections: Vec<(ElementHandle, ElementHandle)>,
    finished: bool,
}

impl RecordedDiagram {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn show(&self) -> bool {
        self.show
    }

    /// Elements in creation order; an [`ElementHandle`] indexes this slice.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element(&self, handle: ElementHandle) -> Option<&Element> {
        self.elements.get(handle.index())
    }

    pub fn connections(&self) -> &[(ElementHandle, ElementHandle)] {
        &self.connections
    }

    /// Connections as `(source label, target label)` pairs.
    pub fn labelled_connections(&self) -> Vec<(String, String)> {
        self.connections
            .iter()
            .filter_map(|&(source, target)| {
                Some((
                    self.element(source)?.label().to_string(),
                    self.element(target)?.label().to_string(),
                ))
            })
            .collect()
    }

    /// Whether the backend was finalized for this diagram.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Backend that records diagrams instead of drawing them.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    diagrams: Vec<RecordedDiagram>,
    open: Option<RecordedDiagram>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagrams that were opened and finalized, oldest first.
    pub fn diagrams(&self) -> &[RecordedDiagram] {
        &self.diagrams
    }

    /// The most recently finalized diagram.
    pub fn last(&self) -> Option<&RecordedDiagram> {
        self.diagrams.last()
    }

    fn current(&mut self) -> &mut RecordedDiagram {
        self.open.get_or_insert_with(RecordedDiagram::default)
    }
}

impl Backend for RecordingBackend {
    fn open(&mut self, name: &str, show: bool) -> Result<(), Error> {
        if let Some(open) = &self.open {
            return Err(Error::Render(format!(
                "diagram `{}` is still open",
                open.name
            )));
        }
        self.open = Some(RecordedDiagram {
            name: name.to_string(),
            show,
            ..Default::default()
        });
        Ok(())
    }

    fn create_element(&mut self, element: &Element) -> ElementHandle {
        let diagram = self.current();
        diagram.elements.push(element.clone());
        ElementHandle::new(diagram.elements.len() - 1)
    }

    fn connect(&mut self, source: ElementHandle, target: ElementHandle) {
        self.current().connections.push((source, target));
    }

    fn finish(&mut self) -> Result<(), Error> {
        let mut diagram = self
            .open
            .take()
            .ok_or_else(|| Error::Render("no diagram is open".to_string()))?;
        diagram.finished = true;
        debug!(
            diagram = diagram.name,
            elements = diagram.elements.len(),
            connections = diagram.connections.len();
            "Recorded diagram"
        );
        self.diagrams.push(diagram);
        Ok(())
    }
}
