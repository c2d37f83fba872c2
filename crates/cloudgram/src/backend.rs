//! Rendering backends.
//!
//! A [`Backend`] turns [`Element`]s into opaque [`ElementHandle`]s, draws
//! directed connections between them and emits the finished diagram. Diagrams
//! are always driven through a [`DiagramScope`], which guarantees the backend
//! is finalized however the render ends.
//!
//! # Overview
//!
//! - [`svg::SvgBackend`] - Writes one SVG file per diagram.
//! - [`memory::RecordingBackend`] - Keeps every diagram in memory.

pub mod memory;
pub mod svg;

use std::io;

use log::{error, info};
use thiserror::Error;

use cloudgram_core::element::Element;

/// Errors reported by a [`Backend`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Render error: {0}")]
    Render(String),
}

/// Opaque handle to an element materialized by a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementHandle(usize);

impl ElementHandle {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// A diagram drawing backend.
///
/// Calls always arrive in the order `open`, any number of `create_element` and
/// `connect`, then `finish`. Handles passed to `connect` were returned by
/// `create_element` since the last `open`.
pub trait Backend {
    /// Starts a new diagram called `name`.
    ///
    /// `show` asks for the finished diagram to be displayed interactively.
    fn open(&mut self, name: &str, show: bool) -> Result<(), Error>;

    /// Creates the visual element for `element`.
    fn create_element(&mut self, element: &Element) -> ElementHandle;

    /// Draws a directed connection from `source` to `target`.
    fn connect(&mut self, source: ElementHandle, target: ElementHandle);

    /// Finalizes the open diagram and emits it.
    fn finish(&mut self) -> Result<(), Error>;
}

/// An open diagram on a [`Backend`].
///
/// Call [`DiagramScope::close`] to finalize and observe the result. A scope
/// dropped without being closed still finalizes the backend; failures are then
/// only logged.
pub struct DiagramScope<'b, B: Backend> {
    backend: &'b mut B,
    name: String,
    closed: bool,
}

impl<'b, B: Backend> DiagramScope<'b, B> {
    /// Opens a diagram called `name` on `backend`.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the diagram cannot be started.
    pub fn open(backend: &'b mut B, name: &str, show: bool) -> Result<Self, Error> {
        backend.open(name, show)?;
        info!(diagram = name; "Diagram opened");
        Ok(Self {
            backend,
            name: name.to_string(),
            closed: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn create_element(&mut self, element: &Element) -> ElementHandle {
        self.backend.create_element(element)
    }

    pub fn connect(&mut self, source: ElementHandle, target: ElementHandle) {
        self.backend.connect(source, target);
    }

    /// Finalizes the diagram.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the diagram cannot be emitted.
    pub fn close(mut self) -> Result<(), Error> {
        self.closed = true;
        self.backend.finish()?;
        info!(diagram = self.name; "Diagram closed");
        Ok(())
    }
}

impl<B: Backend> Drop for DiagramScope<'_, B> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        if let Err(err) = self.backend.finish() {
            error!(diagram = self.name, err:err; "Failed to finalize diagram");
        }
    }
}
