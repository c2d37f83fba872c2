//! Cloudgram - Render infrastructure node trees as diagrams.
//!
//! Nodes describing infrastructure resources are assembled with a
//! [`builder::NodeBuilder`], collected in a [`tree::Tree`] and handed to a
//! [`DiagramManager`], which draws them through a rendering
//! [`backend::Backend`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use cloudgram::{DiagramManager, backend::svg::SvgBackend, builder::NodeBuilder, tree::Tree};
//!
//! # fn main() -> Result<(), cloudgram::CloudgramError> {
//! let mut builder = NodeBuilder::new();
//! builder.set_provider("aws")?.set_id("db")?.set_name("Database")?.set_type("ec2")?;
//! let db = builder.build()?;
//! builder.reset();
//!
//! builder.set_provider("aws")?.set_id("api")?.set_name("API")?.set_type("ec2")?;
//! builder.add_relationship("db")?;
//! let api = builder.build()?;
//! builder.reset();
//!
//! let mut tree = Tree::new();
//! tree.add_node(db);
//! tree.add_node(api);
//!
//! // Writes ./backend.svg
//! let mut manager = DiagramManager::new(SvgBackend::new("."));
//! manager.render("Backend", &tree)?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod config;

mod error;
mod manager;

pub use cloudgram_core::{ModelError, builder, color, element, node, provider, tree};

pub use error::CloudgramError;
pub use manager::DiagramManager;
