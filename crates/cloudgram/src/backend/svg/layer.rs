//! Z-ordered grouping of SVG nodes.
//!
//! Drawing code tags each SVG node with a [`RenderLayer`]; [`LayeredOutput`]
//! emits them bottom to top so connections never hide element labels.

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Rendering layers, bottom first. `Ord` follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Diagram background fill.
    Background,
    /// Element boxes.
    Content,
    /// Connections between elements.
    Arrow,
    /// Service names and labels.
    Text,
}

impl RenderLayer {
    /// Returns the value of the `data-layer` attribute for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Content => "content",
            Self::Arrow => "arrow",
            Self::Text => "text",
        }
    }
}

/// SVG nodes collected per layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `node` to `layer`, after the nodes already on it.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: impl Into<SvgNode>) {
        self.items.push((layer, node.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consumes the output into one `<g data-layer="...">` per non-empty layer,
    /// bottom layer first.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable: nodes keep their order within a layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut groups: Vec<(RenderLayer, svg_element::Group)> = Vec::new();
        for (layer, node) in self.items {
            match groups.last_mut() {
                Some((current, group)) if *current == layer => {
                    let taken = std::mem::replace(group, svg_element::Group::new());
                    *group = taken.add(node);
                }
                _ => {
                    let group = svg_element::Group::new()
                        .set("data-layer", layer.name())
                        .add(node);
                    groups.push((layer, group));
                }
            }
        }

        groups
            .into_iter()
            .map(|(_, group)| Box::new(group) as SvgNode)
            .collect()
    }
}
