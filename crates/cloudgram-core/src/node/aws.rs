//! Amazon Web Services nodes.

use crate::{element::Element, node::Node, provider::Provider};

/// A node describing an AWS resource.
///
/// Supported resource types:
///
/// | type  | category  | service |
/// |-------|-----------|---------|
/// | `ec2` | `compute` | `EC2`   |
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AwsNode {
    name: String,
    id: String,
    resource_type: String,
    description: Option<String>,
    relationships: Vec<String>,
}

impl AwsNode {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Node for AwsNode {
    fn provider(&self) -> Provider {
        Provider::Aws
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn set_id(&mut self, id: &str) {
        self.id = id.to_string();
    }

    fn set_type(&mut self, resource_type: &str) {
        self.resource_type = resource_type.to_string();
    }

    fn set_description(&mut self, description: &str) {
        self.description = Some(description.to_string());
    }

    fn add_relationship(&mut self, target: &str) {
        self.relationships.push(target.to_string());
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn resource_type(&self) -> &str {
        &self.resource_type
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn relationships(&self) -> &[String] {
        &self.relationships
    }

    fn element(&self) -> Option<Element> {
        match self.resource_type.as_str() {
            "ec2" => Some(Element::new(Provider::Aws, "compute", "EC2", &self.name)),
            _ => None,
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ec2(name: &str) -> AwsNode {
        let mut node = AwsNode::new();
        node.set_name(name);
        node.set_id("aws_ec2_1");
        node.set_type("ec2");
        node
    }

    #[test]
    fn test_new_node_is_empty() {
        let node = AwsNode::new();
        assert_eq!(node.id(), "");
        assert_eq!(node.name(), "");
        assert_eq!(node.resource_type(), "");
        assert_eq!(node.description(), None);
        assert!(node.relationships().is_empty());
    }

    #[test]
    fn test_ec2_element_uses_name_as_label() {
        let element = ec2("EC2 1").element().expect("ec2 is supported");
        assert_eq!(element.provider(), Provider::Aws);
        assert_eq!(element.service(), "EC2");
        assert_eq!(element.category(), "compute");
        assert_eq!(element.label(), "EC2 1");
    }

    #[test]
    fn test_unsupported_type_has_no_element() {
        let mut node = ec2("bucket");
        node.set_type("s3");
        assert!(node.element().is_none());

        node.set_type("");
        assert!(node.element().is_none());
    }

    #[test]
    fn test_relationships_keep_order_and_duplicates() {
        let mut node = ec2("EC2 1");
        node.add_relationship("b");
        node.add_relationship("a");
        node.add_relationship("b");
        node.add_relationship("aws_ec2_1");
        assert_eq!(node.relationships(), ["b", "a", "b", "aws_ec2_1"]);
    }

    #[test]
    fn test_reset_clears_all_attributes() {
        let mut node = ec2("EC2 1");
        node.set_description("web tier");
        node.add_relationship("aws_ec2_2");

        node.reset();

        assert_eq!(node, AwsNode::new());
    }
}
