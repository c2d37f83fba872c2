//! The demonstration topology rendered by the CLI.
//!
//! Four EC2 instances: `aws_ec2_2` and `aws_ec2_3` form a chain down to
//! `aws_ec2_1`, and `aws_ec2_4` fans in on both `aws_ec2_2` and `aws_ec2_3`.

use log::debug;

use cloudgram::{ModelError, builder::NodeBuilder, node::NodeRef, tree::Tree};

/// `(id, name, relationships)` of every demonstration node.
const INSTANCES: [(&str, &str, &[&str]); 4] = [
    ("aws_ec2_1", "EC2 1", &[]),
    ("aws_ec2_2", "EC2 2", &["aws_ec2_1"]),
    ("aws_ec2_3", "EC2 3", &["aws_ec2_2"]),
    ("aws_ec2_4", "EC2 4", &["aws_ec2_2", "aws_ec2_3"]),
];

/// Insertion order into the tree; deliberately not the build order.
const INSERTION_ORDER: [usize; 4] = [0, 3, 1, 2];

/// Builds the demonstration tree.
///
/// # Errors
///
/// Only fails if the builder rejects the `aws` provider.
pub fn demo_tree() -> Result<Tree, ModelError> {
    let mut builder = NodeBuilder::new();
    let mut nodes: Vec<NodeRef> = Vec::with_capacity(INSTANCES.len());

    for (id, name, relationships) in INSTANCES {
        builder
            .set_provider("aws")?
            .set_name(name)?
            .set_id(id)?
            .set_type("ec2")?;
        for target in relationships {
            builder.add_relationship(target)?;
        }
        nodes.push(builder.build()?);
        builder.reset();
    }

    let mut tree = Tree::new();
    for index in INSERTION_ORDER {
        tree.add_node(nodes[index].clone());
    }
    debug!(nodes = tree.len(); "Demonstration tree built");

    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_tree_shape() {
        let tree = demo_tree().unwrap();
        assert_eq!(tree.len(), 4);

        let ids: Vec<&str> = tree.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, ["aws_ec2_1", "aws_ec2_4", "aws_ec2_2", "aws_ec2_3"]);

        let fan_in = tree.get_node("aws_ec2_4").unwrap();
        assert_eq!(fan_in.borrow().relationships(), ["aws_ec2_2", "aws_ec2_3"]);
    }

    #[test]
    fn test_demo_nodes_are_distinct() {
        let tree = demo_tree().unwrap();
        let first = tree.get_node("aws_ec2_1").unwrap();
        let second = tree.get_node("aws_ec2_2").unwrap();
        assert!(!first.ptr_eq(&second));
        assert!(first.borrow().relationships().is_empty());
    }
}
