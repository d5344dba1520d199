//! Render a [`ScaleTree`] as an indented tree for terminal display.

use termtree::Tree;

use crate::model::{Pan, ScaleTree};

/// Build a printable tree rooted at the tree's root scale: each scale
/// shows its two pans as leaves, masses as numbers, sub-scales nested.
pub fn render(tree: &ScaleTree) -> Tree<String> {
    subtree(tree, tree.root())
}

fn subtree(tree: &ScaleTree, name: &str) -> Tree<String> {
    // A validated tree has no dangling references; the fallback only
    // keeps rendering total.
    let leaves = match tree.get(name) {
        Some(scale) => vec![pan_leaf(tree, &scale.left), pan_leaf(tree, &scale.right)],
        None => Vec::new(),
    };
    Tree::new(name.to_string()).with_leaves(leaves)
}

fn pan_leaf(tree: &ScaleTree, pan: &Pan) -> Tree<String> {
    match pan {
        Pan::Mass(mass) => Tree::new(mass.to_string()),
        Pan::Scale(name) => subtree(tree, name),
    }
}
