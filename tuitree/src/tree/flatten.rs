//! Flattening of the expanded part of a tree into display rows.

use crate::config::Glyphs;

use super::node::{NodeId, Tree};

/// One on-screen line candidate: an item with a row in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// The item shown on this row.
    pub node: NodeId,
    /// Nesting level among the rows (top-level rows are 0).
    pub depth: usize,
    /// Row above in keyboard order.
    pub previous: Option<usize>,
    /// Row below in keyboard order.
    pub next: Option<usize>,
}

struct Pending {
    node: NodeId,
    prefix: String,
    last: bool,
    depth: usize,
}

/// Flatten `tree` into rows, depth first, descending only into expanded
/// items.
///
/// Every item that had a row after the previous flatten is first marked off
/// screen and loses it, so nothing left over survives; then each visited
/// item gets its branch prefix and row index. The rows come back unlinked.
///
/// With `show_root` false the root gets no row and its children are the
/// top level, whether or not the root is expanded.
pub fn flatten(tree: &mut Tree, show_root: bool, glyphs: Glyphs) -> Vec<Row> {
    for id in tree.take_placed() {
        if let Some(node) = tree.node_mut(id) {
            node.detach();
        }
    }

    let root = tree.root();
    let mut stack = Vec::new();
    if show_root {
        stack.push(Pending {
            node: root,
            prefix: String::new(),
            last: true,
            depth: 0,
        });
    } else {
        push_children(&mut stack, tree.children(root), String::new(), 0);
    }

    let mut rows = Vec::new();
    while let Some(pending) = stack.pop() {
        let Some(node) = tree.node_mut(pending.node) else {
            continue;
        };
        node.row = Some(rows.len());
        node.last = pending.last;
        node.prefix.clone_from(&pending.prefix);
        let open = node.is_expanded() && node.has_children();

        rows.push(Row {
            node: pending.node,
            depth: pending.depth,
            previous: None,
            next: None,
        });

        if open {
            let mut child_prefix = pending.prefix;
            if pending.last {
                child_prefix.push_str("  ");
            } else {
                child_prefix.push(glyphs.continuation());
                child_prefix.push(' ');
            }
            push_children(&mut stack, tree.children(pending.node), child_prefix, pending.depth + 1);
        }
    }

    tree.set_placed(rows.iter().map(|row| row.node).collect());
    rows
}

/// Queue children so they pop off the stack in their original order.
fn push_children(stack: &mut Vec<Pending>, children: &[NodeId], prefix: String, depth: usize) {
    let count = children.len();
    for (i, &child) in children.iter().enumerate().rev() {
        stack.push(Pending {
            node: child,
            prefix: prefix.clone(),
            last: i + 1 == count,
            depth,
        });
    }
}
