//! Tree arena and per-item state.

use std::fmt;

use crate::error::TreeError;
use crate::event::Key;

/// Handle to a node inside a [`Tree`].
///
/// Ids are only meaningful for the tree that issued them. A slot freed by
/// [`Tree::clear_children`] may be reused, but the id that pointed at the
/// removed node stays dead: the generation no longer matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl NodeId {
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// One item of the tree.
///
/// Structural fields (`children`, `parent`) are owned by the [`Tree`].
/// Display fields (`prefix`, `enabled`, `invisible`, `y`, `width`) are
/// rewritten by the view on every reflow.
#[derive(Debug, Clone)]
pub struct TreeNode {
    label: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    expanded: bool,
    expandable: bool,
    selectable: bool,
    selected: bool,

    pub(crate) prefix: String,
    pub(crate) last: bool,
    pub(crate) enabled: bool,
    pub(crate) invisible: bool,
    pub(crate) y: Option<u16>,
    pub(crate) width: u16,
    pub(crate) row: Option<usize>,
}

impl TreeNode {
    fn new(label: impl Into<String>, parent: Option<NodeId>) -> Self {
        Self {
            label: label.into(),
            parent,
            children: Vec::new(),
            expanded: parent.is_none(),
            expandable: false,
            selectable: true,
            selected: false,
            prefix: String::new(),
            last: true,
            enabled: false,
            invisible: true,
            y: None,
            width: 0,
            row: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Set the expanded flag. Only items with children show anything
    /// below them, whatever the flag says.
    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    /// Whether this item shows an expander.
    ///
    /// Becomes true when the first child is added. Lazily populated items
    /// set it up front so the user can open them before children exist.
    pub fn is_expandable(&self) -> bool {
        self.expandable
    }

    pub fn set_expandable(&mut self, expandable: bool) {
        self.expandable = expandable;
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    pub fn set_selectable(&mut self, selectable: bool) {
        self.selectable = selectable;
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Branch glyph prefix computed by the last flatten.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Whether this item was the last child of its parent in the last
    /// flatten.
    pub fn is_last(&self) -> bool {
        self.last
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_invisible(&self) -> bool {
        self.invisible
    }

    /// Row inside the viewport, or `None` while scrolled out or hidden.
    pub fn y(&self) -> Option<u16> {
        self.y
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Index into the flattened rows, or `None` when the item has no row.
    pub fn row(&self) -> Option<usize> {
        self.row
    }

    /// Mark the item as off screen and forget its row.
    pub(crate) fn detach(&mut self) {
        self.enabled = false;
        self.invisible = true;
        self.y = None;
        self.row = None;
    }

    /// Let the item react to a key while it is selected. Left collapses,
    /// Right expands and Space toggles. Returns the new expanded state if
    /// it changed.
    pub fn on_key(&mut self, key: Key) -> Option<bool> {
        if !self.expandable {
            return None;
        }
        let expanded = match key {
            Key::Left => false,
            Key::Right => true,
            Key::Char(' ') => !self.expanded,
            _ => return None,
        };
        if expanded == self.expanded {
            return None;
        }
        self.expanded = expanded;
        Some(expanded)
    }

    /// Flip the expanded flag. Returns the new state, or `None` for items
    /// that cannot expand.
    pub fn toggle(&mut self) -> Option<bool> {
        if !self.expandable {
            return None;
        }
        self.expanded = !self.expanded;
        Some(self.expanded)
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<TreeNode>,
}

/// An ordered tree of labeled items, stored as an arena.
///
/// Items are only ever appended below an existing parent, so every item
/// has exactly one parent (except the root) and the structure cannot
/// contain cycles. Removed items free their slot for the next
/// [`Tree::add_child`].
#[derive(Debug, Clone)]
pub struct Tree {
    slots: Vec<Slot>,
    free: Vec<usize>,
    len: usize,
    /// Items that got a row in the last flatten.
    placed: Vec<NodeId>,
}

impl Tree {
    /// Create a tree holding only a root item.
    pub fn new(root_label: impl Into<String>) -> Self {
        Self {
            slots: vec![Slot {
                generation: 0,
                node: Some(TreeNode::new(root_label, None)),
            }],
            free: Vec::new(),
            len: 1,
            placed: Vec::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId {
            index: 0,
            generation: 0,
        }
    }

    /// Number of items in the tree. Removed items are not counted.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        let slot = self.slots.get(id.index)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.node.as_ref()
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut TreeNode> {
        let slot = self.slots.get_mut(id.index)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.node.as_mut()
    }

    /// Like [`Tree::node`], for callers that want an error.
    pub fn get(&self, id: NodeId) -> Result<&TreeNode, TreeError> {
        self.node(id).ok_or(TreeError::UnknownNode(id))
    }

    pub fn get_mut(&mut self, id: NodeId) -> Result<&mut TreeNode, TreeError> {
        self.node_mut(id).ok_or(TreeError::UnknownNode(id))
    }

    /// Append a new item as the last child of `parent`.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        label: impl Into<String>,
    ) -> Result<NodeId, TreeError> {
        if !self.contains(parent) {
            return Err(TreeError::UnknownNode(parent));
        }
        let node = TreeNode::new(label, Some(parent));
        let id = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.node = Some(node);
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                NodeId {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            }
        };
        self.len += 1;

        let parent_node = self.get_mut(parent)?;
        parent_node.expandable = true;
        parent_node.children.push(id);
        Ok(id)
    }

    /// Append several leaves under `parent`, returning their ids in order.
    pub fn add_children<I, S>(
        &mut self,
        parent: NodeId,
        labels: I,
    ) -> Result<Vec<NodeId>, TreeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        labels
            .into_iter()
            .map(|label| self.add_child(parent, label))
            .collect()
    }

    /// Remove every descendant of `id`. Their ids stop resolving and their
    /// slots are reused by later insertions. The item stays expandable.
    pub fn clear_children(&mut self, id: NodeId) -> Result<(), TreeError> {
        let mut stack = std::mem::take(&mut self.get_mut(id)?.children);
        while let Some(current) = stack.pop() {
            let Some(slot) = self
                .slots
                .get_mut(current.index)
                .filter(|slot| slot.generation == current.generation)
            else {
                continue;
            };
            let Some(node) = slot.node.take() else {
                continue;
            };
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(current.index);
            self.len -= 1;
            stack.extend(node.children);
        }
        Ok(())
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(TreeNode::children).unwrap_or(&[])
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(TreeNode::parent)
    }

    /// Whether `id` is a live item hanging below the root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        id == self.root() || self.ancestors(id).last() == Some(self.root())
    }

    /// Ancestors of `id`, nearest first, ending at the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&current| self.parent(current))
    }

    /// Number of ancestors of `id`. The root has depth 0.
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count()
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(TreeNode::label)
    }

    /// Find the first item with the given label, in pre-order.
    pub fn find(&self, label: &str) -> Option<NodeId> {
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            let Some(node) = self.node(id) else {
                continue;
            };
            if node.label == label {
                return Some(id);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        None
    }

    pub fn expand(&mut self, id: NodeId) -> Result<(), TreeError> {
        self.get_mut(id)?.set_expanded(true);
        Ok(())
    }

    pub fn collapse(&mut self, id: NodeId) -> Result<(), TreeError> {
        self.get_mut(id)?.set_expanded(false);
        Ok(())
    }

    pub fn toggle(&mut self, id: NodeId) -> Result<Option<bool>, TreeError> {
        Ok(self.get_mut(id)?.toggle())
    }

    /// Expand every expandable item.
    pub fn expand_all(&mut self) {
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            let Some(node) = self.node_mut(id) else {
                continue;
            };
            if node.expandable {
                node.expanded = true;
            }
            stack.extend(node.children.iter().copied());
        }
    }

    /// Collapse every item except the root.
    pub fn collapse_all(&mut self) {
        let root = self.root();
        let mut stack = self.children(root).to_vec();
        while let Some(id) = stack.pop() {
            let Some(node) = self.node_mut(id) else {
                continue;
            };
            node.set_expanded(false);
            stack.extend(node.children.iter().copied());
        }
    }

    /// Iterate over every item, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &TreeNode)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            let id = NodeId {
                index,
                generation: slot.generation,
            };
            slot.node.as_ref().map(|node| (id, node))
        })
    }

    /// Ids of all items currently flagged selected.
    pub fn selected_ids(&self) -> Vec<NodeId> {
        self.iter()
            .filter(|(_, node)| node.selected)
            .map(|(id, _)| id)
            .collect()
    }

    /// Hand over the items placed by the last flatten, forgetting them.
    pub(crate) fn take_placed(&mut self) -> Vec<NodeId> {
        std::mem::take(&mut self.placed)
    }

    pub(crate) fn set_placed(&mut self, placed: Vec<NodeId>) {
        self.placed = placed;
    }
}
