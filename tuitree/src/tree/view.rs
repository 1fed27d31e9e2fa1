//! Tree view state and accessors.

use std::fmt;

use crate::config::{HiddenSelection, TreeViewConfig};
use crate::error::TreeError;
use crate::layout::Rect;
use crate::scrollbar::Scrollbar;

use super::flatten::{Row, flatten};
use super::navigation::link;
use super::node::{NodeId, Tree};
use super::reflow::{Viewport, reflow_viewport};

/// Callback run when the user activates the selected item.
pub type Action = Box<dyn FnMut()>;

/// Callback run when user input expands (`true`) or collapses (`false`) an
/// item, before the view reflows. Owners use it to populate children
/// lazily.
pub type ExpandHandler = Box<dyn FnMut(&mut Tree, NodeId, bool)>;

/// A scrollable, expandable tree with a single selection.
///
/// The view never reflows on its own after programmatic changes: call
/// [`TreeView::reflow`] after replacing the tree, selecting, resizing or
/// editing items. Input handlers reflow before returning.
pub struct TreeView {
    pub(super) rect: Rect,
    pub(super) config: TreeViewConfig,
    pub(super) tree: Option<Tree>,
    pub(super) rows: Vec<Row>,
    pub(super) selected: Option<NodeId>,
    /// Scroll the selection into view on the next reflow that needs to.
    pub(super) center_window: bool,
    pub(super) max_line_width: usize,
    pub(super) vertical: Scrollbar,
    pub(super) horizontal: Scrollbar,
    pub(super) action: Option<Action>,
    pub(super) on_expand: Option<ExpandHandler>,
}

impl TreeView {
    /// Create an empty view. `rect` places the view inside its parent.
    pub fn new(rect: Rect) -> Self {
        let config = TreeViewConfig::default();
        let mut vertical = Scrollbar::vertical_for(rect.width, rect.height);
        let mut horizontal = Scrollbar::horizontal_for(rect.width, rect.height);
        vertical.set_big_change(config.page_step);
        horizontal.set_big_change(config.page_step);

        Self {
            rect,
            config,
            tree: None,
            rows: Vec::new(),
            selected: None,
            center_window: false,
            max_line_width: 0,
            vertical,
            horizontal,
            action: None,
            on_expand: None,
        }
    }

    /// Create an empty view that runs `action` when an item is activated.
    pub fn with_action(rect: Rect, action: impl FnMut() + 'static) -> Self {
        let mut view = Self::new(rect);
        view.action = Some(Box::new(action));
        view
    }

    pub fn with_config(mut self, config: TreeViewConfig) -> Self {
        self.vertical.set_big_change(config.page_step);
        self.horizontal.set_big_change(config.page_step);
        self.config = config;
        self
    }

    /// Register the expand/collapse callback.
    pub fn on_expand(mut self, handler: impl FnMut(&mut Tree, NodeId, bool) + 'static) -> Self {
        self.on_expand = Some(Box::new(handler));
        self
    }

    pub fn config(&self) -> &TreeViewConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Move or resize the view, re-place the scrollbars and reflow.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
        self.vertical.fit_to(rect.width, rect.height);
        self.horizontal.fit_to(rect.width, rect.height);
        self.reflow();
    }

    pub fn width(&self) -> u16 {
        self.rect.width
    }

    pub fn height(&self) -> u16 {
        self.rect.height
    }

    // -------------------------------------------------------------------------
    // Tree
    // -------------------------------------------------------------------------

    pub fn tree(&self) -> Option<&Tree> {
        self.tree.as_ref()
    }

    /// Mutable access to the tree. Reflow afterwards.
    pub fn tree_mut(&mut self) -> Option<&mut Tree> {
        self.tree.as_mut()
    }

    /// Replace the tree. The previous tree and any selection in it are
    /// dropped.
    pub fn set_tree(&mut self, tree: Tree) {
        self.set_tree_centered(tree, false);
    }

    /// Replace the tree, and when `center` is set scroll the selection into
    /// view on the next reflow.
    pub fn set_tree_centered(&mut self, tree: Tree, center: bool) {
        self.tree = Some(tree);
        self.rows.clear();
        self.selected = None;
        self.center_window = center;
    }

    /// Detach and return the tree, leaving the view empty.
    pub fn take_tree(&mut self) -> Option<Tree> {
        self.rows.clear();
        self.selected = None;
        self.tree.take()
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    /// Row of the selected item, or `None` if nothing is selected or the
    /// selected item is hidden under a collapsed ancestor.
    pub fn selected_row(&self) -> Option<usize> {
        let id = self.selected?;
        self.tree.as_ref()?.node(id)?.row()
    }

    /// Make `item` the selection, clearing the flag on the previous one.
    /// `None` clears the selection.
    pub fn set_selected(&mut self, item: Option<NodeId>) -> Result<(), TreeError> {
        let Some(tree) = self.tree.as_mut() else {
            if item.is_some() {
                return Err(TreeError::NoTree);
            }
            self.selected = None;
            return Ok(());
        };

        if let Some(id) = item {
            tree.get_mut(id)?.set_selected(true);
        }
        if let Some(node) = self
            .selected
            .filter(|&previous| Some(previous) != item)
            .and_then(|previous| tree.node_mut(previous))
        {
            node.set_selected(false);
        }
        if self.selected != item {
            log::debug!("[tree] selection {:?} -> {:?}", self.selected, item);
        }
        self.selected = item;
        Ok(())
    }

    /// Run the activation callback, if there is one.
    pub fn dispatch(&mut self) {
        if let Some(action) = self.action.as_mut() {
            log::debug!("[tree] dispatch {:?}", self.selected);
            action();
        }
    }

    /// Whether the next reflow will scroll the selection into view.
    pub fn center_window(&self) -> bool {
        self.center_window
    }

    /// Ask the next reflow to scroll the selection into view.
    pub fn set_center_window(&mut self, center: bool) {
        self.center_window = center;
    }

    // -------------------------------------------------------------------------
    // Rows and navigation
    // -------------------------------------------------------------------------

    /// Rows from the last reflow, top to bottom.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row index of `id`, if it has a row.
    pub fn row_of(&self, id: NodeId) -> Option<usize> {
        self.tree.as_ref()?.node(id)?.row()
    }

    /// Item above `id` in keyboard order.
    pub fn previous_of(&self, id: NodeId) -> Option<NodeId> {
        let row = self.rows.get(self.row_of(id)?)?;
        row.previous.map(|i| self.rows[i].node)
    }

    /// Item below `id` in keyboard order.
    pub fn next_of(&self, id: NodeId) -> Option<NodeId> {
        let row = self.rows.get(self.row_of(id)?)?;
        row.next.map(|i| self.rows[i].node)
    }

    /// Item drawn on viewport line `y`, if any.
    pub fn node_at_y(&self, y: u16) -> Option<NodeId> {
        let tree = self.tree.as_ref()?;
        let row = self.rows.get(self.vertical.value() + y as usize)?;
        (tree.node(row.node)?.y() == Some(y)).then_some(row.node)
    }

    // -------------------------------------------------------------------------
    // Scrolling
    // -------------------------------------------------------------------------

    /// First row shown (the vertical scrollbar value).
    pub fn vertical_value(&self) -> usize {
        self.vertical.value()
    }

    /// Set the first row shown. Clamped by the next reflow.
    pub fn set_vertical_value(&mut self, value: usize) {
        self.vertical.set_value(value);
    }

    /// First column shown (the horizontal scrollbar value).
    pub fn horizontal_value(&self) -> usize {
        self.horizontal.value()
    }

    /// Set the first column shown. Clamped by the next reflow.
    pub fn set_horizontal_value(&mut self, value: usize) {
        self.horizontal.set_value(value);
    }

    /// Largest vertical value.
    pub fn bottom_value(&self) -> usize {
        self.vertical.max()
    }

    /// Largest horizontal value.
    pub fn right_value(&self) -> usize {
        self.horizontal.max()
    }

    pub fn max_line_width(&self) -> usize {
        self.max_line_width
    }

    pub fn vertical_scrollbar(&self) -> &Scrollbar {
        &self.vertical
    }

    pub fn horizontal_scrollbar(&self) -> &Scrollbar {
        &self.horizontal
    }

    // -------------------------------------------------------------------------
    // Reflow
    // -------------------------------------------------------------------------

    /// Rebuild rows, navigation links, row positions and scrollbar ranges.
    ///
    /// Does nothing without a tree; the scrollbar ranges keep their values.
    pub fn reflow(&mut self) {
        let Some(tree) = self.tree.as_mut() else {
            return;
        };

        let mut rows = flatten(tree, self.config.show_root, self.config.glyphs);
        link(&mut rows);
        self.rows = rows;
        self.settle_hidden_selection();

        let Some(tree) = self.tree.as_mut() else {
            return;
        };
        let viewport = Viewport {
            vertical: self.vertical.value(),
            horizontal: self.horizontal.value(),
            width: self.rect.width,
            height: self.rect.height,
        };
        let outcome = reflow_viewport(
            tree,
            &self.rows,
            viewport,
            self.selected,
            self.center_window,
        );

        if outcome.centered {
            self.center_window = false;
        }
        self.max_line_width = outcome.max_line_width;
        self.vertical.set_max(outcome.bottom);
        self.vertical.set_value(outcome.vertical);
        self.horizontal.set_max(outcome.right);
        self.horizontal.set_value(outcome.horizontal);

        log::debug!(
            "[tree] reflow: {} rows, vertical {}/{}, horizontal {}/{}, selected row {:?}",
            self.rows.len(),
            outcome.vertical,
            outcome.bottom,
            outcome.horizontal,
            outcome.right,
            outcome.selected_row
        );
    }

    /// Apply the hidden selection policy when the selected item lost its
    /// row. Items detached from the tree are always deselected.
    fn settle_hidden_selection(&mut self) {
        let (Some(tree), Some(selected)) = (self.tree.as_ref(), self.selected) else {
            return;
        };
        if tree.node(selected).and_then(|node| node.row()).is_some() {
            return;
        }

        let replacement = if !tree.is_attached(selected) {
            None
        } else {
            match self.config.hidden_selection {
                HiddenSelection::Keep => return,
                HiddenSelection::Clear => None,
                HiddenSelection::Reveal => tree
                    .ancestors(selected)
                    .find(|&id| tree.node(id).and_then(|node| node.row()).is_some()),
            }
        };

        log::debug!(
            "[tree] selected {} has no row, moving selection to {:?}",
            selected,
            replacement
        );
        if let Some(node) = self.tree.as_mut().and_then(|tree| tree.node_mut(selected)) {
            node.set_selected(false);
        }
        self.selected = None;
        if let Some(id) = replacement {
            if let Some(node) = self.tree.as_mut().and_then(|tree| tree.node_mut(id)) {
                node.set_selected(true);
            }
            self.selected = Some(id);
        }
    }
}

impl fmt::Debug for TreeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeView")
            .field("rect", &self.rect)
            .field("config", &self.config)
            .field("rows", &self.rows.len())
            .field("selected", &self.selected)
            .field("center_window", &self.center_window)
            .field("vertical", &self.vertical)
            .field("horizontal", &self.horizontal)
            .field("action", &self.action.is_some())
            .finish()
    }
}
