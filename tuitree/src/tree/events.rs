//! Event handling for the tree view.

use crate::event::{InputEvent, Key, KeyEvent, MouseEvent, MouseEventKind};
use crate::layout::Rect;
use crate::widget::{EventResult, Line, Widget};

use super::node::NodeId;
use super::view::TreeView;

impl TreeView {
    /// Handle any input event.
    pub fn handle_event(&mut self, event: InputEvent) -> EventResult {
        match event {
            InputEvent::Key(key) => self.on_key(key),
            InputEvent::Mouse(mouse) => self.on_mouse(mouse),
        }
    }

    /// Handle a key press.
    ///
    /// Tab and Shift+Tab ask the container to move focus and keys the view
    /// has no use for are passed back as [`EventResult::Ignored`]; neither
    /// reflows. Everything else reflows before returning.
    pub fn on_key(&mut self, event: KeyEvent) -> EventResult {
        let KeyEvent { key, modifiers } = event;
        let modified = modifiers.any();

        match key {
            Key::Left if modified => self.horizontal.decrement(),
            Key::Right if modified => self.horizontal.increment(),
            Key::Up if modified => self.vertical.decrement(),
            Key::Down if modified => self.vertical.increment(),
            Key::PageUp if modified => self.vertical.big_decrement(),
            Key::PageDown if modified => self.vertical.big_increment(),
            Key::Home => self.vertical.to_top(),
            Key::End => self.vertical.to_bottom(),
            Key::Enter => {
                if self.selected.is_some() {
                    self.dispatch();
                }
            }
            Key::Up => self.select_previous(),
            Key::Down => self.select_next(),
            Key::Tab if modifiers.shift => return EventResult::FocusPrevious,
            Key::Tab => return EventResult::FocusNext,
            Key::BackTab => return EventResult::FocusPrevious,
            _ => {
                let Some(selected) = self.selected else {
                    log::trace!("[tree] {:?} ignored, nothing selected", event);
                    return EventResult::Ignored;
                };
                self.forward_key(selected, key);
            }
        }

        self.reflow();
        EventResult::Consumed
    }

    /// Handle a mouse event in view coordinates.
    ///
    /// The wheel scrolls one line. Presses go to the scrollbars, releases
    /// to the row under the pointer. A double click selects the row and
    /// activates it if it could be selected.
    /// Always reflows, since a child may have moved a scrollbar or opened an
    /// item.
    pub fn on_mouse(&mut self, mouse: MouseEvent) -> EventResult {
        match mouse.kind {
            MouseEventKind::WheelUp => self.vertical.decrement(),
            MouseEventKind::WheelDown => self.vertical.increment(),
            MouseEventKind::Down(_) => {
                if !self.vertical.on_mouse_down(mouse.x, mouse.y) {
                    self.horizontal.on_mouse_down(mouse.x, mouse.y);
                }
            }
            MouseEventKind::Up(_) => self.click_row(mouse.x, mouse.y),
            MouseEventKind::DoubleClick(_) => {
                if let Some(id) = self.row_under(mouse.x, mouse.y) {
                    self.select_if_selectable(id);
                    if self.selected == Some(id) {
                        self.dispatch();
                    }
                }
            }
        }

        self.reflow();
        EventResult::Consumed
    }

    /// Move the selection one row up, scrolling if it was on the top line.
    fn select_previous(&mut self) {
        let Some(current) = self.selected else {
            return;
        };
        let Some(previous) = self.previous_of(current) else {
            return;
        };
        let old_y = self.node_y(current);
        self.select_existing(previous);
        if old_y == Some(0) {
            self.vertical.decrement();
        }
    }

    /// Move the selection one row down, scrolling if it was on the last
    /// content line.
    fn select_next(&mut self) {
        let Some(current) = self.selected else {
            return;
        };
        let Some(next) = self.next_of(current) else {
            return;
        };
        let old_y = self.node_y(current);
        self.select_existing(next);
        if old_y.is_some_and(|y| y as usize + 2 == self.rect.height as usize) {
            self.vertical.increment();
        }
    }

    fn node_y(&self, id: NodeId) -> Option<u16> {
        self.tree.as_ref()?.node(id)?.y()
    }

    /// Select an item known to be in the tree.
    fn select_existing(&mut self, id: NodeId) {
        if let Err(err) = self.set_selected(Some(id)) {
            log::warn!("[tree] could not select {}: {}", id, err);
        }
    }

    fn select_if_selectable(&mut self, id: NodeId) {
        let selectable = self
            .tree
            .as_ref()
            .and_then(|tree| tree.node(id))
            .is_some_and(|node| node.is_selectable());
        if selectable {
            self.select_existing(id);
        }
    }

    /// Give the selected item a chance to handle the key.
    fn forward_key(&mut self, id: NodeId, key: Key) {
        let changed = self
            .tree
            .as_mut()
            .and_then(|tree| tree.node_mut(id))
            .and_then(|node| node.on_key(key));
        if let Some(expanded) = changed {
            self.notify_expand(id, expanded);
        }
    }

    /// Item on the row under view coordinates, excluding the scrollbars.
    fn row_under(&self, x: u16, y: u16) -> Option<NodeId> {
        if x.saturating_add(1) >= self.rect.width || y.saturating_add(1) >= self.rect.height {
            return None;
        }
        self.node_at_y(y)
    }

    /// Release over a row: the expander toggles the item, anywhere else on
    /// the row selects it.
    fn click_row(&mut self, x: u16, y: u16) {
        let Some(id) = self.row_under(x, y) else {
            return;
        };
        self.select_if_selectable(id);

        let on_expander = self.expander_column(id) == Some(x as usize + self.horizontal.value());
        if !on_expander {
            return;
        }
        let toggled = self
            .tree
            .as_mut()
            .and_then(|tree| tree.node_mut(id))
            .and_then(|node| node.toggle());
        if let Some(expanded) = toggled {
            self.notify_expand(id, expanded);
        }
    }

    /// Content column of an item's expander glyph.
    fn expander_column(&self, id: NodeId) -> Option<usize> {
        let node = self.tree.as_ref()?.node(id)?;
        Some(crate::text::display_width(node.prefix()) + 1)
    }

    fn notify_expand(&mut self, id: NodeId, expanded: bool) {
        log::debug!(
            "[tree] {} {}",
            id,
            if expanded { "expanded" } else { "collapsed" }
        );
        if let (Some(handler), Some(tree)) = (self.on_expand.as_mut(), self.tree.as_mut()) {
            handler(tree, id, expanded);
        }
    }
}

impl Widget for TreeView {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn on_key(&mut self, key: KeyEvent) -> EventResult {
        TreeView::on_key(self, key)
    }

    fn on_mouse(&mut self, mouse: MouseEvent) -> EventResult {
        TreeView::on_mouse(self, mouse)
    }

    fn render(&self) -> Vec<Line> {
        self.render_lines()
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}
