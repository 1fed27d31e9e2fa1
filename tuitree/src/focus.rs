//! Focus tracking and input routing between sibling widgets.

use std::fmt;

use crate::event::{InputEvent, MouseEventKind};
use crate::widget::{EventResult, Widget};

/// Owns sibling widgets, tracks which one is focused and routes input.
///
/// Keys go to the focused widget. Mouse events go to the topmost widget
/// under the pointer, translated into its coordinates; a press also
/// focuses it. [`EventResult::FocusNext`] and [`EventResult::FocusPrevious`]
/// coming back from a widget move focus, wrapping at either end.
#[derive(Default)]
pub struct FocusRing {
    widgets: Vec<Box<dyn Widget>>,
    focused: Option<usize>,
}

impl FocusRing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a widget and return its index. The first focusable widget added
    /// receives focus.
    pub fn push(&mut self, widget: impl Widget) -> usize {
        let index = self.widgets.len();
        let focusable = widget.is_focusable();
        self.widgets.push(Box::new(widget));
        if self.focused.is_none() && focusable {
            self.focused = Some(index);
        }
        index
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Index of the focused widget.
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Focus a widget by index.
    /// Returns true if focus changed.
    pub fn focus(&mut self, index: usize) -> bool {
        let focusable = self
            .widgets
            .get(index)
            .is_some_and(|widget| widget.is_focusable());
        if !focusable || self.focused == Some(index) {
            return false;
        }
        log::debug!("[focus] {:?} -> {}", self.focused, index);
        self.focused = Some(index);
        true
    }

    /// Focus the next focusable widget (Tab navigation).
    /// Returns the newly focused index if focus changed.
    pub fn focus_next(&mut self) -> Option<usize> {
        self.step(true)
    }

    /// Focus the previous focusable widget (Shift+Tab navigation).
    /// Returns the newly focused index if focus changed.
    pub fn focus_prev(&mut self) -> Option<usize> {
        self.step(false)
    }

    fn step(&mut self, forward: bool) -> Option<usize> {
        let count = self.widgets.len();
        if count == 0 {
            return None;
        }
        let start = self.focused.unwrap_or(if forward { count - 1 } else { 0 });
        let target = (1..=count)
            .map(|offset| {
                if forward {
                    (start + offset) % count
                } else {
                    (start + count - offset % count) % count
                }
            })
            .find(|&i| self.widgets[i].is_focusable())?;

        if self.focus(target) { Some(target) } else { None }
    }

    pub fn widget(&self, index: usize) -> Option<&dyn Widget> {
        self.widgets.get(index).map(|widget| widget.as_ref())
    }

    pub fn widget_mut(&mut self, index: usize) -> Option<&mut dyn Widget> {
        match self.widgets.get_mut(index) {
            Some(widget) => Some(widget.as_mut()),
            None => None,
        }
    }

    /// Borrow a widget as its concrete type.
    pub fn get<T: Widget>(&self, index: usize) -> Option<&T> {
        self.widgets.get(index)?.as_any().downcast_ref::<T>()
    }

    /// Mutably borrow a widget as its concrete type.
    pub fn get_mut<T: Widget>(&mut self, index: usize) -> Option<&mut T> {
        self.widgets.get_mut(index)?.as_any_mut().downcast_mut::<T>()
    }

    /// Index of the topmost widget containing the point.
    pub fn widget_at(&self, x: u16, y: u16) -> Option<usize> {
        self.widgets
            .iter()
            .rposition(|widget| widget.rect().contains(x, y))
    }

    /// Route an event and apply any focus transfer it asks for.
    pub fn handle(&mut self, event: InputEvent) -> EventResult {
        let result = match event {
            InputEvent::Key(key) => {
                let Some(index) = self.focused else {
                    return EventResult::Ignored;
                };
                self.widgets[index].on_key(key)
            }
            InputEvent::Mouse(mouse) => {
                let Some(index) = self.widget_at(mouse.x, mouse.y) else {
                    return EventResult::Ignored;
                };
                if matches!(mouse.kind, MouseEventKind::Down(_)) {
                    self.focus(index);
                }
                let rect = self.widgets[index].rect();
                self.widgets[index].on_mouse(mouse.translate(rect.x, rect.y))
            }
        };

        log::trace!("[focus] {:?} -> {:?}", event, result);
        match result {
            EventResult::FocusNext => {
                self.focus_next();
                EventResult::Consumed
            }
            EventResult::FocusPrevious => {
                self.focus_prev();
                EventResult::Consumed
            }
            other => other,
        }
    }
}

impl fmt::Debug for FocusRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusRing")
            .field("widgets", &self.widgets.len())
            .field("focused", &self.focused)
            .finish()
    }
}
