//! Widget contract shared by everything a [`FocusRing`](crate::FocusRing)
//! can hold.

use std::any::Any;

use crate::event::{KeyEvent, MouseEvent};
use crate::layout::Rect;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The widget used the event.
    Consumed,
    /// The widget had no use for the event; the container may try others.
    Ignored,
    /// Move focus to the next widget.
    FocusNext,
    /// Move focus to the previous widget.
    FocusPrevious,
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// One rendered line of a widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub text: String,
    /// Whether the line shows the current selection.
    pub highlighted: bool,
}

impl Line {
    pub fn new(text: impl Into<String>, highlighted: bool) -> Self {
        Self {
            text: text.into(),
            highlighted,
        }
    }
}

/// A rectangular, focusable piece of UI.
pub trait Widget: Any {
    /// Placement inside the parent.
    fn rect(&self) -> Rect;

    fn is_focusable(&self) -> bool {
        true
    }

    /// Handle a key while focused.
    fn on_key(&mut self, _key: KeyEvent) -> EventResult {
        EventResult::Ignored
    }

    /// Handle a mouse event, in the widget's own coordinates.
    fn on_mouse(&mut self, _mouse: MouseEvent) -> EventResult {
        EventResult::Ignored
    }

    /// Render the widget as one line per row of its rect.
    fn render(&self) -> Vec<Line>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
