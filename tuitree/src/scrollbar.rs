//! Scrollbar state shared by scrollable widgets.
//!
//! A scrollbar holds a value in `0..=max` and knows where it sits inside its
//! owner, so the owner can hand it mouse presses and render it next to the
//! content. The owner decides what the value means (first visible row,
//! first visible column).

use crate::config::Glyphs;
use crate::layout::Rect;

/// Axis a scrollbar moves along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone)]
pub struct Scrollbar {
    orientation: Orientation,
    /// Placement relative to the owning widget.
    rect: Rect,
    value: usize,
    max: usize,
    big_change: usize,
}

impl Scrollbar {
    pub fn new(orientation: Orientation, rect: Rect) -> Self {
        Self {
            orientation,
            rect,
            value: 0,
            max: 0,
            big_change: 20,
        }
    }

    /// Vertical scrollbar occupying the last column of an owner of the
    /// given size, stopping one row short of the bottom.
    pub fn vertical_for(width: u16, height: u16) -> Self {
        Self::new(Orientation::Vertical, Self::vertical_rect(width, height))
    }

    /// Horizontal scrollbar occupying the last row of an owner of the given
    /// size, stopping one column short of the right edge.
    pub fn horizontal_for(width: u16, height: u16) -> Self {
        Self::new(Orientation::Horizontal, Self::horizontal_rect(width, height))
    }

    fn vertical_rect(width: u16, height: u16) -> Rect {
        Rect::new(width.saturating_sub(1), 0, 1, height.saturating_sub(1))
    }

    fn horizontal_rect(width: u16, height: u16) -> Rect {
        Rect::new(0, height.saturating_sub(1), width.saturating_sub(1), 1)
    }

    /// Re-place the scrollbar after the owner was resized.
    pub fn fit_to(&mut self, width: u16, height: u16) {
        self.rect = match self.orientation {
            Orientation::Vertical => Self::vertical_rect(width, height),
            Orientation::Horizontal => Self::horizontal_rect(width, height),
        };
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn value(&self) -> usize {
        self.value
    }

    /// Set the value as is. Owners clamp against [`Scrollbar::max`] when
    /// they recompute ranges.
    pub fn set_value(&mut self, value: usize) {
        self.value = value;
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn set_max(&mut self, max: usize) {
        self.max = max;
    }

    /// Pull the value back into `0..=max`. Returns true if it moved.
    pub fn clamp(&mut self) -> bool {
        if self.value > self.max {
            self.value = self.max;
            true
        } else {
            false
        }
    }

    pub fn big_change(&self) -> usize {
        self.big_change
    }

    pub fn set_big_change(&mut self, lines: usize) {
        self.big_change = lines.max(1);
    }

    pub fn increment(&mut self) {
        if self.value < self.max {
            self.value += 1;
        }
    }

    pub fn decrement(&mut self) {
        self.value = self.value.saturating_sub(1);
    }

    pub fn big_increment(&mut self) {
        self.value = self.value.saturating_add(self.big_change).min(self.max);
    }

    pub fn big_decrement(&mut self) {
        self.value = self.value.saturating_sub(self.big_change);
    }

    pub fn to_top(&mut self) {
        self.value = 0;
    }

    pub fn to_bottom(&mut self) {
        self.value = self.max;
    }

    /// Number of cells along the scrolling axis.
    pub fn length(&self) -> usize {
        match self.orientation {
            Orientation::Vertical => self.rect.height as usize,
            Orientation::Horizontal => self.rect.width as usize,
        }
    }

    /// Cell index of the thumb, between the two arrows. `None` when there is
    /// no room for a track.
    pub fn thumb_position(&self) -> Option<usize> {
        let length = self.length();
        if length < 3 {
            return None;
        }
        if self.max == 0 {
            return Some(1);
        }
        let value = self.value.min(self.max);
        Some((length - 3) * value / self.max + 1)
    }

    /// Handle a press at owner-relative coordinates. Returns true if the
    /// press landed on this scrollbar.
    pub fn on_mouse_down(&mut self, x: u16, y: u16) -> bool {
        if !self.rect.contains(x, y) {
            return false;
        }
        let position = match self.orientation {
            Orientation::Vertical => (y - self.rect.y) as usize,
            Orientation::Horizontal => (x - self.rect.x) as usize,
        };
        let length = self.length();

        if position == 0 {
            self.decrement();
        } else if position + 1 == length {
            self.increment();
        } else if let Some(thumb) = self.thumb_position() {
            if position < thumb {
                self.big_decrement();
            } else if position > thumb {
                self.big_increment();
            }
        }
        log::trace!(
            "[scroll] {:?} press at {} -> value {}/{}",
            self.orientation,
            position,
            self.value,
            self.max
        );
        true
    }

    /// Glyphs along the axis, first arrow to last arrow.
    pub fn render(&self, glyphs: Glyphs) -> String {
        let length = self.length();
        let (first, last) = match self.orientation {
            Orientation::Vertical => (glyphs.scroll_up(), glyphs.scroll_down()),
            Orientation::Horizontal => (glyphs.scroll_left(), glyphs.scroll_right()),
        };
        let thumb = self.thumb_position();

        (0..length)
            .map(|i| {
                if i == 0 {
                    first
                } else if i + 1 == length {
                    last
                } else if Some(i) == thumb {
                    glyphs.thumb()
                } else {
                    glyphs.track()
                }
            })
            .collect()
    }
}
