//! Viewport reflow: which rows are on screen and how far the view scrolls.

use crate::text::display_width;

use super::flatten::Row;
use super::node::{NodeId, Tree};

/// Columns added to every line on top of prefix and label: branch glyph,
/// expander, the gap before the label and a right margin.
pub const LINE_DECORATION: usize = 4;

/// Scroll position and size of the area rows are laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub vertical: usize,
    pub horizontal: usize,
    pub width: u16,
    pub height: u16,
}

/// Outcome of a reflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reflow {
    /// Corrected vertical offset.
    pub vertical: usize,
    /// Corrected horizontal offset.
    pub horizontal: usize,
    /// Largest vertical offset.
    pub bottom: usize,
    /// Largest horizontal offset.
    pub right: usize,
    /// Widest line, decoration included.
    pub max_line_width: usize,
    /// Row index of the selected item, if it has a row.
    pub selected_row: Option<usize>,
    /// True when the viewport was moved to reveal the selection.
    pub centered: bool,
}

/// Lay out `rows` in `viewport`.
///
/// When `center_window` is set and the selected row lies outside the
/// window, the vertical offset jumps to that row. Both offsets are then
/// clamped to their ranges before rows are positioned, so running this
/// again on the same input changes nothing.
///
/// Rows above the offset and rows past the last content line (the bottom
/// line belongs to the horizontal scrollbar) are disabled and get no `y`.
/// The rest get consecutive `y` from 0, and a width one column short of the
/// viewport to leave room for the vertical scrollbar.
pub fn reflow_viewport(
    tree: &mut Tree,
    rows: &[Row],
    viewport: Viewport,
    selected: Option<NodeId>,
    center_window: bool,
) -> Reflow {
    let height = viewport.height as usize;
    let width = viewport.width as usize;

    let max_line_width = rows
        .iter()
        .filter_map(|row| tree.node(row.node))
        .map(|node| display_width(node.label()) + display_width(node.prefix()) + LINE_DECORATION)
        .max()
        .unwrap_or(0);

    let selected_row = selected
        .and_then(|id| tree.node(id))
        .and_then(|node| node.row());

    let mut vertical = viewport.vertical;
    let mut centered = false;
    if let Some(row) = selected_row.filter(|_| center_window) {
        // Outside [vertical, vertical + height - 2]
        if row < vertical || row + 2 > vertical + height {
            vertical = row;
            centered = true;
        }
    }

    let bottom = (rows.len() + 1).saturating_sub(height);
    vertical = vertical.min(bottom);
    let right = (max_line_width + 3).saturating_sub(width);
    let horizontal = viewport.horizontal.min(right);

    let row_width = viewport.width.saturating_sub(1);
    let mut top_y: usize = 0;
    for (i, row) in rows.iter().enumerate() {
        let Some(node) = tree.node_mut(row.node) else {
            continue;
        };
        if i < vertical || top_y + 1 >= height {
            node.enabled = false;
            node.invisible = true;
            node.y = None;
            continue;
        }
        node.y = Some(top_y as u16);
        node.enabled = true;
        node.invisible = false;
        node.width = row_width;
        top_y += 1;
    }

    Reflow {
        vertical,
        horizontal,
        bottom,
        right,
        max_line_width,
        selected_row,
        centered,
    }
}
