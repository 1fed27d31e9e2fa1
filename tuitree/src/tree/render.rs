//! Text rendering of the tree view.

use crate::text::clip_columns;
use crate::widget::Line;

use super::node::TreeNode;
use super::view::TreeView;

impl TreeView {
    /// Render the view as `height` lines of `width` columns.
    ///
    /// Content lines carry the visible rows shifted by the horizontal
    /// offset, followed by one cell of the vertical scrollbar. The last
    /// line is the horizontal scrollbar.
    pub fn render_lines(&self) -> Vec<Line> {
        let height = self.rect.height as usize;
        if height == 0 {
            return Vec::new();
        }
        let content_width = self.rect.width.saturating_sub(1) as usize;
        let glyphs = self.config.glyphs;
        let vertical: Vec<char> = self.vertical.render(glyphs).chars().collect();
        let skip = self.horizontal.value();

        let mut lines = Vec::with_capacity(height);
        for y in 0..height - 1 {
            let row = self.node_at_y(y as u16).and_then(|id| {
                let node = self.tree.as_ref()?.node(id)?;
                Some((self.row_text(node), node.is_selected()))
            });
            let (text, selected) = row.unwrap_or_default();

            let mut line = clip_columns(&text, skip, content_width);
            if self.rect.width > 0 {
                line.push(vertical.get(y).copied().unwrap_or(' '));
            }
            lines.push(Line::new(line, selected));
        }

        let mut scrollbar = self.horizontal.render(glyphs);
        if self.rect.width > 0 {
            scrollbar.push(' ');
        }
        lines.push(Line::new(scrollbar, false));
        lines
    }

    /// Full text of a row before clipping: prefix, branch, expander, label.
    fn row_text(&self, node: &TreeNode) -> String {
        let glyphs = self.config.glyphs;
        let mut text = String::with_capacity(node.prefix().len() + node.label().len() + 4);
        text.push_str(node.prefix());
        text.push(glyphs.branch(node.is_last()));
        text.push(glyphs.expander(node.is_expandable(), node.is_expanded()));
        text.push(' ');
        text.push_str(node.label());
        text
    }
}
