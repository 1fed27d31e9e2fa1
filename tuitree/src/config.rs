//! Tree view configuration types.

/// Per-view configuration.
///
/// Built with [`TreeViewConfig::default`] and the consuming setters below.
#[derive(Debug, Clone)]
pub struct TreeViewConfig {
    /// Whether the root node occupies a row of its own.
    ///
    /// When false the root's children become the top-level rows and the
    /// root is treated as permanently expanded.
    pub show_root: bool,

    /// Lines moved by a page step (modifier + PageUp/PageDown, clicks on
    /// a scrollbar track).
    pub page_step: usize,

    /// Glyph set used when rendering.
    pub glyphs: Glyphs,

    /// What happens to a selection whose row disappears.
    pub hidden_selection: HiddenSelection,
}

impl Default for TreeViewConfig {
    fn default() -> Self {
        Self {
            show_root: true,
            page_step: 20,
            glyphs: Glyphs::Unicode,
            hidden_selection: HiddenSelection::Keep,
        }
    }
}

impl TreeViewConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide the root row and show its children at the top level.
    pub fn hide_root(mut self) -> Self {
        self.show_root = false;
        self
    }

    /// Set the page step. Values below one are raised to one.
    pub fn page_step(mut self, lines: usize) -> Self {
        self.page_step = lines.max(1);
        self
    }

    /// Set the glyph set.
    pub fn glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Set the hidden selection policy.
    pub fn hidden_selection(mut self, policy: HiddenSelection) -> Self {
        self.hidden_selection = policy;
        self
    }
}

/// Policy applied during reflow when the selected node is not among the
/// flattened rows (an ancestor was collapsed).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HiddenSelection {
    /// Keep the node selected while it is hidden. It shows up again,
    /// still selected, once its ancestors are expanded.
    #[default]
    Keep,

    /// Drop the selection.
    Clear,

    /// Move the selection to the nearest ancestor that still has a row.
    Reveal,
}

/// Glyphs for branches, expanders and scrollbars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Glyphs {
    /// Box drawing characters.
    #[default]
    Unicode,

    /// Plain 7-bit characters, for terminals without box drawing.
    Ascii,
}

impl Glyphs {
    /// Connector drawn before an item: (middle child, last child).
    pub fn branch(self, last: bool) -> char {
        match (self, last) {
            (Glyphs::Unicode, false) => '├',
            (Glyphs::Unicode, true) => '└',
            (Glyphs::Ascii, false) => '|',
            (Glyphs::Ascii, true) => '`',
        }
    }

    /// Continuation drawn under a parent that has more siblings below.
    pub fn continuation(self) -> char {
        match self {
            Glyphs::Unicode => '│',
            Glyphs::Ascii => '|',
        }
    }

    /// Expander for an expandable item, or the plain line for a leaf.
    pub fn expander(self, expandable: bool, expanded: bool) -> char {
        match (self, expandable, expanded) {
            (_, true, true) => '-',
            (_, true, false) => '+',
            (Glyphs::Unicode, false, _) => '─',
            (Glyphs::Ascii, false, _) => ' ',
        }
    }

    pub fn scroll_up(self) -> char {
        match self {
            Glyphs::Unicode => '▲',
            Glyphs::Ascii => '^',
        }
    }

    pub fn scroll_down(self) -> char {
        match self {
            Glyphs::Unicode => '▼',
            Glyphs::Ascii => 'v',
        }
    }

    pub fn scroll_left(self) -> char {
        match self {
            Glyphs::Unicode => '◀',
            Glyphs::Ascii => '<',
        }
    }

    pub fn scroll_right(self) -> char {
        match self {
            Glyphs::Unicode => '▶',
            Glyphs::Ascii => '>',
        }
    }

    pub fn track(self) -> char {
        match self {
            Glyphs::Unicode => '░',
            Glyphs::Ascii => '.',
        }
    }

    pub fn thumb(self) -> char {
        match self {
            Glyphs::Unicode => '█',
            Glyphs::Ascii => '#',
        }
    }
}
