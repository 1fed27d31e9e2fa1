//! Scrollable tree view widget for terminal user interfaces.

pub mod config;
pub mod error;
pub mod event;
pub mod focus;
pub mod layout;
pub mod scrollbar;
pub mod text;
pub mod tree;
pub mod widget;

pub use config::{Glyphs, HiddenSelection, TreeViewConfig};
pub use error::TreeError;
pub use event::{
    InputDecoder, InputEvent, Key, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseEventKind,
};
pub use focus::FocusRing;
pub use layout::Rect;
pub use scrollbar::{Orientation, Scrollbar};
pub use tree::{NodeId, Row, Tree, TreeNode, TreeView};
pub use widget::{EventResult, Line, Widget};
