//! Tree view widget.
//!
//! A [`TreeView`] shows a [`Tree`] as rows inside a scrollable viewport.
//! Every structural, selection or viewport change is followed by a reflow:
//!
//! 1. [`flatten`] turns the expanded part of the tree into ordered rows,
//! 2. [`link`] chains the rows for keyboard navigation,
//! 3. [`reflow_viewport`] decides which rows are on screen, where, and how
//!    far the scrollbars can go.
//!
//! # Example
//!
//! ```
//! use tuitree::{Key, KeyEvent, Rect, Tree, TreeView};
//!
//! let mut tree = Tree::new("/");
//! let root = tree.root();
//! let etc = tree.add_child(root, "etc").unwrap();
//! tree.add_child(etc, "hosts").unwrap();
//! tree.add_child(root, "usr").unwrap();
//!
//! let mut view = TreeView::new(Rect::new(0, 0, 20, 6));
//! view.set_tree(tree);
//! view.set_selected(Some(etc)).unwrap();
//! view.reflow();
//!
//! view.on_key(KeyEvent::plain(Key::Right)); // expand "etc"
//! assert_eq!(view.rows().len(), 4);
//! ```

mod events;
mod flatten;
mod navigation;
mod node;
mod reflow;
mod render;
mod view;

pub use flatten::{Row, flatten};
pub use navigation::link;
pub use node::{NodeId, Tree, TreeNode};
pub use reflow::{Reflow, Viewport, reflow_viewport};
pub use view::{Action, ExpandHandler, TreeView};
