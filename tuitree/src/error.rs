//! Errors raised by tree and tree view operations.

use thiserror::Error;

use crate::tree::NodeId;

/// Errors that can occur when addressing nodes of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The id was not issued by this tree.
    #[error("Node {0} does not belong to this tree")]
    UnknownNode(NodeId),

    /// The view has no tree attached.
    #[error("No tree is attached to the view")]
    NoTree,
}
