use core::fmt;
use core::slice;

use serde::{Deserialize, Serialize};

use crate::hash::Digest;

/// Operand position the authenticated node occupies when paired with its
/// sibling at one level.
///
/// The node at an even in-level index is the left operand (hashed as
/// `node || sibling`); an odd index makes it the right operand.  The lone
/// trailing node of an odd-length level is always left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// The authenticated node is the left operand at this level.
    Left,
    /// The authenticated node is the right operand at this level.
    Right,
}

/// One level of an authentication path: the sibling digest plus the side the
/// authenticated node takes in the pairing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    pub sibling: Digest,
    pub side: Side,
}

/// Authentication path for a single leaf, ordered leaf-to-root.
///
/// The path length equals the tree depth; a single-leaf tree has an empty
/// path and its root is the leaf itself.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    steps: Vec<PathStep>,
}

impl Path {
    /// Wraps an ordered list of steps.
    pub fn new(steps: Vec<PathStep>) -> Self {
        Self { steps }
    }

    /// The empty path of a single-leaf tree.
    pub fn empty() -> Self {
        Self { steps: Vec::new() }
    }

    /// Steps in leaf-to-root order.
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// Number of steps, equal to the depth of the tree the path came from.
    pub fn depth(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, PathStep> {
        self.steps.iter()
    }

    pub(crate) fn push(&mut self, step: PathStep) {
        self.steps.push(step);
    }
}

impl From<Vec<PathStep>> for Path {
    fn from(steps: Vec<PathStep>) -> Self {
        Self::new(steps)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathStep;
    type IntoIter = slice::Iter<'a, PathStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Errors emitted by the Merkle layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MerkleError {
    /// A root or path was requested for an empty leaf sequence.
    EmptyLeaves,
    /// A leaf position outside the sequence was requested.
    IndexOutOfRange { index: usize, len: usize },
    /// A path failed to replay to the expected root, or an internal check on
    /// its self-duplication structure failed.
    InvalidProof { reason: &'static str },
    /// The hex wire encoding of a path is malformed.
    Encoding { reason: &'static str },
}

impl fmt::Display for MerkleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MerkleError::EmptyLeaves => write!(f, "no leaves supplied"),
            MerkleError::IndexOutOfRange { index, len } => {
                write!(f, "leaf index {} out of range for {} leaves", index, len)
            }
            MerkleError::InvalidProof { reason } => {
                write!(f, "invalid merkle proof: {}", reason)
            }
            MerkleError::Encoding { reason } => {
                write!(f, "malformed path encoding: {}", reason)
            }
        }
    }
}

impl std::error::Error for MerkleError {}
