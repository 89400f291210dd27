use crate::hash::{hash_pair, Digest};

use super::types::{Path, Side};

/// Recomputes the root a path implies for the given leaf digest.
///
/// Steps are consumed leaf-to-root: [`Side::Left`] hashes
/// `value || sibling`, [`Side::Right`] hashes `sibling || value`.  An empty
/// path returns the leaf unchanged (single-leaf tree).
pub fn replay_path(leaf: &Digest, path: &Path) -> Digest {
    let mut value = *leaf;
    for step in path {
        value = match step.side {
            Side::Left => hash_pair(&value, &step.sibling),
            Side::Right => hash_pair(&step.sibling, &value),
        };
    }
    value
}

/// Checks that `leaf` belongs under `root` according to `path`.
///
/// A genuine self-paired leaf is always the left operand, so a path whose
/// first sibling equals the leaf but claims [`Side::Right`] is a mirrored
/// forgery and is rejected before replay.
pub fn verify_leaf(leaf: &Digest, path: &Path, root: &Digest) -> bool {
    if let Some(first) = path.steps().first() {
        if first.sibling == *leaf && first.side == Side::Right {
            return false;
        }
    }
    replay_path(leaf, path) == *root
}
