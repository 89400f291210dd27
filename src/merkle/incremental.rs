//! Proof-driven root updates: append one leaf or replace one leaf in
//! O(depth) hashes, without access to the rest of the tree.
//!
//! Both operations consume an authentication path and the previous root, and
//! must produce exactly the root [`compute_root`] would return for the
//! mutated sequence.
//!
//! [`compute_root`]: crate::merkle::compute_root

use crate::hash::{hash_pair, sha256d, Digest};

use super::proof::verify_leaf;
use super::types::{MerkleError, Path, Side};

/// Appends one entry to the tree, returning the new root.
///
/// `last_entry` is the raw (pre-double-hash) value of the current last leaf,
/// `last_path` its authentication path and `old_root` the current root.  The
/// path is verified first; the walk then climbs it once, tracking the new
/// leaf's subtree (`carry`) alongside the old last leaf's ancestors until the
/// two merge at the join point.  If they never merge the old leaf count was a
/// power of two and the tree gains a level, rooted at
/// `hash(old_root || carry)`.
pub fn append_leaf(
    last_entry: &[u8],
    last_path: &Path,
    old_root: &Digest,
    new_entry: &[u8],
) -> Result<Digest, MerkleError> {
    let last_leaf = sha256d(last_entry);
    let new_leaf = sha256d(new_entry);

    if !verify_leaf(&last_leaf, last_path, old_root) {
        return Err(MerkleError::InvalidProof {
            reason: "last-leaf path does not match the old root",
        });
    }

    let mut carry = new_leaf;
    let mut last_value = last_leaf;
    let mut joined = false;

    for step in last_path {
        match step.side {
            // The old last leaf was the self-paired odd node at this level.
            Side::Left => {
                if joined {
                    // Levels above the join point are still odd-sized; the
                    // merged subtree keeps climbing via self-duplication.
                    carry = hash_pair(&carry, &carry);
                } else {
                    if step.sibling != last_value {
                        return Err(MerkleError::InvalidProof {
                            reason: "self-paired step does not duplicate the last leaf",
                        });
                    }
                    // The new leaf takes the duplicate's slot: a real pairing
                    // replaces the self-duplication.
                    carry = hash_pair(&last_value, &carry);
                    joined = true;
                }
            }
            // The old last leaf had a real left sibling; this level was
            // even-sized.
            Side::Right => {
                if joined {
                    carry = hash_pair(&step.sibling, &carry);
                } else {
                    carry = hash_pair(&carry, &carry);
                    last_value = hash_pair(&step.sibling, &last_value);
                }
            }
        }
    }

    if joined {
        Ok(carry)
    } else {
        Ok(hash_pair(old_root, &carry))
    }
}

/// Replaces the leaf authenticated by `path` with a new entry, returning the
/// new root.
///
/// The walk replays the path twice in lockstep, once with the old leaf and
/// once with the new one.  A recorded sibling equal to the old running value
/// was itself derived from the path being updated (the odd self-pairing
/// case) and is substituted with the new running value; all other siblings
/// are shared between both trees.  Fails with
/// [`MerkleError::InvalidProof`] when the old side does not reach
/// `old_root`.
pub fn update_leaf(
    old_entry: &[u8],
    new_entry: &[u8],
    path: &Path,
    old_root: &Digest,
) -> Result<Digest, MerkleError> {
    let mut old_value = sha256d(old_entry);
    let mut new_value = sha256d(new_entry);

    for step in path {
        let new_sibling = if step.sibling == old_value {
            new_value
        } else {
            step.sibling
        };
        match step.side {
            Side::Left => {
                old_value = hash_pair(&old_value, &step.sibling);
                new_value = hash_pair(&new_value, &new_sibling);
            }
            Side::Right => {
                old_value = hash_pair(&step.sibling, &old_value);
                new_value = hash_pair(&new_sibling, &new_value);
            }
        }
    }

    if old_value != *old_root {
        return Err(MerkleError::InvalidProof {
            reason: "path does not replay to the old root",
        });
    }
    Ok(new_value)
}
