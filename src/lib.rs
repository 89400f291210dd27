//! Binary SHA-256 Merkle trees over append-only leaf sequences.
//!
//! The crate never materialises a tree object.  Every operation is a pure
//! function of its explicit inputs:
//!
//! * [`merkle::compute_root`] reduces a full leaf sequence to its root.
//! * [`merkle::derive_path`] produces the authentication path for one leaf.
//! * [`merkle::verify_leaf`] checks a leaf/path/root triple.
//! * [`merkle::append_leaf`] and [`merkle::update_leaf`] recompute the root
//!   after a single-leaf mutation in O(depth) hashes, consuming only the
//!   previous root and an authentication path.
//!
//! Raw entries are hashed twice ([`hash::sha256d`]) before they enter the
//! tree so that leaf digests cannot collide with the single-hashed internal
//! node encoding.  Levels with an odd node count pair the trailing node with
//! itself; see the [`merkle`] module docs for the exact layout rules.

pub mod hash;
pub mod merkle;

pub use hash::{sha256, sha256d, Digest};
pub use merkle::{
    append_leaf, compute_root, decode_path, derive_path, encode_path, replay_path, update_leaf,
    verify_leaf, MerkleError, Path, PathStep, Side, STEP_CHARS,
};
