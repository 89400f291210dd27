//! Stateless binary Merkle tree operations.
//!
//! The module fixes the following layout rules:
//!
//! * **Pairing:** nodes are combined `(index 2k, index 2k + 1)`; the even
//!   index is the left operand and hashes as `left || right`.
//! * **Odd-node duplication:** the lone trailing node of an odd-length level
//!   is paired with itself and re-hashed, never carried up unmodified.  Its
//!   authentication step records the node itself as sibling with
//!   [`Side::Left`].
//! * **Leaves:** raw entries are double-hashed
//!   ([`sha256d`](crate::hash::sha256d)) before entering the tree, keeping
//!   leaf digests disjoint from the single-hashed internal-node encoding.
//! * **Wire layout:** a path serialises as `66 * depth` hex characters, one
//!   `sibling_hex || side_flag` unit per level ([`encode_path`]).
//!
//! There is no tree object and no shared state: every operation is a pure
//! function of its inputs, and the incremental ones ([`append_leaf`],
//! [`update_leaf`]) touch only the previous root plus one path.

mod incremental;
mod proof;
mod ser;
mod tree;
mod types;

pub use incremental::{append_leaf, update_leaf};
pub use proof::{replay_path, verify_leaf};
pub use ser::{decode_path, encode_path, STEP_CHARS};
pub use tree::{compute_root, derive_path, reduce_level};
pub use types::{MerkleError, Path, PathStep, Side};
