use crate::hash::{hash_pair, Digest};

use super::types::{MerkleError, Path, PathStep, Side};

/// Number of leaves a level must reach before reduction is parallelised.
#[cfg(feature = "parallel")]
const PARALLEL_MIN_LEVEL: usize = 1024;

fn reduce_pair(pair: &[Digest]) -> Digest {
    match pair {
        [left, right] => hash_pair(left, right),
        // Lone trailing node of an odd-length level: paired with itself and
        // re-hashed, never carried up unmodified.
        [last] => hash_pair(last, last),
        _ => unreachable!("chunks(2) yields one or two nodes"),
    }
}

/// Collapses one tree level into the next level up.
///
/// Nodes are paired `(2k, 2k + 1)` and hashed as `left || right`; the
/// trailing node of an odd-length level is self-paired.  A one-node level is
/// the root and must not be reduced further; callers stop iterating there.
#[cfg(not(feature = "parallel"))]
pub fn reduce_level(level: &[Digest]) -> Vec<Digest> {
    level.chunks(2).map(reduce_pair).collect()
}

/// Collapses one tree level into the next level up.
///
/// Nodes are paired `(2k, 2k + 1)` and hashed as `left || right`; the
/// trailing node of an odd-length level is self-paired.  A one-node level is
/// the root and must not be reduced further; callers stop iterating there.
#[cfg(feature = "parallel")]
pub fn reduce_level(level: &[Digest]) -> Vec<Digest> {
    use rayon::prelude::*;

    if level.len() >= PARALLEL_MIN_LEVEL {
        level.par_chunks(2).map(reduce_pair).collect()
    } else {
        level.chunks(2).map(reduce_pair).collect()
    }
}

/// Computes the root digest of a full leaf sequence.
///
/// This is the O(n) reference reduction; [`append_leaf`] and [`update_leaf`]
/// must always agree with it for equivalent sequences.  A single leaf is its
/// own root.
///
/// [`append_leaf`]: crate::merkle::append_leaf
/// [`update_leaf`]: crate::merkle::update_leaf
pub fn compute_root(leaves: &[Digest]) -> Result<Digest, MerkleError> {
    if leaves.is_empty() {
        return Err(MerkleError::EmptyLeaves);
    }
    let mut current = leaves.to_vec();
    while current.len() > 1 {
        current = reduce_level(&current);
    }
    Ok(current[0])
}

/// Derives the authentication path for the leaf at `pos`.
///
/// One step is recorded per level, leaf-to-root.  An even index pairs with
/// the successor (falling back to the node itself at the odd tail) and
/// records [`Side::Left`]; an odd index pairs with its predecessor and
/// records [`Side::Right`].  A single-leaf tree yields an empty path.
pub fn derive_path(pos: usize, leaves: &[Digest]) -> Result<Path, MerkleError> {
    if leaves.is_empty() {
        return Err(MerkleError::EmptyLeaves);
    }
    if pos >= leaves.len() {
        return Err(MerkleError::IndexOutOfRange {
            index: pos,
            len: leaves.len(),
        });
    }

    let mut path = Path::empty();
    if leaves.len() == 1 {
        return Ok(path);
    }

    let mut level = leaves.to_vec();
    let mut index = pos;
    loop {
        let step = if index % 2 == 0 {
            let sibling = level.get(index + 1).copied().unwrap_or(level[index]);
            PathStep {
                sibling,
                side: Side::Left,
            }
        } else {
            PathStep {
                sibling: level[index - 1],
                side: Side::Right,
            }
        };
        path.push(step);

        // A two-node level sits directly below the root.
        if level.len() <= 2 {
            break;
        }
        level = reduce_level(&level);
        index /= 2;
    }

    Ok(path)
}
