use crate::hash::Digest;

use super::types::{MerkleError, Path, PathStep, Side};

/// Characters per serialised step: 64 hex digits plus a two-digit side flag.
pub const STEP_CHARS: usize = 66;

const FLAG_LEFT: &str = "01";
const FLAG_RIGHT: &str = "00";

/// Serialises a path into the canonical hex layout.
///
/// Each step is `sibling_hex || flag`, flag `"01"` for [`Side::Left`] and
/// `"00"` for [`Side::Right`], steps concatenated leaf-to-root.  The result
/// is `66 * depth` characters; an empty path encodes as the empty string.
pub fn encode_path(path: &Path) -> String {
    let mut out = String::with_capacity(path.depth() * STEP_CHARS);
    for step in path {
        out.push_str(&step.sibling.to_hex());
        out.push_str(match step.side {
            Side::Left => FLAG_LEFT,
            Side::Right => FLAG_RIGHT,
        });
    }
    out
}

/// Deserialises a path from its canonical hex layout.
pub fn decode_path(encoded: &str) -> Result<Path, MerkleError> {
    if !encoded.is_ascii() {
        return Err(MerkleError::Encoding {
            reason: "path encoding must be ascii hex",
        });
    }
    if encoded.len() % STEP_CHARS != 0 {
        return Err(MerkleError::Encoding {
            reason: "length is not a multiple of 66",
        });
    }

    let mut steps = Vec::with_capacity(encoded.len() / STEP_CHARS);
    for start in (0..encoded.len()).step_by(STEP_CHARS) {
        let chunk = &encoded[start..start + STEP_CHARS];
        let sibling = Digest::from_hex(&chunk[..64]).map_err(|_| MerkleError::Encoding {
            reason: "invalid sibling hex",
        })?;
        let side = match &chunk[64..] {
            FLAG_LEFT => Side::Left,
            FLAG_RIGHT => Side::Right,
            _ => {
                return Err(MerkleError::Encoding {
                    reason: "side flag must be 00 or 01",
                })
            }
        };
        steps.push(PathStep { sibling, side });
    }
    Ok(Path::new(steps))
}
