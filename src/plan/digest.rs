use sha2::{Digest, Sha256};

use crate::domain::Phase;
use crate::error::Result;

/// Hex SHA-256 of the canonical JSON form of a phase list.
///
/// Two runs with equal digests produced byte-identical plans.
pub fn digest(phases: &[Phase]) -> Result<String> {
    let bytes = serde_json::to_vec(phases)?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}
