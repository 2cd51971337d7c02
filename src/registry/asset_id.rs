//! Cosmetic asset identifiers.
//!
//! Produces ids like `RWA-7KQ2M9X1A`. The source is a non-cryptographic
//! RNG: ids are neither unique nor unguessable.

use rand::RngExt;

pub const PREFIX: &str = "RWA-";
pub const ID_LEN: usize = 9;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub fn generate() -> String {
    let mut rng = rand::rng();
    let mut id = String::with_capacity(PREFIX.len() + ID_LEN);
    id.push_str(PREFIX);
    for _ in 0..ID_LEN {
        id.push(CHARSET[rng.random_range(0..CHARSET.len())] as char);
    }
    id
}

/// True for `RWA-` followed by exactly nine of `[A-Z0-9]`.
#[cfg(test)]
pub fn is_well_formed(id: &str) -> bool {
    match id.strip_prefix(PREFIX) {
        Some(body) => {
            body.len() == ID_LEN
                && body
                    .bytes()
                    .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        }
        None => false,
    }
}
