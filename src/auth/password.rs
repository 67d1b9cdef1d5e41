use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::auth::token::hashes_equal;

pub const SALT_BYTES: usize = 16;

/// Hash a password with a fresh random salt.
/// Returns `(salt, hash)`; both are stored in the users table as BLOBs.
pub fn hash_new_password(password: &str) -> (Vec<u8>, [u8; 32]) {
    let mut salt = vec![0u8; SALT_BYTES];
    OsRng.fill_bytes(&mut salt);
    let hash = hash_with_salt(&salt, password);
    (salt, hash)
}

pub fn hash_with_salt(salt: &[u8], password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    let out = hasher.finalize();
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&out);
    arr
}

/// Check a sign-in attempt against the stored salt + hash.
pub fn verify_password(salt: &[u8], stored_hash: &[u8], candidate: &str) -> bool {
    hashes_equal(&hash_with_salt(salt, candidate), stored_hash)
}
