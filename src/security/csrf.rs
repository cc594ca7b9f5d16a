use rand::RngCore;

/// Generate an opaque CSRF token: 32 random bytes, lowercase hex encoded.
///
/// `rand::rng()` is the crate's cryptographically secure generator
/// (OS-seeded ChaCha), so tokens cannot be predicted from earlier outputs.
pub fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);

    hex::encode(bytes)
}

/// Compare a submitted token against the expected one in constant time.
pub fn verify_token(provided: &str, expected: &str) -> bool {
    provided.as_bytes().len() == expected.as_bytes().len()
        && provided
            .as_bytes()
            .iter()
            .zip(expected.as_bytes().iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}
