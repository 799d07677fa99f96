//! Random password generation.

use rand::Rng;

/// Length used when neither the config nor the command line sets one.
pub const DEFAULT_LENGTH: usize = 16;

/// Letters, digits, and the punctuation set accepted by most sign-up forms.
pub const CHARACTERS: &str = concat!(
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "0123456789",
    "!@#$%^&*()-_=+[]{}:;'\"<>,.?/"
);

/// Generate a password of `length` characters from the OS random source.
pub fn generate(length: usize) -> String {
    generate_with(&mut rand::rngs::OsRng, length)
}

/// Draw `length` characters uniformly and independently from [`CHARACTERS`].
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    let bytes = CHARACTERS.as_bytes();
    (0..length)
        .map(|_| bytes[rng.gen_range(0..bytes.len())] as char)
        .collect()
}
