//! Password Hasher Port - One-Way Digest Interface
//!
//! The store persists password digests as opaque strings and never
//! sees plaintext beyond this boundary. The concrete algorithm
//! (bcrypt, argon2, ...) belongs to the embedding application; seeding
//! is the only place the core itself calls `hash`.

/// Trait for one-way password digest providers.
pub trait PasswordHasher: Send + Sync + 'static {
    /// Produce a digest for a plaintext password.
    fn hash(&self, plain: &str) -> String;

    /// Verify a plaintext password against a stored digest.
    fn verify(&self, plain: &str, digest: &str) -> bool;
}
