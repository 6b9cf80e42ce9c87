//! Login secret comparison.
//!
//! Secrets are stored and compared verbatim. This is NOT credential hashing;
//! the [`SecretVerifier`] seam exists so a salted-hash verifier can replace
//! [`PlaintextVerifier`] without touching any call site.

/// Secret assigned to a new user when the caller supplies an empty one.
pub const DEFAULT_SECRET: &str = "1234";

/// Compares a secret presented at login with the stored one.
pub trait SecretVerifier: Send + Sync {
    fn verify(&self, provided: &str, stored: &str) -> bool;
}

/// Verbatim string equality.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaintextVerifier;

impl SecretVerifier for PlaintextVerifier {
    fn verify(&self, provided: &str, stored: &str) -> bool {
        provided == stored
    }
}

/// Resolve the secret to store for a new account.
///
/// Returns the supplied secret, or [`DEFAULT_SECRET`] together with `true`
/// when the caller left it empty.
pub fn secret_or_default(secret: &str) -> (String, bool) {
    if secret.is_empty() {
        (DEFAULT_SECRET.to_string(), true)
    } else {
        (secret.to_string(), false)
    }
}
