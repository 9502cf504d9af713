//! Password input for encrypted archives.
//!
//! Creation and extraction never read the terminal directly; they ask a
//! [`SecretPrompt`] for the password. The CLI supplies one that reads from
//! the controlling terminal with echo disabled.

use crate::ArchiveError;
use crate::Result;
use std::io;

/// Source of a password for archive encryption or decryption.
pub trait SecretPrompt {
    /// Displays `prompt` and returns the secret entered, without the
    /// trailing line break.
    ///
    /// # Errors
    ///
    /// Returns an error if no secret can be obtained.
    fn read_secret(&mut self, prompt: &str) -> io::Result<String>;
}

/// A prompt that always answers with the same secret.
///
/// Useful for non-interactive callers and tests.
///
/// # Examples
///
/// ```
/// use jampzip_core::secret::{SecretPrompt, StaticSecret};
///
/// let mut prompt = StaticSecret::new("hunter2");
/// assert_eq!(prompt.read_secret("Enter password: ")?, "hunter2");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct StaticSecret(String);

impl StaticSecret {
    /// Creates a prompt answering with `secret`.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }
}

impl SecretPrompt for StaticSecret {
    fn read_secret(&mut self, _prompt: &str) -> io::Result<String> {
        Ok(self.0.clone())
    }
}

/// A prompt for operations that must not ask for a password.
///
/// Any attempt to read a secret fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSecret;

impl SecretPrompt for NoSecret {
    fn read_secret(&mut self, _prompt: &str) -> io::Result<String> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "no password source available",
        ))
    }
}

/// Asks `prompt` for a password, rejecting empty input.
pub(crate) fn read_password(prompt: &mut dyn SecretPrompt, message: &str) -> Result<String> {
    let password = prompt.read_secret(message)?;
    if password.is_empty() {
        return Err(ArchiveError::LibraryOperation(
            "password must not be empty".to_string(),
        ));
    }
    Ok(password)
}
