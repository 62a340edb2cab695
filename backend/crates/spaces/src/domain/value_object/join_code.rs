//! JoinCode Value Object
//!
//! Short code students type (or scan via QR) to enter a space.
//! 8 characters from an unambiguous uppercase alphabet, so the code
//! survives being read aloud or copied from a projector.
//!
//! ## Usage
//! ```rust
//! use spaces::domain::value_object::join_code::JoinCode;
//!
//! let code = JoinCode::generate();
//! assert_eq!(code.as_str().len(), 8);
//! ```

use std::str::FromStr;

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Code length in characters
pub const JOIN_CODE_LEN: usize = 8;

/// Uppercase letters and digits minus the lookalikes (I, O, 0, 1)
const ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JoinCode(String);

impl JoinCode {
    /// Generate a new random code
    pub fn generate() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        let code = (0..JOIN_CODE_LEN)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();
        Self(code)
    }

    /// Parse a user-supplied code
    ///
    /// Lowercase input is accepted and normalized; the lookalike characters
    /// are rejected rather than silently remapped.
    pub fn parse_str(s: &str) -> AppResult<Self> {
        let normalized: String = s.trim().to_uppercase();
        if normalized.len() != JOIN_CODE_LEN {
            return Err(AppError::bad_request(format!(
                "Join code must be {} characters",
                JOIN_CODE_LEN
            )));
        }
        if !normalized.bytes().all(|b| ALPHABET.contains(&b)) {
            return Err(AppError::bad_request("Join code contains invalid characters"));
        }
        Ok(Self(normalized))
    }

    /// Rehydrate from a trusted stored value
    #[inline]
    pub fn from_db(s: String) -> Self {
        Self(s)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for JoinCode {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        JoinCode::parse_str(s)
    }
}

impl std::fmt::Display for JoinCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
