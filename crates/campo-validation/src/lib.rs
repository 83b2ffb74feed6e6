//! Campo Validation
//!
//! Pure, synchronous field validators shared by the campo form engine.
//! No I/O and no state: every function is a plain check over a borrowed
//! string, so the engine and its tests can call them freely.

pub mod email;
pub mod password;
pub mod phone;

pub use email::is_valid_email;
pub use password::{lit_bars, score, StrengthTier};
pub use phone::validate_telefono;

/// Confirmation field check: valid only while both values match exactly.
pub fn confirm_matches(password: &str, confirm: &str) -> bool {
    password == confirm
}
