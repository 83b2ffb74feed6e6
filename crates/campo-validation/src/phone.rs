//! Telephone validation
//!
//! The local rule is a plain character count, not a format check: any value
//! of ten or more characters passes, digits or not. Real format enforcement
//! is left to the backend availability check.

/// Inline message shown when the phone value is too short.
pub const TELEFONO_CORTO: &str = "El teléfono debe tener al menos 10 caracteres";

const MIN_TELEFONO_CHARS: usize = 10;

pub fn validate_telefono(telefono: &str) -> Result<(), String> {
    if telefono.chars().count() >= MIN_TELEFONO_CHARS {
        Ok(())
    } else {
        Err(TELEFONO_CORTO.to_string())
    }
}
