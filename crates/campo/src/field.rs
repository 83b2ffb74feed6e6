// File: src/field.rs
// Purpose: Per-field validity state for the registration form

use std::collections::HashMap;

/// Registration form fields that carry inline validation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Email,
    Telefono,
    Password,
    ConfirmPassword,
}

impl FieldId {
    /// All fields, in the order the submit guard walks them.
    pub const ALL: [FieldId; 4] = [
        FieldId::Email,
        FieldId::Telefono,
        FieldId::Password,
        FieldId::ConfirmPassword,
    ];

    /// Id of the input element.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Email => "email",
            FieldId::Telefono => "telefono",
            FieldId::Password => "password",
            FieldId::ConfirmPassword => "confirm-password",
        }
    }

    /// Id of the validation container next to the input.
    pub fn validation_id(&self) -> &'static str {
        match self {
            FieldId::Email => "email-validation",
            FieldId::Telefono => "telefono-validation",
            FieldId::Password => "password-validation",
            FieldId::ConfirmPassword => "confirm-validation",
        }
    }
}

/// Validity of a single field.
///
/// `Unchecked` means no blur or input event has touched the field yet. The
/// submit guard cannot tell an unchecked field from a valid one; that gap is
/// inherited behavior and is covered by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validity {
    #[default]
    Unchecked,
    Valid,
    Invalid,
}

/// State of one field: validity plus the message currently shown, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub validity: Validity,
    pub message: Option<String>,
}

impl FieldState {
    pub fn valid() -> Self {
        Self {
            validity: Validity::Valid,
            message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            validity: Validity::Invalid,
            message: Some(message.into()),
        }
    }

    /// Whether the validation container for this field is currently shown.
    pub fn error_visible(&self) -> bool {
        self.validity == Validity::Invalid
    }
}

/// Live state of the password strength meter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrengthMeter {
    pub score: u8,
}

/// Validation state for the whole registration form.
///
/// Each availability-checked field also carries a monotonic sequence
/// counter; a response may only land if it still holds the latest token for
/// its field, so a late response from an earlier blur is discarded.
#[derive(Debug, Default)]
pub struct FormState {
    fields: HashMap<FieldId, FieldState>,
    seq: HashMap<FieldId, u64>,
    pub meter: StrengthMeter,
}

impl FormState {
    /// Current state of a field; untouched fields are `Unchecked`.
    pub fn field(&self, id: FieldId) -> FieldState {
        self.fields.get(&id).cloned().unwrap_or_default()
    }

    pub fn set_field(&mut self, id: FieldId, state: FieldState) {
        self.fields.insert(id, state);
    }

    pub fn error_visible(&self, id: FieldId) -> bool {
        self.field(id).error_visible()
    }

    /// Starts an availability check for a field and returns its token.
    pub(crate) fn begin_check(&mut self, id: FieldId) -> u64 {
        let seq = self.seq.entry(id).or_insert(0);
        *seq += 1;
        *seq
    }

    /// Whether `token` is still the latest check issued for `id`.
    pub(crate) fn is_current(&self, id: FieldId, token: u64) -> bool {
        self.seq.get(&id).copied() == Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_field_is_unchecked() {
        let state = FormState::default();
        assert_eq!(state.field(FieldId::Telefono).validity, Validity::Unchecked);
        assert!(!state.error_visible(FieldId::Telefono));
    }

    #[test]
    fn test_invalid_field_shows_error() {
        let mut state = FormState::default();
        state.set_field(FieldId::Email, FieldState::invalid("ocupado"));
        assert!(state.error_visible(FieldId::Email));
        assert_eq!(state.field(FieldId::Email).message.as_deref(), Some("ocupado"));

        state.set_field(FieldId::Email, FieldState::valid());
        assert!(!state.error_visible(FieldId::Email));
        assert_eq!(state.field(FieldId::Email).message, None);
    }

    #[test]
    fn test_only_latest_token_is_current() {
        let mut state = FormState::default();
        let first = state.begin_check(FieldId::Email);
        let second = state.begin_check(FieldId::Email);
        assert!(!state.is_current(FieldId::Email, first));
        assert!(state.is_current(FieldId::Email, second));

        // Tokens are per field
        let phone = state.begin_check(FieldId::Telefono);
        assert!(state.is_current(FieldId::Telefono, phone));
        assert!(state.is_current(FieldId::Email, second));
    }

    #[test]
    fn test_element_ids_match_page_contract() {
        assert_eq!(FieldId::Email.as_str(), "email");
        assert_eq!(FieldId::ConfirmPassword.as_str(), "confirm-password");
        assert_eq!(FieldId::Telefono.validation_id(), "telefono-validation");
        assert_eq!(FieldId::ConfirmPassword.validation_id(), "confirm-validation");
    }
}
