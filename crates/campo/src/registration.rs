// File: src/registration.rs
// Purpose: Registration form engine: blur/input handlers, availability
// checks with response sequencing, and the submit guard

use std::sync::Mutex;

use campo_validation as validators;
use tracing::{debug, warn};

use crate::availability::{Availability, AvailabilityClient};
use crate::field::{FieldId, FieldState, FormState, StrengthMeter};

/// Inline message for an email value failing the format check.
pub const EMAIL_INVALIDO: &str = "Por favor, ingrese un correo electrónico válido";

/// Inline message in the password hint panel while the value is short.
pub const PASSWORD_CORTA: &str = "La contraseña debe tener al menos 8 caracteres";

/// Inline message for a confirmation value differing from the password.
pub const CONFIRM_NO_COINCIDE: &str = "Las contraseñas no coinciden";

/// Blocking alert raised when submitting with visible errors.
pub const CORRIJA_ERRORES: &str =
    "Por favor, corrija los errores en el formulario antes de enviar.";

const MIN_PASSWORD_CHARS: usize = 8;

/// Outcome of a registration submit event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// No visible errors; the submission goes through.
    Proceed,
    /// Submission cancelled: an alert is raised and focus moves to the last
    /// field walked that had a visible error.
    Blocked { alert: String, focus: FieldId },
}

/// The registration page engine.
///
/// Handlers mirror the page events: blur on email and phone, input on the
/// two password fields, and submit. State lives behind a mutex so two
/// availability checks may be in flight at once; the lock is never held
/// across an await.
pub struct RegistrationForm<C: AvailabilityClient> {
    client: C,
    state: Mutex<FormState>,
}

impl<C: AvailabilityClient> RegistrationForm<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            state: Mutex::new(FormState::default()),
        }
    }

    /// Snapshot of a field's current state.
    pub fn field(&self, id: FieldId) -> FieldState {
        self.state.lock().unwrap().field(id)
    }

    /// Snapshot of the strength meter.
    pub fn meter(&self) -> StrengthMeter {
        self.state.lock().unwrap().meter
    }

    /// Blur handler for the email input.
    ///
    /// An empty value leaves the previous state untouched. A value failing
    /// the format check errors locally without a network round-trip; a value
    /// passing it issues exactly one availability check.
    pub async fn email_blur(&self, email: &str) {
        if email.is_empty() {
            return;
        }
        if !validators::is_valid_email(email) {
            self.state
                .lock()
                .unwrap()
                .set_field(FieldId::Email, FieldState::invalid(EMAIL_INVALIDO));
            return;
        }

        let token = self.state.lock().unwrap().begin_check(FieldId::Email);
        match self.client.check_email(email).await {
            Ok(availability) => self.apply_availability(FieldId::Email, token, availability),
            Err(e) => warn!(field = "email", error = %e, "availability check failed"),
        }
    }

    /// Blur handler for the phone input. The local rule is character count
    /// only; the backend decides everything else.
    pub async fn telefono_blur(&self, telefono: &str) {
        if telefono.is_empty() {
            return;
        }
        if let Err(message) = validators::validate_telefono(telefono) {
            self.state
                .lock()
                .unwrap()
                .set_field(FieldId::Telefono, FieldState::invalid(message));
            return;
        }

        let token = self.state.lock().unwrap().begin_check(FieldId::Telefono);
        match self.client.check_telefono(telefono).await {
            Ok(availability) => self.apply_availability(FieldId::Telefono, token, availability),
            Err(e) => warn!(field = "telefono", error = %e, "availability check failed"),
        }
    }

    /// Input handler for the password field: recomputes the strength meter
    /// and the hint panel on every keystroke.
    pub fn password_input(&self, password: &str) {
        let mut state = self.state.lock().unwrap();
        if password.is_empty() {
            state.meter = StrengthMeter::default();
            state.set_field(FieldId::Password, FieldState::default());
            return;
        }

        if password.chars().count() < MIN_PASSWORD_CHARS {
            state.set_field(FieldId::Password, FieldState::invalid(PASSWORD_CORTA));
        } else {
            state.set_field(FieldId::Password, FieldState::valid());
        }
        state.meter = StrengthMeter {
            score: validators::score(password),
        };
    }

    /// Input handler for the confirmation field. Compares against the
    /// password's live value at event time; a match clears the error.
    pub fn confirm_input(&self, confirm: &str, password: &str) {
        let mut state = self.state.lock().unwrap();
        if validators::confirm_matches(password, confirm) {
            state.set_field(FieldId::ConfirmPassword, FieldState::valid());
        } else {
            state.set_field(
                FieldId::ConfirmPassword,
                FieldState::invalid(CONFIRM_NO_COINCIDE),
            );
        }
    }

    /// Submit guard: blocks only on errors that are currently visible. A
    /// field never touched by a blur or input event passes silently even if
    /// its value would not validate; that inherited gap is kept on purpose.
    pub fn submit(&self) -> SubmitDecision {
        let state = self.state.lock().unwrap();
        let mut focus = None;
        for id in FieldId::ALL {
            if state.error_visible(id) {
                focus = Some(id);
            }
        }
        match focus {
            Some(focus) => SubmitDecision::Blocked {
                alert: CORRIJA_ERRORES.to_string(),
                focus,
            },
            None => SubmitDecision::Proceed,
        }
    }

    fn apply_availability(&self, id: FieldId, token: u64, availability: Availability) {
        let mut state = self.state.lock().unwrap();
        if !state.is_current(id, token) {
            debug!(field = id.as_str(), "discarding stale availability response");
            return;
        }
        if availability.disponible {
            state.set_field(id, FieldState::valid());
        } else {
            state.set_field(id, FieldState::invalid(availability.mensaje));
        }
    }
}
