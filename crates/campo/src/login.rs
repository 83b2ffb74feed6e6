// File: src/login.rs
// Purpose: Login form behavior: submit loading state and remember-me

use crate::session::{SessionStore, REMEMBERED_EMAIL_KEY};

/// Label the submit button takes while a login submission is in flight.
pub const LOGIN_LOADING_LABEL: &str = "Iniciando sesión...";

/// Presentation state of the login submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    pub disabled: bool,
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self {
            label: "Iniciar sesión".to_string(),
            disabled: false,
        }
    }
}

/// The login page: a submit handler and the remember-me checkbox, backed by
/// an injected session store.
pub struct LoginForm<S: SessionStore> {
    session: S,
    /// Current value of the email input.
    pub email: String,
    /// Checked state of the remember-me checkbox.
    pub remember_me: bool,
    /// Submit button presentation.
    pub button: SubmitButton,
}

impl<S: SessionStore> LoginForm<S> {
    /// Builds the form and replays a previously remembered email into the
    /// email input and checkbox, as the page-load hook did.
    pub fn restore(session: S) -> Self {
        let mut form = Self {
            email: String::new(),
            remember_me: false,
            button: SubmitButton::default(),
            session,
        };
        if let Some(saved) = form.session.get(REMEMBERED_EMAIL_KEY) {
            form.email = saved;
            form.remember_me = true;
        }
        form
    }

    /// Submit handler. Submission always proceeds; when both fields are
    /// filled the button switches to its loading presentation and disables.
    /// No field content is validated here.
    pub fn submit(&mut self, email: &str, password: &str) {
        if !email.is_empty() && !password.is_empty() {
            self.button.label = LOGIN_LOADING_LABEL.to_string();
            self.button.disabled = true;
        }
    }

    /// Change handler for the remember-me checkbox. Checked with a non-empty
    /// email stores it; anything else clears the key.
    pub fn remember_changed(&mut self, checked: bool, email: &str) {
        self.remember_me = checked;
        self.email = email.to_string();
        if checked && !email.is_empty() {
            self.session.set(REMEMBERED_EMAIL_KEY, email);
        } else {
            self.session.remove(REMEMBERED_EMAIL_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;

    #[test]
    fn test_submit_with_both_fields_enters_loading_state() {
        let mut form = LoginForm::restore(MemorySessionStore::new());
        form.submit("a@b.com", "secret");
        assert_eq!(form.button.label, LOGIN_LOADING_LABEL);
        assert!(form.button.disabled);
    }

    #[test]
    fn test_submit_with_missing_field_leaves_button_alone() {
        let mut form = LoginForm::restore(MemorySessionStore::new());
        form.submit("", "secret");
        assert_eq!(form.button, SubmitButton::default());

        form.submit("a@b.com", "");
        assert_eq!(form.button, SubmitButton::default());
    }

    #[test]
    fn test_remember_me_roundtrip() {
        let store = MemorySessionStore::new();
        {
            let mut form = LoginForm::restore(&store);
            form.remember_changed(true, "a@b.com");
        }

        // Next page load with the key still present
        let form = LoginForm::restore(&store);
        assert_eq!(form.email, "a@b.com");
        assert!(form.remember_me);
    }

    #[test]
    fn test_unchecking_clears_the_key() {
        let store = MemorySessionStore::new();
        let mut form = LoginForm::restore(&store);
        form.remember_changed(true, "a@b.com");
        form.remember_changed(false, "a@b.com");
        assert_eq!(store.get(REMEMBERED_EMAIL_KEY), None);
    }

    #[test]
    fn test_checking_with_empty_email_clears_the_key() {
        let store = MemorySessionStore::new();
        store.set(REMEMBERED_EMAIL_KEY, "old@b.com");

        let mut form = LoginForm::restore(&store);
        form.remember_changed(true, "");
        assert_eq!(store.get(REMEMBERED_EMAIL_KEY), None);
    }
}
