// Campo - typed client-side validation for login and registration forms
// Field validity is explicit state; rendering is a pure function of it

pub mod availability;
pub mod config;
pub mod error;
pub mod field;
pub mod login;
pub mod registration;
pub mod render;
pub mod session;

pub use availability::{Availability, AvailabilityClient, HttpAvailabilityClient};
pub use config::Config;
pub use error::{CampoError, Result};
pub use field::{FieldId, FieldState, FormState, StrengthMeter, Validity};
pub use login::{LoginForm, SubmitButton, LOGIN_LOADING_LABEL};
pub use registration::{RegistrationForm, SubmitDecision, CORRIJA_ERRORES, EMAIL_INVALIDO};
pub use render::{container_hidden, input_error_class, meter_bars, BarColor};
pub use session::{MemorySessionStore, SessionStore, REMEMBERED_EMAIL_KEY};
