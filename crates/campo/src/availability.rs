// File: src/availability.rs
// Purpose: Wire types and HTTP client for the registration availability API

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::error::Result;

/// Server verdict on whether an email, phone number, or username is free.
///
/// `mensaje` carries the user-facing Spanish text; the engine only surfaces
/// it when `disponible` is false.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Availability {
    pub disponible: bool,
    pub mensaje: String,
}

#[derive(Debug, Serialize)]
struct EmailCheck<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct TelefonoCheck<'a> {
    telefono: &'a str,
}

#[derive(Debug, Serialize)]
struct NombreCheck<'a> {
    nombre: &'a str,
}

/// Seam to the three availability endpoints of the registration backend.
#[async_trait]
pub trait AvailabilityClient: Send + Sync {
    async fn check_email(&self, email: &str) -> Result<Availability>;
    async fn check_telefono(&self, telefono: &str) -> Result<Availability>;
    async fn check_nombre(&self, nombre: &str) -> Result<Availability>;
}

/// reqwest-backed client POSTing JSON bodies to the registration API.
pub struct HttpAvailabilityClient {
    http: reqwest::Client,
    config: Config,
}

impl HttpAvailabilityClient {
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    async fn post_check<B>(&self, path: &str, body: &B) -> Result<Availability>
    where
        B: Serialize + Sync,
    {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        debug!(%url, "issuing availability check");
        let raw = self.http.post(&url).json(body).send().await?.text().await?;
        let availability = serde_json::from_str(&raw)?;
        Ok(availability)
    }
}

#[async_trait]
impl AvailabilityClient for HttpAvailabilityClient {
    async fn check_email(&self, email: &str) -> Result<Availability> {
        self.post_check(&self.config.verificar_email_path, &EmailCheck { email })
            .await
    }

    async fn check_telefono(&self, telefono: &str) -> Result<Availability> {
        self.post_check(
            &self.config.verificar_telefono_path,
            &TelefonoCheck { telefono },
        )
        .await
    }

    async fn check_nombre(&self, nombre: &str) -> Result<Availability> {
        self.post_check(&self.config.verificar_nombre_path, &NombreCheck { nombre })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names_are_spanish() {
        let body = serde_json::to_value(EmailCheck { email: "a@b.co" }).unwrap();
        assert_eq!(body, serde_json::json!({ "email": "a@b.co" }));

        let body = serde_json::to_value(TelefonoCheck { telefono: "3001234567" }).unwrap();
        assert_eq!(body, serde_json::json!({ "telefono": "3001234567" }));

        let body = serde_json::to_value(NombreCheck { nombre: "ana" }).unwrap();
        assert_eq!(body, serde_json::json!({ "nombre": "ana" }));
    }

    #[test]
    fn test_availability_decodes_both_fields() {
        let availability: Availability =
            serde_json::from_str(r#"{"disponible": false, "mensaje": "Este email ya está registrado"}"#)
                .unwrap();
        assert!(!availability.disponible);
        assert_eq!(availability.mensaje, "Este email ya está registrado");
    }

    #[test]
    fn test_malformed_response_is_a_decode_error() {
        let result = serde_json::from_str::<Availability>(r#"{"ok": true}"#);
        assert!(result.is_err());
    }
}
