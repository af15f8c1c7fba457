//! Contact form submission.
//!
//! The form posts its fields as JSON to a FormSubmit AJAX endpoint, with two
//! extra control fields selecting the email subject and layout.

use std::collections::BTreeMap;

use autenticos_types::ContactConfig;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("endpoint rejected submission with status {status}")]
    Rejected { status: u16 },
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("failed to encode submission: {0}")]
    Encode(#[from] serde_json::Error),
}

impl SubmitError {
    /// Message to show the visitor for this failure
    pub fn user_message<'a>(&self, config: &'a ContactConfig) -> &'a str {
        match self {
            Self::Rejected { .. } | Self::Encode(_) => &config.rejected_message,
            Self::Network(_) => &config.network_message,
        }
    }
}

/// JSON body sent to the form endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactSubmission {
    #[serde(flatten)]
    fields: BTreeMap<String, String>,
}

impl ContactSubmission {
    /// Collect form fields and add the `_subject` / `_template` controls.
    /// Control fields always win over same-named form fields.
    pub fn from_fields<I, K, V>(fields: I, config: &ContactConfig) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields: BTreeMap<String, String> = fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        fields.insert("_subject".to_string(), config.subject.clone());
        fields.insert("_template".to_string(), config.template.clone());
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn to_json(&self) -> Result<String, SubmitError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// POST `submission` to `endpoint`. Any non-2xx response is a rejection.
pub async fn submit(
    client: &reqwest::Client,
    endpoint: &str,
    submission: &ContactSubmission,
) -> Result<(), SubmitError> {
    let body = submission.to_json()?;
    let response = client
        .post(endpoint)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .header(reqwest::header::ACCEPT, "application/json")
        .body(body)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(SubmitError::Rejected {
            status: status.as_u16(),
        });
    }
    tracing::info!(status = status.as_u16(), "contact form submitted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_fields_added() {
        let config = ContactConfig::default();
        let sub = ContactSubmission::from_fields(
            [("nombre", "Ana"), ("email", "ana@example.com")],
            &config,
        );
        assert_eq!(sub.get("nombre"), Some("Ana"));
        assert_eq!(sub.get("_template"), Some("table"));
        assert_eq!(sub.get("_subject"), Some(config.subject.as_str()));
    }

    #[test]
    fn test_control_fields_override_form() {
        let config = ContactConfig::default();
        let sub = ContactSubmission::from_fields([("_template", "box")], &config);
        assert_eq!(sub.get("_template"), Some("table"));
    }

    #[test]
    fn test_json_is_flat_object() {
        let config = ContactConfig {
            subject: "Hola".to_string(),
            ..ContactConfig::default()
        };
        let sub = ContactSubmission::from_fields([("mensaje", "¿Qué tal?")], &config);
        let value: serde_json::Value = serde_json::from_str(&sub.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "_subject": "Hola",
                "_template": "table",
                "mensaje": "¿Qué tal?",
            })
        );
    }

    #[test]
    fn test_user_message() {
        let config = ContactConfig::default();
        let err = SubmitError::Rejected { status: 500 };
        assert_eq!(err.user_message(&config), config.rejected_message);
        assert_eq!(err.to_string(), "endpoint rejected submission with status 500");
    }
}
