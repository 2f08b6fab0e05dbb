use gloo_net::http::Request;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

pub const SEND_FAILED: &str =
    "Ocorreu um erro ao enviar sua mensagem. Por favor, tente novamente mais tarde.";
pub const SENT_NOTICE: &str = "Obrigado pelo seu contato. Responderemos em breve.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormError {
    Missing(Field),
    InvalidEmail,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Missing(_) => write!(f, "Por favor, preencha todos os campos do formulário."),
            FormError::InvalidEmail => write!(f, "Por favor, forneça um endereço de e-mail válido."),
        }
    }
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Same rules the server applies, checked before any request goes out.
    pub fn validate(&self) -> Result<(), FormError> {
        for field in [Field::Name, Field::Email, Field::Subject, Field::Message] {
            if self.get(field).is_empty() {
                return Err(FormError::Missing(field));
            }
        }
        if !EMAIL_RE.is_match(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Sent,
    Failed(String),
}

impl SubmitState {
    pub fn can_submit(&self) -> bool {
        !matches!(self, SubmitState::Submitting)
    }
}

#[derive(Debug, Deserialize)]
pub struct ServerViolation {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub errors: Vec<ServerViolation>,
}

impl ContactResponse {
    pub fn into_state(self) -> SubmitState {
        if self.success {
            return SubmitState::Sent;
        }
        if self.errors.is_empty() {
            SubmitState::Failed(self.message)
        } else {
            let details: Vec<String> = self.errors.into_iter().map(|e| e.message).collect();
            SubmitState::Failed(details.join(" "))
        }
    }
}

pub async fn submit(form: &ContactForm) -> SubmitState {
    let url = format!("{}/api/contact", config::get_backend_url());
    let request = match Request::post(&url).json(form) {
        Ok(request) => request,
        Err(e) => {
            gloo_console::error!(format!("Failed to encode contact form: {}", e));
            return SubmitState::Failed(SEND_FAILED.to_string());
        }
    };

    match request.send().await {
        Ok(response) => match response.json::<ContactResponse>().await {
            Ok(body) => body.into_state(),
            Err(_) => {
                gloo_console::error!(format!("Unreadable contact response ({})", response.status()));
                SubmitState::Failed(SEND_FAILED.to_string())
            }
        },
        Err(e) => {
            gloo_console::error!(format!("Failed to send contact form: {}", e));
            SubmitState::Failed(SEND_FAILED.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Ana".to_string());
        form.set(Field::Email, "ana@empresa.ao".to_string());
        form.set(Field::Subject, "Orçamento".to_string());
        form.set(Field::Message, "Gostaria de um orçamento.".to_string());
        form
    }

    #[test]
    fn complete_form_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn first_empty_field_is_reported() {
        let mut form = filled();
        form.set(Field::Subject, String::new());
        form.set(Field::Message, String::new());
        assert_eq!(form.validate(), Err(FormError::Missing(Field::Subject)));
        assert_eq!(ContactForm::default().validate(), Err(FormError::Missing(Field::Name)));
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["not-an-email", "a@b", "a b@c.com", "@c.com"] {
            let mut form = filled();
            form.set(Field::Email, email.to_string());
            assert_eq!(form.validate(), Err(FormError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn only_submitting_blocks_resubmission() {
        assert!(SubmitState::Idle.can_submit());
        assert!(!SubmitState::Submitting.can_submit());
        assert!(SubmitState::Sent.can_submit());
        assert!(SubmitState::Failed("x".into()).can_submit());
    }

    #[test]
    fn success_response_maps_to_sent() {
        let body: ContactResponse = serde_json::from_str(
            r#"{"success":true,"message":"ok","reference":"3f1c"}"#,
        )
        .unwrap();
        assert_eq!(body.into_state(), SubmitState::Sent);
    }

    #[test]
    fn validation_response_surfaces_field_messages() {
        let body: ContactResponse = serde_json::from_str(
            r#"{"success":false,"message":"Erro de validação","errors":[
                {"path":["name"],"field":"name","code":"too_small","message":"Nome é obrigatório"},
                {"path":["email"],"field":"email","code":"invalid_string","message":"E-mail inválido"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            body.into_state(),
            SubmitState::Failed("Nome é obrigatório E-mail inválido".to_string())
        );
    }

    #[test]
    fn server_fault_uses_its_message() {
        let body: ContactResponse =
            serde_json::from_str(r#"{"success":false,"message":"falhou"}"#).unwrap();
        assert_eq!(body.into_state(), SubmitState::Failed("falhou".to_string()));
    }

    #[test]
    fn form_serializes_with_server_field_names() {
        let json = serde_json::to_value(filled()).unwrap();
        for field in [Field::Name, Field::Email, Field::Subject, Field::Message] {
            assert!(json.get(field.id()).is_some());
        }
    }
}
