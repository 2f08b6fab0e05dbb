use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

pub const MSG_RECEIVED: &str = "Mensagem recebida com sucesso! Entraremos em contato em breve.";
pub const MSG_VALIDATION: &str = "Erro de validação";
pub const MSG_SERVER_ERROR: &str =
    "Ocorreu um erro ao processar sua mensagem. Por favor, tente novamente mais tarde.";

/// Raw contact form body. Fields stay untyped JSON so that a missing or
/// wrongly typed field is reported against that field instead of failing
/// the whole extraction.
#[derive(Debug, Default, Clone)]
pub struct ContactRequest {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub subject: Option<Value>,
    pub message: Option<Value>,
}

impl From<Map<String, Value>> for ContactRequest {
    fn from(mut body: Map<String, Value>) -> Self {
        ContactRequest {
            name: body.remove("name"),
            email: body.remove("email"),
            subject: body.remove("subject"),
            message: body.remove("message"),
        }
    }
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    Required,
    TooSmall,
    InvalidString,
    InvalidType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub path: Vec<String>,
    pub field: String,
    pub code: ViolationCode,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &str, code: ViolationCode, message: &str) -> Self {
        FieldViolation {
            path: vec![field.to_string()],
            field: field.to_string(),
            code,
            message: message.to_string(),
        }
    }
}

#[derive(Serialize)]
pub struct ContactAccepted {
    pub success: bool,
    pub message: String,
    pub reference: String,
}

#[derive(Serialize)]
pub struct ContactRejected {
    pub success: bool,
    pub message: String,
    pub errors: Vec<FieldViolation>,
}

#[derive(Serialize)]
pub struct ContactFailed {
    pub success: bool,
    pub message: String,
}

/// Unwraps a field that must be a JSON string, recording why it is not.
fn text_field<'a>(
    field: &str,
    value: &'a Option<Value>,
    violations: &mut Vec<FieldViolation>,
) -> Option<&'a str> {
    match value {
        None => {
            violations.push(FieldViolation::new(field, ViolationCode::Required, "Campo obrigatório"));
            None
        }
        Some(Value::String(text)) => Some(text.as_str()),
        Some(_) => {
            violations.push(FieldViolation::new(field, ViolationCode::InvalidType, "Esperava texto"));
            None
        }
    }
}

fn required_text(
    field: &str,
    value: &Option<Value>,
    empty_message: &str,
    violations: &mut Vec<FieldViolation>,
) -> String {
    match text_field(field, value, violations) {
        Some("") => {
            violations.push(FieldViolation::new(field, ViolationCode::TooSmall, empty_message));
            String::new()
        }
        Some(text) => text.to_string(),
        None => String::new(),
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

impl ContactRequest {
    /// Checks every field and reports all violations in field order.
    pub fn validate(&self) -> Result<ContactMessage, Vec<FieldViolation>> {
        let mut violations = Vec::new();

        let name = required_text("name", &self.name, "Nome é obrigatório", &mut violations);

        let email = match text_field("email", &self.email, &mut violations) {
            Some(e) if !is_valid_email(e) => {
                violations.push(FieldViolation::new("email", ViolationCode::InvalidString, "E-mail inválido"));
                String::new()
            }
            Some(e) => e.to_string(),
            None => String::new(),
        };

        let subject = required_text("subject", &self.subject, "Assunto é obrigatório", &mut violations);
        let message = required_text("message", &self.message, "Mensagem é obrigatória", &mut violations);

        if violations.is_empty() {
            Ok(ContactMessage { name, email, subject, message })
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(name: &str, email: &str, subject: &str, message: &str) -> ContactRequest {
        ContactRequest {
            name: Some(json!(name)),
            email: Some(json!(email)),
            subject: Some(json!(subject)),
            message: Some(json!(message)),
        }
    }

    #[test]
    fn complete_request_validates() {
        let msg = request("Ana", "ana@empresa.ao", "Orçamento", "Olá").validate().unwrap();
        assert_eq!(msg.name, "Ana");
        assert_eq!(msg.email, "ana@empresa.ao");
    }

    #[test]
    fn empty_name_is_too_small() {
        let errors = request("", "a@b.com", "x", "y").validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[0].code, ViolationCode::TooSmall);
        assert_eq!(errors[0].message, "Nome é obrigatório");
    }

    #[test]
    fn malformed_email_is_invalid_string() {
        let errors = request("A", "not-an-email", "x", "y").validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, vec!["email".to_string()]);
        assert_eq!(errors[0].code, ViolationCode::InvalidString);
    }

    #[test]
    fn missing_fields_are_required_and_ordered() {
        let errors = ContactRequest::default().validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "subject", "message"]);
        assert!(errors.iter().all(|e| e.code == ViolationCode::Required));
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.domain.ao"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn wrongly_typed_fields_are_invalid_type_on_that_field() {
        let mut req = request("A", "a@b.com", "x", "y");
        req.name = Some(json!(5));
        req.message = Some(Value::Null);
        let errors = req.validate().unwrap_err();
        let fields: Vec<(&str, ViolationCode)> = errors.iter().map(|e| (e.field.as_str(), e.code)).collect();
        assert_eq!(fields, vec![("name", ViolationCode::InvalidType), ("message", ViolationCode::InvalidType)]);
    }

    #[test]
    fn request_is_built_from_the_json_object() {
        let body = json!({"name": "Ana", "email": "ana@empresa.ao", "extra": true});
        let req = ContactRequest::from(body.as_object().unwrap().clone());
        assert_eq!(req.name, Some(json!("Ana")));
        assert!(req.subject.is_none());
    }
}
