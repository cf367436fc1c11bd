//! Contact form payload, validation and delivery.

use serde::Serialize;
use thiserror::Error;

use super::config::SiteConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Service,
    Message,
    Consent,
}

impl ContactField {
    /// Form control id (also the JSON field name where applicable).
    pub fn id(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Service => "service",
            ContactField::Message => "message",
            ContactField::Consent => "consent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("required field `{}` is empty", .0.id())]
    Missing(ContactField),
    #[error("`{0}` is not a valid email address")]
    InvalidEmail(String),
    #[error("consent to data processing is required")]
    ConsentRequired,
    #[error("could not encode the contact request: {0}")]
    Encode(String),
    #[error("could not reach the contact endpoint: {0}")]
    Transport(String),
    #[error("contact endpoint answered with HTTP {0}")]
    Status(u16),
}

impl ContactError {
    /// Whether the visitor can fix this by editing the form.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ContactError::Missing(_) | ContactError::InvalidEmail(_) | ContactError::ConsentRequired
        )
    }
}

/// JSON body posted to the contact webhook. Optional fields are sent as
/// empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service: String,
    pub budget: String,
    pub message: String,
    #[serde(skip)]
    pub consent: bool,
}

impl ContactRequest {
    /// Trim every text field.
    pub fn normalized(mut self) -> Self {
        for field in [
            &mut self.name,
            &mut self.email,
            &mut self.phone,
            &mut self.company,
            &mut self.service,
            &mut self.budget,
            &mut self.message,
        ] {
            let trimmed = field.trim();
            if trimmed.len() != field.len() {
                *field = trimmed.to_string();
            }
        }
        self
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        let required = [
            (ContactField::Name, &self.name),
            (ContactField::Email, &self.email),
            (ContactField::Service, &self.service),
            (ContactField::Message, &self.message),
        ];
        if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(ContactError::Missing(*field));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        if !self.consent {
            return Err(ContactError::ConsentRequired);
        }
        Ok(())
    }
}

/// `local@domain.tld` with no whitespace; deliverability is not checked.
fn looks_like_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Content type of the POST body. The JSON payload is labelled as plain text
/// so the browser sends it without a CORS preflight, which the webhook does
/// not answer.
const BODY_CONTENT_TYPE: &str = "text/plain;charset=utf-8";

/// Validate and POST `request` to the configured webhook.
///
/// Transport failures and non-2xx answers are errors; the response body is
/// ignored.
pub async fn submit(config: &SiteConfig, request: ContactRequest) -> Result<(), ContactError> {
    let request = request.normalized();
    request.validate()?;
    let body = serde_json::to_string(&request).map_err(|err| ContactError::Encode(err.to_string()))?;

    let response = reqwest::Client::new()
        .post(&config.contact_endpoint)
        .header(reqwest::header::CONTENT_TYPE, BODY_CONTENT_TYPE)
        .body(body)
        .send()
        .await
        .map_err(|err| ContactError::Transport(err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ContactError::Status(status.as_u16()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::thread::{self, JoinHandle};

    use super::*;

    fn complete() -> ContactRequest {
        ContactRequest {
            name: "Jan Kowalski".into(),
            email: "jan@firma.pl".into(),
            service: "Sklep internetowy".into(),
            message: "Potrzebujemy sklepu.".into(),
            consent: true,
            ..ContactRequest::default()
        }
    }

    #[test]
    fn complete_request_validates() {
        assert_eq!(complete().validate(), Ok(()));
    }

    #[test]
    fn missing_fields_are_reported_in_form_order() {
        let request = ContactRequest {
            name: "  ".into(),
            message: String::new(),
            ..complete()
        };
        assert_eq!(
            request.validate(),
            Err(ContactError::Missing(ContactField::Name))
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["jan", "jan@", "@firma.pl", "jan@firma", "jan@@firma.pl", "j an@firma.pl"] {
            let request = ContactRequest {
                email: email.into(),
                ..complete()
            };
            assert!(
                matches!(request.validate(), Err(ContactError::InvalidEmail(_))),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn consent_is_required() {
        let request = ContactRequest {
            consent: false,
            ..complete()
        };
        assert_eq!(request.validate(), Err(ContactError::ConsentRequired));
        assert!(ContactError::ConsentRequired.is_user_error());
        assert!(!ContactError::Status(500).is_user_error());
    }

    #[test]
    fn payload_uses_form_field_names() {
        let json = serde_json::to_value(complete()).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            keys.len(),
            7,
            "consent must not be serialised, got {keys:?}"
        );
        assert_eq!(json["email"], "jan@firma.pl");
        assert_eq!(json["budget"], "");
    }

    #[test]
    fn normalization_trims() {
        let request = ContactRequest {
            email: "  jan@firma.pl ".into(),
            ..complete()
        }
        .normalized();
        assert_eq!(request.email, "jan@firma.pl");
    }

    fn read_request(stream: &mut TcpStream) -> String {
        let mut raw = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&raw);
            if let Some(head_end) = text.find("\r\n\r\n") {
                let length = text[..head_end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if raw.len() >= head_end + 4 + length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&raw).into_owned()
    }

    /// Local endpoint answering one request with `status`; joins to the raw
    /// request it received.
    fn endpoint(status: &'static str) -> (SiteConfig, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let config = SiteConfig {
            contact_endpoint: format!("http://{}/exec", listener.local_addr().unwrap()),
            ..SiteConfig::default()
        };
        let server = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request(&mut stream);
            let response =
                format!("HTTP/1.1 {status}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
            stream.write_all(response.as_bytes()).unwrap();
            request
        });
        (config, server)
    }

    #[tokio::test(flavor = "current_thread")]
    async fn submit_posts_json_as_plain_text() {
        let (config, server) = endpoint("200 OK");
        assert_eq!(submit(&config, complete()).await, Ok(()));

        let request = server.join().unwrap();
        let lowered = request.to_ascii_lowercase();
        assert!(request.starts_with("POST /exec "), "{request}");
        assert!(
            lowered.contains("content-type: text/plain;charset=utf-8"),
            "{request}"
        );
        assert!(request.contains(r#""email":"jan@firma.pl""#), "{request}");
        assert!(!request.contains("consent"), "{request}");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn error_status_is_reported() {
        let (config, server) = endpoint("503 Service Unavailable");
        assert_eq!(
            submit(&config, complete()).await,
            Err(ContactError::Status(503))
        );
        server.join().unwrap();
    }

    #[tokio::test(flavor = "current_thread")]
    async fn unreachable_endpoint_is_a_transport_error() {
        let address = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();
        let config = SiteConfig {
            contact_endpoint: format!("http://{address}/exec"),
            ..SiteConfig::default()
        };
        let result = submit(&config, complete()).await;
        assert!(matches!(result, Err(ContactError::Transport(_))), "{result:?}");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn invalid_request_is_not_sent() {
        let config = SiteConfig {
            contact_endpoint: "http://127.0.0.1:9/exec".into(),
            ..SiteConfig::default()
        };
        let request = ContactRequest {
            consent: false,
            ..complete()
        };
        assert_eq!(
            submit(&config, request).await,
            Err(ContactError::ConsentRequired)
        );
    }
}
