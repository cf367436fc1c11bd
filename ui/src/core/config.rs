//! Build-time site configuration.
//!
//! Values are baked in at compile time; override them with the matching
//! environment variable when building (e.g. in CI):
//!
//! | field              | variable                        |
//! |--------------------|---------------------------------|
//! | `contact_endpoint` | `MOZARTWAY_CONTACT_ENDPOINT`    |
//! | `contact_email`    | `MOZARTWAY_CONTACT_EMAIL`       |
//! | `contact_phone`    | `MOZARTWAY_CONTACT_PHONE`       |

const DEFAULT_CONTACT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbzkz_D_VJodX6NusoHS_OHfUODRWnEWC5oUxtINbF-Waj6Jb1PkXTcu3xU7cFYUJLyluA/exec";
const DEFAULT_CONTACT_EMAIL: &str = "lukasz.szczurek@mozartway.com";
const DEFAULT_CONTACT_PHONE: &str = "+48 532 533 220";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Webhook receiving contact form submissions as JSON.
    pub contact_endpoint: String,
    pub contact_email: String,
    pub contact_phone: String,
}

impl SiteConfig {
    pub fn from_build_env() -> Self {
        Self {
            contact_endpoint: option_env!("MOZARTWAY_CONTACT_ENDPOINT")
                .unwrap_or(DEFAULT_CONTACT_ENDPOINT)
                .to_string(),
            contact_email: option_env!("MOZARTWAY_CONTACT_EMAIL")
                .unwrap_or(DEFAULT_CONTACT_EMAIL)
                .to_string(),
            contact_phone: option_env!("MOZARTWAY_CONTACT_PHONE")
                .unwrap_or(DEFAULT_CONTACT_PHONE)
                .to_string(),
        }
    }

    /// `tel:` href for the phone number (whitespace removed).
    pub fn phone_href(&self) -> String {
        let digits: String = self
            .contact_phone
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        format!("tel:{digits}")
    }

    pub fn email_href(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_href_strips_spaces() {
        let config = SiteConfig {
            contact_phone: "+48 532 533 220".into(),
            ..SiteConfig::default()
        };
        assert_eq!(config.phone_href(), "tel:+48532533220");
    }

    #[test]
    fn defaults_are_populated() {
        let config = SiteConfig::default();
        assert!(config.contact_endpoint.starts_with("https://"));
        assert!(config.email_href().starts_with("mailto:"));
    }
}
