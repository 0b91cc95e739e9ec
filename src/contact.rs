use gloo_console::warn;
use log::info;

use crate::error::SiteError;

const REFERENCE_NOTE: &str = "\n\n📷 *Tenho uma referência visual para enviar!*";

pub fn instagram_url(handle: &str) -> String {
    format!("https://instagram.com/{}", handle)
}

pub fn whatsapp_profile(number: &str) -> String {
    format!("https://wa.me/{}", number)
}

/// Deep link that opens WhatsApp with `message` pre-filled.
pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        number,
        urlencoding::encode(message)
    )
}

/// Short Portuguese hint shown under the form when sending fails.
pub fn form_feedback(err: &SiteError) -> &'static str {
    match err {
        SiteError::MissingName => "Informe seu nome para continuar.",
        SiteError::MissingIdea => "Conte um pouco sobre a sua ideia.",
        SiteError::PopupBlocked(_) => "Permita pop-ups para abrir o WhatsApp.",
        _ => "Não foi possível abrir o WhatsApp.",
    }
}

/// What the visitor typed into the quote form. The attachment only flips
/// `has_reference`; the file itself never leaves the browser.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactRequest {
    pub name: String,
    pub idea: String,
    pub has_reference: bool,
}

impl ContactRequest {
    /// Same rule as the inputs' `required` attribute: anything typed counts.
    pub fn validate(&self) -> Result<(), SiteError> {
        if self.name.is_empty() {
            return Err(SiteError::MissingName);
        }
        if self.idea.is_empty() {
            return Err(SiteError::MissingIdea);
        }
        Ok(())
    }

    pub fn message(&self) -> String {
        let mut msg = format!("Olá! Me chamo *{}*.\n", self.name);
        msg.push_str(
            "Vim através do site e gostaria de solicitar um orçamento para uma nova arte.\n\n",
        );
        msg.push_str(&format!("*Minha Ideia:* {}", self.idea));
        if self.has_reference {
            msg.push_str(REFERENCE_NOTE);
        }
        msg
    }

    pub fn deep_link(&self, number: &str) -> Result<String, SiteError> {
        self.validate()?;
        Ok(whatsapp_link(number, &self.message()))
    }

    /// Opens the pre-filled conversation in a new tab.
    pub fn send(&self, number: &str) -> Result<(), SiteError> {
        let url = self.deep_link(number)?;
        let window = web_sys::window().ok_or(SiteError::NoWindow)?;
        match window.open_with_url_and_target(&url, "_blank") {
            Ok(Some(_)) => {
                info!("Opened WhatsApp conversation for {}", self.name);
                Ok(())
            }
            _ => {
                warn!("Pop-up blocked, allow pop-ups to start the WhatsApp conversation");
                Err(SiteError::PopupBlocked(url))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maria(has_reference: bool) -> ContactRequest {
        ContactRequest {
            name: "Maria".to_string(),
            idea: "Uma flor de loto no braço".to_string(),
            has_reference,
        }
    }

    #[test]
    fn message_without_reference() {
        assert_eq!(
            maria(false).message(),
            "Olá! Me chamo *Maria*.\nVim através do site e gostaria de solicitar um orçamento para uma nova arte.\n\n*Minha Ideia:* Uma flor de loto no braço"
        );
    }

    #[test]
    fn message_with_reference_appends_note() {
        let msg = maria(true).message();
        assert!(msg.starts_with(&maria(false).message()));
        assert!(msg.ends_with("\n\n📷 *Tenho uma referência visual para enviar!*"));
    }

    #[test]
    fn deep_link_targets_studio_number() {
        let link = maria(false).deep_link("5584991336794").unwrap();
        assert!(link.starts_with("https://wa.me/5584991336794?text="));
        let encoded = link.trim_start_matches("https://wa.me/5584991336794?text=");
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('\n'));
        assert_eq!(
            urlencoding::decode(encoded).unwrap(),
            maria(false).message()
        );
    }

    #[test]
    fn empty_fields_are_rejected() {
        let mut request = maria(false);
        request.name.clear();
        assert_eq!(request.deep_link("1"), Err(SiteError::MissingName));

        let mut request = maria(false);
        request.idea.clear();
        assert_eq!(request.validate(), Err(SiteError::MissingIdea));
    }

    #[test]
    fn whitespace_counts_as_filled_in() {
        let request = ContactRequest {
            name: " ".to_string(),
            idea: "\n".to_string(),
            has_reference: false,
        };
        assert_eq!(request.validate(), Ok(()));
        assert!(request.deep_link("1").unwrap().starts_with("https://wa.me/1?text="));
    }

    #[test]
    fn feedback_matches_failure() {
        assert_eq!(form_feedback(&SiteError::MissingName), "Informe seu nome para continuar.");
        assert_eq!(
            form_feedback(&SiteError::PopupBlocked("https://wa.me/1".to_string())),
            "Permita pop-ups para abrir o WhatsApp."
        );
        assert_eq!(form_feedback(&SiteError::NoWindow), "Não foi possível abrir o WhatsApp.");
    }

    #[test]
    fn profile_links() {
        assert_eq!(instagram_url("gungatattoo"), "https://instagram.com/gungatattoo");
        assert_eq!(whatsapp_profile("5511916474626"), "https://wa.me/5511916474626");
    }
}
