use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Please enter a valid email address (e.g. you@example.com).")]
    InvalidEmail,
    #[error("Please write a message.")]
    MissingMessage,
}

impl ContactError {
    pub fn field(&self) -> ContactField {
        match self {
            ContactError::MissingName => ContactField::Name,
            ContactError::MissingEmail | ContactError::InvalidEmail => ContactField::Email,
            ContactError::MissingMessage => ContactField::Message,
        }
    }
}

/// Raw values as typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactMessage, ContactError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        if name.is_empty() {
            return Err(ContactError::MissingName);
        }
        if email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !EMAIL_RE.is_match(email) {
            return Err(ContactError::InvalidEmail);
        }
        if message.is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

/// A validated contact request, ready to hand to the mail client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    name: String,
    email: String,
    message: String,
}

impl ContactMessage {
    pub fn subject(&self) -> String {
        format!("Portfolio contact from {}", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\n{}",
            self.name, self.email, self.message
        )
    }

    /// `mailto:` link with a percent-encoded subject and body.
    pub fn mailto(&self, recipient: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&self.subject()),
            urlencoding::encode(&self.body())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn rejects_missing_fields() {
        assert_eq!(
            form("", "jane@example.com", "hi").validate(),
            Err(ContactError::MissingName)
        );
        assert_eq!(
            form("   ", "jane@example.com", "hi").validate(),
            Err(ContactError::MissingName)
        );
        assert_eq!(
            form("Jane", " ", "hi").validate(),
            Err(ContactError::MissingEmail)
        );
        assert_eq!(
            form("Jane", "jane@example.com", "\n\t").validate(),
            Err(ContactError::MissingMessage)
        );
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["a@b", "jane", "jane@", "@example.com", "ja ne@example.com", "a@@b.c"] {
            assert_eq!(
                form("Jane", email, "hi").validate(),
                Err(ContactError::InvalidEmail),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn errors_point_at_their_field() {
        assert_eq!(ContactError::MissingName.field(), ContactField::Name);
        assert_eq!(ContactError::InvalidEmail.field(), ContactField::Email);
        assert_eq!(ContactError::MissingMessage.field(), ContactField::Message);
    }

    #[test]
    fn validation_keeps_the_form_intact() {
        let f = form("Jane", "a@b", "Hello");
        let _ = f.validate();
        assert_eq!(f, form("Jane", "a@b", "Hello"));
    }

    #[test]
    fn builds_encoded_mailto() {
        let msg = form("Jane", "jane@example.com", "Hello there, loved your work!")
            .validate()
            .expect("valid form");
        let link = msg.mailto("me@example.org");
        assert!(link.starts_with("mailto:me@example.org?subject="));
        assert!(link.contains("Jane"));
        assert!(link.contains("jane%40example.com"));
        assert!(link.contains("Hello%20there%2C%20loved%20your%20work%21"));
        assert!(!link.contains(' '));
        assert!(!link.contains('\n'));
    }

    #[test]
    fn special_characters_cannot_inject_parameters() {
        let msg = form("Tom & Jerry", "t@example.com", "a=1&cc=evil@x.com?#")
            .validate()
            .expect("valid form");
        let link = msg.mailto("me@example.org");
        let query = link.split_once('?').map(|(_, q)| q).expect("has query");
        assert_eq!(query.matches('&').count(), 1);
        assert!(!query.contains('#'));
        assert!(!query.contains('?'));
        assert!(link.contains("Tom%20%26%20Jerry"));
    }

    #[test]
    fn trims_values() {
        let msg = form("  Jane ", " jane@example.com ", " hi ")
            .validate()
            .expect("valid form");
        assert_eq!(msg.subject(), "Portfolio contact from Jane");
        assert_eq!(msg.body(), "Name: Jane\nEmail: jane@example.com\n\nhi");
    }
}
