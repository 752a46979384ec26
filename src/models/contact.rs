// ============================================================================
// CONTACT MODELS - Landing-page contact submissions
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Who is reaching out. The category set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Business,
    User,
}

impl ContactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactKind::Business => "business",
            ContactKind::User => "user",
        }
    }

    /// Uppercase label used in the relayed email subject.
    pub fn label(&self) -> &'static str {
        match self {
            ContactKind::Business => "BUSINESS",
            ContactKind::User => "USER",
        }
    }
}

/// Request body for the contact relay. All four fields are required;
/// only presence is validated, never format.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactRequest {
    #[serde(rename = "type")]
    #[validate(required)]
    pub kind: Option<ContactKind>,
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

impl ContactRequest {
    /// Validate presence of all fields and produce the submission.
    pub fn into_submission(self) -> Result<ContactSubmission, ValidationErrors> {
        self.validate()?;
        match (self.kind, self.name, self.email, self.message) {
            (Some(kind), Some(name), Some(email), Some(message)) => Ok(ContactSubmission {
                kind,
                name,
                email,
                message,
            }),
            _ => Err(ValidationErrors::new()),
        }
    }
}

/// A validated submission. Lives only for the duration of one relay call.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub kind: ContactKind,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn subject(&self) -> String {
        format!("[Krowz Contact] {} — {}", self.kind.label(), self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nType: {}\n\nMessage:\n{}",
            self.name,
            self.email,
            self.kind.as_str(),
            self.message
        )
    }
}

/// Response for a successfully relayed submission.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}
