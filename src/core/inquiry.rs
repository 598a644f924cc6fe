//! Contact section inquiry form
//!
//! Submission never leaves the page: a valid form flips to [`InquiryStatus::Sent`],
//! the button shows a confirmation for [`CONFIRMATION_MS`] and the form is then
//! reset.

/// How long the "Message Sent!" confirmation stays up (ms)
pub const CONFIRMATION_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InquiryError {
    #[error("Please tell us your name")]
    MissingName,

    #[error("Please enter your email")]
    MissingEmail,

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

impl InquiryError {
    /// The field the message belongs under
    pub fn field(&self) -> InquiryField {
        match self {
            InquiryError::MissingName => InquiryField::Name,
            InquiryError::MissingEmail | InquiryError::InvalidEmail => InquiryField::Email,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryField {
    Name,
    Email,
    Piece,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InquiryStatus {
    #[default]
    Editing,
    Sent,
}

/// A validated inquiry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub piece: Option<String>,
    pub message: Option<String>,
}

/// Raw form contents as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub piece: String,
    pub message: String,
    pub status: InquiryStatus,
}

impl InquiryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: InquiryField, value: impl Into<String>) {
        let value = value.into();
        match field {
            InquiryField::Name => self.name = value,
            InquiryField::Email => self.email = value,
            InquiryField::Piece => self.piece = value,
            InquiryField::Message => self.message = value,
        }
    }

    pub fn get(&self, field: InquiryField) -> &str {
        match field {
            InquiryField::Name => &self.name,
            InquiryField::Email => &self.email,
            InquiryField::Piece => &self.piece,
            InquiryField::Message => &self.message,
        }
    }

    pub fn validate(&self) -> Result<Inquiry, InquiryError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(InquiryError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(InquiryError::MissingEmail);
        }
        validate_email(email)?;

        Ok(Inquiry {
            name: name.to_string(),
            email: email.to_string(),
            piece: non_empty(&self.piece),
            message: non_empty(&self.message),
        })
    }

    /// Validate and enter the sent state. Submitting again while the
    /// confirmation is showing is ignored and returns `Ok(None)`.
    pub fn submit(&mut self) -> Result<Option<Inquiry>, InquiryError> {
        if self.status == InquiryStatus::Sent {
            return Ok(None);
        }
        let inquiry = self.validate()?;
        self.status = InquiryStatus::Sent;
        tracing::info!(piece = ?inquiry.piece, "inquiry submitted");
        Ok(Some(inquiry))
    }

    /// Clear every field and return to editing
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_sent(&self) -> bool {
        self.status == InquiryStatus::Sent
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// `local@domain.tld` with a single `@` and no whitespace
fn validate_email(email: &str) -> Result<(), InquiryError> {
    if email.chars().any(char::is_whitespace) {
        return Err(InquiryError::InvalidEmail);
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(InquiryError::InvalidEmail);
    };
    if local.is_empty() || domain.contains('@') {
        return Err(InquiryError::InvalidEmail);
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return Err(InquiryError::InvalidEmail);
    };
    if host.is_empty() || tld.is_empty() || host.starts_with('.') {
        return Err(InquiryError::InvalidEmail);
    }
    Ok(())
}
