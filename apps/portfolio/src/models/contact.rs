use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

/// The four compose-box inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormFields {
    /// Exact empty-string check; whitespace-only input counts as filled.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.subject.is_empty()
            && !self.message.is_empty()
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Idle,
    Sending,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Toast {
    Success,
    Failure,
}

impl Toast {
    pub fn text(&self, fallback_email: &str) -> String {
        match self {
            Toast::Success => "Message sent successfully!".to_string(),
            Toast::Failure => format!(
                "Oops! Something went wrong. Please email me directly at {fallback_email}."
            ),
        }
    }
}

/// The payload handed to the delivery collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutboundMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl From<FormFields> for OutboundMessage {
    fn from(fields: FormFields) -> Self {
        Self {
            name: fields.name,
            email: fields.email,
            subject: fields.subject,
            message: fields.message,
        }
    }
}
