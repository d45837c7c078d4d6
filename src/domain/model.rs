use serde::{Deserialize, Serialize};

/// Active display language of the site. Drives text direction and which
/// half of every bilingual content pair is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    Arabic,
    English,
}

impl Locale {
    pub fn tag(self) -> &'static str {
        match self {
            Locale::Arabic => "ar",
            Locale::English => "en",
        }
    }

    pub fn dir(self) -> Dir {
        match self {
            Locale::Arabic => Dir::Rtl,
            Locale::English => Dir::Ltr,
        }
    }

    pub fn other(self) -> Locale {
        match self {
            Locale::Arabic => Locale::English,
            Locale::English => Locale::Arabic,
        }
    }

    pub fn is_arabic(self) -> bool {
        self == Locale::Arabic
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dir {
    Rtl,
    Ltr,
}

impl Dir {
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Rtl => "rtl",
            Dir::Ltr => "ltr",
        }
    }
}

/// The two site forms. Each has its own feedback container and submit guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Reservation,
    Interest,
}

impl FormKind {
    pub fn feedback_id(self) -> &'static str {
        match self {
            FormKind::Reservation => "reservation-feedback",
            FormKind::Interest => "interest-feedback",
        }
    }

    pub fn form_type(self) -> &'static str {
        match self {
            FormKind::Reservation => "reservation",
            FormKind::Interest => "interest",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

/// Transient notification shown in a form's feedback container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackMessage {
    pub kind: FeedbackKind,
    pub heading: String,
    pub body: String,
}

impl FeedbackMessage {
    pub fn success(heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Success,
            heading: heading.into(),
            body: body.into(),
        }
    }

    pub fn error(heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Error,
            heading: heading.into(),
            body: body.into(),
        }
    }
}

/// A reservation request after client-side validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub service: String,
    pub doctor: String,
    pub notes: String,
}

/// An interest submission after client-side validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterestForm {
    pub full_name: String,
    pub email: String,
    pub interests: Vec<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormSubmission {
    Reservation(ReservationForm),
    Interest(InterestForm),
}

impl FormSubmission {
    pub fn kind(&self) -> FormKind {
        match self {
            FormSubmission::Reservation(_) => FormKind::Reservation,
            FormSubmission::Interest(_) => FormKind::Interest,
        }
    }

    /// Field pairs in the wire layout the relay endpoint expects. The
    /// service selection travels as `interest` and each checked interest
    /// tag repeats the `interests[]` key.
    pub fn form_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("formType".to_string(), self.kind().form_type().to_string())];
        match self {
            FormSubmission::Reservation(form) => {
                pairs.push(("fullName".to_string(), form.full_name.clone()));
                pairs.push(("email".to_string(), form.email.clone()));
                pairs.push(("phone".to_string(), form.phone.clone()));
                pairs.push(("date".to_string(), form.date.clone()));
                pairs.push(("interest".to_string(), form.service.clone()));
                pairs.push(("doctor".to_string(), form.doctor.clone()));
                pairs.push(("notes".to_string(), form.notes.clone()));
            }
            FormSubmission::Interest(form) => {
                pairs.push(("fullName".to_string(), form.full_name.clone()));
                pairs.push(("email".to_string(), form.email.clone()));
                for interest in &form.interests {
                    pairs.push(("interests[]".to_string(), interest.clone()));
                }
                pairs.push(("message".to_string(), form.message.clone()));
            }
        }
        pairs
    }
}

/// JSON body returned by the relay endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RelayResponse {
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailAddress {
    pub email: String,
    pub name: Option<String>,
}

impl MailAddress {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    pub fn named(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: Some(name.into()),
        }
    }
}

/// One email ready for dispatch, transport-agnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: MailAddress,
    pub to: Vec<MailAddress>,
    pub reply_to: Option<MailAddress>,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}
