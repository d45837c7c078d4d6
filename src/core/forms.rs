use crate::core::i18n;
use crate::domain::model::{FormKind, InterestForm, Locale, ReservationForm};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Raw reservation input as collected from the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub service: String,
    pub doctor: String,
    pub notes: String,
    pub terms_accepted: bool,
}

/// Raw interest input as collected from the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterestDraft {
    pub full_name: String,
    pub email: String,
    pub interests: Vec<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormDraft {
    Reservation(ReservationDraft),
    Interest(InterestDraft),
}

impl FormDraft {
    pub fn kind(&self) -> FormKind {
        match self {
            FormDraft::Reservation(_) => FormKind::Reservation,
            FormDraft::Interest(_) => FormKind::Interest,
        }
    }
}

/// First failing rule, with the field to focus and localized message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"))
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9+\s()\-]{6,20}$").expect("phone pattern"))
}

pub fn email_shape_ok(value: &str) -> bool {
    email_re().is_match(value.trim())
}

pub fn phone_shape_ok(value: &str) -> bool {
    phone_re().is_match(value.trim())
}

/// Rules run in document order and short-circuit on the first failure.
pub fn validate_reservation(
    draft: &ReservationDraft,
    locale: Locale,
    today: NaiveDate,
) -> Result<ReservationForm, FieldError> {
    if draft.full_name.trim().is_empty() {
        return Err(FieldError {
            field: "fullName",
            message: i18n::full_name_required(locale),
        });
    }
    if !email_shape_ok(&draft.email) {
        return Err(FieldError {
            field: "email",
            message: i18n::email_invalid(locale),
        });
    }
    if !phone_shape_ok(&draft.phone) {
        return Err(FieldError {
            field: "phone",
            message: i18n::phone_invalid(locale),
        });
    }
    if draft.date.trim().is_empty() {
        return Err(FieldError {
            field: "date",
            message: i18n::date_required(locale),
        });
    }
    // unparseable dates get the choose-a-date message rather than slipping through
    let Ok(date) = NaiveDate::parse_from_str(draft.date.trim(), "%Y-%m-%d") else {
        return Err(FieldError {
            field: "date",
            message: i18n::date_required(locale),
        });
    };
    if date < today {
        return Err(FieldError {
            field: "date",
            message: i18n::date_in_past(locale),
        });
    }
    if draft.service.trim().is_empty() {
        return Err(FieldError {
            field: "interest",
            message: i18n::service_required(locale),
        });
    }
    if !draft.terms_accepted {
        return Err(FieldError {
            field: "terms",
            message: i18n::terms_required(locale),
        });
    }

    Ok(ReservationForm {
        full_name: draft.full_name.trim().to_string(),
        email: draft.email.trim().to_string(),
        phone: draft.phone.trim().to_string(),
        date: draft.date.trim().to_string(),
        service: draft.service.trim().to_string(),
        doctor: draft.doctor.trim().to_string(),
        notes: draft.notes.trim().to_string(),
    })
}

pub fn validate_interest(
    draft: &InterestDraft,
    locale: Locale,
) -> Result<InterestForm, FieldError> {
    if draft.full_name.trim().is_empty() {
        return Err(FieldError {
            field: "fullName",
            message: i18n::name_required(locale),
        });
    }
    if !email_shape_ok(&draft.email) {
        return Err(FieldError {
            field: "email",
            message: i18n::email_invalid(locale),
        });
    }
    if draft.interests.is_empty() {
        return Err(FieldError {
            field: "interests[]",
            message: i18n::interest_required(locale),
        });
    }

    Ok(InterestForm {
        full_name: draft.full_name.trim().to_string(),
        email: draft.email.trim().to_string(),
        interests: draft.interests.clone(),
        message: draft.message.trim().to_string(),
    })
}
