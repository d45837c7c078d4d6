use crate::domain::model::{Dir, FeedbackMessage, FormKind, FormSubmission};

/// Typed delta to apply to the document. The host owns the actual DOM;
/// the controller only ever describes changes.
#[derive(Debug, Clone, PartialEq)]
pub enum DomPatch {
    SetDocumentLocale { lang: &'static str, dir: Dir },
    SetVisible { id: String, visible: bool },
    SetToggleControl {
        label: &'static str,
        title: &'static str,
        aria_label: &'static str,
    },
    SetFade { on: bool },
    MarkFadeTargets,
    ClearFadeHelpers,
    SetText { id: String, text: String },
    SetTypingCursor { id: String, on: bool },
    SetFieldValue { field: String, value: String },
    FocusField { field: String },
    ScrollTo { id: String },
    SetDoctorPickerVisible { visible: bool },
    SetCoveredBadge { covered: bool },
    SetSubmitLoading { form: FormKind, on: bool },
    ShowFeedback { form: FormKind, message: FeedbackMessage },
    ClearFeedback { form: FormKind },
    ResetForm { form: FormKind },
}

/// What a fired timer was scheduled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPurpose {
    FadeSwitch,
    FadeCleanup,
    TypeTick,
    FeedbackExpiry(FormKind),
}

/// Handle for a scheduled callback. `seq` snapshots the relevant
/// sequence counter at scheduling time; a token whose `seq` no longer
/// matches is stale and must be ignored. This is the single cancellation
/// point for every animation and expiry timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken {
    pub seq: u64,
    pub purpose: TimerPurpose,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Dom(DomPatch),
    Schedule { token: TimerToken, delay_ms: u64 },
    Dispatch { submission: FormSubmission },
}

impl Effect {
    pub fn dom(patch: DomPatch) -> Effect {
        Effect::Dom(patch)
    }

    pub fn schedule(seq: u64, purpose: TimerPurpose, delay_ms: u64) -> Effect {
        Effect::Schedule {
            token: TimerToken { seq, purpose },
            delay_ms,
        }
    }
}
