use crate::core::coverage::{CoverageWidget, RegionFallback};
use crate::core::effects::{DomPatch, Effect, TimerPurpose, TimerToken};
use crate::core::forms::{self, FormDraft};
use crate::core::i18n;
use crate::core::locale::{self, PageModel};
use crate::core::typing::TypingState;
use crate::domain::model::{FeedbackMessage, FormKind, FormSubmission, Locale, RelayResponse};
use crate::domain::ports::{Clock, SystemClock};

pub const FADE_SWITCH_MS: u64 = 160;
pub const FADE_CLEANUP_MS: u64 = 260;
pub const FEEDBACK_TTL_MS: u64 = 6000;

/// Animated locale switch. A toggle received mid-transition supersedes
/// the in-flight one: the sequence counter bumps, stale timers die, and
/// a fresh fade starts toward the new target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Idle,
    FadingOut { target: Locale },
    FadingIn,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct FormUiState {
    in_flight: bool,
    feedback_seq: u64,
}

/// Everything the controller can be told.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Click or Enter/Space on the language toggle control.
    ToggleLocale,
    /// Direct, non-animated locale change.
    SetLocale(Locale),
    TimerFired(TimerToken),
    SubmitRequested(FormDraft),
    SubmissionSettled { form: FormKind, outcome: SubmitOutcome },
    FeedbackClosed(FormKind),
    ServiceChanged { value: String },
    DoctorPicked { name: String },
    SpecialistPicked,
    NursingPicked,
    RegionEntered { id: String, fallback: Option<RegionFallback> },
    RegionLeft,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The relay answered with a parseable response, success or not.
    Response(RelayResponse),
    /// The request never produced a response.
    NetworkError,
}

/// Headless presentation controller. Owns all transient UI state and
/// turns events into DOM patches plus timer/dispatch effects; it never
/// touches a document itself.
pub struct PresentationController<C: Clock = SystemClock> {
    page: PageModel,
    coverage: Option<CoverageWidget>,
    clock: C,
    locale: Locale,
    transition: TransitionPhase,
    typing: TypingState,
    generation: u64,
    reservation_ui: FormUiState,
    interest_ui: FormUiState,
}

impl<C: Clock> PresentationController<C> {
    pub fn new(page: PageModel, clock: C) -> Self {
        Self {
            page,
            coverage: None,
            clock,
            locale: Locale::Arabic,
            transition: TransitionPhase::Idle,
            typing: TypingState::Idle,
            generation: 0,
            reservation_ui: FormUiState::default(),
            interest_ui: FormUiState::default(),
        }
    }

    pub fn with_coverage(mut self, widget: CoverageWidget) -> Self {
        self.coverage = Some(widget);
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn transition(&self) -> TransitionPhase {
        self.transition
    }

    pub fn is_in_flight(&self, form: FormKind) -> bool {
        self.form_ui(form).in_flight
    }

    /// First render: default locale (Arabic) plus the initial hero run.
    pub fn initialize(&mut self) -> Vec<Effect> {
        self.generation += 1;
        self.apply_locale(Locale::Arabic)
    }

    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::ToggleLocale => self.begin_transition(self.locale.other()),
            Event::SetLocale(target) => {
                self.generation += 1;
                self.transition = TransitionPhase::Idle;
                self.apply_locale(target)
            }
            Event::TimerFired(token) => self.timer_fired(token),
            Event::SubmitRequested(draft) => self.submit_requested(draft),
            Event::SubmissionSettled { form, outcome } => self.submission_settled(form, outcome),
            Event::FeedbackClosed(form) => {
                self.form_ui_mut(form).feedback_seq += 1;
                vec![Effect::dom(DomPatch::ClearFeedback { form })]
            }
            Event::ServiceChanged { value } => vec![Effect::dom(DomPatch::SetDoctorPickerVisible {
                visible: value == "consultation",
            })],
            Event::DoctorPicked { name } => {
                let message = FeedbackMessage::success(
                    i18n::doctor_selected_heading(self.locale),
                    i18n::doctor_selected_body(self.locale, &name),
                );
                self.booking_prefill("consultation", Some(name), message)
            }
            Event::SpecialistPicked => {
                let name = i18n::specialist_name(self.locale).to_string();
                let message = FeedbackMessage::success(
                    i18n::consultant_selected_heading(self.locale),
                    i18n::doctor_selected_body(self.locale, &name),
                );
                self.booking_prefill("consultation", Some(name), message)
            }
            Event::NursingPicked => {
                let message = FeedbackMessage::success(
                    i18n::service_selected_heading(self.locale),
                    i18n::nursing_selected_body(self.locale),
                );
                self.booking_prefill("nursing", None, message)
            }
            Event::RegionEntered { id, fallback } => match &self.coverage {
                Some(widget) => widget
                    .show_region(&id, fallback.as_ref())
                    .into_iter()
                    .map(Effect::dom)
                    .collect(),
                None => Vec::new(),
            },
            Event::RegionLeft => match &self.coverage {
                Some(widget) => widget.reset().into_iter().map(Effect::dom).collect(),
                None => Vec::new(),
            },
        }
    }

    fn begin_transition(&mut self, target: Locale) -> Vec<Effect> {
        self.generation += 1;
        self.transition = TransitionPhase::FadingOut { target };
        vec![
            Effect::dom(DomPatch::SetFade { on: true }),
            Effect::dom(DomPatch::MarkFadeTargets),
            Effect::schedule(self.generation, TimerPurpose::FadeSwitch, FADE_SWITCH_MS),
        ]
    }

    fn timer_fired(&mut self, token: TimerToken) -> Vec<Effect> {
        match token.purpose {
            TimerPurpose::FadeSwitch => {
                if token.seq != self.generation {
                    return Vec::new();
                }
                let TransitionPhase::FadingOut { target } = self.transition else {
                    return Vec::new();
                };
                let mut effects = self.apply_locale(target);
                effects.push(Effect::dom(DomPatch::SetFade { on: false }));
                self.transition = TransitionPhase::FadingIn;
                effects.push(Effect::schedule(
                    self.generation,
                    TimerPurpose::FadeCleanup,
                    FADE_CLEANUP_MS,
                ));
                effects
            }
            TimerPurpose::FadeCleanup => {
                if token.seq != self.generation
                    || self.transition != TransitionPhase::FadingIn
                {
                    return Vec::new();
                }
                self.transition = TransitionPhase::Idle;
                vec![Effect::dom(DomPatch::ClearFadeHelpers)]
            }
            TimerPurpose::TypeTick => {
                if token.seq != self.generation {
                    return Vec::new();
                }
                self.typing.step(self.generation)
            }
            TimerPurpose::FeedbackExpiry(form) => {
                if token.seq != self.form_ui(form).feedback_seq {
                    return Vec::new();
                }
                vec![Effect::dom(DomPatch::ClearFeedback { form })]
            }
        }
    }

    /// Locale projection plus hero restart, sharing the current sequence
    /// number so any previously pending animation tick is orphaned.
    fn apply_locale(&mut self, target: Locale) -> Vec<Effect> {
        self.locale = target;
        let mut effects: Vec<Effect> = locale::set_locale(&self.page, target)
            .into_iter()
            .map(Effect::dom)
            .collect();
        let (typing, typing_effects) = TypingState::start(&self.page, target, self.generation);
        self.typing = typing;
        effects.extend(typing_effects);
        effects
    }

    fn submit_requested(&mut self, draft: FormDraft) -> Vec<Effect> {
        let form = draft.kind();
        if self.form_ui(form).in_flight {
            // one request per form at a time
            return Vec::new();
        }

        let validated = match &draft {
            FormDraft::Reservation(d) => {
                forms::validate_reservation(d, self.locale, self.clock.today())
                    .map(FormSubmission::Reservation)
            }
            FormDraft::Interest(d) => {
                forms::validate_interest(d, self.locale).map(FormSubmission::Interest)
            }
        };

        match validated {
            Err(err) => {
                let message = FeedbackMessage::error(
                    i18n::invalid_input_heading(self.locale),
                    err.message,
                );
                let mut effects = self.show_feedback(form, message);
                effects.push(Effect::dom(DomPatch::FocusField {
                    field: err.field.to_string(),
                }));
                effects
            }
            Ok(submission) => {
                self.form_ui_mut(form).in_flight = true;
                vec![
                    Effect::dom(DomPatch::SetSubmitLoading { form, on: true }),
                    Effect::Dispatch { submission },
                ]
            }
        }
    }

    fn submission_settled(&mut self, form: FormKind, outcome: SubmitOutcome) -> Vec<Effect> {
        // guard and loading state clear for every outcome
        self.form_ui_mut(form).in_flight = false;
        let mut effects = vec![Effect::dom(DomPatch::SetSubmitLoading { form, on: false })];

        match outcome {
            SubmitOutcome::Response(response) if response.success => {
                let message = FeedbackMessage::success(
                    i18n::submission_received_heading(self.locale),
                    i18n::submission_received_body(self.locale, form),
                );
                effects.extend(self.show_feedback(form, message));
                effects.push(Effect::dom(DomPatch::ResetForm { form }));
            }
            SubmitOutcome::Response(response) => {
                let body = response
                    .message
                    .unwrap_or_else(|| i18n::submission_failed_body(self.locale).to_string());
                let message =
                    FeedbackMessage::error(i18n::submission_failed_heading(self.locale), body);
                effects.extend(self.show_feedback(form, message));
            }
            SubmitOutcome::NetworkError => {
                let message = FeedbackMessage::error(
                    i18n::network_error_heading(self.locale),
                    i18n::network_error_body(self.locale),
                );
                effects.extend(self.show_feedback(form, message));
            }
        }
        effects
    }

    fn show_feedback(&mut self, form: FormKind, message: FeedbackMessage) -> Vec<Effect> {
        let ui = self.form_ui_mut(form);
        ui.feedback_seq += 1;
        let seq = ui.feedback_seq;
        vec![
            Effect::dom(DomPatch::ShowFeedback { form, message }),
            Effect::schedule(seq, TimerPurpose::FeedbackExpiry(form), FEEDBACK_TTL_MS),
        ]
    }

    fn booking_prefill(
        &mut self,
        service: &str,
        doctor: Option<String>,
        message: FeedbackMessage,
    ) -> Vec<Effect> {
        let mut effects = vec![
            Effect::dom(DomPatch::ScrollTo {
                id: "contact".to_string(),
            }),
            Effect::dom(DomPatch::SetFieldValue {
                field: "interest".to_string(),
                value: service.to_string(),
            }),
            Effect::dom(DomPatch::SetDoctorPickerVisible {
                visible: service == "consultation",
            }),
        ];
        if let Some(doctor) = doctor {
            effects.push(Effect::dom(DomPatch::SetFieldValue {
                field: "doctor".to_string(),
                value: doctor,
            }));
        }
        effects.extend(self.show_feedback(FormKind::Reservation, message));
        effects
    }

    fn form_ui(&self, form: FormKind) -> &FormUiState {
        match form {
            FormKind::Reservation => &self.reservation_ui,
            FormKind::Interest => &self.interest_ui,
        }
    }

    fn form_ui_mut(&mut self, form: FormKind) -> &mut FormUiState {
        match form {
            FormKind::Reservation => &mut self.reservation_ui,
            FormKind::Interest => &mut self.interest_ui,
        }
    }
}
