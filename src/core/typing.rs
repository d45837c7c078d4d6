use crate::core::effects::{DomPatch, Effect, TimerPurpose};
use crate::core::locale::{hero_desc_id, hero_title_id, PageModel};
use crate::domain::model::Locale;

pub const TITLE_TYPE_MS: u64 = 35;
pub const DESC_TYPE_MS: u64 = 28;
pub const CURSOR_HOLD_MS: u64 = 400;
pub const SEQUENCE_PAUSE_MS: u64 = 300;

/// Hero typing sequencer: title one character per tick, hold the cursor,
/// pause, then the description. Purely tick-driven; the controller feeds
/// it `TypeTick` timers and drops stale ones via the shared sequence
/// counter, so a restart never races a previous run.
#[derive(Debug, Clone, PartialEq)]
pub enum TypingState {
    Idle,
    Running(TypingRun),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypingRun {
    title_id: String,
    desc_id: String,
    title: Vec<char>,
    desc: Vec<char>,
    phase: TypingPhase,
    pos: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TypingPhase {
    Title,
    TitleHold,
    Pause,
    Desc,
    DescHold,
}

impl TypingState {
    /// Begins a fresh run for the visible hero pair. Reduced-motion pages
    /// render both texts instantly and schedule nothing.
    pub fn start(page: &PageModel, locale: Locale, seq: u64) -> (TypingState, Vec<Effect>) {
        let Some(hero) = &page.hero else {
            return (TypingState::Idle, Vec::new());
        };

        let title_id = hero_title_id(locale);
        let desc_id = hero_desc_id(locale);
        let title = hero.title(locale).to_string();
        let desc = hero.desc(locale).to_string();

        if page.reduced_motion {
            let effects = vec![
                Effect::dom(DomPatch::SetText {
                    id: title_id,
                    text: title,
                }),
                Effect::dom(DomPatch::SetText {
                    id: desc_id,
                    text: desc,
                }),
            ];
            return (TypingState::Idle, effects);
        }

        let effects = vec![
            Effect::dom(DomPatch::SetText {
                id: title_id.clone(),
                text: String::new(),
            }),
            Effect::dom(DomPatch::SetText {
                id: desc_id.clone(),
                text: String::new(),
            }),
            Effect::dom(DomPatch::SetTypingCursor {
                id: title_id.clone(),
                on: true,
            }),
            Effect::schedule(seq, TimerPurpose::TypeTick, TITLE_TYPE_MS),
        ];

        let run = TypingRun {
            title_id,
            desc_id,
            title: title.chars().collect(),
            desc: desc.chars().collect(),
            phase: TypingPhase::Title,
            pos: 0,
        };
        (TypingState::Running(run), effects)
    }

    /// Advances the sequence by one fired tick.
    pub fn step(&mut self, seq: u64) -> Vec<Effect> {
        let TypingState::Running(run) = self else {
            return Vec::new();
        };

        let mut effects = Vec::new();
        let mut finished = false;

        match run.phase {
            TypingPhase::Title => {
                if run.pos < run.title.len() {
                    run.pos += 1;
                    effects.push(Effect::dom(DomPatch::SetText {
                        id: run.title_id.clone(),
                        text: run.title[..run.pos].iter().collect(),
                    }));
                }
                if run.pos == run.title.len() {
                    run.phase = TypingPhase::TitleHold;
                    effects.push(Effect::schedule(seq, TimerPurpose::TypeTick, CURSOR_HOLD_MS));
                } else {
                    effects.push(Effect::schedule(seq, TimerPurpose::TypeTick, TITLE_TYPE_MS));
                }
            }
            TypingPhase::TitleHold => {
                effects.push(Effect::dom(DomPatch::SetTypingCursor {
                    id: run.title_id.clone(),
                    on: false,
                }));
                run.phase = TypingPhase::Pause;
                effects.push(Effect::schedule(seq, TimerPurpose::TypeTick, SEQUENCE_PAUSE_MS));
            }
            TypingPhase::Pause => {
                effects.push(Effect::dom(DomPatch::SetTypingCursor {
                    id: run.desc_id.clone(),
                    on: true,
                }));
                run.phase = TypingPhase::Desc;
                run.pos = 0;
                effects.push(Effect::schedule(seq, TimerPurpose::TypeTick, DESC_TYPE_MS));
            }
            TypingPhase::Desc => {
                if run.pos < run.desc.len() {
                    run.pos += 1;
                    effects.push(Effect::dom(DomPatch::SetText {
                        id: run.desc_id.clone(),
                        text: run.desc[..run.pos].iter().collect(),
                    }));
                }
                if run.pos == run.desc.len() {
                    run.phase = TypingPhase::DescHold;
                    effects.push(Effect::schedule(seq, TimerPurpose::TypeTick, CURSOR_HOLD_MS));
                } else {
                    effects.push(Effect::schedule(seq, TimerPurpose::TypeTick, DESC_TYPE_MS));
                }
            }
            TypingPhase::DescHold => {
                effects.push(Effect::dom(DomPatch::SetTypingCursor {
                    id: run.desc_id.clone(),
                    on: false,
                }));
                finished = true;
            }
        }

        if finished {
            *self = TypingState::Idle;
        }
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::locale::HeroContent;

    fn hero_page(reduced_motion: bool) -> PageModel {
        PageModel {
            bilingual_ids: vec!["hero-title".to_string(), "hero-desc".to_string()],
            hero: Some(HeroContent {
                title_ar: "مرحبا".to_string(),
                title_en: "Hi".to_string(),
                desc_ar: "وصف".to_string(),
                desc_en: "Desc".to_string(),
            }),
            reduced_motion,
        }
    }

    fn drain(state: &mut TypingState, seq: u64) -> Vec<Effect> {
        // run the whole sequence by firing every scheduled tick in order
        let mut all = Vec::new();
        let mut pending = 1usize;
        while pending > 0 && !matches!(state, TypingState::Idle) {
            let effects = state.step(seq);
            pending = effects
                .iter()
                .filter(|e| matches!(e, Effect::Schedule { .. }))
                .count();
            all.extend(effects);
        }
        all
    }

    fn texts_for(effects: &[Effect], id: &str) -> Vec<String> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Dom(DomPatch::SetText { id: pid, text }) if pid == id => {
                    Some(text.clone())
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_types_title_then_description() {
        let page = hero_page(false);
        let (mut state, start) = TypingState::start(&page, Locale::English, 1);
        assert!(matches!(state, TypingState::Running(_)));
        // both targets cleared up front
        assert_eq!(texts_for(&start, "hero-title-en"), vec![String::new()]);

        let effects = drain(&mut state, 1);
        assert_eq!(texts_for(&effects, "hero-title-en"), vec!["H", "Hi"]);
        assert_eq!(
            texts_for(&effects, "hero-desc-en"),
            vec!["D", "De", "Des", "Desc"]
        );
        assert!(matches!(state, TypingState::Idle));
    }

    #[test]
    fn test_arabic_run_targets_arabic_ids() {
        let page = hero_page(false);
        let (mut state, _) = TypingState::start(&page, Locale::Arabic, 3);
        let effects = drain(&mut state, 3);
        assert!(!texts_for(&effects, "hero-title-ar").is_empty());
        assert!(texts_for(&effects, "hero-title-en").is_empty());
    }

    #[test]
    fn test_reduced_motion_renders_instantly() {
        let page = hero_page(true);
        let (state, effects) = TypingState::start(&page, Locale::English, 1);
        assert!(matches!(state, TypingState::Idle));
        assert_eq!(texts_for(&effects, "hero-title-en"), vec!["Hi"]);
        assert_eq!(texts_for(&effects, "hero-desc-en"), vec!["Desc"]);
        assert!(!effects
            .iter()
            .any(|e| matches!(e, Effect::Schedule { .. })));
    }

    #[test]
    fn test_page_without_hero_is_a_no_op() {
        let page = PageModel::default();
        let (state, effects) = TypingState::start(&page, Locale::Arabic, 1);
        assert!(matches!(state, TypingState::Idle));
        assert!(effects.is_empty());
    }
}
