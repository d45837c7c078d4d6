use crate::core::effects::DomPatch;
use crate::core::i18n;
use crate::domain::model::Locale;

// Well-known widget element ids.
const STATE_NAME_AR: &str = "state-name-ar";
const STATE_NAME_EN: &str = "state-name-en";
const STATE_STATUS_AR: &str = "state-status-ar";
const STATE_STATUS_EN: &str = "state-status-en";
const FACILITY_COUNT: &str = "facility-count";
const PROFESSIONAL_COUNT: &str = "professional-count";
const LAST_TRAINING: &str = "last-training";
const UPCOMING_EVENTS: &str = "upcoming-events";
const COMING_SOON_AR: &str = "coming-soon-ar";
const COMING_SOON_EN: &str = "coming-soon-en";
const STATE_DETAILS: &str = "state-details";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionStats {
    pub name_ar: &'static str,
    pub name_en: &'static str,
    pub covered: bool,
    pub facilities: u32,
    pub professionals: u32,
    pub last_training: &'static str,
    pub events: u32,
}

// Per-region coverage data keyed by the map's region ids.
const REGIONS: &[(&str, RegionStats)] = &[
    ("SD-DC", RegionStats { name_ar: "وسط دارفور", name_en: "Central Darfur", covered: true, facilities: 4, professionals: 68, last_training: "Mar 2024", events: 1 }),
    ("SD-DN", RegionStats { name_ar: "شمال دارفور", name_en: "North Darfur", covered: true, facilities: 6, professionals: 120, last_training: "Feb 2024", events: 3 }),
    ("SD-DW", RegionStats { name_ar: "غرب دارفور", name_en: "West Darfur", covered: true, facilities: 5, professionals: 90, last_training: "Jan 2024", events: 2 }),
    ("SD-KH", RegionStats { name_ar: "الخرطوم", name_en: "Khartoum", covered: true, facilities: 45, professionals: 980, last_training: "Dec 2023", events: 5 }),
    ("SD-NO", RegionStats { name_ar: "الشمالية", name_en: "Northern", covered: true, facilities: 20, professionals: 410, last_training: "Sep 2023", events: 4 }),
    ("SD-GD", RegionStats { name_ar: "القضارف", name_en: "Al Qaḑārif", covered: true, facilities: 8, professionals: 150, last_training: "Aug 2023", events: 2 }),
];

pub fn region_stats(id: &str) -> Option<&'static RegionStats> {
    REGIONS.iter().find(|(rid, _)| *rid == id).map(|(_, s)| s)
}

/// Attributes carried on a map region element, used when the region has
/// no entry in the data table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionFallback {
    pub name_ar: Option<String>,
    pub name_en: Option<String>,
    pub covered: bool,
}

/// Widget default texts captured from the document at startup, restored
/// when the pointer leaves the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetDefaults {
    pub name_ar: String,
    pub name_en: String,
    pub status_ar: String,
    pub status_en: String,
    pub facilities: String,
    pub professionals: String,
    pub last_training: String,
    pub events: String,
}

#[derive(Debug, Clone)]
pub struct CoverageWidget {
    defaults: WidgetDefaults,
}

impl CoverageWidget {
    pub fn new(defaults: WidgetDefaults) -> Self {
        Self { defaults }
    }

    pub fn show_region(&self, id: &str, fallback: Option<&RegionFallback>) -> Vec<DomPatch> {
        let stats = region_stats(id);

        let (name_ar, name_en, covered) = match (stats, fallback) {
            (Some(s), _) => (s.name_ar.to_string(), s.name_en.to_string(), s.covered),
            (None, Some(f)) => {
                let en = f.name_en.clone().unwrap_or_else(|| self.defaults.name_en.clone());
                let ar = f.name_ar.clone().unwrap_or_else(|| en.clone());
                (ar, en, f.covered)
            }
            (None, None) => (
                self.defaults.name_ar.clone(),
                self.defaults.name_en.clone(),
                false,
            ),
        };

        let mut patches = vec![
            set_text(STATE_NAME_AR, name_ar),
            set_text(STATE_NAME_EN, name_en),
            set_text(
                STATE_STATUS_AR,
                if covered {
                    i18n::region_covered(Locale::Arabic)
                } else {
                    i18n::region_coming_soon(Locale::Arabic)
                },
            ),
            set_text(
                STATE_STATUS_EN,
                if covered {
                    i18n::region_covered(Locale::English)
                } else {
                    i18n::region_coming_soon(Locale::English)
                },
            ),
            DomPatch::SetCoveredBadge { covered },
        ];

        if covered {
            patches.push(visible(COMING_SOON_AR, false));
            patches.push(visible(COMING_SOON_EN, false));
            patches.push(visible(STATE_DETAILS, true));
            if let Some(s) = stats {
                patches.push(set_text(FACILITY_COUNT, s.facilities.to_string()));
                patches.push(set_text(PROFESSIONAL_COUNT, s.professionals.to_string()));
                patches.push(set_text(LAST_TRAINING, s.last_training));
                patches.push(set_text(UPCOMING_EVENTS, s.events.to_string()));
            } else {
                patches.push(set_text(FACILITY_COUNT, self.defaults.facilities.clone()));
                patches.push(set_text(PROFESSIONAL_COUNT, self.defaults.professionals.clone()));
                patches.push(set_text(LAST_TRAINING, self.defaults.last_training.clone()));
                patches.push(set_text(UPCOMING_EVENTS, self.defaults.events.clone()));
            }
        } else {
            // language toggle controls which coming-soon half is visible;
            // both leave the hidden state here
            patches.push(visible(COMING_SOON_AR, true));
            patches.push(visible(COMING_SOON_EN, true));
            patches.push(visible(STATE_DETAILS, false));
        }

        patches
    }

    pub fn reset(&self) -> Vec<DomPatch> {
        vec![
            set_text(STATE_NAME_AR, self.defaults.name_ar.clone()),
            set_text(STATE_NAME_EN, self.defaults.name_en.clone()),
            set_text(STATE_STATUS_AR, self.defaults.status_ar.clone()),
            set_text(STATE_STATUS_EN, self.defaults.status_en.clone()),
            set_text(FACILITY_COUNT, self.defaults.facilities.clone()),
            set_text(PROFESSIONAL_COUNT, self.defaults.professionals.clone()),
            set_text(LAST_TRAINING, self.defaults.last_training.clone()),
            set_text(UPCOMING_EVENTS, self.defaults.events.clone()),
            DomPatch::SetCoveredBadge { covered: true },
        ]
    }
}

fn set_text(id: &str, text: impl Into<String>) -> DomPatch {
    DomPatch::SetText {
        id: id.to_string(),
        text: text.into(),
    }
}

fn visible(id: &str, visible: bool) -> DomPatch {
    DomPatch::SetVisible {
        id: id.to_string(),
        visible,
    }
}
