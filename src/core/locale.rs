use crate::core::effects::DomPatch;
use crate::domain::model::Locale;

/// Static description of the bilingual page the controller drives:
/// which content pairs exist and what the hero section says. Captured
/// once at startup so the controller never has to read the document.
#[derive(Debug, Clone, Default)]
pub struct PageModel {
    /// Base identifiers of bilingual pairs; `x` stands for `x-ar`/`x-en`.
    pub bilingual_ids: Vec<String>,
    pub hero: Option<HeroContent>,
    pub reduced_motion: bool,
}

#[derive(Debug, Clone)]
pub struct HeroContent {
    pub title_ar: String,
    pub title_en: String,
    pub desc_ar: String,
    pub desc_en: String,
}

impl HeroContent {
    pub fn title(&self, locale: Locale) -> &str {
        match locale {
            Locale::Arabic => &self.title_ar,
            Locale::English => &self.title_en,
        }
    }

    pub fn desc(&self, locale: Locale) -> &str {
        match locale {
            Locale::Arabic => &self.desc_ar,
            Locale::English => &self.desc_en,
        }
    }
}

pub fn hero_title_id(locale: Locale) -> String {
    format!("hero-title-{}", locale.tag())
}

pub fn hero_desc_id(locale: Locale) -> String {
    format!("hero-desc-{}", locale.tag())
}

/// Projects a locale onto the page: document attributes, one visible half
/// per bilingual pair, toggle control labelled with the *target* locale.
/// Idempotent and total over the registered pairs.
pub fn set_locale(page: &PageModel, locale: Locale) -> Vec<DomPatch> {
    let is_ar = locale.is_arabic();
    let mut patches = vec![DomPatch::SetDocumentLocale {
        lang: locale.tag(),
        dir: locale.dir(),
    }];

    for id in &page.bilingual_ids {
        patches.push(DomPatch::SetVisible {
            id: format!("{id}-ar"),
            visible: is_ar,
        });
        patches.push(DomPatch::SetVisible {
            id: format!("{id}-en"),
            visible: !is_ar,
        });
    }

    patches.push(toggle_control(locale));
    patches
}

/// The toggle always names the language it would switch to.
pub fn toggle_control(active: Locale) -> DomPatch {
    match active {
        Locale::Arabic => DomPatch::SetToggleControl {
            label: "English",
            title: "Show site in English",
            aria_label: "Switch to English",
        },
        Locale::English => DomPatch::SetToggleControl {
            label: "العربية",
            title: "عرض الموقع بالعربية",
            aria_label: "التبديل إلى العربية",
        },
    }
}
