//! Askama templates for the web frontend.

use askama::Template;

use crate::dashboard::{StatCardView, stat_cards};
use crate::i18n::{Locale, Translator};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Landing page: hero, language switcher and floating call-to-action.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub page: PageView,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub cta: FloatingCtaView,
}

impl IndexTemplate {
    pub fn new(translator: &Translator, cta_target: &str) -> Self {
        Self {
            page: PageView::new(translator, "/"),
            hero_title: translator.t("hero.title").to_string(),
            hero_subtitle: translator.t("hero.subtitle").to_string(),
            cta: FloatingCtaView::new(translator, cta_target),
        }
    }
}

/// Dashboard overview with the stat cards.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub page: PageView,
    pub title: String,
    pub subtitle: String,
    pub vs_last_month: String,
    pub cards: Vec<StatCardView>,
}

impl DashboardTemplate {
    pub fn new(translator: &Translator) -> Self {
        Self {
            page: PageView::new(translator, "/dashboard"),
            title: translator.t("dashboard.title").to_string(),
            subtitle: translator.t("dashboard.subtitle").to_string(),
            vs_last_month: translator.t("stats.vs_last_month").to_string(),
            cards: stat_cards(translator),
        }
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Parts shared by every page: document direction, navigation, switcher.
#[derive(Debug, Clone)]
pub struct PageView {
    pub lang: String,
    pub dir: String,
    pub app_name: String,
    pub nav_home: String,
    pub nav_dashboard: String,
    pub switcher: LanguageSwitcherView,
}

impl PageView {
    /// `path` is where the language switcher returns to after a change.
    pub fn new(translator: &Translator, path: &str) -> Self {
        Self {
            lang: translator.lang().to_string(),
            dir: translator.dir().to_string(),
            app_name: translator.t("app.name").to_string(),
            nav_home: translator.t("nav.home").to_string(),
            nav_dashboard: translator.t("nav.dashboard").to_string(),
            switcher: LanguageSwitcherView::new(translator, path),
        }
    }
}

/// A locale entry of the language switcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleOption {
    pub code: String,
    pub native_name: String,
    pub flag: String,
    pub is_active: bool,
}

impl LocaleOption {
    fn new(locale: Locale, active: Locale) -> Self {
        Self {
            code: locale.code().to_string(),
            native_name: locale.native_name().to_string(),
            flag: locale.flag().to_string(),
            is_active: locale == active,
        }
    }
}

/// Language switcher: the active locale and the fixed list to pick from.
#[derive(Debug, Clone)]
pub struct LanguageSwitcherView {
    pub label: String,
    pub active: LocaleOption,
    pub options: Vec<LocaleOption>,
    pub return_to: String,
}

impl LanguageSwitcherView {
    pub fn new(translator: &Translator, return_to: &str) -> Self {
        let active = translator.locale();
        Self {
            label: translator.t("nav.language").to_string(),
            active: LocaleOption::new(active, active),
            options: Locale::ALL
                .iter()
                .map(|locale| LocaleOption::new(*locale, active))
                .collect(),
            return_to: return_to.to_string(),
        }
    }
}

/// Fixed-position call-to-action button.
///
/// Sits on the trailing edge of the page: right in left-to-right locales,
/// left in right-to-left ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatingCtaView {
    pub label: String,
    pub target: String,
    pub side: String,
}

impl FloatingCtaView {
    pub fn new(translator: &Translator, target: &str) -> Self {
        Self {
            label: translator.t("cta.book_now").to_string(),
            target: target.to_string(),
            side: if translator.is_rtl() { "left" } else { "right" }.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switcher_marks_only_active_locale() {
        let view = LanguageSwitcherView::new(&Translator::new(Locale::Fr), "/");
        assert_eq!(view.active.code, "fr");
        assert_eq!(view.active.native_name, "Français");
        assert_eq!(view.options.len(), 4);

        let active: Vec<&str> = view
            .options
            .iter()
            .filter(|o| o.is_active)
            .map(|o| o.code.as_str())
            .collect();
        assert_eq!(active, vec!["fr"]);
    }

    #[test]
    fn switcher_list_is_static() {
        let en = LanguageSwitcherView::new(&Translator::new(Locale::En), "/");
        let de = LanguageSwitcherView::new(&Translator::new(Locale::De), "/");
        let codes = |v: &LanguageSwitcherView| -> Vec<String> {
            v.options.iter().map(|o| o.code.clone()).collect()
        };
        assert_eq!(codes(&en), vec!["en", "ar", "fr", "de"]);
        assert_eq!(codes(&en), codes(&de));
        assert_eq!(de.active.flag, "/static/flags/de.svg");
    }

    #[test]
    fn cta_follows_direction() {
        let ltr = FloatingCtaView::new(&Translator::new(Locale::En), "/dashboard");
        assert_eq!(ltr.side, "right");
        assert_eq!(ltr.label, "Book your trip");
        assert_eq!(ltr.target, "/dashboard");

        let rtl = FloatingCtaView::new(&Translator::new(Locale::Ar), "/dashboard");
        assert_eq!(rtl.side, "left");
        assert_eq!(rtl.label, "احجز رحلتك");
    }

    #[test]
    fn index_renders_in_locale() {
        let html = IndexTemplate::new(&Translator::new(Locale::Ar), "/dashboard")
            .render()
            .unwrap();
        assert!(html.contains(r#"dir="rtl""#));
        assert!(html.contains(r#"lang="ar""#));
        assert!(html.contains("احجز رحلتك"));
        assert!(html.contains("cta--left"));
    }

    #[test]
    fn dashboard_renders_cards() {
        let html = DashboardTemplate::new(&Translator::new(Locale::En))
            .render()
            .unwrap();
        assert!(html.contains("$124,500"));
        assert!(html.contains("Average rating"));
        assert!(html.contains("animation-delay: 300ms"));
        assert!(html.contains("trend--down"));
    }
}
