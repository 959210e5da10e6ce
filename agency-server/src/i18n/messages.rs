//! Static translation tables.
//!
//! Lookup falls back to English when a locale lacks a key, then to the key
//! itself so a missing entry shows up on the page instead of failing.

use super::Locale;

type Table = &'static [(&'static str, &'static str)];

const EN: Table = &[
    ("app.name", "Atlas Voyages"),
    ("nav.home", "Home"),
    ("nav.dashboard", "Dashboard"),
    ("nav.language", "Language"),
    ("hero.title", "Journeys crafted around you"),
    (
        "hero.subtitle",
        "Tell us where you want to go. Our agents build the trip, book the hotels and handle the rest.",
    ),
    ("cta.book_now", "Book your trip"),
    ("dashboard.title", "Overview"),
    ("dashboard.subtitle", "How the agency is doing this month"),
    ("stats.revenue", "Total revenue"),
    ("stats.bookings", "Bookings"),
    ("stats.active_clients", "Active clients"),
    ("stats.avg_rating", "Average rating"),
    ("stats.vs_last_month", "vs last month"),
];

const AR: Table = &[
    ("app.name", "أطلس للأسفار"),
    ("nav.home", "الرئيسية"),
    ("nav.dashboard", "لوحة التحكم"),
    ("nav.language", "اللغة"),
    ("hero.title", "رحلات مصممة خصيصا لك"),
    (
        "hero.subtitle",
        "أخبرنا إلى أين تريد الذهاب. وكلاؤنا يخططون الرحلة ويحجزون الفنادق ويتكفلون بالباقي.",
    ),
    ("cta.book_now", "احجز رحلتك"),
    ("dashboard.title", "نظرة عامة"),
    ("dashboard.subtitle", "أداء الوكالة هذا الشهر"),
    ("stats.revenue", "إجمالي الإيرادات"),
    ("stats.bookings", "الحجوزات"),
    ("stats.active_clients", "العملاء النشطون"),
    ("stats.avg_rating", "متوسط التقييم"),
    ("stats.vs_last_month", "مقارنة بالشهر الماضي"),
];

const FR: Table = &[
    ("app.name", "Atlas Voyages"),
    ("nav.home", "Accueil"),
    ("nav.dashboard", "Tableau de bord"),
    ("nav.language", "Langue"),
    ("hero.title", "Des voyages pensés pour vous"),
    (
        "hero.subtitle",
        "Dites-nous où vous voulez aller. Nos agents construisent le voyage, réservent les hôtels et s'occupent du reste.",
    ),
    ("cta.book_now", "Réservez votre voyage"),
    ("dashboard.title", "Vue d'ensemble"),
    ("dashboard.subtitle", "L'activité de l'agence ce mois-ci"),
    ("stats.revenue", "Chiffre d'affaires"),
    ("stats.bookings", "Réservations"),
    ("stats.active_clients", "Clients actifs"),
    ("stats.avg_rating", "Note moyenne"),
    ("stats.vs_last_month", "par rapport au mois dernier"),
];

const DE: Table = &[
    ("app.name", "Atlas Voyages"),
    ("nav.home", "Startseite"),
    ("nav.dashboard", "Übersicht"),
    ("nav.language", "Sprache"),
    ("hero.title", "Reisen, die zu Ihnen passen"),
    (
        "hero.subtitle",
        "Sagen Sie uns, wohin Sie möchten. Unsere Agenten planen die Reise, buchen die Hotels und erledigen den Rest.",
    ),
    ("cta.book_now", "Reise buchen"),
    ("dashboard.title", "Übersicht"),
    ("dashboard.subtitle", "So läuft die Agentur diesen Monat"),
    ("stats.revenue", "Gesamtumsatz"),
    ("stats.bookings", "Buchungen"),
    ("stats.active_clients", "Aktive Kunden"),
    ("stats.avg_rating", "Durchschnittsbewertung"),
    ("stats.vs_last_month", "im Vergleich zum Vormonat"),
];

fn table(locale: Locale) -> Table {
    match locale {
        Locale::En => EN,
        Locale::Ar => AR,
        Locale::Fr => FR,
        Locale::De => DE,
    }
}

fn find(table: Table, key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Look up `key` for `locale`.
pub fn lookup<'a>(locale: Locale, key: &'a str) -> &'a str {
    find(table(locale), key)
        .or_else(|| find(EN, key))
        .unwrap_or(key)
}
