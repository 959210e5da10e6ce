//! Dashboard overview stat cards.
//!
//! The four headline metrics are fixed figures; they are not computed from
//! demands or packages.

use serde::Serialize;

use crate::i18n::Translator;

/// Delay between the entrance animations of consecutive cards.
pub const STAGGER_MS: u32 = 100;

/// Direction of a metric compared with the previous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
        }
    }

    /// Arrow shown next to the change.
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
        }
    }
}

/// One headline metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    /// Translation key of the label
    pub label_key: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
    /// Icon name in the static icon set
    pub icon: &'static str,
}

/// The overview metrics, in display order.
pub const STAT_CARDS: [StatCard; 4] = [
    StatCard {
        label_key: "stats.revenue",
        value: "$124,500",
        change: "+12.5%",
        trend: Trend::Up,
        icon: "dollar",
    },
    StatCard {
        label_key: "stats.bookings",
        value: "1,234",
        change: "+8.2%",
        trend: Trend::Up,
        icon: "calendar",
    },
    StatCard {
        label_key: "stats.active_clients",
        value: "856",
        change: "+5.1%",
        trend: Trend::Up,
        icon: "users",
    },
    StatCard {
        label_key: "stats.avg_rating",
        value: "4.8",
        change: "-0.2%",
        trend: Trend::Down,
        icon: "star",
    },
];

/// A stat card ready for display in one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCardView {
    pub label: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
    pub icon: String,
    /// Entrance animation delay
    pub delay_ms: u32,
}

impl StatCardView {
    pub fn trend_arrow(&self) -> &'static str {
        self.trend.arrow()
    }

    pub fn trend_class(&self) -> &'static str {
        self.trend.as_str()
    }
}

/// Build the stat cards for a locale.
pub fn stat_cards(translator: &Translator) -> Vec<StatCardView> {
    STAT_CARDS
        .iter()
        .zip(0u32..)
        .map(|(card, index)| StatCardView {
            label: translator.t(card.label_key).to_string(),
            value: card.value.to_string(),
            change: card.change.to_string(),
            trend: card.trend,
            icon: card.icon.to_string(),
            delay_ms: index * STAGGER_MS,
        })
        .collect()
}
