//! Closed enumerations for priorities, durations and output locales.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ActionNoteError;

/// Type-safe enumeration of action item priorities.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Must be handled first
    High,

    /// Regular follow-up work
    Medium,

    /// Nice to have
    Low,
}

impl FromStr for Priority {
    type Err = ActionNoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" | "높음" => Ok(Priority::High),
            "medium" | "중간" => Ok(Priority::Medium),
            "low" | "낮음" => Ok(Priority::Low),
            _ => Err(ActionNoteError::invalid_input("priority")
                .with_reason(format!("Invalid priority: {s}. Must be 'high', 'medium', or 'low'"))),
        }
    }
}

impl Priority {
    /// Stable machine-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Human-facing label in the given locale.
    ///
    /// ```rust
    /// use actionnote_core::models::{Locale, Priority};
    ///
    /// assert_eq!(Priority::High.label(Locale::En), "High");
    /// assert_eq!(Priority::Medium.label(Locale::Ko), "중간");
    /// ```
    pub fn label(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, Priority::High) => "High",
            (Locale::En, Priority::Medium) => "Medium",
            (Locale::En, Priority::Low) => "Low",
            (Locale::Ko, Priority::High) => "높음",
            (Locale::Ko, Priority::Medium) => "중간",
            (Locale::Ko, Priority::Low) => "낮음",
        }
    }
}

/// Expected effort for generated action items.
///
/// Only three presets exist; any other minute value is unrepresentable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum DurationPreset {
    /// 30 minutes
    Light,

    /// 60 minutes
    #[default]
    Standard,

    /// 90 minutes
    Deep,
}

impl DurationPreset {
    /// All presets in ascending order.
    pub const ALL: [DurationPreset; 3] = [
        DurationPreset::Light,
        DurationPreset::Standard,
        DurationPreset::Deep,
    ];

    /// Length of the preset in minutes.
    pub fn minutes(&self) -> u32 {
        match self {
            DurationPreset::Light => 30,
            DurationPreset::Standard => 60,
            DurationPreset::Deep => 90,
        }
    }
}

impl TryFrom<u32> for DurationPreset {
    type Error = ActionNoteError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        DurationPreset::ALL
            .into_iter()
            .find(|d| d.minutes() == minutes)
            .ok_or_else(|| {
                ActionNoteError::invalid_input("duration_minutes")
                    .with_reason(format!("Unsupported duration: {minutes}. Must be 30, 60, or 90"))
            })
    }
}

impl From<DurationPreset> for u32 {
    fn from(d: DurationPreset) -> Self {
        d.minutes()
    }
}

/// Language of the generated copy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    #[default]
    En,

    /// Korean
    Ko,
}

impl FromStr for Locale {
    type Err = ActionNoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ko" | "korean" => Ok(Locale::Ko),
            _ => Err(ActionNoteError::invalid_input("locale")
                .with_reason(format!("Invalid locale: {s}. Must be 'en' or 'ko'"))),
        }
    }
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ko => "ko",
        }
    }
}
