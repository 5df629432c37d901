//! Title screening and seniority classification.
//!
//! The vocabularies are fixed, not learned; matching is case-insensitive
//! substring containment. Senior signals always win, so a "Senior Junior
//! Developer" posting classifies as senior and gets filtered out upstream.

use rand::Rng;

use crate::jobs::JobLevel;

/// Technical-role keywords a title must contain to be kept at all.
pub const TARGET_KEYWORDS: &[&str] = &[
    "developer",
    "engineer",
    "data engineer",
    "devops",
    "devsecops",
    "cloud engineer",
    "software engineer",
    "frontend",
    "backend",
    "fullstack",
    "programmer",
];

const JUNIOR_SIGNALS: &[&str] = &[
    "entry level",
    "entry-level",
    "junior",
    "jr.",
    "jr ",
    "fresh grad",
    "new grad",
    "0-1 year",
    "0-2 years",
    "1-2 years",
    "1-3 years",
];

const MID_SIGNALS: &[&str] = &[
    "mid level",
    "mid-level",
    "intermediate",
    "2-4 years",
    "2-5 years",
    "3-5 years",
];

const SENIOR_SIGNALS: &[&str] = &[
    "senior",
    "sr.",
    "sr ",
    "lead",
    "principal",
    "staff",
    "manager",
    "head of",
    "director",
    "5+ years",
    "6+ years",
];

/// How to resolve the entry-vs-junior ambiguity when a junior signal matches.
///
/// The upstream product behavior is a literal coin flip between `Entry` and
/// `Junior`; `Random` preserves that. `Fixed` pins the outcome so tests and
/// callers that want determinism can opt out.
#[derive(Debug, Clone, Copy)]
pub enum TieBreak {
    Random,
    Fixed(JobLevel),
}

impl TieBreak {
    fn resolve(self) -> JobLevel {
        match self {
            TieBreak::Random => {
                if rand::rng().random_bool(0.5) {
                    JobLevel::Entry
                } else {
                    JobLevel::Junior
                }
            }
            TieBreak::Fixed(level) => level,
        }
    }
}

/// Stateless classification and target-title filtering, shared by every
/// adapter. Cheap to clone; adapters hold their own copy.
#[derive(Debug, Clone, Copy)]
pub struct Screener {
    tie_break: TieBreak,
}

impl Default for Screener {
    fn default() -> Self {
        Self::new(TieBreak::Random)
    }
}

impl Screener {
    #[must_use]
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    /// Returns `true` if the title mentions any target-role keyword.
    #[must_use]
    pub fn is_target_title(&self, title: &str) -> bool {
        let lower = title.to_lowercase();
        TARGET_KEYWORDS.iter().any(|k| lower.contains(k))
    }

    /// Assigns a seniority level from the concatenated title + description.
    ///
    /// Precedence: senior signals, then junior signals (tie-broken between
    /// `Entry` and `Junior`), then mid signals, then `Unknown`.
    #[must_use]
    pub fn classify(&self, title: &str, description: Option<&str>) -> JobLevel {
        let text = format!("{title} {}", description.unwrap_or_default()).to_lowercase();

        if SENIOR_SIGNALS.iter().any(|k| text.contains(k)) {
            return JobLevel::Senior;
        }
        if JUNIOR_SIGNALS.iter().any(|k| text.contains(k)) {
            return self.tie_break.resolve();
        }
        if MID_SIGNALS.iter().any(|k| text.contains(k)) {
            return JobLevel::Mid;
        }
        JobLevel::Unknown
    }
}

#[cfg(test)]
#[path = "screen_test.rs"]
mod tests;
