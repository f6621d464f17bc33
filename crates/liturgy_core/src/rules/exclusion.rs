//! Key-based exclusion policy.
//!
//! # Responsibility
//! - Drop deny-listed keys (mis-ranked solemnities, Easter octave weekdays,
//!   days around Ash Wednesday).
//! - Drop whole families of weekdays and numbered Sundays by key pattern.
//!
//! # Invariants
//! - Patterns are evaluated in declaration order; the first match is reported.
//! - Lenten weekdays are excluded except Fridays. The Friday carve-out is part
//!   of the contract and must not be widened.

use once_cell::sync::Lazy;
use regex::Regex;

/// Keys dropped outright.
pub const DENIED_KEYS: &[&str] = &[
    "saintCatherineOfSienaVirginAndDoctorOfTheChurch",
    "saintNorbertBishop",
    "easterMonday",
    "easterTuesday",
    "easterWednesday",
    "easterThursday",
    "easterFriday",
    "easterSaturday",
    "shroveMonday",
    "shroveTuesday",
    "thursdayAfterAshWednesday",
    "saturdayAfterAshWednesday",
];

/// One key pattern in the exclusion family.
struct KeyPattern {
    label: &'static str,
    regex: Regex,
    /// Rejects the match when this word starts anywhere before it.
    unless_preceded_by: Option<&'static str>,
}

impl KeyPattern {
    fn new(label: &'static str, pattern: &str) -> Self {
        Self {
            label,
            regex: Regex::new(pattern).expect("valid exclusion regex"),
            unless_preceded_by: None,
        }
    }

    fn unless_preceded_by(mut self, word: &'static str) -> Self {
        self.unless_preceded_by = Some(word);
        self
    }

    fn matches(&self, key: &str) -> bool {
        let Some(found) = self.regex.find(key) else {
            return false;
        };
        match self.unless_preceded_by {
            // Leftmost match is enough: a later match has a longer prefix.
            Some(word) => !key.find(word).is_some_and(|at| at < found.start()),
            None => true,
        }
    }
}

static EXCLUSION_PATTERNS: Lazy<Vec<KeyPattern>> = Lazy::new(|| {
    vec![
        KeyPattern::new("day_of_christmastide", r"dayOfChristmastide"),
        KeyPattern::new(
            "christmas_octave_day",
            r"[0-9]*(st|nd|rd|th)DayInTheOctaveOfChristmas",
        ),
        KeyPattern::new("day_before_epiphany", r"dayBeforeEpiphany"),
        KeyPattern::new(
            "ordinary_advent_easter_weekday",
            r"OfThe[0-9]*(st|nd|rd|th|Th)WeekOf(OrdinaryTime|Advent|Easter)",
        ),
        KeyPattern::new("lent_weekday", r"OfThe[0-9]*(st|nd|rd|th|Th)WeekOfLent")
            .unless_preceded_by("friday"),
        KeyPattern::new(
            "numbered_sunday",
            r"[0-9]*(st|nd|rd|th|Th)SundayOf(OrdinaryTime|Advent|Easter|Lent)",
        ),
    ]
});

/// Why a key was excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionReason {
    /// Key is in [`DENIED_KEYS`].
    DenyListed,
    /// Key matched the named pattern.
    Pattern(&'static str),
}

/// Returns the first exclusion rule matching `key`, if any.
pub fn exclusion_reason(key: &str) -> Option<ExclusionReason> {
    if DENIED_KEYS.contains(&key) {
        return Some(ExclusionReason::DenyListed);
    }
    EXCLUSION_PATTERNS
        .iter()
        .find(|pattern| pattern.matches(key))
        .map(|pattern| ExclusionReason::Pattern(pattern.label))
}

/// Returns whether `key` is excluded by the deny-list or any pattern.
pub fn is_excluded(key: &str) -> bool {
    exclusion_reason(key).is_some()
}

/// Returns the labels of every pattern matching `key`, in evaluation order.
///
/// Used to check that pattern families do not overlap.
pub fn matching_patterns(key: &str) -> Vec<&'static str> {
    EXCLUSION_PATTERNS
        .iter()
        .filter(|pattern| pattern.matches(key))
        .map(|pattern| pattern.label)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{exclusion_reason, is_excluded, matching_patterns, ExclusionReason};

    #[test]
    fn deny_list_is_exact_match() {
        assert_eq!(
            exclusion_reason("easterMonday"),
            Some(ExclusionReason::DenyListed)
        );
        assert_eq!(
            exclusion_reason("shroveTuesday"),
            Some(ExclusionReason::DenyListed)
        );
        assert!(!is_excluded("easterMondayVigil"));
        assert!(!is_excluded("fridayAfterAshWednesday"));
    }

    #[test]
    fn christmas_season_weekdays_are_excluded() {
        assert_eq!(
            exclusion_reason("5thDayInTheOctaveOfChristmas"),
            Some(ExclusionReason::Pattern("christmas_octave_day"))
        );
        assert_eq!(
            exclusion_reason("mondayOfChristmastide"),
            Some(ExclusionReason::Pattern("day_of_christmastide"))
        );
        assert_eq!(
            exclusion_reason("wednesdayBeforeEpiphany"),
            Some(ExclusionReason::Pattern("day_before_epiphany"))
        );
    }

    #[test]
    fn seasonal_weekdays_are_excluded() {
        for key in [
            "tuesdayOfThe1stWeekOfOrdinaryTime",
            "saturdayOfThe33rdWeekOfOrdinaryTime",
            "mondayOfThe2ndWeekOfAdvent",
            "thursdayOfThe5thWeekOfEaster",
        ] {
            assert_eq!(
                exclusion_reason(key),
                Some(ExclusionReason::Pattern("ordinary_advent_easter_weekday")),
                "{key}"
            );
        }
    }

    #[test]
    fn lent_weekdays_are_excluded_except_fridays() {
        assert_eq!(
            exclusion_reason("mondayOfThe1stWeekOfLent"),
            Some(ExclusionReason::Pattern("lent_weekday"))
        );
        assert_eq!(
            exclusion_reason("saturdayOfThe4thWeekOfLent"),
            Some(ExclusionReason::Pattern("lent_weekday"))
        );
        assert!(!is_excluded("fridayOfThe2ndWeekOfLent"));
        assert!(!is_excluded("fridayOfThe3rdWeekOfLent"));
    }

    #[test]
    fn friday_guard_only_applies_before_the_match() {
        // `friday` after the weekday pattern does not rescue the key.
        assert!(is_excluded("mondayOfThe1stWeekOfLentfriday"));
    }

    #[test]
    fn numbered_sundays_are_excluded() {
        for key in [
            "2ndSundayOfOrdinaryTime",
            "1stSundayOfAdvent",
            "3rdSundayOfEaster",
            "5thSundayOfLent",
        ] {
            assert_eq!(
                exclusion_reason(key),
                Some(ExclusionReason::Pattern("numbered_sunday")),
                "{key}"
            );
        }
    }

    #[test]
    fn named_days_survive() {
        for key in [
            "christmas",
            "divineMercySunday",
            "palmSunday",
            "ashWednesday",
            "goodFriday",
            "epiphany",
            "pentecostSunday",
        ] {
            assert!(!is_excluded(key), "{key} should not be excluded");
        }
    }

    #[test]
    fn pattern_families_do_not_overlap() {
        for key in [
            "5thDayInTheOctaveOfChristmas",
            "mondayOfChristmastide",
            "tuesdayBeforeEpiphany",
            "tuesdayOfThe1stWeekOfOrdinaryTime",
            "mondayOfThe2ndWeekOfAdvent",
            "wednesdayOfThe6thWeekOfEaster",
            "mondayOfThe1stWeekOfLent",
            "2ndSundayOfOrdinaryTime",
            "4thSundayOfLent",
        ] {
            assert_eq!(matching_patterns(key).len(), 1, "{key}");
        }
    }
}
