//! Obligation notes attached to fast days and holy days of obligation.

use crate::rules::LENTEN_FRIDAY_KEYS;

/// Obligation attached to an observance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Obligation {
    /// Days of fasting and abstinence.
    MandatoryFast,
    /// Holy Saturday: fasting encouraged, not required.
    RecommendedFast,
    /// Holy days of obligation.
    MassAttendance,
}

impl Obligation {
    /// Returns the description text written to the calendar event.
    pub fn note(self) -> &'static str {
        match self {
            Self::MandatoryFast => "Fasting and abstaining from meat is mandatory",
            Self::RecommendedFast => "Fasting and abstaining from meat is recommended",
            Self::MassAttendance => "Mass attendance is mandatory",
        }
    }

    /// Classifies `key`, returning `None` when no obligation applies.
    pub fn for_key(key: &str) -> Option<Self> {
        match key {
            "ashWednesday" | "goodFriday" => Some(Self::MandatoryFast),
            _ if LENTEN_FRIDAY_KEYS.contains(&key) => Some(Self::MandatoryFast),
            "holySaturday" => Some(Self::RecommendedFast),
            "maryMotherOfGod" | "ascension" | "assumption" | "allSaints"
            | "immaculateConception" | "christmas" => Some(Self::MassAttendance),
            _ => None,
        }
    }
}

/// Returns the obligation note for `key`, if any.
pub fn obligation_note(key: &str) -> Option<&'static str> {
    Obligation::for_key(key).map(Obligation::note)
}

#[cfg(test)]
mod tests {
    use super::{obligation_note, Obligation};
    use crate::rules::LENTEN_FRIDAY_KEYS;

    #[test]
    fn fast_days_are_mandatory() {
        for key in ["ashWednesday", "goodFriday"]
            .into_iter()
            .chain(LENTEN_FRIDAY_KEYS.iter().copied())
        {
            assert_eq!(
                obligation_note(key),
                Some("Fasting and abstaining from meat is mandatory"),
                "{key}"
            );
        }
    }

    #[test]
    fn holy_saturday_is_recommended() {
        assert_eq!(
            Obligation::for_key("holySaturday"),
            Some(Obligation::RecommendedFast)
        );
        assert_eq!(
            obligation_note("holySaturday"),
            Some("Fasting and abstaining from meat is recommended")
        );
    }

    #[test]
    fn holy_days_of_obligation_require_mass() {
        for key in [
            "maryMotherOfGod",
            "ascension",
            "assumption",
            "allSaints",
            "immaculateConception",
            "christmas",
        ] {
            assert_eq!(
                obligation_note(key),
                Some("Mass attendance is mandatory"),
                "{key}"
            );
        }
    }

    #[test]
    fn other_keys_have_no_note() {
        assert_eq!(obligation_note("easter"), None);
        assert_eq!(obligation_note("fridayOfThe2ndWeekOfLent"), None);
        assert_eq!(obligation_note("pentecostSunday"), None);
    }
}
