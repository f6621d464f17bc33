//! Parish curation policy tables.
//!
//! # Responsibility
//! - Decide which generator observances are kept.
//! - Derive display titles and obligation notes from observance keys.
//!
//! # Invariants
//! - Every policy is a pure function of `key`, `type` and (for naming) `name`.
//! - Keep/drop decisions never look at `name` or `moment`.
//! - Unknown keys fall through to the default branch of each policy.

pub mod exclusion;
pub mod inclusion;
pub mod naming;
pub mod obligation;

use crate::model::observance::ObservanceType;

pub use exclusion::{exclusion_reason, is_excluded, ExclusionReason};
pub use inclusion::is_included;
pub use naming::{append_day, display_name, strip_titles};
pub use obligation::{obligation_note, Obligation};

/// Keys whose observances are relabelled as a plain "Lenten Friday".
///
/// Shared by naming and obligation so both policies agree on the set.
pub const LENTEN_FRIDAY_KEYS: &[&str] = &[
    "fridayAfterAshWednesday",
    "saintPolycarpBishopAndMartyr",
    "fridayOfThe3rdWeekOfLent",
    "saintFrancesOfRomeReligious",
    "fridayOfThe5thWeekOfLent",
    "saintTuribiusOfMogrovejoBishop",
];

/// Returns whether an observance survives both inclusion and exclusion.
pub fn is_kept(kind: ObservanceType, key: &str) -> bool {
    is_included(kind, key) && !is_excluded(key)
}

#[cfg(test)]
mod tests {
    use super::is_kept;
    use crate::model::observance::ObservanceType;

    #[test]
    fn kept_requires_inclusion_and_no_exclusion() {
        assert!(is_kept(ObservanceType::Solemnity, "christmas"));
        // Included by type default but deny-listed.
        assert!(!is_kept(ObservanceType::Solemnity, "easterMonday"));
        // Not excluded but dropped by type.
        assert!(!is_kept(ObservanceType::HolyWeek, "mondayOfHolyWeek"));
        // Allow-listed commemoration.
        assert!(is_kept(
            ObservanceType::Commemoration,
            "saintTuribiusOfMogrovejoBishop"
        ));
    }
}
