//! Rank-based inclusion policy.

use crate::model::observance::ObservanceType;

/// Optional memorials the generator under-ranks; restored explicitly.
pub const RESTORED_OPT_MEMORIALS: &[&str] = &["saintBarnabasTheApostle"];

/// Commemorations kept despite their rank.
///
/// `chairOfSaintPeterApostle` is mis-ranked upstream; the other three land on
/// Lenten Fridays in some years and are relabelled downstream.
pub const RESTORED_COMMEMORATIONS: &[&str] = &[
    "chairOfSaintPeterApostle",
    "saintPolycarpBishopAndMartyr",
    "saintFrancesOfRomeReligious",
    "saintTuribiusOfMogrovejoBishop",
];

/// Returns whether an observance of `kind` with `key` passes the rank filter.
///
/// Holy Week weekdays are always dropped; Triduum entries cover those days.
pub fn is_included(kind: ObservanceType, key: &str) -> bool {
    match kind {
        ObservanceType::HolyWeek => false,
        ObservanceType::OptMemorial => RESTORED_OPT_MEMORIALS.contains(&key),
        ObservanceType::Commemoration => RESTORED_COMMEMORATIONS.contains(&key),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::is_included;
    use crate::model::observance::ObservanceType;

    #[test]
    fn holy_week_is_never_included() {
        assert!(!is_included(ObservanceType::HolyWeek, "mondayOfHolyWeek"));
        // Even a key that is allow-listed elsewhere.
        assert!(!is_included(
            ObservanceType::HolyWeek,
            "saintBarnabasTheApostle"
        ));
    }

    #[test]
    fn optional_memorials_need_allow_list() {
        assert!(is_included(
            ObservanceType::OptMemorial,
            "saintBarnabasTheApostle"
        ));
        assert!(!is_included(ObservanceType::OptMemorial, "independenceDay"));
    }

    #[test]
    fn commemorations_need_allow_list() {
        assert!(is_included(
            ObservanceType::Commemoration,
            "chairOfSaintPeterApostle"
        ));
        assert!(is_included(
            ObservanceType::Commemoration,
            "saintFrancesOfRomeReligious"
        ));
        assert!(!is_included(
            ObservanceType::Commemoration,
            "saintPatrickBishop"
        ));
    }

    #[test]
    fn other_ranks_default_to_included() {
        for kind in [
            ObservanceType::Solemnity,
            ObservanceType::Sunday,
            ObservanceType::Triduum,
            ObservanceType::Feast,
            ObservanceType::Memorial,
            ObservanceType::Weekday,
            ObservanceType::Other,
        ] {
            assert!(is_included(kind, "anyKeyAtAll"), "{kind:?} should default in");
        }
    }
}
