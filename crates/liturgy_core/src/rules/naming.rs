//! Display-name normalization.
//!
//! # Responsibility
//! - Map a handful of keys to fixed parish titles.
//! - Strip honorific clauses from generator names.
//! - Turn saints' names into "<name>'s Day" titles.
//!
//! # Invariants
//! - `strip_titles` is idempotent for names with at most one comma clause.
//! - Fixed-title keys ignore the generator name entirely.

use crate::rules::LENTEN_FRIDAY_KEYS;
use once_cell::sync::Lazy;
use regex::Regex;

pub const LENTEN_FRIDAY_TITLE: &str = "Lenten Friday";
pub const HOLY_SATURDAY_TITLE: &str = "Holy Saturday";

const HOLY_SATURDAY_KEY: &str = "holySaturday";

/// Compound memorial the generator ships without a usable name.
const NORTH_AMERICAN_MARTYRS_KEY: &str =
    "saintsJohnDeBrebeufAndIsaacJoguesPriestsAndCompanionsMartyrs";
const NORTH_AMERICAN_MARTYRS_TITLE: &str =
    "Saints John de Brébeuf, Isaac Jogues, and Companions' Day";

/// Keys whose generator name is already suitable for display.
const VERBATIM_KEYS: &[&str] = &["maryMotherOfGod", "josephHusbandOfMary"];

/// Non-`saint*` keys that still read as a saint's day.
const SAINTS_DAY_KEYS: &[&str] = &["peterAndPaulApostles"];

// Longer phrases come first so alternation removes them whole.
static HONORIFIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:Deacon and Martyr|Virgin and Martyr|Virgin and Doctor of the Church|the Venerable Priest and Doctor|the Apostle and Evangelist|Martyrs|Martyr|Bishops|Bishop|Priests|Priest|Abbot|Religious|Pope|the Apostle|the Evangelist)\b",
    )
    .expect("valid honorific regex")
});
static SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i) / | or ").expect("valid separator regex"));
static SPACES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").expect("valid spaces regex"));

/// Returns the parish display title for an observance.
pub fn display_name(key: &str, name: &str) -> String {
    if LENTEN_FRIDAY_KEYS.contains(&key) {
        return LENTEN_FRIDAY_TITLE.to_string();
    }
    if key == HOLY_SATURDAY_KEY {
        return HOLY_SATURDAY_TITLE.to_string();
    }
    if key == NORTH_AMERICAN_MARTYRS_KEY {
        return NORTH_AMERICAN_MARTYRS_TITLE.to_string();
    }
    if VERBATIM_KEYS.contains(&key) {
        return name.to_string();
    }
    if key.starts_with("saint") || SAINTS_DAY_KEYS.contains(&key) {
        return append_day(&strip_titles(name));
    }
    strip_titles(name)
}

/// Removes honorific clauses and role titles from a generator name.
///
/// `"Saint Ignatius of Antioch, Bishop and Martyr"` becomes
/// `"Saint Ignatius of Antioch"`.
pub fn strip_titles(name: &str) -> String {
    let head = match name.rfind(',') {
        Some(at) => &name[..at],
        None => name,
    };
    let without_titles = HONORIFIC_RE.replace_all(head, "");
    let separated = SEPARATOR_RE.replace_all(&without_titles, "; ");
    let collapsed = SPACES_RE.replace_all(&separated, " ");
    match collapsed.strip_suffix(' ') {
        Some(trimmed) => trimmed.to_string(),
        None => collapsed.into_owned(),
    }
}

/// Appends the possessive "Day" suffix to a saint's name.
///
/// Plural subjects ("Saints ...") take a bare apostrophe.
pub fn append_day(name: &str) -> String {
    if is_plural_subject(name) {
        format!("{name}' Day")
    } else {
        format!("{name}'s Day")
    }
}

fn is_plural_subject(name: &str) -> bool {
    name.split_whitespace()
        .next()
        .is_some_and(|word| word.eq_ignore_ascii_case("saints"))
}
