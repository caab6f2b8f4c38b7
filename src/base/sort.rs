use crate::base;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::VariantNames,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum SortKey {
    #[default]
    Date,
    Amount,
    Vendor,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::VariantNames,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Direction {
    Asc,
    #[default]
    Desc,
}

impl SortKey {
    pub fn compare(self, a: &base::Record, b: &base::Record) -> std::cmp::Ordering {
        match self {
            SortKey::Date => a.date().cmp(&b.date()),
            SortKey::Amount => a.amount().cmp(&b.amount()),
            SortKey::Vendor => collate(a.vendor(), b.vendor()),
        }
    }
}

/// Orders names ignoring case first. Names equal up to case put lowercase
/// before uppercase.
///
/// Folding is by code point only: accents are not stripped and no locale
/// rules apply, so `Éclair` sorts after `Zed` rather than next to `Eclair`.
fn collate(a: &str, b: &str) -> std::cmp::Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| b.cmp(a))
}

/// Sorts in place. Records with equal keys keep their relative order in
/// either direction.
pub fn sort(records: &mut [&base::Record], key: SortKey, direction: Direction) {
    tracing::trace!("sorting {} records by {} {}", records.len(), key, direction);
    match direction {
        Direction::Asc => records.sort_by(|a, b| key.compare(a, b)),
        Direction::Desc => records.sort_by(|a, b| key.compare(a, b).reverse()),
    }
}
