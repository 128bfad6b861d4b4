//! Display-name mappings for level and subject identifiers.
//!
//! Records carry raw identifiers (`level-1`, `mathematics-anglophone`);
//! the UI and filter layer work with display names ("Level I",
//! "Mathematics"). Both tables are closed enumerations from the national
//! primary curriculum; unknown identifiers pass through unchanged.

/// Subject keyword table, checked in order; the first keyword contained
/// in the raw identifier wins.
const SUBJECT_KEYWORDS: &[(&str, &str)] = &[
    ("english", "English Language"),
    ("mathematics", "Mathematics"),
    ("science", "Science and Technology"),
    ("francais", "Français"),
    ("social", "Social Studies"),
    ("vocational", "Vocational Studies"),
    ("arts", "Arts"),
    ("pe", "Physical Education and Sports"),
    ("national", "National Languages and Cultures"),
    ("ict", "Information and Communication Technologies"),
];

/// Map a raw level id to its display form.
///
/// `level-1` → "Level I" and so on; any other id is already a display
/// form and passes through unchanged.
pub fn level_display_name(raw: &str) -> &str {
    match raw {
        "level-1" => "Level I",
        "level-2" => "Level II",
        "level-3" => "Level III",
        other => other,
    }
}

/// Map a raw subject identifier to its display name.
///
/// Case-insensitive containment against the keyword table; no match
/// returns the identifier unchanged.
pub fn subject_display_name(raw: &str) -> String {
    let lower = raw.to_lowercase();
    for (keyword, display) in SUBJECT_KEYWORDS {
        if lower.contains(keyword) {
            return (*display).to_string();
        }
    }
    raw.to_string()
}
