use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const INVALID_DATE: &str = "Invalid Date";

/// Renders an ISO 8601 date as e.g. "Sunday, June 15, 2025".
///
/// Reduced forms (`2025`, `2025-06`) and timestamps are accepted too; a
/// timestamp is reduced to its calendar date. Anything unparseable renders
/// as [`INVALID_DATE`].
pub fn format_date(input: &str) -> String {
    match parse_date(input.trim()) {
        Some(date) => date.format("%A, %B %-d, %Y").to_string(),
        None => INVALID_DATE.to_owned(),
    }
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }
    if let Some(date) = parse_reduced_date(input) {
        return Some(date);
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(input) {
        return Some(date_time.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(|date_time| date_time.date())
}

/// `YYYY` and `YYYY-MM`, which start on the first day of the period.
fn parse_reduced_date(input: &str) -> Option<NaiveDate> {
    let padded = match input.len() {
        4 => format!("{}-01-01", input),
        7 if input.as_bytes()[4] == b'-' => format!("{}-01", input),
        _ => return None,
    };
    if !input.bytes().enumerate().all(|(i, b)| i == 4 || b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(&padded, "%Y-%m-%d").ok()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryStyle {
    Music,
    Business,
    Art,
    Food,
    Fitness,
    #[default]
    Neutral,
}

impl CategoryStyle {
    /// Looks up the badge style for a category label. Unknown labels are neutral.
    pub fn for_category(category: &str) -> CategoryStyle {
        match category {
            "Music" => CategoryStyle::Music,
            "Business" => CategoryStyle::Business,
            "Art" => CategoryStyle::Art,
            "Food" => CategoryStyle::Food,
            "Fitness" => CategoryStyle::Fitness,
            _ => CategoryStyle::Neutral,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            CategoryStyle::Music => "badge-purple",
            CategoryStyle::Business => "badge-pink",
            CategoryStyle::Art => "badge-rose",
            CategoryStyle::Food => "badge-orange",
            CategoryStyle::Fitness => "badge-emerald",
            CategoryStyle::Neutral => "badge-gray",
        }
    }
}
