#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventRecord {
    pub id: u32,
    pub name: String,
    /// ISO 8601 calendar date, only parsed for display.
    pub date: String,
    /// Free-form, never parsed.
    pub time: String,
    pub location: String,
    pub description: String,
    pub category: String,
    pub attendees: u32,
}

impl EventRecord {
    /// Whether `needle` (already lowercased) occurs in the name, location or category.
    pub fn matches(&self, needle: &str) -> bool {
        [&self.name, &self.location, &self.category]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}
