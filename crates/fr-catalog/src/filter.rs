//! Event search filter.

use fr_core::Event;

/// Narrow a catalogue listing by free text and/or category.
///
/// Both criteria are optional; an empty filter matches every event.  Text
/// matching is case-insensitive and looks at the name, location and
/// description.  The category must match exactly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub text: Option<String>,
    pub kind: Option<String>,
}

impl EventFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn matches(&self, event: &Event) -> bool {
        self.matches_kind(event) && self.matches_text(event)
    }

    fn matches_kind(&self, event: &Event) -> bool {
        match self.kind.as_deref() {
            None | Some("") => true,
            Some(kind) => event.kind == kind,
        }
    }

    fn matches_text(&self, event: &Event) -> bool {
        let needle = match self.text.as_deref().map(str::trim) {
            None | Some("") => return true,
            Some(t) => t.to_lowercase(),
        };
        let hit = |field: &str| field.to_lowercase().contains(&needle);

        hit(&event.name)
            || hit(&event.location)
            || event.description.as_deref().is_some_and(hit)
    }
}
