//! `EventCatalog` — validated events keyed by id.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use fr_core::{Event, EventId, EventRecord, ParseError, ParseResult};
use tracing::{debug, warn};

use crate::{CatalogError, CatalogResult, EventFilter};

// ── InvalidEventPolicy ────────────────────────────────────────────────────────

/// What [`EventCatalog::from_records`] does with a record that fails
/// validation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum InvalidEventPolicy {
    /// Stop at the first invalid record and return its error.
    #[default]
    Abort,
    /// Leave invalid records out and hand their errors back to the caller.
    Skip,
}

// ── CatalogStats ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub events: usize,
    /// Distinct calendar dates with at least one event.
    pub days:   usize,
}

// ── EventCatalog ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct EventCatalog {
    events: BTreeMap<EventId, Event>,
}

impl EventCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `records` into a catalogue.
    ///
    /// Returns the catalogue together with the errors of skipped records
    /// (always empty under [`InvalidEventPolicy::Abort`]).  A repeated id is
    /// a [`CatalogError::DuplicateEvent`] under either policy.
    pub fn from_records<I>(records: I, policy: InvalidEventPolicy) -> CatalogResult<(Self, Vec<ParseError>)>
    where
        I: IntoIterator<Item = EventRecord>,
    {
        let mut catalog = Self::new();
        let mut skipped = Vec::new();

        for record in records {
            match parse_record(record) {
                Ok(event) => catalog.insert_event(event)?,
                Err(e) => match policy {
                    InvalidEventPolicy::Abort => return Err(e.into()),
                    InvalidEventPolicy::Skip => {
                        warn!(event = %e.event_id(), error = %e, "skipping invalid event");
                        skipped.push(e);
                    }
                },
            }
        }

        debug!(events = catalog.len(), skipped = skipped.len(), "catalogue built");
        Ok((catalog, skipped))
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.get(&id)
    }

    pub fn contains(&self, id: EventId) -> bool {
        self.events.contains_key(&id)
    }

    /// Validate and add one event.
    pub fn insert(&mut self, record: EventRecord) -> CatalogResult<&Event> {
        let event = parse_record(record)?;
        let id = event.id;
        self.insert_event(event)?;
        Ok(&self.events[&id])
    }

    /// Remove an event, returning it.
    pub fn remove(&mut self, id: EventId) -> CatalogResult<Event> {
        self.events.remove(&id).ok_or(CatalogError::UnknownEvent(id))
    }

    /// All events ordered by date, then start time, then id.
    pub fn list(&self) -> Vec<&Event> {
        let mut out: Vec<&Event> = self.events.values().collect();
        out.sort_by_key(|e| (e.date, e.start, e.id));
        out
    }

    /// Events matching `filter`, in [`list`][Self::list] order.
    pub fn search(&self, filter: &EventFilter) -> Vec<&Event> {
        let mut out = self.list();
        out.retain(|e| filter.matches(e));
        out
    }

    /// Resolve a user's selection into owned events.
    ///
    /// Repeated ids are collapsed to their first occurrence, so the result is
    /// deduplicated and keeps selection order.  Any id missing from the
    /// catalogue fails the whole resolution.
    pub fn resolve(&self, selection: &[EventId]) -> CatalogResult<Vec<Event>> {
        let mut seen = HashSet::with_capacity(selection.len());
        let mut out = Vec::with_capacity(selection.len());
        for &id in selection {
            if !seen.insert(id) {
                continue;
            }
            let event = self.events.get(&id).ok_or(CatalogError::UnknownEvent(id))?;
            out.push(event.clone());
        }
        Ok(out)
    }

    pub fn stats(&self) -> CatalogStats {
        let days: BTreeSet<_> = self.events.values().map(|e| e.date).collect();
        CatalogStats { events: self.events.len(), days: days.len() }
    }

    // ── Private helpers ───────────────────────────────────────────────────

    fn insert_event(&mut self, event: Event) -> CatalogResult<()> {
        if self.events.contains_key(&event.id) {
            return Err(CatalogError::DuplicateEvent(event.id));
        }
        self.events.insert(event.id, event);
        Ok(())
    }
}

/// Required text fields must be non-blank before the record is parsed.
fn parse_record(record: EventRecord) -> ParseResult<Event> {
    let id = record.id;
    for (field, value) in [
        ("name", &record.name),
        ("type", &record.kind),
        ("location", &record.location),
    ] {
        if value.trim().is_empty() {
            return Err(ParseError::MissingField { id, field });
        }
    }
    Event::try_from(record)
}
