//! Generic in-memory collection for one entity kind.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over a per-kind keyed store.
//! - Keep list ordering deterministic across identical histories.
//!
//! # Invariants
//! - Ids are assigned by the collection at creation and never reused.
//! - Absence is reported through `Option`/`bool`, never as an error.
//! - `update` replaces the whole record body; omitted payload fields
//!   revert to their schema defaults, not their prior values.

use chrono::NaiveDate;
use log::debug;
use std::collections::HashMap;
use uuid::Uuid;

/// Stable identifier for every stored record.
pub type EntryId = Uuid;

/// Sort rank used for descending list order.
///
/// Ties are broken by insertion order, ascending, so two records
/// sharing a date keep a stable relative position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    /// Calendar date; `None` (unparseable) ranks below every real date.
    Date(Option<NaiveDate>),
    /// Completion percentage, 0-100.
    Progress(u8),
}

/// Parses the leading `YYYY-MM-DD` of a date field for sorting.
///
/// Accepts a bare date or a longer timestamp with a date prefix.
pub fn sort_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Contract every stored entity kind implements.
pub trait Entity: Clone {
    /// Kind label used in diagnostics, never on the wire.
    const KIND: &'static str;

    /// Validated payload the record is assembled from.
    type Fields;

    /// Builds a full record from an id and validated fields.
    fn assemble(id: EntryId, fields: Self::Fields) -> Self;

    /// Returns the record's stable id.
    fn id(&self) -> EntryId;

    /// Returns the kind-specific list rank.
    fn sort_key(&self) -> SortKey;
}

/// In-memory keyed store for one entity kind.
pub struct Collection<R: Entity> {
    entries: HashMap<EntryId, (u64, R)>,
    next_seq: u64,
}

impl<R: Entity> Default for Collection<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Entity> Collection<R> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            next_seq: 0,
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns all records, descending by sort key, insertion order on ties.
    pub fn list(&self) -> Vec<R> {
        let mut ranked: Vec<(&u64, &R)> =
            self.entries.values().map(|(seq, record)| (seq, record)).collect();
        ranked.sort_by(|a, b| b.1.sort_key().cmp(&a.1.sort_key()).then(a.0.cmp(b.0)));
        ranked.into_iter().map(|(_, record)| record.clone()).collect()
    }

    /// Returns one record by id.
    pub fn get(&self, id: EntryId) -> Option<R> {
        self.entries.get(&id).map(|(_, record)| record.clone())
    }

    /// Stores a new record under a freshly assigned id.
    pub fn create(&mut self, fields: R::Fields) -> R {
        let id = Uuid::new_v4();
        let record = R::assemble(id, fields);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.insert(id, (seq, record.clone()));
        debug!("event=record_created module=repo kind={} id={id}", R::KIND);
        record
    }

    /// Replaces the whole record body for an existing id.
    ///
    /// Returns `None` when the id is unknown; the collection is untouched.
    /// The record keeps its insertion position for list tie-breaks.
    pub fn update(&mut self, id: EntryId, fields: R::Fields) -> Option<R> {
        let (seq, _) = self.entries.get(&id)?;
        let seq = *seq;
        let record = R::assemble(id, fields);
        self.entries.insert(id, (seq, record.clone()));
        debug!("event=record_replaced module=repo kind={} id={id}", R::KIND);
        Some(record)
    }

    /// Removes one record by id. True only when a record existed.
    pub fn delete(&mut self, id: EntryId) -> bool {
        let removed = self.entries.remove(&id).is_some();
        if removed {
            debug!("event=record_deleted module=repo kind={} id={id}", R::KIND);
        }
        removed
    }
}
