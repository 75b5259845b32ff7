// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::collections::{BTreeMap, BTreeSet};

use crate::ids::RecordId;
use crate::model::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    order: u64,
    record: Record,
}

/// The cross-page selection basket: record id to the record snapshot taken
/// when it was selected. Entries survive navigation and are only dropped by
/// a deselect on their own page or an explicit removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    entries: BTreeMap<RecordId, Entry>,
    next_order: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionDelta {
    pub added: usize,
    pub removed: usize,
}

impl SelectionDelta {
    pub const fn is_empty(self) -> bool {
        self.added == 0 && self.removed == 0
    }
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.entries.get(&id).map(|entry| &entry.record)
    }

    /// Records in the order they were first selected.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        let mut entries = self.entries.values().collect::<Vec<_>>();
        entries.sort_by_key(|entry| entry.order);
        entries.into_iter().map(|entry| &entry.record)
    }

    pub fn ids(&self) -> BTreeSet<RecordId> {
        self.entries.keys().copied().collect()
    }

    /// Merges a page-local selection report. `page_ids` must be the ids of
    /// the page that produced the report. Ids on that page missing from
    /// `selected` are dropped, every record in `selected` is stored, and
    /// entries for other pages are left alone.
    pub fn reconcile_page(&mut self, page_ids: &[RecordId], selected: Vec<Record>) -> SelectionDelta {
        let selected_ids = selected
            .iter()
            .map(|record| record.id)
            .collect::<BTreeSet<_>>();

        let mut delta = SelectionDelta::default();
        for id in page_ids {
            if !selected_ids.contains(id) && self.entries.remove(id).is_some() {
                delta.removed += 1;
            }
        }
        for record in selected {
            if self.upsert(record) {
                delta.added += 1;
            }
        }
        delta
    }

    /// Adds the first `n` records of `page` in page order. Never deselects.
    /// Returns how many of them were not already selected.
    pub fn select_top(&mut self, page: &[Record], n: usize) -> usize {
        page.iter()
            .take(n)
            .filter(|record| self.upsert((*record).clone()))
            .count()
    }

    pub fn remove(&mut self, id: RecordId) -> Option<Record> {
        self.entries.remove(&id).map(|entry| entry.record)
    }

    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }

    /// The part of `page` that is selected, in page order. This is what the
    /// listing hands back to the table as its checked rows.
    pub fn visible_selection(&self, page: &[Record]) -> Vec<Record> {
        page.iter()
            .filter(|record| self.contains(record.id))
            .cloned()
            .collect()
    }

    /// Inserts or overwrites; an overwrite keeps the original position.
    fn upsert(&mut self, record: Record) -> bool {
        if let Some(entry) = self.entries.get_mut(&record.id) {
            entry.record = record;
            return false;
        }
        let order = self.next_order;
        self.next_order = self.next_order.saturating_add(1);
        self.entries.insert(record.id, Entry { order, record });
        true
    }
}

/// Reads the select-top-N input. Anything that is not a positive integer is
/// rejected.
pub fn parse_top_n(input: &str) -> Option<usize> {
    input.trim().parse::<usize>().ok().filter(|n| *n > 0)
}
