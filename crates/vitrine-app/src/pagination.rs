// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::collections::BTreeMap;

use crate::model::PageRequest;

pub const DEFAULT_PAGE_SIZE: u32 = 12;
pub const ROWS_PER_PAGE_OPTIONS: [u32; 3] = [10, 20, 50];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

/// What the paginator reports when the user moves: the new first row, rows
/// per page, and 0-based page index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEvent {
    pub row_offset: u64,
    pub page_size: u32,
    pub page_index: u32,
}

/// Drives which page is fetched. `filters` and `sort` are carried for the
/// paginator contract but never sent upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub row_offset: u64,
    pub page_size: u32,
    pub page_index: u32,
    pub filters: BTreeMap<String, String>,
    pub sort: Option<SortSpec>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(page_size: u32) -> Self {
        Self {
            row_offset: 0,
            page_size,
            page_index: 0,
            filters: BTreeMap::new(),
            sort: None,
        }
    }

    /// Replaces the position wholesale. Bounds are not checked; a page past
    /// the end simply comes back empty.
    pub fn navigate(&mut self, event: NavigationEvent) {
        self.row_offset = event.row_offset;
        self.page_size = event.page_size;
        self.page_index = event.page_index;
    }

    pub fn request(&self) -> PageRequest {
        PageRequest {
            page: self.page_index.saturating_add(1),
            limit: self.page_size,
        }
    }

    pub fn page_count(&self, total: u64) -> u32 {
        let size = u64::from(self.page_size.max(1));
        u32::try_from(total.div_ceil(size)).unwrap_or(u32::MAX)
    }

    pub fn first_page(&self) -> Option<NavigationEvent> {
        (self.page_index != 0).then(|| self.at_page(0))
    }

    pub fn prev_page(&self) -> Option<NavigationEvent> {
        self.page_index
            .checked_sub(1)
            .map(|index| self.at_page(index))
    }

    pub fn next_page(&self, total: u64) -> Option<NavigationEvent> {
        let next = self.page_index.checked_add(1)?;
        (next < self.page_count(total)).then(|| self.at_page(next))
    }

    pub fn last_page(&self, total: u64) -> Option<NavigationEvent> {
        let last = self.page_count(total).saturating_sub(1);
        (last != self.page_index).then(|| self.at_page(last))
    }

    /// Switches rows per page while keeping the current first row on screen.
    pub fn with_page_size(&self, page_size: u32) -> Option<NavigationEvent> {
        if page_size == 0 || page_size == self.page_size {
            return None;
        }
        let page_index = u32::try_from(self.row_offset / u64::from(page_size)).unwrap_or(u32::MAX);
        Some(NavigationEvent {
            row_offset: u64::from(page_index) * u64::from(page_size),
            page_size,
            page_index,
        })
    }

    pub fn larger_page_size(&self) -> u32 {
        ROWS_PER_PAGE_OPTIONS
            .iter()
            .copied()
            .find(|size| *size > self.page_size)
            .unwrap_or(ROWS_PER_PAGE_OPTIONS[0])
    }

    pub fn smaller_page_size(&self) -> u32 {
        ROWS_PER_PAGE_OPTIONS
            .iter()
            .rev()
            .copied()
            .find(|size| *size < self.page_size)
            .unwrap_or(ROWS_PER_PAGE_OPTIONS[ROWS_PER_PAGE_OPTIONS.len() - 1])
    }

    /// `Showing {first} to {last} of {total} entries`, where `shown` is the
    /// number of rows actually on the current page.
    pub fn report(&self, total: u64, shown: usize) -> String {
        if total == 0 || shown == 0 {
            return format!("Showing 0 to 0 of {total} entries");
        }
        let first = self.row_offset + 1;
        let last = self.row_offset + shown as u64;
        format!("Showing {first} to {last} of {total} entries")
    }

    fn at_page(&self, page_index: u32) -> NavigationEvent {
        NavigationEvent {
            row_offset: u64::from(page_index) * u64::from(self.page_size),
            page_size: self.page_size,
            page_index,
        }
    }
}
