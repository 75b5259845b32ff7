// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use tracing::debug;

use crate::{
    NavigationEvent, Page, PageRequest, Pagination, Record, RecordId, Selection, SelectionDelta,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub pagination: Pagination,
    pub page: Page,
    pub loading: bool,
    pub selection: Selection,
    /// Tag of the most recent fetch; results carrying an older tag are stale.
    pub fetch_generation: u64,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Pagination::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Navigate(NavigationEvent),
    Reload,
    ApplyPage {
        generation: u64,
        page: Page,
    },
    PageSelectionChanged {
        page_ids: Vec<RecordId>,
        selected: Vec<Record>,
    },
    SelectTop(usize),
    RemoveSelected(RecordId),
    ClearSelection,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    FetchRequested {
        generation: u64,
        request: PageRequest,
    },
    PageLoaded {
        generation: u64,
        rows: usize,
        total: u64,
    },
    StalePageDropped {
        generation: u64,
    },
    SelectionChanged(SelectionDelta),
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn new(pagination: Pagination) -> Self {
        Self {
            pagination,
            page: Page::empty(),
            loading: false,
            selection: Selection::new(),
            fetch_generation: 0,
            status_line: None,
        }
    }

    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::Navigate(event) => {
                self.pagination.navigate(event);
                vec![self.begin_fetch()]
            }
            AppCommand::Reload => vec![self.begin_fetch()],
            AppCommand::ApplyPage { generation, page } => self.apply_page(generation, page),
            AppCommand::PageSelectionChanged { page_ids, selected } => {
                let delta = self.selection.reconcile_page(&page_ids, selected);
                let mut events = vec![AppEvent::SelectionChanged(delta)];
                if !delta.is_empty() {
                    let message = format!(
                        "selection +{} -{} ({} in basket)",
                        delta.added,
                        delta.removed,
                        self.selection.len()
                    );
                    events.push(self.set_status(&message));
                }
                events
            }
            AppCommand::SelectTop(n) => {
                if n == 0 {
                    return Vec::new();
                }
                let added = self.selection.select_top(&self.page.records, n);
                let selected = n.min(self.page.records.len());
                let message = format!(
                    "selected top {selected} ({} in basket)",
                    self.selection.len()
                );
                vec![
                    AppEvent::SelectionChanged(SelectionDelta { added, removed: 0 }),
                    self.set_status(&message),
                ]
            }
            AppCommand::RemoveSelected(id) => {
                let Some(record) = self.selection.remove(id) else {
                    return Vec::new();
                };
                let message = format!("removed {}", record.title_label());
                vec![
                    AppEvent::SelectionChanged(SelectionDelta {
                        added: 0,
                        removed: 1,
                    }),
                    self.set_status(&message),
                ]
            }
            AppCommand::ClearSelection => {
                let removed = self.selection.clear();
                if removed == 0 {
                    return Vec::new();
                }
                vec![
                    AppEvent::SelectionChanged(SelectionDelta { added: 0, removed }),
                    self.set_status("basket cleared"),
                ]
            }
            AppCommand::SetStatus(message) => vec![self.set_status(&message)],
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    /// Current-page records that are in the basket, in page order.
    pub fn visible_selection(&self) -> Vec<Record> {
        self.selection.visible_selection(&self.page.records)
    }

    fn begin_fetch(&mut self) -> AppEvent {
        self.loading = true;
        self.fetch_generation = self.fetch_generation.saturating_add(1);
        let request = self.pagination.request();
        debug!(
            generation = self.fetch_generation,
            page = request.page,
            limit = request.limit,
            "fetch requested"
        );
        AppEvent::FetchRequested {
            generation: self.fetch_generation,
            request,
        }
    }

    fn apply_page(&mut self, generation: u64, page: Page) -> Vec<AppEvent> {
        if generation != self.fetch_generation {
            debug!(
                generation,
                latest = self.fetch_generation,
                "dropping stale page"
            );
            return vec![AppEvent::StalePageDropped { generation }];
        }

        let rows = page.records.len();
        let total = page.total;
        self.page = page;
        self.loading = false;
        vec![AppEvent::PageLoaded {
            generation,
            rows,
            total,
        }]
    }

    fn set_status(&mut self, message: &str) -> AppEvent {
        self.status_line = Some(message.to_owned());
        AppEvent::StatusUpdated(message.to_owned())
    }
}
