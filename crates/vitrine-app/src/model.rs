// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

use crate::ids::RecordId;

pub const UNTITLED: &str = "Untitled";
pub const UNKNOWN_ARTIST: &str = "Unknown artist";
const MISSING_YEAR: &str = "-";

/// One catalog item as returned by the artworks endpoint. Everything except
/// `id` may be null upstream, so every attribute is optional here and the
/// `*_label` helpers supply the display fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub inscriptions: Option<String>,
    #[serde(default)]
    pub date_start: Option<i64>,
    #[serde(default)]
    pub date_end: Option<i64>,
}

impl Record {
    /// A record carrying only its identifier.
    pub fn bare(id: RecordId) -> Self {
        Self {
            id,
            title: None,
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }

    pub fn title_label(&self) -> String {
        non_blank(self.title.as_deref())
            .map(single_line)
            .unwrap_or_else(|| UNTITLED.to_owned())
    }

    pub fn artist_label(&self) -> String {
        non_blank(self.artist_display.as_deref())
            .map(single_line)
            .unwrap_or_else(|| UNKNOWN_ARTIST.to_owned())
    }

    pub fn origin_label(&self) -> String {
        non_blank(self.place_of_origin.as_deref())
            .map(single_line)
            .unwrap_or_default()
    }

    pub fn inscriptions_label(&self) -> String {
        non_blank(self.inscriptions.as_deref())
            .map(single_line)
            .unwrap_or_default()
    }

    pub fn date_start_label(&self) -> String {
        year_label(self.date_start)
    }

    pub fn date_end_label(&self) -> String {
        year_label(self.date_end)
    }

}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}

fn single_line(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn year_label(year: Option<i64>) -> String {
    year.map(|value| value.to_string())
        .unwrap_or_else(|| MISSING_YEAR.to_owned())
}

/// One fetched batch plus the total record count across every page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub records: Vec<Record>,
    pub total: u64,
}

impl Page {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> Vec<RecordId> {
        self.records.iter().map(|record| record.id).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    /// 1-based.
    pub page: u32,
    pub limit: u32,
}
