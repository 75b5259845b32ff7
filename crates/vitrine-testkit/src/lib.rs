// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};
use std::collections::BTreeSet;
use vitrine_app::{Page, PageRequest, Record, RecordId};

const SUBJECTS: [&str; 16] = [
    "Still Life with Lemons",
    "Harbor at Dusk",
    "Portrait of a Woman",
    "Water Lilies",
    "The River Bend",
    "Figures in a Garden",
    "Mountain Pass",
    "Study of Hands",
    "Winter Street",
    "Vase of Peonies",
    "The Reader",
    "Market Day",
    "Evening Bathers",
    "Ceremonial Bowl",
    "Seated Buddha",
    "Map of the Coast",
];

const QUALIFIERS: [&str; 8] = [
    "",
    " (Study)",
    " II",
    " at Noon",
    " in Blue",
    ", Version B",
    " with Birds",
    " (Fragment)",
];

const ARTISTS: [(&str, &str); 12] = [
    ("Claude Monet", "French, 1840-1926"),
    ("Mary Cassatt", "American, 1844-1926"),
    ("Katsushika Hokusai", "Japanese, 1760-1849"),
    ("Georgia O'Keeffe", "American, 1887-1986"),
    ("Rembrandt van Rijn", "Dutch, 1606-1669"),
    ("Berthe Morisot", "French, 1841-1895"),
    ("El Greco", "Greek, 1541-1614"),
    ("Frida Kahlo", "Mexican, 1907-1954"),
    ("Winslow Homer", "American, 1836-1910"),
    ("Paul Cezanne", "French, 1839-1906"),
    ("Ando Hiroshige", "Japanese, 1797-1858"),
    ("Albrecht Durer", "German, 1471-1528"),
];

const ORIGINS: [&str; 10] = [
    "France",
    "United States",
    "Japan",
    "Netherlands",
    "Spain",
    "Mexico",
    "Germany",
    "China",
    "India",
    "Italy",
];

const INSCRIPTIONS: [&str; 6] = [
    "Signed lower right",
    "Dated lower left",
    "Signed and dated verso",
    "Stamped with studio seal",
    "Inscribed on stretcher",
    "Monogrammed upper left",
];

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }

    /// True roughly once every `n` draws.
    fn one_in(&mut self, n: usize) -> bool {
        self.int_n(n) == 0
    }
}

/// Deterministic artwork generator. Ids are handed out sequentially from 1
/// so tests can reason about which ids land on which page.
#[derive(Debug, Clone)]
pub struct CatalogFaker {
    rng: DeterministicRng,
    next_id: i64,
}

impl CatalogFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            next_id: 1,
        }
    }

    pub fn record(&mut self) -> Record {
        let id = RecordId::new(self.next_id);
        self.next_id += 1;

        let title = if self.rng.one_in(15) {
            None
        } else {
            Some(format!(
                "{}{}",
                self.pick(&SUBJECTS),
                self.pick(&QUALIFIERS)
            ))
        };
        let (name, nationality) = ARTISTS[self.rng.int_n(ARTISTS.len())];
        let artist_display = if self.rng.one_in(10) {
            None
        } else {
            Some(format!("{name}\n{nationality}"))
        };
        let place_of_origin = (!self.rng.one_in(6)).then(|| self.pick(&ORIGINS).to_owned());
        let inscriptions = self
            .rng
            .one_in(3)
            .then(|| self.pick(&INSCRIPTIONS).to_owned());
        let (date_start, date_end) = if self.rng.one_in(12) {
            (None, None)
        } else {
            let start = 1450 + self.rng.int_n(570) as i64;
            let end = start + self.rng.int_n(8) as i64;
            (Some(start), Some(end))
        };

        Record {
            id,
            title,
            place_of_origin,
            artist_display,
            inscriptions,
            date_start,
            date_end,
        }
    }

    pub fn records(&mut self, count: usize) -> Vec<Record> {
        (0..count).map(|_| self.record()).collect()
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[self.rng.int_n(items.len())]
    }
}

/// An in-memory stand-in for the artworks endpoint with the same paging
/// contract: 1-based pages, past-the-end pages come back empty, and the
/// total is always the full catalog size.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    records: Vec<Record>,
    failing_pages: BTreeSet<u32>,
}

impl MemoryCatalog {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            failing_pages: BTreeSet::new(),
        }
    }

    /// `count` faked records with ids `1..=count`.
    pub fn seeded(seed: u64, count: usize) -> Self {
        Self::new(CatalogFaker::new(seed).records(count))
    }

    /// Makes every fetch of `page` fail, for exercising the swallow path.
    pub fn with_failing_page(mut self, page: u32) -> Self {
        self.failing_pages.insert(page);
        self
    }

    pub fn fetch(&self, request: PageRequest) -> Result<Page> {
        if request.page == 0 || request.limit == 0 {
            bail!(
                "invalid page request: page {} limit {}",
                request.page,
                request.limit
            );
        }
        if self.failing_pages.contains(&request.page) {
            bail!("simulated failure for page {}", request.page);
        }

        let limit = request.limit as usize;
        let start = (request.page as usize - 1).saturating_mul(limit);
        let records = self
            .records
            .iter()
            .skip(start)
            .take(limit)
            .cloned()
            .collect();
        Ok(Page {
            records,
            total: self.records.len() as u64,
        })
    }
}

/// Records with ids `ids` and a title derived from the id; enough for
/// selection tests that only care about identity.
pub fn numbered_records(ids: impl IntoIterator<Item = i64>) -> Vec<Record> {
    ids.into_iter()
        .map(|id| Record {
            title: Some(format!("Work {id}")),
            ..Record::bare(RecordId::new(id))
        })
        .collect()
}
