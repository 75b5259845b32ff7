// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use std::sync::mpsc::Sender;
use std::thread;
use tracing::{debug, info, warn};
use vitrine_api::Client;
use vitrine_app::{Page, PageRequest};
use vitrine_testkit::MemoryCatalog;
use vitrine_tui::{CatalogRuntime, InternalEvent};

/// Fetches pages from the artworks endpoint on a background thread.
pub struct ApiRuntime {
    client: Client,
}

impl ApiRuntime {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl CatalogRuntime for ApiRuntime {
    fn fetch_page(&mut self, request: PageRequest) -> Page {
        page_or_empty(request, self.client.fetch_page(request))
    }

    fn spawn_fetch(
        &mut self,
        generation: u64,
        request: PageRequest,
        tx: Sender<InternalEvent>,
    ) -> Result<()> {
        let client = self.client.clone();
        thread::Builder::new()
            .name(format!("fetch-{generation}"))
            .spawn(move || {
                let page = page_or_empty(request, client.fetch_page(request));
                if tx.send(InternalEvent::PageLoaded { generation, page }).is_err() {
                    debug!(generation, "ui gone before page arrived");
                }
            })?;
        Ok(())
    }
}

/// Serves faked records from memory for `--demo`.
pub struct DemoRuntime {
    catalog: MemoryCatalog,
}

impl DemoRuntime {
    pub fn new(catalog: MemoryCatalog) -> Self {
        Self { catalog }
    }
}

impl CatalogRuntime for DemoRuntime {
    fn fetch_page(&mut self, request: PageRequest) -> Page {
        page_or_empty(request, self.catalog.fetch(request))
    }
}

/// A failed fetch leaves an empty page on screen and the basket untouched.
fn page_or_empty(request: PageRequest, result: Result<Page>) -> Page {
    match result {
        Ok(page) => {
            info!(
                page = request.page,
                limit = request.limit,
                rows = page.records.len(),
                total = page.total,
                "fetched page"
            );
            page
        }
        Err(error) => {
            warn!(
                page = request.page,
                limit = request.limit,
                error = %format!("{error:#}"),
                "fetch failed; showing empty page"
            );
            Page::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiRuntime, DemoRuntime};
    use anyhow::{Result, anyhow};
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;
    use tiny_http::{Header, Response, Server};
    use vitrine_api::Client;
    use vitrine_app::{PageRequest, RecordId};
    use vitrine_testkit::MemoryCatalog;
    use vitrine_tui::{CatalogRuntime, InternalEvent};

    fn serve_once(status: u16, body: &'static str) -> Result<(String, thread::JoinHandle<()>)> {
        let server =
            Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
        let addr = format!("http://{}/api/v1/artworks", server.server_addr());
        let handle = thread::spawn(move || {
            let request = server.recv().expect("request expected");
            let header = Header::from_bytes("Content-Type", "application/json")
                .expect("valid content type header");
            let response = Response::from_string(body)
                .with_status_code(status)
                .with_header(header);
            request.respond(response).expect("response should succeed");
        });
        Ok((addr, handle))
    }

    #[test]
    fn api_runtime_swallows_server_errors_into_empty_page() -> Result<()> {
        let (addr, handle) = serve_once(500, r#"{"error":"boom"}"#)?;
        let mut runtime = ApiRuntime::new(Client::new(&addr, Duration::from_secs(1))?);

        let page = runtime.fetch_page(PageRequest { page: 3, limit: 12 });
        assert!(page.records.is_empty());
        assert_eq!(page.total, 0);

        handle.join().expect("server thread should join");
        Ok(())
    }

    #[test]
    fn api_runtime_swallows_unreachable_endpoint() -> Result<()> {
        let client = Client::new("http://127.0.0.1:1/artworks", Duration::from_millis(50))?;
        let mut runtime = ApiRuntime::new(client);
        let page = runtime.fetch_page(PageRequest { page: 1, limit: 12 });
        assert!(page.is_empty());
        Ok(())
    }

    #[test]
    fn api_runtime_spawn_fetch_reports_page_with_generation() -> Result<()> {
        let (addr, handle) = serve_once(
            200,
            r#"{"pagination":{"total":40},"data":[{"id":7,"title":"Sky above Clouds IV"}]}"#,
        )?;
        let mut runtime = ApiRuntime::new(Client::new(&addr, Duration::from_secs(1))?);
        let (tx, rx) = mpsc::channel();

        runtime.spawn_fetch(5, PageRequest { page: 1, limit: 1 }, tx)?;
        let event = rx.recv_timeout(Duration::from_secs(5))?;
        match event {
            InternalEvent::PageLoaded { generation, page } => {
                assert_eq!(generation, 5);
                assert_eq!(page.total, 40);
                assert_eq!(page.ids(), vec![RecordId::new(7)]);
            }
            other => panic!("unexpected event {other:?}"),
        }

        handle.join().expect("server thread should join");
        Ok(())
    }

    #[test]
    fn demo_runtime_pages_memory_catalog() -> Result<()> {
        let mut runtime = DemoRuntime::new(MemoryCatalog::seeded(7, 30));
        let (tx, rx) = mpsc::channel();

        runtime.spawn_fetch(1, PageRequest { page: 3, limit: 12 }, tx)?;
        let InternalEvent::PageLoaded { generation, page } = rx.try_recv()? else {
            return Err(anyhow!("expected a page event"));
        };
        assert_eq!(generation, 1);
        assert_eq!(page.total, 30);
        assert_eq!(page.records.len(), 6);
        assert_eq!(page.records[0].id, RecordId::new(25));
        Ok(())
    }

    #[test]
    fn demo_runtime_failure_yields_empty_page() {
        let mut runtime = DemoRuntime::new(MemoryCatalog::seeded(7, 48).with_failing_page(3));
        let page = runtime.fetch_page(PageRequest { page: 3, limit: 12 });
        assert!(page.records.is_empty());
        assert_eq!(page.total, 0);

        let page = runtime.fetch_page(PageRequest { page: 2, limit: 12 });
        assert_eq!(page.records.len(), 12);
    }
}
