// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, anyhow};
use std::thread;
use std::time::Duration;
use tiny_http::{Header, Response, Server};
use vitrine_api::Client;
use vitrine_app::{PageRequest, RecordId};

fn json_header() -> Header {
    Header::from_bytes("Content-Type", "application/json").expect("valid content type header")
}

#[test]
fn unreachable_endpoint_error_names_the_config_key() {
    let client = Client::new("http://127.0.0.1:1/api/v1/artworks", Duration::from_millis(50))
        .expect("client should initialize");

    let error = client
        .fetch_page(PageRequest { page: 1, limit: 12 })
        .expect_err("fetch should fail for unreachable endpoint");
    let message = error.to_string();
    assert!(message.contains("[api]"), "unexpected message: {message}");
}

#[test]
fn fetch_page_decodes_records_and_total() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}/api/v1/artworks", server.server_addr());

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        assert!(request.url().starts_with("/api/v1/artworks?"));
        assert!(request.url().contains("page=2"));
        assert!(request.url().contains("limit=3"));
        assert!(request.url().contains("fields=id%2Ctitle"));

        let body = r#"{
            "pagination": {"total": 7, "limit": 3, "current_page": 2},
            "data": [
                {"id": 14, "title": "Nighthawks", "artist_display": "Edward Hopper\nAmerican, 1882-1967", "place_of_origin": "United States", "inscriptions": null, "date_start": 1942, "date_end": 1942},
                {"id": 15, "title": null, "artist_display": null, "place_of_origin": null, "inscriptions": null, "date_start": null, "date_end": null},
                {"id": 16, "title": "The Bedroom", "artist_display": "Vincent van Gogh", "place_of_origin": "France", "inscriptions": "signed", "date_start": 1889, "date_end": 1889}
            ]
        }"#;
        let response = Response::from_string(body)
            .with_status_code(200)
            .with_header(json_header());
        request.respond(response).expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let page = client.fetch_page(PageRequest { page: 2, limit: 3 })?;
    assert_eq!(page.total, 7);
    assert_eq!(
        page.ids(),
        vec![RecordId::new(14), RecordId::new(15), RecordId::new(16)]
    );
    assert_eq!(page.records[0].artist_label(), "Edward Hopper American, 1882-1967");
    assert_eq!(page.records[1].title_label(), "Untitled");

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn fetch_page_surfaces_server_error_message() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}/api/v1/artworks", server.server_addr());

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        let response = Response::from_string(
            r#"{"status":403,"error":"Invalid number of results","detail":"You have requested too many resources per page."}"#,
        )
        .with_status_code(403)
        .with_header(json_header());
        request.respond(response).expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let error = client
        .fetch_page(PageRequest {
            page: 1,
            limit: 1000,
        })
        .expect_err("403 should fail");
    let message = error.to_string();
    assert!(message.contains("403"), "unexpected message: {message}");
    assert!(message.contains("too many resources"), "unexpected message: {message}");

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn fetch_page_reports_malformed_json() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}/api/v1/artworks", server.server_addr());

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        let response = Response::from_string(r#"{"data": "#)
            .with_status_code(200)
            .with_header(json_header());
        request.respond(response).expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let error = client
        .fetch_page(PageRequest { page: 1, limit: 12 })
        .expect_err("truncated body should fail");
    assert!(error.to_string().contains("decode artworks page"));

    handle.join().expect("server thread should join");
    Ok(())
}
