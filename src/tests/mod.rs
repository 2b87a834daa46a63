use std::cell::RefCell;
use std::time::Duration;

use crate::prelude::*;


use fake::*;

const UNITS: &[&str] = &["Aatrox", "Ahri", "Akali"];

fn mirror(version: &str) -> FakeClient {
    let mut client = FakeClient::new()
        .with_body(get_listing_uri(version), listing_page(UNITS));

    for unit in UNITS {
        client = client.with_body(get_unit_data_uri(version, unit), format!("{{\"mCharacterName\": \"{unit}\"}}"));
    }

    client
}

#[test]
fn all_units_downloaded() -> anyhow::Result<()> {
    let temp = tempfile::tempdir()?;
    let output = temp.path().join("unit_data");

    let client = mirror("latest");
    let report = run(&client, "latest", &output, Duration::ZERO, |_| {})?;

    assert_eq!(report.written, ["Aatrox", "Ahri", "Akali"]);
    assert!(report.is_complete());
    assert_eq!(report.pretty_failed(), "[]");

    for unit in UNITS {
        assert_eq!(std::fs::read_to_string(output.join(unit))?, format!("{{\"mCharacterName\": \"{unit}\"}}"));
    }

    assert_eq!(std::fs::read_dir(&output)?.count(), 3);

    Ok(())
}

#[test]
fn failed_unit_reported() -> anyhow::Result<()> {
    let temp = tempfile::tempdir()?;
    let output = temp.path().join("unit_data");

    let client = mirror("latest")
        .with_status(get_unit_data_uri("latest", "Ahri"), 404);

    let updates = RefCell::new(Vec::new());

    let report = run(&client, "latest", &output, Duration::ZERO, |update| {
        updates.borrow_mut().push(update);
    })?;

    assert_eq!(report.written, ["Aatrox", "Akali"]);
    assert_eq!(report.failed, ["Ahri"]);
    assert_eq!(report.pretty_failed(), "[\n    \"Ahri\",\n]");

    assert!(output.join("Aatrox").is_file());
    assert!(!output.join("Ahri").exists());
    assert!(output.join("Akali").is_file());

    let updates = updates.into_inner();

    assert_eq!(updates[0], Update::RequestingListing { uri: get_listing_uri("latest") });
    assert_eq!(updates[1], Update::ListingFetched { count: 3 });

    let requested = updates.iter()
        .filter_map(Update::uri)
        .collect::<Vec<_>>();

    assert_eq!(requested, client.requests());

    Ok(())
}

#[test]
fn console_output() -> anyhow::Result<()> {
    let temp = tempfile::tempdir()?;

    let client = mirror("latest")
        .with_status(get_unit_data_uri("latest", "Ahri"), 404);

    let lines = RefCell::new(Vec::new());

    let report = run(&client, "latest", temp.path().join("unit_data"), Duration::ZERO, |update| {
        if let Some(line) = update.console_line() {
            lines.borrow_mut().push(line);
        }
    })?;

    let mut lines = lines.into_inner();

    lines.push(report.summary());

    assert_eq!(lines.join("\n"), [
        "Requesting: https://raw.communitydragon.org/latest/game/data/characters/",
        "Requesting: https://raw.communitydragon.org/latest/game/data/characters/Aatrox/Aatrox.bin.json",
        "Requesting: https://raw.communitydragon.org/latest/game/data/characters/Ahri/Ahri.bin.json",
        "Failed to retrieve data for Ahri. (Failed to fetch unit data: HTTP Error 404: Not Found)",
        "Requesting: https://raw.communitydragon.org/latest/game/data/characters/Akali/Akali.bin.json",
        "Error retrieving following units:",
        "[",
        "    \"Ahri\",",
        "]"
    ].join("\n"));

    Ok(())
}

#[test]
fn rerun_is_idempotent() -> anyhow::Result<()> {
    let temp = tempfile::tempdir()?;
    let output = temp.path().join("unit_data");

    let client = mirror("13.24");

    run(&client, "13.24", &output, Duration::ZERO, |_| {})?;

    let first = std::fs::read(output.join("Ahri"))?;

    let report = run(&client, "13.24", &output, Duration::ZERO, |_| {})?;

    assert_eq!(std::fs::read(output.join("Ahri"))?, first);

    // Nothing is skipped on the second run
    assert_eq!(report.written.len(), 3);
    assert_eq!(client.requests().len(), 8);

    Ok(())
}

#[test]
fn listing_failure_is_fatal() -> anyhow::Result<()> {
    let temp = tempfile::tempdir()?;
    let output = temp.path().join("unit_data");

    let client = mirror("latest");

    // Only "latest" is served
    assert!(run(&client, "pbe", &output, Duration::ZERO, |_| {}).is_err());

    // Output folder is created before the listing is requested
    assert!(output.is_dir());
    assert_eq!(std::fs::read_dir(&output)?.count(), 0);

    assert_eq!(client.requests(), [get_listing_uri("pbe")]);

    Ok(())
}

#[test]
fn output_folder_parent_must_exist() -> anyhow::Result<()> {
    let temp = tempfile::tempdir()?;

    let client = mirror("latest");

    assert!(run(&client, "latest", temp.path().join("a/b"), Duration::ZERO, |_| {}).is_err());
    assert!(client.requests().is_empty());

    Ok(())
}

#[test]
fn empty_listing() -> anyhow::Result<()> {
    let temp = tempfile::tempdir()?;
    let output = temp.path().join("unit_data");

    let client = FakeClient::new()
        .with_body(get_listing_uri("latest"), listing_page(&[]));

    let report = run(&client, "latest", &output, Duration::ZERO, |_| {})?;

    assert_eq!(report.total(), 0);
    assert!(output.is_dir());

    Ok(())
}
