//! End-to-end coverage of the mutation API, including persistence.

mod common;

use common::{document, SIMPLE_CONFIG};
use squall::{
    add, clone_block, delete, move_block, search, store, update, AddOptions, Directive,
    UpdateOptions,
};
use tempfile::tempdir;

fn directives(pairs: &[(&str, &str)]) -> Vec<Directive> {
    pairs
        .iter()
        .map(|(k, v)| Directive::new(*k, *v).unwrap())
        .collect()
}

#[test]
fn add_then_search_finds_exactly_one_block() {
    let mut doc = document(SIMPLE_CONFIG);
    add(
        &mut doc,
        AddOptions::new("google", directives(&[("HostName", "google.com")])),
    )
    .unwrap();

    let matches: Vec<String> = search(&doc, "google").map(|b| b.pattern()).collect();
    assert_eq!(matches, ["google"]);
}

#[test]
fn delete_then_lookup_fails_and_orders_stay_dense() {
    let mut doc = document(SIMPLE_CONFIG);
    add(&mut doc, AddOptions::new("extra", Vec::new())).unwrap();
    delete(&mut doc, "netscaler").unwrap();

    assert!(update(&mut doc, UpdateOptions::new("netscaler", Vec::new()))
        .unwrap_err()
        .is_not_found());
    assert!(delete(&mut doc, "netscaler").unwrap_err().is_not_found());

    let orders: Vec<usize> = doc.blocks().iter().map(squall::HostBlock::order).collect();
    assert_eq!(orders, vec![0, 1]);
}

#[test]
fn duplicate_add_without_force_leaves_document_byte_identical() {
    let mut doc = document(SIMPLE_CONFIG);
    let before = doc.to_text();

    let err = add(
        &mut doc,
        AddOptions::new("netscaler", directives(&[("Port", "1")])),
    )
    .unwrap_err();

    assert!(err.is_duplicate());
    assert_eq!(doc.to_text(), before);
}

#[test]
fn clone_produces_equal_directives_with_independent_storage() {
    let mut doc = document(SIMPLE_CONFIG);
    clone_block(&mut doc, "netscaler", "netscaler2").unwrap();

    let original: Vec<(String, String)> = doc
        .find("netscaler")
        .unwrap()
        .directives()
        .iter()
        .map(|d| (d.key().to_string(), d.value().to_string()))
        .collect();
    let cloned: Vec<(String, String)> = doc
        .find("netscaler2")
        .unwrap()
        .directives()
        .iter()
        .map(|d| (d.key().to_string(), d.value().to_string()))
        .collect();
    assert_eq!(original, cloned);

    update(
        &mut doc,
        UpdateOptions::new("netscaler2", directives(&[("hostname", "9.9.9.9")])),
    )
    .unwrap();
    assert_eq!(
        doc.find("netscaler")
            .unwrap()
            .find_directive("hostname")
            .unwrap()
            .value(),
        "1.1.1.1"
    );
}

#[test]
fn search_and_move_scenario() {
    let text = "Host a\n  HostName 1.2.3.4\n\nHost b\n  HostName 5.6.7.8\n";
    let mut doc = squall::parse(text).unwrap();

    let matches: Vec<String> = search(&doc, "a").map(|b| b.pattern()).collect();
    assert_eq!(matches, ["a"]);

    move_block(&mut doc, "b", 0).unwrap();
    let rendered = doc.to_text();

    let b_at = rendered.find("Host b").unwrap();
    let a_at = rendered.find("Host a").unwrap();
    assert!(b_at < a_at);
    assert!(rendered.contains("Host b\n  HostName 5.6.7.8"));
    assert!(rendered.contains("Host a\n  HostName 1.2.3.4"));
    assert_eq!(doc.blocks()[0].order(), 0);
    assert_eq!(doc.blocks()[1].order(), 1);
}

#[test]
fn mutations_persist_through_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config");
    std::fs::write(&path, SIMPLE_CONFIG).unwrap();

    let mut doc = store::load(&path).unwrap();
    add(
        &mut doc,
        AddOptions::new(
            "google",
            directives(&[
                ("HostName", "google.com"),
                ("User", "root"),
                ("Port", "22"),
            ]),
        ),
    )
    .unwrap();
    store::save(&doc, &path).unwrap();

    let reloaded = store::load(&path).unwrap();
    let block = reloaded.find("google").unwrap();
    assert_eq!(block.find_directive("port").unwrap().value(), "22");

    // The pre-mutation bytes are preserved in the backup.
    let backup = store::backup_path(&path);
    assert_eq!(std::fs::read_to_string(&backup).unwrap(), SIMPLE_CONFIG);
}

#[test]
fn failed_mutation_does_not_disturb_later_saves() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config");
    std::fs::write(&path, SIMPLE_CONFIG).unwrap();

    let mut doc = store::load(&path).unwrap();
    assert!(add(&mut doc, AddOptions::new("netscaler", Vec::new())).is_err());
    store::save(&doc, &path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), SIMPLE_CONFIG);
}
