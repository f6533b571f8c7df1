//! End-to-end resolution over a catalog snapshot, through the public API.

use brandmatch::{BrandRecord, CatalogSnapshot, MatchPolicy, Resolver};

fn record(location: &str, floor: &str, name: &str, category: Option<&str>) -> BrandRecord {
    BrandRecord {
        location: location.to_string(),
        floor: floor.to_string(),
        name: name.to_string(),
        category: category.map(str::to_string),
    }
}

fn department_store_catalog() -> CatalogSnapshot {
    CatalogSnapshot::from_records(vec![
        record("遠百板橋", "1F", "Nike", Some("運動")),
        record("遠百板橋", "2F", "UNIQLO", Some("服飾")),
        record("桃園遠東百貨", "3F", "UNIQLO", Some("服飾")),
        record("遠百信義A13", "B1", "Under Armour", Some("運動")),
        record("遠百信義A13", "4F", "Uniqlo Kids", Some("童裝")),
        record("大江購物中心", "1F", "Adidas", Some("運動")),
    ])
}

fn resolver() -> Resolver {
    Resolver::new(MatchPolicy::default()).expect("default policy is valid")
}

#[test]
fn containment_match_resolves_to_the_first_qualifying_brand() {
    let catalog = department_store_catalog();
    let resolution = resolver().resolve("uniqlo", catalog.names());

    assert_eq!(resolution.matched_names, ["UNIQLO"]);
    let best = resolution.token_matches[0].best.as_ref().expect("matched");
    assert_eq!(best.distance, 0);
    // Exact hit, so nothing to suggest.
    assert!(resolution.suggestion.is_none());

    // Every UNIQLO counter across locations is retained for filtering.
    let rows = catalog.filter(&resolution.matched_names);
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.name == "UNIQLO"));
}

#[test]
fn misspelled_multi_brand_query_yields_matches_and_one_suggestion() {
    let catalog = department_store_catalog();
    let resolution = resolver().resolve("Nikee，under armor", catalog.names());

    assert_eq!(resolution.matched_names, ["Nike", "Under Armour"]);
    let suggestion = resolution.suggestion.expect("a correction was applied");
    assert_eq!(suggestion.input, "Nikee");
    assert_eq!(suggestion.name, "Nike");
    assert_eq!(suggestion.distance, 1);

    let rows = catalog.filter(&resolution.matched_names);
    assert_eq!(rows.len(), 2);
}

#[test]
fn hopeless_token_filters_nothing() {
    let catalog = department_store_catalog();
    let resolution = resolver().resolve("3M", catalog.names());

    assert!(resolution.matched_names.is_empty());
    assert!(resolution.suggestion.is_none());
    assert!(catalog.filter(&resolution.matched_names).is_empty());
}

#[test]
fn snapshot_from_json_feeds_the_resolver() {
    let payload = r#"[
        {"location": "遠百板橋", "floor": "1F", "name": "Nike", "category": "運動"},
        {"location": "遠百板橋", "floor": "2F", "name": "Puma"}
    ]"#;
    let catalog = CatalogSnapshot::from_json_str(payload).expect("payload parses");
    let resolution = resolver().resolve("puma, nikee", catalog.names());
    assert_eq!(resolution.matched_names, ["Puma", "Nike"]);
}

#[test]
fn snapshot_is_safe_to_share_across_threads() {
    let catalog = std::sync::Arc::new(department_store_catalog());
    let resolver = std::sync::Arc::new(resolver());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let catalog = catalog.clone();
            let resolver = resolver.clone();
            std::thread::spawn(move || resolver.resolve("Nikee, uniqlo", catalog.names()))
        })
        .collect();

    let mut resolutions = handles
        .into_iter()
        .map(|h| h.join().expect("worker thread panicked"));
    let first = resolutions.next().expect("at least one worker");
    assert!(resolutions.all(|r| r == first));
}
