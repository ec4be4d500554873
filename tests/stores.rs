use yalla::stores::{filter_by_name, CatalogError, StoreCatalog, StoreRecord};

fn store(id: i64, name: &str) -> StoreRecord {
    StoreRecord {
        id,
        name: name.to_string(),
        description: format!("{} description", name),
        comments: vec!["first".to_string(), "second".to_string(), "third".to_string()],
        link: format!("https://www.example.com/{}", id),
    }
}

fn two_store_corpus() -> Vec<StoreRecord> {
    vec![store(1, "Tech World"), store(2, "Fashion Fiesta")]
}

#[test]
fn test_empty_query_yields_empty_result() {
    let corpus = two_store_corpus();
    // Never the full corpus
    assert!(filter_by_name("", &corpus).is_empty());
}

#[test]
fn test_substring_match_on_name_only() {
    let corpus = two_store_corpus();

    let results = filter_by_name("tech", &corpus);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 1);

    // Descriptions contain "description" but no name does
    assert!(filter_by_name("description", &corpus).is_empty());
}

#[test]
fn test_filter_is_case_insensitive() {
    let corpus = two_store_corpus();
    assert_eq!(filter_by_name("tech", &corpus), filter_by_name("TECH", &corpus));
    assert_eq!(filter_by_name("fIeStA", &corpus), filter_by_name("fiesta", &corpus));
}

#[test]
fn test_filter_is_idempotent() {
    let corpus = two_store_corpus();
    let once = filter_by_name("o", &corpus);
    let twice = filter_by_name("o", &once);
    assert_eq!(once, twice);
}

#[test]
fn test_filter_preserves_corpus_order() {
    let corpus = vec![store(3, "Alpha"), store(1, "Beta"), store(2, "Gamma")];
    let results = filter_by_name("a", &corpus);
    let ids: Vec<i64> = results.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn test_seed_catalog_has_unique_stable_ids() {
    let catalog = StoreCatalog::seed();
    assert!(!catalog.is_empty());

    let mut ids: Vec<i64> = catalog.records().iter().map(|r| r.id).collect();
    let before = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), before);
}

#[test]
fn test_seed_catalog_contains_known_stores() {
    let catalog = StoreCatalog::seed();
    let names: Vec<&str> = catalog.records().iter().map(|r| r.name.as_str()).collect();
    assert!(names.contains(&"Tech World"));
    assert!(names.contains(&"Fashion Fiesta"));
}

#[test]
fn test_duplicate_ids_rejected() {
    let result = StoreCatalog::new(vec![store(1, "One"), store(1, "Other One")]);
    assert!(matches!(result, Err(CatalogError::DuplicateId(1))));
}

#[test]
fn test_catalog_file_round_trip() {
    let corpus = two_store_corpus();
    let path = std::env::temp_dir().join("yalla_catalog_round_trip.json");
    std::fs::write(&path, serde_json::to_string_pretty(&corpus).unwrap()).unwrap();

    let catalog = StoreCatalog::from_file(&path).unwrap();
    assert_eq!(catalog.records(), corpus.as_slice());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_catalog_file_errors() {
    assert!(matches!(
        StoreCatalog::from_file("/definitely/not/a/real/path.json"),
        Err(CatalogError::Io { .. })
    ));

    let path = std::env::temp_dir().join("yalla_catalog_invalid.json");
    std::fs::write(&path, "not json at all").unwrap();
    assert!(matches!(
        StoreCatalog::from_file(&path),
        Err(CatalogError::Parse { .. })
    ));
    let _ = std::fs::remove_file(&path);
}
