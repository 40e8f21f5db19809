//! Integration tests for the list query engine.
//!
//! These exercise the filter → sort → paginate pipeline end to end over a
//! small directory of village listings.

use cikadu_query::{CategoryFilter, FieldMapping, ListQueryEngine, Pagination, Query, Record, SortKey};

#[derive(Debug, Clone, PartialEq)]
struct Listing {
    id: String,
    name: String,
    description: String,
    location: String,
    category: Option<String>,
    created_at: String,
}

impl Record for Listing {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "description" => Some(&self.description),
            "location" => Some(&self.location),
            _ => None,
        }
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }
}

fn listing(id: &str, name: &str, location: &str, category: &str, created_at: &str) -> Listing {
    Listing {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("Deskripsi {name}"),
        location: location.to_string(),
        category: Some(category.to_string()),
        created_at: created_at.to_string(),
    }
}

fn directory() -> Vec<Listing> {
    vec![
        listing("1", "Kebun Organik Lembah Hijau", "Kawasan Utara Desa", "pertanian", "2024-01-05"),
        listing("2", "Sanggar Kerajinan Warisan Emas", "Pusat Desa", "kerajinan", "2024-01-10"),
        listing("3", "Kafe Pemandangan Gunung", "Jalan Utama", "kuliner", "2024-01-01"),
        listing("4", "Toko Roti Fajar Berkah", "Alun-alun Kota Lama", "kuliner", "2024-01-08"),
        listing("5", "Warung Makan Cita Rasa Nusantara", "Kawasan Utara Desa", "kuliner", "2024-01-03"),
    ]
}

fn engine() -> ListQueryEngine {
    ListQueryEngine::new(FieldMapping::new(
        &["name", "description", "location"],
        "name",
        "location",
    ))
}

fn ids(items: &[&Listing]) -> Vec<String> {
    items.iter().map(|l| l.id.clone()).collect()
}

fn sample_queries() -> Vec<Query> {
    let mut queries = Vec::new();
    for term in ["", "desa", "KAFE", "zzz", "a", "sang ", " utara", " "] {
        for category in ["all", "kuliner", "pertanian", "tidak-ada"] {
            for sort in [None, Some(SortKey::PrimaryAscending), Some(SortKey::SecondaryAscending), Some(SortKey::RecencyDescending)] {
                let mut query = Query::new().with_search(term).with_category(category);
                query.sort = sort;
                queries.push(query);
            }
        }
    }
    queries
}

#[test]
fn result_is_always_a_subset_of_input() {
    let records = directory();
    for query in sample_queries() {
        for item in engine().evaluate(&records, &query) {
            assert!(records.iter().any(|r| std::ptr::eq(r, item)));
        }
    }
}

#[test]
fn every_result_satisfies_both_predicates() {
    let records = directory();
    let engine = engine();
    for query in sample_queries() {
        let term = query.search_term.to_lowercase();
        for item in engine.evaluate(&records, &query) {
            let text_hit = term.is_empty()
                || [&item.name, &item.description, &item.location]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&term));
            assert!(text_hit, "{} should contain {term:?}", item.id);
            assert!(query.category.accepts(item.category()));
        }
    }
}

#[test]
fn evaluation_is_idempotent() {
    let records = directory();
    let engine = engine();
    for query in sample_queries() {
        let first = ids(&engine.evaluate(&records, &query));
        let second = ids(&engine.evaluate(&records, &query));
        assert_eq!(first, second);
    }
}

#[test]
fn empty_term_returns_everything_in_category_in_sort_order() {
    let records = directory();
    let query = Query::new()
        .with_category("kuliner")
        .with_sort(SortKey::PrimaryAscending);
    let result = engine().evaluate(&records, &query);
    assert_eq!(ids(&result), vec!["3", "4", "5"]);
}

#[test]
fn all_category_equals_no_category_filter() {
    let records = directory();
    let engine = engine();
    let with_all = Query::new().with_search("desa").with_category("all");
    let mut without = Query::new().with_search("desa");
    without.category = CategoryFilter::All;
    assert_eq!(
        ids(&engine.evaluate(&records, &with_all)),
        ids(&engine.evaluate(&records, &without))
    );
}

#[test]
fn recency_descending_orders_newest_first() {
    let records = vec![
        listing("a", "A", "", "x", "2024-01-01"),
        listing("b", "B", "", "x", "2024-01-10"),
        listing("c", "C", "", "x", "2024-01-05"),
    ];
    let query = Query::new().with_sort(SortKey::RecencyDescending);
    let result = engine().evaluate(&records, &query);
    let stamps: Vec<&str> = result.iter().map(|r| r.created_at()).collect();
    assert_eq!(stamps, vec!["2024-01-10", "2024-01-05", "2024-01-01"]);
}

#[test]
fn search_example_sang_finds_sanggar() {
    let records = vec![
        listing("1", "Kebun Hijau", "", "pertanian", "2024-01-01"),
        listing("2", "Sanggar Emas", "", "kerajinan", "2024-01-01"),
    ];
    let result = engine().evaluate(&records, &Query::new().with_search("sang"));
    assert_eq!(ids(&result), vec!["2"]);
}

#[test]
fn unknown_sort_keeps_filtered_order() {
    let records = directory();
    let query = Query::from_params(Some("desa"), None, Some("popularity"), None, None);
    assert!(query.sort.is_none());
    let result = engine().evaluate(&records, &query);
    assert_eq!(ids(&result), vec!["1", "2", "5"]);
}

#[test]
fn secondary_sort_orders_by_location_with_stable_ties() {
    let records = directory();
    let query = Query::new().with_sort(SortKey::SecondaryAscending);
    let result = engine().evaluate(&records, &query);
    // "Kawasan Utara Desa" appears twice (ids 1 and 5): input order is kept.
    assert_eq!(ids(&result), vec!["4", "3", "1", "5", "2"]);
}

#[test]
fn pagination_slices_sorted_matches() {
    let records = directory();
    let engine = engine();
    let base = Query::new().with_sort(SortKey::RecencyDescending);

    let page1 = engine.evaluate(&records, &base.clone().with_pagination(Pagination::new(1, 2)));
    let page2 = engine.evaluate(&records, &base.clone().with_pagination(Pagination::new(2, 2)));
    let page3 = engine.evaluate(&records, &base.clone().with_pagination(Pagination::new(3, 2)));
    let page4 = engine.evaluate(&records, &base.with_pagination(Pagination::new(4, 2)));

    assert_eq!(ids(&page1), vec!["2", "4"]);
    assert_eq!(ids(&page2), vec!["1", "5"]);
    assert_eq!(ids(&page3), vec!["3"]);
    assert!(page4.is_empty());
}

#[test]
fn no_matches_is_an_empty_sequence() {
    let records = directory();
    let result = engine().evaluate(&records, &Query::new().with_search("tidak ditemukan"));
    assert!(result.is_empty());
}

#[test]
fn only_all_category_behaves_like_no_filter() {
    let records = directory();
    let mut query = Query::new().with_search("desa");
    let unfiltered = ids(&engine().evaluate(&records, &query));

    query.category = CategoryFilter::Only("all".into());
    assert_eq!(ids(&engine().evaluate(&records, &query)), unfiltered);
}

#[test]
fn category_from_json_string_filters() {
    let records = directory();
    let query: Query = serde_json::from_str(r#"{"category":"kuliner","sort":"primary_ascending"}"#)
        .expect("deserialize");
    assert_eq!(ids(&engine().evaluate(&records, &query)), vec!["3", "4", "5"]);

    let query: Query = serde_json::from_str(r#"{"category":"all"}"#).expect("deserialize");
    assert_eq!(engine().evaluate(&records, &query).len(), records.len());
}
