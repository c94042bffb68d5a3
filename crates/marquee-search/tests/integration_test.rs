//! Integration tests for the load → build → recommend path.
//!
//! Catalogs are written to temporary CSV files shaped like a streaming
//! catalog export, with columns the loader ignores.

use std::io::Write;

use marquee_core::{load_catalog, Columns};
use marquee_search::{IndexOptions, Recommender, DEFAULT_TOP_N};
use tempfile::NamedTempFile;

const CATALOG: &str = "\
show_id,type,title,director,listed inside,description
s1,TV Show,Dark,,\"International TV Shows, TV Dramas, TV Mysteries\",A missing child
s2,TV Show,Narcos,,\"Crime TV Shows, International TV Shows, TV Dramas\",Drug lords
s3,TV Show,Mindhunter,,\"Crime TV Shows, TV Dramas, TV Thrillers\",FBI agents
s4,Movie,Superbad,Greg Mottola,Comedies,High school friends
s5,Movie,Grown Ups,Dennis Dugan,Comedies,Old friends reunite
s6,Movie,The Conjuring,James Wan,\"Horror Movies, Thrillers\",Paranormal investigators
s7,Movie,Untagged,,,Nothing to see
s8,Movie,Superbad,Greg Mottola,\"Horror Movies\",Duplicate row
";

fn write_catalog(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn recommender() -> Recommender {
    let file = write_catalog(CATALOG);
    let catalog = load_catalog(file.path(), &Columns::default()).unwrap();
    Recommender::build(catalog, &IndexOptions::default())
}

#[test]
fn test_loaded_catalog_is_cleaned() {
    let r = recommender();
    assert_eq!(r.len(), 6);
    assert!(!r.contains("Untagged"));
    assert!(r.contains("Superbad"));
}

#[test]
fn test_first_duplicate_row_wins() {
    let r = recommender();
    // the kept Superbad row is tagged "Comedies", not "Horror Movies"
    assert_eq!(r.recommend("Superbad", 1), vec!["Grown Ups"]);
}

#[test]
fn test_default_top_n_bounded_by_catalog() {
    let r = recommender();
    let recs = r.recommend("Dark", DEFAULT_TOP_N);
    assert_eq!(recs.len(), 5);
    assert!(!recs.contains(&String::from("Dark")));
}

#[test]
fn test_dramas_recommend_dramas() {
    let r = recommender();
    let recs = r.recommend("Dark", 2);
    assert_eq!(recs, vec!["Narcos", "Mindhunter"]);
}

#[test]
fn test_matrix_properties() {
    let r = recommender();
    let m = r.similarity_matrix();
    for i in 0..m.len() {
        assert!((m.get(i, i).unwrap() - 1.0).abs() < 1e-12);
        for j in 0..m.len() {
            assert_eq!(m.get(i, j), m.get(j, i));
        }
    }
}

#[test]
fn test_repeat_builds_are_identical() {
    let a = recommender();
    let b = recommender();
    assert_eq!(a.similarity_matrix(), b.similarity_matrix());
    for title in a.catalog().sorted_titles() {
        assert_eq!(a.recommend(title, 3), b.recommend(title, 3));
    }
}

#[test]
fn test_unknown_title_is_empty() {
    assert!(recommender().recommend("Not In Catalog", 7).is_empty());
}

#[test]
fn test_sorted_titles_for_selection() {
    let r = recommender();
    assert_eq!(
        r.catalog().sorted_titles(),
        vec!["Dark", "Grown Ups", "Mindhunter", "Narcos", "Superbad", "The Conjuring"]
    );
}

#[test]
fn test_header_only_catalog_builds_empty_index() {
    let file = write_catalog("title,listed inside\n");
    let catalog = load_catalog(file.path(), &Columns::default()).unwrap();
    let r = Recommender::build(catalog, &IndexOptions::default());
    assert!(r.is_empty());
    assert!(r.recommend("Dark", 7).is_empty());
}

#[test]
fn test_missing_tags_column_is_fatal() {
    let file = write_catalog("title,genre\nDark,Dramas\n");
    assert!(load_catalog(file.path(), &Columns::default()).is_err());
}
