//! Integration tests for the search crate.
//!
//! These tests load a catalog from file-formatted text and check that the
//! query and ranking engines agree with each other and with the indexes.

use data_loader::{MovieCatalog, MovieRecord};
use search::sort::{self, by_rating_desc};
use search::{DEFAULT_TOP_N, IndexKind, QueryEngine, RankingEngine};
use std::sync::Arc;

const HEADER: &str = "title,cast,director,tagline,keywords,overview,runtime,genres,user_rating,year,revenue";

fn create_test_setup() -> (QueryEngine, RankingEngine) {
    let rows = [
        "Zeta,A|B,Dir One,,space|alien,,100,Science Fiction|Action,5.0,2001,500",
        "Alpha,B|C,Dir Two,,heist|bank,,110,Crime|Drama,9.0,2002,100",
        "Beta,C,Dir Three,,alien|invasion,,120,Science Fiction,9.0,2003,900",
        "Omega,D|A|D,Dir Four,,,,95,Drama|Drama,3.5,2004,900",
    ];
    let text = format!("{HEADER}\n{}\n", rows.join("\n"));
    let catalog = Arc::new(MovieCatalog::load_from_reader(text.as_bytes()).unwrap());

    (QueryEngine::new(catalog.clone()), RankingEngine::new(catalog))
}

fn titles(records: &[&MovieRecord]) -> Vec<String> {
    records.iter().map(|r| r.title.clone()).collect()
}

#[test]
fn test_title_search_and_top_rated_scenario() {
    let (query, ranking) = create_test_setup();

    // Every title has an "a"; results come back in title order
    assert_eq!(
        titles(&query.search_titles("a")),
        vec!["Alpha", "Beta", "Omega", "Zeta"]
    );
    // Alpha and Beta tie on 9.0; Alpha comes first in the file
    assert_eq!(titles(&ranking.top_by_rating(2)), vec!["Alpha", "Beta"]);
}

#[test]
fn test_empty_title_search_returns_everything() {
    let (query, _) = create_test_setup();
    let all = query.search_titles("");
    assert_eq!(all.len(), query.catalog().len());
}

#[test]
fn test_genre_keys_strictly_ascending() {
    let (query, _) = create_test_setup();
    let keys = query.list_keys(IndexKind::Genre);

    assert_eq!(keys, vec!["Action", "Crime", "Drama", "Science Fiction"]);
    assert!(keys.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_each_genre_lists_record_exactly_once() {
    let (query, _) = create_test_setup();

    for record in query.catalog().records() {
        for genre in &record.genres {
            let hits = query
                .lookup_genre(genre)
                .into_iter()
                .filter(|r| std::ptr::eq(*r, record))
                .count();
            assert_eq!(hits, 1, "{} under {}", record.title, genre);
        }
    }
}

#[test]
fn test_cast_round_trip() {
    let (query, _) = create_test_setup();

    for name in ["A", "B"] {
        let zeta = query
            .lookup_cast(name)
            .into_iter()
            .filter(|r| r.title == "Zeta")
            .count();
        assert_eq!(zeta, 1);
    }
    // Repeated name in one cast list still indexes the movie once
    assert_eq!(titles(&query.lookup_cast("D")), vec!["Omega"]);
    assert!(query.lookup_cast("E").is_empty());
}

#[test]
fn test_cast_disambiguation_then_lookup() {
    let (query, _) = create_test_setup();

    let names = query.match_cast_names("c");
    assert_eq!(names, vec!["C"]);

    let mut films = query.lookup_cast(names[0]);
    sort::sort_records(&mut films, sort::by_title);
    assert_eq!(titles(&films), vec!["Alpha", "Beta"]);
}

#[test]
fn test_keyword_search() {
    let (query, _) = create_test_setup();
    assert_eq!(titles(&query.search_keywords("ALIEN")), vec!["Beta", "Zeta"]);
    assert_eq!(titles(&query.search_keywords("e|al")), vec!["Zeta"]);
}

#[test]
fn test_top_rated_matches_full_sort_prefix() {
    let (query, ranking) = create_test_setup();

    let mut full: Vec<&MovieRecord> = query.catalog().records().iter().collect();
    sort::sort_records(&mut full, by_rating_desc);

    let top = ranking.top_by_rating(DEFAULT_TOP_N);
    assert_eq!(top.len(), DEFAULT_TOP_N.min(query.catalog().len()));
    assert!(top.windows(2).all(|w| w[0].user_rating >= w[1].user_rating));
    assert_eq!(titles(&top), titles(&full[..top.len()]));
}

#[test]
fn test_top_revenue_ties_in_store_order() {
    let (_, ranking) = create_test_setup();
    assert_eq!(
        titles(&ranking.top_by_revenue(3)),
        vec!["Beta", "Omega", "Zeta"]
    );
}

#[test]
fn test_trailing_pipe_genre_has_no_empty_key() {
    let text = format!("{HEADER}\nSolo,A|,Dir,,x|,,90,Drama|,6.0,2005,10\n");
    let catalog = Arc::new(MovieCatalog::load_from_reader(text.as_bytes()).unwrap());
    let query = QueryEngine::new(catalog);

    assert_eq!(query.list_keys(IndexKind::Genre), vec!["Drama"]);
    assert_eq!(query.list_keys(IndexKind::Cast), vec!["A"]);
    assert!(query.lookup_genre("").is_empty());
    assert_eq!(titles(&query.search_keywords("x|")), vec!["Solo"]);
}

#[test]
fn test_malformed_line_produces_no_catalog() {
    let text = format!("{HEADER}\nAlpha,B|C,Dir Two\n");
    assert!(MovieCatalog::load_from_reader(text.as_bytes()).is_err());
}

#[test]
fn test_sample_data_file() {
    let text = include_str!("../../../data/sample_movies.csv");
    let catalog = Arc::new(MovieCatalog::load_from_reader(text.as_bytes()).unwrap());
    let query = QueryEngine::new(catalog.clone());
    let ranking = RankingEngine::new(catalog);

    assert_eq!(query.catalog().len(), 12);
    assert_eq!(titles(&ranking.top_by_revenue(2)), vec!["Avatar", "Titanic"]);
    assert_eq!(titles(&ranking.top_by_rating(1)), vec!["Whiplash"]);

    let mut hardy_films = query.lookup_cast("Tom Hardy");
    sort::sort_records(&mut hardy_films, sort::by_title);
    assert_eq!(
        titles(&hardy_films),
        vec!["Dunkirk", "Inception", "Mad Max: Fury Road", "The Revenant"]
    );
    assert_eq!(query.match_cast_names("chastain"), vec!["Jessica Chastain"]);
}
