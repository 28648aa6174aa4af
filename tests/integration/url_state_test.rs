//! Browse State URL Integration Tests
//!
//! Tests for the query-string round trip through the application
//! state and the search/filter behavior it drives.

use prompt_helper::{AppState, MemoryStorage, ViewMode};

fn app() -> AppState<MemoryStorage> {
    AppState::new(MemoryStorage::new()).unwrap()
}

#[test]
fn test_fresh_state_has_empty_location_query() {
    assert_eq!(app().location_query(), "");
}

#[test]
fn test_location_query_round_trip() {
    let mut app = app();
    app.set_search_term("cot");
    app.set_category_filter(Some("reasoning-frameworks"));
    app.set_view(ViewMode::List);

    let query = app.location_query();
    assert_eq!(query, "?q=cot&category=reasoning-frameworks&view=list");

    let mut restored = self::app();
    restored.apply_location_query(&query);
    assert_eq!(restored.browse(), app.browse());
}

#[test]
fn test_apply_bookmarked_query_filters_techniques() {
    let mut app = app();
    app.apply_location_query("?q=cot&category=reasoning-frameworks&view=list");

    assert_eq!(app.browse().view, ViewMode::List);
    let visible = app.visible_techniques();
    assert!(!visible.is_empty());
    assert!(visible
        .iter()
        .all(|t| t.category_id == "reasoning-frameworks"));
}

#[test]
fn test_garbage_view_value_falls_back_to_cards() {
    let mut app = app();
    app.apply_location_query("?view=grid&q=react");
    assert_eq!(app.browse().view, ViewMode::Cards);
    assert_eq!(app.browse().search_term, "react");
}

#[test]
fn test_clearing_filters_restores_empty_query() {
    let mut app = app();
    app.set_search_term("react");
    app.set_category_filter(Some("agent-tool-use"));
    app.set_search_term("");
    app.set_category_filter(None);
    assert_eq!(app.location_query(), "");
}

#[test]
fn test_search_matches_aliases_case_insensitively() {
    let mut app = app();
    app.set_search_term("VANILLA");
    let visible = app.visible_techniques();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "basic-prompting");
}

#[test]
fn test_empty_search_shows_all_in_category() {
    let mut app = app();
    app.set_category_filter(Some("self-improvement"));
    let visible = app.visible_techniques();
    assert_eq!(visible.len(), 2);
}
