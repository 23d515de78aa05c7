//! Panel tests against a mock `/similarity` backend.

use std::time::Duration;

use egui::accesskit::Role;
use kittest::Queryable;
use similarity_business::{ColumnFilter, ColumnKey, SortDirection, TextFilter};
use similarity_ui::widgets::{HEADING, LOADING_TEXT, NO_ROWS_TEXT};
use wiremock::ResponseTemplate;

mod common;

use common::{TestCtx, ok_matches};

#[tokio::test]
async fn shows_loading_indicator_until_data_arrives() {
    let mut ctx = TestCtx::new(ok_matches(3).set_delay(Duration::from_millis(800))).await;
    let harness = ctx.harness_mut();

    harness.step();

    assert!(harness.state().view().is_loading());
    assert!(harness.query_by_label(HEADING).is_some());
    assert!(harness.query_by_label(LOADING_TEXT).is_some());
    assert!(harness.query_by_label("Orion Code").is_none());

    ctx.settle().await;

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label(LOADING_TEXT).is_none());
    assert!(harness.query_by_label("Orion Code").is_some());
}

#[tokio::test]
async fn loaded_rows_get_serial_numbers_in_order() {
    let mut ctx = TestCtx::new(ok_matches(3)).await;
    ctx.settle().await;
    let harness = ctx.harness_mut();

    let rows = harness.state().view().rows();
    assert_eq!(rows.len(), 3);
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.serial_number, i + 1);
    }

    assert!(harness.query_by_label("OR-001").is_some());
    assert!(harness.query_by_label("SDP item 3").is_some());
    assert!(harness.query_by_label(NO_ROWS_TEXT).is_none());
    assert!(harness.query_by_label("1 to 3 of 3").is_some());
}

#[tokio::test]
async fn empty_matches_show_headers_and_no_rows_overlay() {
    let mut ctx = TestCtx::new(
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "matches": [] })),
    )
    .await;
    ctx.settle().await;
    let harness = ctx.harness_mut();

    assert!(harness.state().view().rows().is_empty());
    assert!(harness.query_by_label(LOADING_TEXT).is_none());
    for header in ["Sl No", "Orion Code", "SDP Description", "Similarity Score"] {
        assert!(
            harness.query_by_label(header).is_some(),
            "missing header {header}"
        );
    }
    assert!(harness.query_by_label(NO_ROWS_TEXT).is_some());
    assert!(harness.query_by_label("0 to 0 of 0").is_some());
}

#[tokio::test]
async fn failed_fetch_stops_loading_with_no_rows() {
    let mut ctx = TestCtx::new(ResponseTemplate::new(500)).await;
    ctx.settle().await;
    let harness = ctx.harness_mut();

    assert!(!harness.state().view().is_loading());
    assert!(harness.state().view().rows().is_empty());
    assert!(harness.query_by_label(LOADING_TEXT).is_none());
    assert!(harness.query_by_label(NO_ROWS_TEXT).is_some());
}

#[tokio::test]
async fn malformed_body_stops_loading_with_no_rows() {
    let mut ctx = TestCtx::new(ResponseTemplate::new(200).set_body_string("<html>")).await;
    ctx.settle().await;
    let harness = ctx.harness_mut();

    assert!(harness.state().view().rows().is_empty());
    assert!(harness.query_by_label(NO_ROWS_TEXT).is_some());
}

#[tokio::test]
async fn text_filter_hides_rows_without_touching_data() {
    let mut ctx = TestCtx::new(ok_matches(120)).await;
    ctx.settle().await;
    let harness = ctx.harness_mut();

    {
        let state = harness.state_mut();
        state.filter_inputs.text_mut(ColumnKey::SourceCode).text = "or-05".to_owned();
        assert!(state.filter_inputs.apply_to(&mut state.grid));
    }
    harness.step();

    assert_eq!(harness.state().view().rows().len(), 120);
    assert!(harness.query_by_label("1 to 10 of 10").is_some());
    assert!(harness.query_by_label("OR-050").is_some());
    assert!(harness.query_by_label("OR-001").is_none());

    let state = harness.state();
    let rows = state.view().rows();
    let page = state.grid.page_indices(rows);
    let serials: Vec<_> = page.iter().map(|&i| rows[i].serial_number).collect();
    assert_eq!(serials, (50..=59).collect::<Vec<_>>());
}

#[tokio::test]
async fn unmatched_filter_shows_no_rows_overlay() {
    let mut ctx = TestCtx::new(ok_matches(5)).await;
    ctx.settle().await;
    let harness = ctx.harness_mut();

    {
        let state = harness.state_mut();
        state.filter_inputs.number_mut(ColumnKey::SimilarityScore).min = "2".to_owned();
        state.filter_inputs.apply_to(&mut state.grid);
    }
    harness.step();

    assert!(harness.query_by_label(NO_ROWS_TEXT).is_some());
    assert!(harness.query_by_label("0 to 0 of 0").is_some());
    assert_eq!(harness.state().view().rows().len(), 5);
}

#[tokio::test]
async fn sorting_reorders_rows_and_keeps_serials() {
    let mut ctx = TestCtx::new(ok_matches(120)).await;
    ctx.settle().await;
    let harness = ctx.harness_mut();

    harness
        .state_mut()
        .grid
        .set_sort(ColumnKey::SimilarityScore, SortDirection::Ascending);
    harness.step();

    assert!(harness.query_by_label("OR-120").is_some());
    assert!(harness.query_by_label("OR-001").is_none());
    assert!(harness.query_by_label("Similarity Score ⬆").is_some());

    let state = harness.state();
    let rows = state.view().rows();
    let first = state.grid.page_indices(rows)[0];
    assert_eq!(rows[first].serial_number, 120);
    assert_eq!(rows[first].source_code, "OR-120");
}

#[tokio::test]
async fn paging_buttons_walk_through_pages() {
    let mut ctx = TestCtx::new(ok_matches(120)).await;
    ctx.settle().await;
    let harness = ctx.harness_mut();

    assert!(harness.query_by_label("1 to 50 of 120").is_some());
    assert!(harness.query_by_label("Page 1 of 3").is_some());

    harness.get_by_label("Next").click();
    harness.step();
    harness.step();

    assert!(harness.query_by_label("51 to 100 of 120").is_some());
    assert!(harness.query_by_label("Page 2 of 3").is_some());
    assert!(harness.query_by_label("OR-051").is_some());

    harness.get_by_label("Last").click();
    harness.step();
    harness.step();

    assert!(harness.query_by_label("101 to 120 of 120").is_some());
    assert!(harness.query_by_label("Page 3 of 3").is_some());

    harness.get_by_label("First").click();
    harness.step();
    harness.step();

    assert!(harness.query_by_label("1 to 50 of 120").is_some());
}

#[tokio::test]
async fn changing_a_filter_returns_to_first_page() {
    let mut ctx = TestCtx::new(ok_matches(120)).await;
    ctx.settle().await;
    let harness = ctx.harness_mut();

    harness.state_mut().grid.next_page(120);
    harness.step();
    assert!(harness.query_by_label("Page 2 of 3").is_some());

    {
        let state = harness.state_mut();
        state.filter_inputs.text_mut(ColumnKey::TargetDescription).text = "item".to_owned();
        state.filter_inputs.apply_to(&mut state.grid);
    }
    harness.step();

    assert_eq!(harness.state().grid.pagination().page(), 0);
    assert!(harness.query_by_label("1 to 50 of 120").is_some());
}

#[tokio::test]
async fn header_clicks_cycle_the_sort() {
    let mut ctx = TestCtx::new(ok_matches(120)).await;
    ctx.settle().await;
    let harness = ctx.harness_mut();

    harness.get_by_label("Similarity Score").click();
    harness.step();
    harness.step();

    assert_eq!(
        harness.state().grid.sort().active(),
        Some((ColumnKey::SimilarityScore, SortDirection::Ascending))
    );
    assert!(harness.query_by_label("OR-120").is_some());
    assert!(harness.query_by_label("OR-001").is_none());

    harness.get_by_label("Similarity Score ⬆").click();
    harness.step();
    harness.step();

    assert_eq!(
        harness.state().grid.sort().active(),
        Some((ColumnKey::SimilarityScore, SortDirection::Descending))
    );
    assert!(harness.query_by_label("OR-001").is_some());
    assert!(harness.query_by_label("OR-120").is_none());

    harness.get_by_label("Similarity Score ⬇").click();
    harness.step();
    harness.step();

    assert_eq!(harness.state().grid.sort().active(), None);
    assert!(harness.query_by_label("Similarity Score").is_some());
}

#[tokio::test]
async fn typing_in_the_filter_row_filters_rows() {
    let mut ctx = TestCtx::new(ok_matches(120)).await;
    ctx.settle().await;
    let harness = ctx.harness_mut();

    harness.get_by_label("Next").click();
    harness.step();
    harness.step();
    assert!(harness.query_by_label("Page 2 of 3").is_some());

    // The first filter field belongs to "Orion Code"; "Sl No" has none.
    harness
        .query_all_by_role(Role::TextInput)
        .next()
        .expect("filter row is drawn")
        .type_text("or-05");
    harness.step();
    harness.step();

    assert_eq!(
        harness.state().grid.filters().get(ColumnKey::SourceCode),
        Some(&ColumnFilter::Text(TextFilter::contains("or-05")))
    );
    assert!(harness.query_by_label("1 to 10 of 10").is_some());
    assert!(harness.query_by_label("Page 1 of 1").is_some());
    assert!(harness.query_by_label("OR-050").is_some());
    assert_eq!(harness.state().view().rows().len(), 120);
}
