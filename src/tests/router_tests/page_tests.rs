use crate::domain::StatisticsRow;
use crate::tests::utils::{
    builder_comp, get, listing, mls_comp, state_with, FakeRepository, SECRET_DB_TEXT,
};

fn repo_with_stats() -> FakeRepository {
    FakeRepository {
        stats: Some(StatisticsRow {
            avg_predicted_lot_price: Some(185_250.0),
            avg_predicted_sale_price: Some(642_000.0),
            builder_purchase_count: Some(312),
            new_construction_count: Some(87),
            total_listings: Some(1450),
            total_cities: Some(23),
            ..StatisticsRow::default()
        }),
        ..FakeRepository::default()
    }
}

#[test]
fn home_page_shows_market_statistics() {
    let (_, state) = state_with(repo_with_stats());

    let (status, body) = get(&state, "/");

    assert_eq!(status, 200);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("OffMarketLots.com"));
    assert!(body.contains("market-stats"));
    assert!(body.contains("$185,250"));
    assert!(body.contains("$642,000"));
    assert!(body.contains("Based on 312 builder purchases"));
    assert!(body.contains("Based on 87 new constructions"));
    assert!(body.contains("1450"));
    assert!(body.contains("Across 23 cities"));
}

#[test]
fn home_page_renders_zero_statistics_on_empty_dataset() {
    let (_, state) = state_with(FakeRepository::default());

    let (status, body) = get(&state, "/");

    assert_eq!(status, 200);
    assert!(body.contains("market-stats"));
    assert!(body.contains("Based on 0 builder purchases"));
}

#[test]
fn home_page_survives_statistics_failure() {
    let (_, state) = state_with(FakeRepository::failing());

    let (status, body) = get(&state, "/");

    assert_eq!(status, 200);
    assert!(body.contains("What We Do"));
    assert!(!body.contains("market-stats"));
    assert!(!body.contains(SECRET_DB_TEXT));
}

#[test]
fn property_page_renders_listing_and_empty_comps() {
    let (_, state) = state_with(FakeRepository {
        listings: vec![listing("188827418", "Austin", 120_000.0)],
        ..FakeRepository::default()
    });

    let (status, body) = get(&state, "/property/188827418");

    assert_eq!(status, 200);
    assert!(body.contains("188827418 Main St"));
    assert!(body.contains("Austin, TX 78701"));
    assert!(body.contains("ID: 188827418"));
    assert!(body.contains("8,712 sq ft"));
    assert!(body.contains("$120,000"));
    assert!(body.contains("$480,000"));
    assert!(body.contains("37.5%"));
    assert!(body.contains("No builder purchase comps available"));
    assert!(body.contains("No new construction comps available"));
    assert!(!body.contains("Year Built"));
    assert!(!body.contains("Building Size"));
}

#[test]
fn property_page_shows_year_built_when_known() {
    let mut l = listing("42", "Austin", 99_000.0);
    l.year_built = Some(1962);
    l.square_footage = Some(1840.0);
    let (_, state) = state_with(FakeRepository {
        listings: vec![l],
        ..FakeRepository::default()
    });

    let (_, body) = get(&state, "/property/42");

    assert!(body.contains("Year Built"));
    assert!(body.contains("1962"));
    assert!(body.contains("Building Size"));
    assert!(body.contains("1,840 sq ft"));
}

#[test]
fn property_page_truncates_comp_tables_to_ten_rows() {
    let mut repo = FakeRepository {
        listings: vec![listing("7", "Austin", 150_000.0)],
        ..FakeRepository::default()
    };
    repo.builder_comps
        .insert("7".into(), (1..=12).map(builder_comp).collect());
    repo.mls_comps.insert(
        "7".into(),
        vec![mls_comp(1, Some(655_000.0)), mls_comp(2, None)],
    );
    let (_, state) = state_with(repo);

    let (status, body) = get(&state, "/property/7");

    assert_eq!(status, 200);
    assert_eq!(body.matches(" Builder Way").count(), 10);
    assert!(body.contains("12 comps"));
    assert!(body.contains("Jan 1, 2024"));
    // sale price first, list price when the sale price is missing
    assert!(body.contains("$655,000"));
    assert!(body.contains("$610,000"));
    assert!(body.contains("Total Comparables:"));
    assert!(body.contains("<strong>14</strong>"));
}

#[test]
fn unknown_property_page_is_404() {
    let (_, state) = state_with(FakeRepository::default());

    let (status, body) = get(&state, "/property/188827418");

    assert_eq!(status, 404);
    assert!(body.contains("Not Found"));
}

#[test]
fn property_page_failure_is_500_without_details() {
    let (_, state) = state_with(FakeRepository::failing());

    let (status, body) = get(&state, "/property/1");

    assert_eq!(status, 500);
    assert!(body.contains("Something went wrong"));
    assert!(!body.contains(SECRET_DB_TEXT));
}

#[test]
fn unknown_page_is_html_404() {
    let (_, state) = state_with(FakeRepository::default());

    let (status, body) = get(&state, "/admin");

    assert_eq!(status, 404);
    assert!(body.contains("<!DOCTYPE html>"));
}

#[test]
fn property_page_decodes_its_id() {
    let (_, state) = state_with(FakeRepository {
        listings: vec![listing("A 1", "Boise", 90_000.0)],
        ..FakeRepository::default()
    });

    let (status, body) = get(&state, "/property/A%201");

    assert_eq!(status, 200);
    assert!(body.contains("A 1 Main St"));
}
