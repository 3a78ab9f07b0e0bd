use crate::domain::StatisticsRow;
use crate::tests::utils::{builder_comp, listing, mls_comp, FakeRepository, TestSite};
use std::thread;

fn site_repo() -> FakeRepository {
    let mut repo = FakeRepository {
        listings: vec![listing("7", "Austin", 150_000.0), listing("A 1", "Boise", 90_000.0)],
        stats: Some(StatisticsRow {
            avg_predicted_lot_price: Some(185_250.0),
            builder_purchase_count: Some(312),
            total_listings: Some(2),
            ..StatisticsRow::default()
        }),
        ..FakeRepository::default()
    };
    repo.builder_comps
        .insert("7".into(), (1..=12).map(builder_comp).collect());
    repo.mls_comps
        .insert("7".into(), vec![mls_comp(1, Some(655_000.0))]);
    repo
}

#[test]
fn home_page_reads_statistics_over_http() {
    let site = TestSite::start(site_repo(), 4);

    let (status, body) = site.get("/");

    assert_eq!(status, 200);
    assert!(body.contains("market-stats"));
    assert!(body.contains("$185,250"));
    assert!(body.contains("Based on 312 builder purchases"));
    assert!(site.hits().contains(&"/api/statistics".to_string()));
}

#[test]
fn property_page_reads_detail_over_http() {
    let site = TestSite::start(site_repo(), 4);

    let (status, body) = site.get("/property/7");

    assert_eq!(status, 200);
    assert!(body.contains("7 Main St"));
    assert!(body.contains("12 comps"));
    // dates survive the JSON round trip
    assert!(body.contains("Jan 1, 2024"));
    assert!(body.contains("$655,000"));
    assert!(site.hits().contains(&"/api/property/7".to_string()));
}

#[test]
fn escaped_ids_resolve_the_same_over_http() {
    let site = TestSite::start(site_repo(), 4);

    let (status, body) = site.get("/property/A%201");

    assert_eq!(status, 200);
    assert!(body.contains("A 1 Main St"));
    assert!(site.hits().contains(&"/api/property/A%201".to_string()));
}

#[test]
fn api_404_becomes_html_404() {
    let site = TestSite::start(site_repo(), 4);

    let (status, body) = site.get("/property/188827418");

    assert_eq!(status, 404);
    assert!(body.contains("Not Found"));
    assert!(site.hits().contains(&"/api/property/188827418".to_string()));
}

#[test]
fn api_500_becomes_html_500() {
    let site = TestSite::start(FakeRepository::failing(), 4);

    let (status, body) = site.get("/property/7");
    assert_eq!(status, 500);
    assert!(body.contains("Something went wrong"));

    let (status, body) = site.get("/");
    assert_eq!(status, 200);
    assert!(!body.contains("market-stats"));
}

#[test]
fn single_worker_renders_pages_in_process() {
    let site = TestSite::start(site_repo(), 1);

    let (status, body) = site.get("/property/7");

    assert_eq!(status, 200);
    assert!(body.contains("7 Main St"));
    assert!(!site.hits().contains(&"/api/property/7".to_string()));
}

#[test]
fn concurrent_pages_do_not_starve_the_api() {
    let site = TestSite::start(site_repo(), 2);

    thread::scope(|s| {
        let pages: Vec<_> = (0..6)
            .map(|_| s.spawn(|| site.get("/property/7")))
            .collect();

        for page in pages {
            let (status, body) = page.join().unwrap();
            assert_eq!(status, 200);
            assert!(body.contains("7 Main St"));
        }
    });
}
