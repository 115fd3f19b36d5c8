//! End-to-end demo: one full search session against a canned backend.
//!
//! Run with `cargo run -p scout-demo`. Set `RUST_LOG=debug` to watch the
//! controller's transitions.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use scout_core::{ResultRecord, SearchQuery, SearchResponse, SearchSpecs, Stage};
use scout_render::{render_error_alert, render_progress, CardFragment};
use scout_session::{
    FetchError, MemoryStore, ModalKind, Preferences, SearchBackend, SessionController, UiSurface,
};
use tracing_subscriber::EnvFilter;

/// Backend serving a small fixed catalog.
struct CannedBackend;

#[async_trait]
impl SearchBackend for CannedBackend {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, FetchError> {
        tracing::info!(query = %query.query, "serving canned results");

        let mut earbuds = ResultRecord::new(1, "Wireless Earbuds Pro", "Acme Audio", 49.99);
        earbuds.original_price = Some(79.99);
        earbuds.discount = Some(37.0);
        earbuds.rating = Some(4.6);
        earbuds.reviews = Some(12_438);
        earbuds.source = Some("Amazon".to_string());
        earbuds.shipping = Some("Free shipping".to_string());
        earbuds.trending = true;
        earbuds.buy_link = Some("https://shop.example/earbuds-pro".to_string());

        let mut budget = ResultRecord::new(2, "Budget Buds", "SoundCo", 19.99);
        budget.rating = Some(4.1);
        budget.reviews = Some(312);

        Ok(SearchResponse {
            results: Some(vec![earbuds, budget]),
            error: None,
        })
    }
}

/// Surface that prints every fragment to stdout.
#[derive(Default)]
struct ConsoleSurface;

impl UiSurface for ConsoleSurface {
    fn stage_changed(&mut self, stage: Stage) {
        println!("== stage: {stage}");
    }

    fn scroll_to_top(&mut self) {}

    fn progress(&mut self, text: &str) {
        println!("{}", render_progress(text));
    }

    fn show_results(&mut self, cards: &[CardFragment]) {
        for card in cards {
            println!("{}", card.html);
        }
    }

    fn show_error(&mut self, message: &str) {
        println!("{}", render_error_alert(message));
    }

    fn hide_error(&mut self) {}

    fn set_modal(&mut self, modal: ModalKind, visible: bool) {
        println!("-- modal {modal:?} visible={visible}");
    }

    fn clear_feedback_input(&mut self) {}

    fn feedback_acknowledged(&mut self, message: &str) {
        println!("-- {message}");
    }

    fn open_url(&mut self, url: &str) {
        println!("-- opening {url} in a new tab");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut store = MemoryStore::new();
    let mut prefs = Preferences::default();
    prefs.restore(&store);
    prefs.top_count = "5".to_string();
    prefs.save(&mut store)?;

    let mut session = SessionController::new(CannedBackend, ConsoleSurface)
        .with_dwell(Duration::from_millis(400));

    // Full happy path, then a per-card action each way.
    session.submit("wireless earbuds", SearchSpecs::default()).await;
    session.view_buy(1);
    session.view_buy(2); // no buy link, surfaces an action error
    session.request_feedback(2);
    session.set_feedback_draft("Looking for over-ear, not in-ear");
    session.submit_feedback();
    session.new_search();

    Ok(())
}
