//! Search session state machine.

use std::time::Duration;

use scout_core::{
    ResultRecord, SearchQuery, SearchResponse, SearchSpecs, SessionError, Stage,
    GENERIC_SEARCH_FAILURE,
};
use scout_render::render_results;

use crate::{
    ErrorNotifier, FetchError, ModalCoordinator, ModalKind, SearchBackend, UiSurface,
    FEEDBACK_ACK,
};

/// The fixed four-phase progress narration shown while a search runs.
pub const NARRATION_PHRASES: [&str; 4] = [
    "\u{1f525} Analyzing trends on social media and Google Trends...",
    "\u{1f6cd}\u{fe0f} Searching Amazon, eBay, AliExpress and other major shops...",
    "\u{2b50} Verifying quality with trusted reviews and HTTPS sources...",
    "\u{2728} Filtering top results and creating product cards...",
];

/// Minimum dwell on each narration phrase after the first.
pub const NARRATION_DWELL: Duration = Duration::from_secs(2);

/// Mutable session state, owned exclusively by the controller.
#[derive(Debug, Default)]
struct SessionState {
    stage: Stage,
    /// Server rank order, never re-sorted client-side.
    results: Vec<ResultRecord>,
    /// Bumped on every accepted submit; a response only lands if its
    /// generation is still current.
    generation: u64,
}

/// The search session state machine.
///
/// Owns the session state, the remote call and the narration pacing;
/// composes the error notifier and the modal coordinator and drives an
/// abstract [`UiSurface`]. All mutation funnels through the explicit
/// transition methods here.
pub struct SessionController<B, S> {
    backend: B,
    surface: S,
    state: SessionState,
    notifier: ErrorNotifier,
    modals: ModalCoordinator,
    dwell: Duration,
}

impl<B: SearchBackend, S: UiSurface> SessionController<B, S> {
    pub fn new(backend: B, surface: S) -> Self {
        Self {
            backend,
            surface,
            state: SessionState::default(),
            notifier: ErrorNotifier::new(),
            modals: ModalCoordinator::new(),
            dwell: NARRATION_DWELL,
        }
    }

    /// Override the narration dwell (the demo shortens it).
    pub fn with_dwell(mut self, dwell: Duration) -> Self {
        self.dwell = dwell;
        self
    }

    pub fn stage(&self) -> Stage {
        self.state.stage
    }

    /// Results on display, in server rank order.
    pub fn results(&self) -> &[ResultRecord] {
        &self.state.results
    }

    pub fn notifier(&self) -> &ErrorNotifier {
        &self.notifier
    }

    pub fn modals(&self) -> &ModalCoordinator {
        &self.modals
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Submit a search: validate, enter the searching stage, issue exactly
    /// one request, narrate progress, then land in `results` or back in
    /// `input`.
    ///
    /// A submit while a search is already in flight is ignored; repeat
    /// searches always re-enter through this guard from the input stage.
    pub async fn submit(&mut self, raw_query: &str, specs: SearchSpecs) {
        if self.state.stage == Stage::Searching {
            tracing::warn!("submit ignored: a search is already in flight");
            return;
        }

        let query = match SearchQuery::new(raw_query, specs) {
            Ok(query) => query,
            Err(e) => {
                tracing::debug!(error = %e, "submit rejected");
                self.notify(e.message().to_string());
                return;
            }
        };

        self.state.generation += 1;
        let generation = self.state.generation;

        self.clear_error();
        self.switch_stage(Stage::Searching);
        tracing::debug!(query = %query.query, "search started");

        let outcome = self.run_search(&query).await;

        if self.state.generation != generation {
            tracing::debug!("discarding stale search outcome");
            return;
        }

        match outcome {
            Ok(results) => {
                tracing::debug!(count = results.len(), "search succeeded");
                self.state.results = results;
                let cards = render_results(&self.state.results);
                self.surface.show_results(&cards);
                self.switch_stage(Stage::Results);
            }
            Err(e) => {
                tracing::warn!(error = %e, "search failed");
                self.notify(e.message().to_string());
                self.switch_stage(Stage::Input);
            }
        }
    }

    /// Run the request and the narration concurrently.
    ///
    /// Success finalizes only once the response has been classified Ok AND
    /// all four phrases have been shown; a failure returns immediately, with
    /// the narration wherever it happens to be.
    async fn run_search(&mut self, query: &SearchQuery) -> Result<Vec<ResultRecord>, SessionError> {
        let dwell = self.dwell;
        let backend = &self.backend;
        let surface = &mut self.surface;

        surface.progress(NARRATION_PHRASES[0]);

        let request = backend.search(query);
        tokio::pin!(request);

        let mut next_phrase = 1;
        let mut timer = Box::pin(tokio::time::sleep(dwell));
        let mut outcome: Option<Vec<ResultRecord>> = None;

        loop {
            if next_phrase >= NARRATION_PHRASES.len() {
                return match outcome {
                    Some(results) => Ok(results),
                    // Pacing elapsed with the response still pending.
                    None => classify(request.await),
                };
            }

            tokio::select! {
                response = &mut request, if outcome.is_none() => {
                    match classify(response) {
                        Ok(results) => outcome = Some(results),
                        Err(e) => return Err(e),
                    }
                }
                () = timer.as_mut() => {
                    surface.progress(NARRATION_PHRASES[next_phrase]);
                    next_phrase += 1;
                    timer = Box::pin(tokio::time::sleep(dwell));
                }
            }
        }
    }

    /// Discard results and return to the input stage.
    pub fn new_search(&mut self) {
        self.state.results.clear();
        self.switch_stage(Stage::Input);
    }

    /// Open a result's buy link, or surface an action error when it has
    /// none. Never changes the session stage.
    pub fn view_buy(&mut self, item_id: u64) {
        let link = self
            .state
            .results
            .iter()
            .find(|r| r.id == item_id)
            .and_then(|r| r.purchase_url())
            .map(str::to_owned);

        match link {
            Some(url) => {
                tracing::debug!(item = item_id, url = %url, "opening buy link");
                self.surface.open_url(&url);
            }
            None => {
                let err = SessionError::Action("Product link not available".to_string());
                self.notify(err.message().to_string());
            }
        }
    }

    /// Record the clicked item as the active feedback subject and show the
    /// feedback dialog.
    pub fn request_feedback(&mut self, item_id: u64) {
        self.modals.open_feedback(item_id);
        self.surface.set_modal(ModalKind::Feedback, true);
    }

    pub fn set_feedback_draft(&mut self, text: &str) {
        self.modals.set_feedback_draft(text);
    }

    /// Submit the feedback draft; acknowledged locally only.
    pub fn submit_feedback(&mut self) {
        match self.modals.submit_feedback() {
            Ok(submission) => {
                tracing::debug!(item = ?submission.item_id, "feedback recorded");
                self.surface.feedback_acknowledged(FEEDBACK_ACK);
                self.surface.clear_feedback_input();
                self.surface.set_modal(ModalKind::Feedback, false);
            }
            Err(e) => self.notify(e.message().to_string()),
        }
    }

    /// Dismiss the feedback dialog (close button, cancel or overlay click).
    pub fn close_feedback(&mut self) {
        self.modals.close_feedback();
        self.surface.clear_feedback_input();
        self.surface.set_modal(ModalKind::Feedback, false);
    }

    pub fn open_settings(&mut self) {
        self.modals.open_settings();
        self.surface.set_modal(ModalKind::Settings, true);
    }

    pub fn close_settings(&mut self) {
        self.modals.close_settings();
        self.surface.set_modal(ModalKind::Settings, false);
    }

    /// User dismissed the error alert.
    pub fn dismiss_error(&mut self) {
        self.clear_error();
    }

    fn switch_stage(&mut self, stage: Stage) {
        self.state.stage = stage;
        self.surface.stage_changed(stage);
        self.surface.scroll_to_top();
    }

    fn notify(&mut self, message: String) {
        self.notifier.show(message.clone());
        self.surface.show_error(&message);
    }

    fn clear_error(&mut self) {
        self.notifier.hide();
        self.surface.hide_error();
    }
}

/// Normalize every remote failure mode into one user-facing error.
fn classify(
    response: Result<SearchResponse, FetchError>,
) -> Result<Vec<ResultRecord>, SessionError> {
    match response {
        Ok(payload) => payload.into_results(),
        Err(e) => {
            tracing::debug!(error = %e, "remote call failed");
            Err(SessionError::Search(GENERIC_SEARCH_FAILURE.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use scout_core::NO_RESULTS_MESSAGE;
    use scout_render::CardFragment;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::time::Instant;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Stage(Stage),
        Scroll,
        Progress(String),
        Results(Vec<u64>),
        ShowError(String),
        HideError,
        Modal(ModalKind, bool),
        ClearFeedbackInput,
        Ack(String),
        OpenUrl(String),
    }

    #[derive(Default)]
    struct RecordingSurface {
        events: Vec<Event>,
    }

    impl RecordingSurface {
        fn progress_phrases(&self) -> Vec<&str> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    Event::Progress(p) => Some(p.as_str()),
                    _ => None,
                })
                .collect()
        }

        fn shown_errors(&self) -> Vec<&str> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    Event::ShowError(m) => Some(m.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl UiSurface for RecordingSurface {
        fn stage_changed(&mut self, stage: Stage) {
            self.events.push(Event::Stage(stage));
        }
        fn scroll_to_top(&mut self) {
            self.events.push(Event::Scroll);
        }
        fn progress(&mut self, text: &str) {
            self.events.push(Event::Progress(text.to_string()));
        }
        fn show_results(&mut self, cards: &[CardFragment]) {
            let ids = cards.iter().map(|c| c.bindings.item_id).collect();
            self.events.push(Event::Results(ids));
        }
        fn show_error(&mut self, message: &str) {
            self.events.push(Event::ShowError(message.to_string()));
        }
        fn hide_error(&mut self) {
            self.events.push(Event::HideError);
        }
        fn set_modal(&mut self, modal: ModalKind, visible: bool) {
            self.events.push(Event::Modal(modal, visible));
        }
        fn clear_feedback_input(&mut self) {
            self.events.push(Event::ClearFeedbackInput);
        }
        fn feedback_acknowledged(&mut self, message: &str) {
            self.events.push(Event::Ack(message.to_string()));
        }
        fn open_url(&mut self, url: &str) {
            self.events.push(Event::OpenUrl(url.to_string()));
        }
    }

    enum StubReply {
        Payload(SearchResponse),
        DelayedPayload(Duration, SearchResponse),
        Transport,
        HttpStatus(u16),
    }

    struct StubBackend {
        reply: StubReply,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl SearchBackend for StubBackend {
        async fn search(&self, _query: &SearchQuery) -> Result<SearchResponse, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                StubReply::Payload(payload) => Ok(payload.clone()),
                StubReply::DelayedPayload(delay, payload) => {
                    tokio::time::sleep(*delay).await;
                    Ok(payload.clone())
                }
                StubReply::Transport => Err(FetchError::Request("connection refused".into())),
                StubReply::HttpStatus(status) => Err(FetchError::Status(*status)),
            }
        }
    }

    fn record(id: u64) -> ResultRecord {
        ResultRecord::new(id, "X", "Y", 19.99)
    }

    fn payload(results: Vec<ResultRecord>) -> SearchResponse {
        SearchResponse {
            results: Some(results),
            error: None,
        }
    }

    fn controller(
        reply: StubReply,
    ) -> (
        SessionController<StubBackend, RecordingSurface>,
        Arc<AtomicUsize>,
    ) {
        let calls = Arc::new(AtomicUsize::new(0));
        let backend = StubBackend {
            reply,
            calls: calls.clone(),
        };
        (
            SessionController::new(backend, RecordingSurface::default()),
            calls,
        )
    }

    #[tokio::test]
    async fn test_empty_query_blocks_submit() {
        let (mut c, calls) = controller(StubReply::Payload(payload(vec![record(1)])));
        c.submit("   ", SearchSpecs::default()).await;

        assert_eq!(c.stage(), Stage::Input);
        assert_eq!(c.notifier().message(), Some("Please enter a search query"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        // No stage transition happened at all.
        assert!(!c.surface().events.contains(&Event::Stage(Stage::Searching)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_successful_search_reaches_results() {
        let (mut c, calls) =
            controller(StubReply::Payload(payload(vec![record(3), record(1), record(2)])));
        c.submit("wireless earbuds", SearchSpecs::default()).await;

        assert_eq!(c.stage(), Stage::Results);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        let ids: Vec<u64> = c.results().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert!(c
            .surface()
            .events
            .contains(&Event::Results(vec![3, 1, 2])));
        assert!(!c.notifier().is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_narration_runs_all_four_phrases_in_order() {
        let (mut c, _) = controller(StubReply::Payload(payload(vec![record(1)])));
        let start = Instant::now();
        c.submit("earbuds", SearchSpecs::default()).await;

        assert_eq!(c.surface().progress_phrases(), NARRATION_PHRASES.to_vec());
        // Success waited for the full pacing even though the backend
        // answered instantly.
        assert!(start.elapsed() >= NARRATION_DWELL * 3);

        let events = &c.surface().events;
        let last_phrase = events
            .iter()
            .rposition(|e| matches!(e, Event::Progress(_)))
            .unwrap();
        let results_stage = events
            .iter()
            .position(|e| *e == Event::Stage(Stage::Results))
            .unwrap();
        assert!(last_phrase < results_stage);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_response_finalizes_after_narration() {
        let (mut c, _) = controller(StubReply::DelayedPayload(
            Duration::from_secs(9),
            payload(vec![record(1)]),
        ));
        let start = Instant::now();
        c.submit("earbuds", SearchSpecs::default()).await;

        assert_eq!(c.stage(), Stage::Results);
        assert!(start.elapsed() >= Duration::from_secs(9));
        assert_eq!(c.surface().progress_phrases(), NARRATION_PHRASES.to_vec());
    }

    #[tokio::test(start_paused = true)]
    async fn test_transport_failure_returns_to_input_immediately() {
        let (mut c, _) = controller(StubReply::Transport);
        let start = Instant::now();
        c.submit("earbuds", SearchSpecs::default()).await;

        assert_eq!(c.stage(), Stage::Input);
        assert_eq!(c.notifier().message(), Some(GENERIC_SEARCH_FAILURE));
        // Failure does not wait out the narration.
        assert!(start.elapsed() < NARRATION_DWELL);
        assert_eq!(c.surface().progress_phrases().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_ok_status_returns_to_input() {
        let (mut c, _) = controller(StubReply::HttpStatus(500));
        c.submit("earbuds", SearchSpecs::default()).await;

        assert_eq!(c.stage(), Stage::Input);
        assert_eq!(c.notifier().message(), Some(GENERIC_SEARCH_FAILURE));
        // Normalized to exactly one visible message, same as a transport
        // failure.
        assert_eq!(c.surface().shown_errors(), vec![GENERIC_SEARCH_FAILURE]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_results_are_a_failure() {
        let (mut c, _) = controller(StubReply::Payload(payload(Vec::new())));
        c.submit("earbuds", SearchSpecs::default()).await;

        assert_eq!(c.stage(), Stage::Input);
        assert_eq!(c.notifier().message(), Some(NO_RESULTS_MESSAGE));
        assert_eq!(c.surface().shown_errors(), vec![NO_RESULTS_MESSAGE]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_error_payload_message_is_shown() {
        let (mut c, _) = controller(StubReply::Payload(SearchResponse {
            results: None,
            error: Some("Rate limited".to_string()),
        }));
        c.submit("earbuds", SearchSpecs::default()).await;

        assert_eq!(c.stage(), Stage::Input);
        assert_eq!(c.notifier().message(), Some("Rate limited"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_search_discards_results() {
        let (mut c, _) = controller(StubReply::Payload(payload(vec![record(1), record(2)])));
        c.submit("earbuds", SearchSpecs::default()).await;
        assert_eq!(c.stage(), Stage::Results);

        c.new_search();
        assert_eq!(c.stage(), Stage::Input);
        assert!(c.results().is_empty());

        // Idempotent from any prior state.
        c.new_search();
        assert_eq!(c.stage(), Stage::Input);
        assert!(c.results().is_empty());
    }

    #[tokio::test]
    async fn test_reentrant_submit_is_ignored() {
        let (mut c, calls) = controller(StubReply::Payload(payload(vec![record(1)])));
        c.state.stage = Stage::Searching;

        c.submit("earbuds", SearchSpecs::default()).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(c.stage(), Stage::Searching);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_clears_previous_error() {
        let (mut c, _) = controller(StubReply::Payload(payload(vec![record(1)])));
        c.submit("", SearchSpecs::default()).await;
        assert!(c.notifier().is_visible());

        c.submit("earbuds", SearchSpecs::default()).await;
        assert!(!c.notifier().is_visible());
        assert!(c.surface().events.contains(&Event::HideError));
    }

    #[tokio::test(start_paused = true)]
    async fn test_view_buy_without_link_is_an_action_error() {
        let (mut c, _) = controller(StubReply::Payload(payload(vec![record(1)])));
        c.submit("earbuds", SearchSpecs::default()).await;

        c.view_buy(1);
        assert_eq!(c.notifier().message(), Some("Product link not available"));
        assert!(!c
            .surface()
            .events
            .iter()
            .any(|e| matches!(e, Event::OpenUrl(_))));
        // Local error only; the session stays on results.
        assert_eq!(c.stage(), Stage::Results);
    }

    #[tokio::test(start_paused = true)]
    async fn test_view_buy_opens_link() {
        let mut linked = record(1);
        linked.buy_link = Some("https://shop.example/x".to_string());
        let (mut c, _) = controller(StubReply::Payload(payload(vec![linked])));
        c.submit("earbuds", SearchSpecs::default()).await;

        c.view_buy(1);
        assert!(c
            .surface()
            .events
            .contains(&Event::OpenUrl("https://shop.example/x".to_string())));
        assert!(!c.notifier().is_visible());
    }

    #[tokio::test]
    async fn test_feedback_flow() {
        let (mut c, _) = controller(StubReply::Payload(payload(vec![record(1)])));

        c.request_feedback(7);
        assert!(c.modals().feedback_open());
        assert_eq!(c.modals().active_feedback_item(), Some(7));
        assert!(c
            .surface()
            .events
            .contains(&Event::Modal(ModalKind::Feedback, true)));

        // Empty draft is rejected; the dialog stays open.
        c.submit_feedback();
        assert_eq!(c.notifier().message(), Some("Please enter your feedback"));
        assert!(c.modals().feedback_open());

        c.set_feedback_draft("wrong category entirely");
        c.submit_feedback();
        assert!(!c.modals().feedback_open());
        assert!(c
            .surface()
            .events
            .contains(&Event::Ack(FEEDBACK_ACK.to_string())));

        // Dismiss without a fresh selection keeps the stale id.
        c.close_feedback();
        assert_eq!(c.modals().active_feedback_item(), Some(7));
        assert!(c.surface().events.contains(&Event::ClearFeedbackInput));
    }

    #[tokio::test]
    async fn test_settings_modal_round_trip() {
        let (mut c, _) = controller(StubReply::Payload(payload(vec![record(1)])));
        c.open_settings();
        assert!(c.modals().settings_open());
        c.close_settings();
        assert!(!c.modals().settings_open());
        assert!(c
            .surface()
            .events
            .contains(&Event::Modal(ModalKind::Settings, false)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_scroll_on_every_stage_transition() {
        let (mut c, _) = controller(StubReply::Payload(payload(vec![record(1)])));
        c.submit("earbuds", SearchSpecs::default()).await;
        c.new_search();

        let stages = c
            .surface()
            .events
            .iter()
            .filter(|e| matches!(e, Event::Stage(_)))
            .count();
        let scrolls = c
            .surface()
            .events
            .iter()
            .filter(|e| matches!(e, Event::Scroll))
            .count();
        assert_eq!(stages, 3); // searching, results, input
        assert_eq!(stages, scrolls);
    }
}
