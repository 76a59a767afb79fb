//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI rendering layer, async task
//! handlers, and shared application state.
//!
//! ## Architecture
//!
//! Event-driven: user actions go through `handle_*` methods, which validate
//! under a short write lock and spawn async tasks on the shared Tokio
//! runtime. Tasks call the backend and send an [`AppEvent`] back over an
//! unbounded channel; [`App::on_tick`], called once per frame on the main
//! thread, drains the channel and applies each result to state.
//!
//! ```text
//!  egui frame loop                    Tokio runtime
//!  ┌───────────────────┐             ┌──────────────────┐
//!  │ App::on_tick()    │◄───channel──│ tasks::*         │
//!  │ App::handle_*()   │──spawn─────►│ (HTTP requests)  │
//!  └────────┬──────────┘             └──────────────────┘
//!           │
//!  Arc<RwLock<AppState>>  (read for rendering, write briefly on events)
//! ```
//!
//! Locks are held for minimal duration and never across an await point.

mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;

pub use events::AppEvent;
pub use state::*;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;

use crate::core::service::ApiService;

/// Main application orchestrator.
///
/// Owns the shared state and the event channel. The UI layer reads state
/// through [`App::state`] and reports user actions through the `handle_*`
/// methods; everything asynchronous flows back in through [`App::on_tick`].
pub struct App {
    /// Thread-safe shared application state. Hold the lock briefly.
    pub state: Arc<RwLock<AppState>>,

    /// Receiver half of the async result channel, drained in `on_tick`.
    pub event_rx: Receiver<AppEvent>,

    /// Sender half, cloned into every spawned task.
    event_tx: Sender<AppEvent>,
}

impl App {
    /// Create the application with the real HTTP client and start resolving
    /// the session cookie.
    pub fn new() -> Self {
        let api = Arc::new(crate::services::api::ApiClient::new());
        let app = Self::with_service(api);
        app.start_session_resolution();
        app
    }

    /// Create the application against an arbitrary backend implementation.
    /// Does not start session resolution; callers drive the lifecycle.
    pub fn with_service(api: Arc<dyn ApiService>) -> Self {
        let (event_tx, event_rx) = unbounded();
        App {
            state: Arc::new(RwLock::new(AppState::new(api))),
            event_rx,
            event_tx,
        }
    }

    /// Kick off the startup "who am I" request. Until it resolves the app
    /// sits on the landing screen in the loading phase.
    pub fn start_session_resolution(&self) {
        {
            let mut state = self.state.write();
            state.session.phase = SessionPhase::Loading;
        }
        tracing::info!("Resolving session");
        tasks::session::resolve_session(self.state.clone(), self.event_tx.clone());
    }

    /// Called every frame to apply async task results. Non-blocking: drains
    /// whatever the channel holds and returns.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Drain the toasts queued by the event handler (level, message).
    pub fn take_notifications(&self) -> Vec<(String, String)> {
        std::mem::take(&mut self.state.write().pending_notifications)
    }

    fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    // ========== GUI action methods, delegating to handlers ==========

    /// Handle login submit.
    pub fn handle_login_click(&mut self) {
        handlers::auth::handle_login_click(self.state.clone(), self.event_tx.clone());
    }

    /// Handle logout.
    pub fn handle_logout_click(&mut self) {
        handlers::auth::handle_logout_click(self.state.clone());
    }

    /// Handle a navigation request.
    pub fn handle_screen_change(&mut self, screen: Screen) {
        handlers::navigation::handle_screen_change(self.state.clone(), self.event_tx.clone(), screen);
    }

    /// Open the detail screen for one trial.
    pub fn open_trial(&mut self, nct_id: String) {
        handlers::navigation::open_trial(self.state.clone(), self.event_tx.clone(), nct_id);
    }

    /// Handle search form submit.
    pub fn handle_search_submit(&mut self) {
        handlers::search::handle_search_submit(self.state.clone(), self.event_tx.clone());
    }

    /// Fetch the next result page.
    pub fn handle_load_more(&mut self) {
        handlers::search::handle_load_more(self.state.clone(), self.event_tx.clone());
    }

    /// Toggle the bookmark on the detail screen.
    pub fn handle_save_toggle(&mut self) {
        handlers::saved::handle_save_toggle(self.state.clone(), self.event_tx.clone());
    }

    /// Remove a bookmark from the saved screen.
    pub fn handle_remove_saved(&mut self, nct_id: String) {
        handlers::saved::handle_remove_saved(self.state.clone(), self.event_tx.clone(), nct_id);
    }

    /// Persist the medical history form.
    pub fn handle_profile_save(&mut self) {
        handlers::profile::handle_profile_save(self.state.clone(), self.event_tx.clone());
    }

    /// Send one chat turn.
    pub fn send_chat_message(&mut self, text: String) {
        handlers::chat::send_message(self.state.clone(), self.event_tx.clone(), &text);
    }

    /// Chat quick action: send the stored profile as a first-person summary.
    pub fn use_medical_history(&mut self) {
        handlers::chat::use_medical_history(self.state.clone(), self.event_tx.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use shared::{
        ChatRequest, ChatResponse, ConditionHierarchyResponse, CurrentUserResponse, LoginResponse,
        LogoutResponse, MedicalHistory, MedicalHistoryResponse, RecommendationsResponse,
        RelatedTrialsResponse, SaveTrialRequest, SaveTrialResponse, SavedTrial, SavedTrialData,
        SmartMatchRequest, SmartMatchResponse, TrialDetailsResponse, TrialsSearchResponse,
    };

    use crate::services::api::SearchParams;

    /// In-memory backend with scriptable responses.
    struct MockApi {
        current_user: Result<CurrentUserResponse, String>,
        login: Result<LoginResponse, String>,
        search: Result<TrialsSearchResponse, String>,
        chat: Result<ChatResponse, String>,
        history: Result<MedicalHistoryResponse, String>,
        saved: Mutex<Vec<SavedTrial>>,
        chat_requests: Mutex<Vec<ChatRequest>>,
        search_params: Mutex<Vec<SearchParams>>,
    }

    impl Default for MockApi {
        fn default() -> Self {
            MockApi {
                current_user: Ok(CurrentUserResponse {
                    logged_in: true,
                    username: Some("alice".to_string()),
                }),
                login: Ok(LoginResponse {
                    success: true,
                    username: Some("alice".to_string()),
                    error: None,
                }),
                search: Ok(TrialsSearchResponse::default()),
                chat: Ok(ChatResponse {
                    success: true,
                    assistant_message: "Found 2 trials".to_string(),
                    trials: None,
                    extracted_criteria: None,
                    timestamp: String::new(),
                    error: None,
                }),
                history: Ok(MedicalHistoryResponse {
                    success: true,
                    data: None,
                    error: None,
                }),
                saved: Mutex::new(Vec::new()),
                chat_requests: Mutex::new(Vec::new()),
                search_params: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ApiService for MockApi {
        async fn login(&self, _username: String) -> Result<LoginResponse, String> {
            self.login.clone()
        }

        async fn logout(&self) -> Result<LogoutResponse, String> {
            Ok(LogoutResponse { success: true })
        }

        async fn current_user(&self) -> Result<CurrentUserResponse, String> {
            self.current_user.clone()
        }

        async fn get_medical_history(&self) -> Result<MedicalHistoryResponse, String> {
            self.history.clone()
        }

        async fn save_medical_history(
            &self,
            _history: MedicalHistory,
        ) -> Result<MedicalHistoryResponse, String> {
            self.history.clone()
        }

        async fn search_trials(
            &self,
            params: SearchParams,
        ) -> Result<TrialsSearchResponse, String> {
            self.search_params.lock().push(params);
            self.search.clone()
        }

        async fn get_trial_details(&self, _nct_id: &str) -> Result<TrialDetailsResponse, String> {
            Ok(TrialDetailsResponse::default())
        }

        async fn get_saved_trials(&self) -> Result<Vec<SavedTrial>, String> {
            Ok(self.saved.lock().clone())
        }

        async fn save_trial(&self, request: SaveTrialRequest) -> Result<SaveTrialResponse, String> {
            self.saved.lock().push(SavedTrial {
                nct_id: request.nct_id,
                trial_data: request.trial_data,
                saved_at: None,
            });
            Ok(SaveTrialResponse {
                success: true,
                message: None,
                error: None,
            })
        }

        async fn unsave_trial(&self, nct_id: &str) -> Result<SaveTrialResponse, String> {
            self.saved.lock().retain(|t| t.nct_id != nct_id);
            Ok(SaveTrialResponse {
                success: true,
                message: None,
                error: None,
            })
        }

        async fn send_chat_message(&self, request: ChatRequest) -> Result<ChatResponse, String> {
            self.chat_requests.lock().push(request);
            self.chat.clone()
        }

        async fn smart_match(
            &self,
            _request: SmartMatchRequest,
        ) -> Result<SmartMatchResponse, String> {
            Ok(SmartMatchResponse::default())
        }

        async fn get_related_trials(
            &self,
            _nct_id: &str,
            _limit: usize,
        ) -> Result<RelatedTrialsResponse, String> {
            Ok(RelatedTrialsResponse::default())
        }

        async fn get_recommendations(
            &self,
            _limit: usize,
        ) -> Result<RecommendationsResponse, String> {
            Ok(RecommendationsResponse::default())
        }

        async fn get_condition_hierarchy(
            &self,
            _condition: &str,
        ) -> Result<ConditionHierarchyResponse, String> {
            Ok(ConditionHierarchyResponse::default())
        }
    }

    fn app_with(api: MockApi) -> (App, Arc<MockApi>) {
        let api = Arc::new(api);
        (App::with_service(api.clone()), api)
    }

    fn authenticated_app(api: MockApi) -> (App, Arc<MockApi>) {
        let (app, api) = app_with(api);
        app.state.write().session.authenticate("alice".to_string());
        app.state.write().current_screen = Screen::Search;
        (app, api)
    }

    /// Block until the next task result arrives, then apply it.
    fn drain_one(app: &mut App) {
        let event = app
            .event_rx
            .recv_blocking()
            .expect("expected a task result event");
        app.handle_event(event);
    }

    #[test]
    fn protected_screen_redirects_to_login_when_anonymous() {
        let (mut app, _) = app_with(MockApi::default());
        app.state.write().session.clear();

        app.handle_screen_change(Screen::Saved);

        assert_eq!(app.state.read().current_screen, Screen::Login);
    }

    #[test]
    fn session_resolution_lands_on_search_when_logged_in() {
        let (mut app, _) = app_with(MockApi::default());

        app.start_session_resolution();
        assert_eq!(app.state.read().session.phase, SessionPhase::Loading);
        drain_one(&mut app);

        let state = app.state.read();
        assert!(state.is_authenticated());
        assert_eq!(state.session.username.as_deref(), Some("alice"));
        assert_eq!(state.current_screen, Screen::Search);
    }

    #[test]
    fn failed_session_resolution_redirects_to_login_without_error() {
        let (mut app, _) = app_with(MockApi {
            current_user: Err("connection refused".to_string()),
            ..Default::default()
        });

        app.start_session_resolution();
        drain_one(&mut app);

        let state = app.state.read();
        assert!(!state.is_authenticated());
        assert_eq!(state.session.phase, SessionPhase::Anonymous);
        assert_eq!(state.current_screen, Screen::Login);
        assert!(state.login.error.is_none());
    }

    #[test]
    fn login_click_authenticates_and_navigates() {
        let (mut app, _) = app_with(MockApi::default());
        app.state.write().login.username_input = "  alice  ".to_string();

        app.handle_login_click();
        assert!(app.state.read().login.submitting);
        drain_one(&mut app);

        let state = app.state.read();
        assert!(state.is_authenticated());
        assert_eq!(state.current_screen, Screen::Search);
        assert!(state.login.username_input.is_empty());
    }

    #[test]
    fn blank_username_is_rejected_without_a_request() {
        let (mut app, _) = app_with(MockApi::default());
        app.state.write().login.username_input = "   ".to_string();

        app.handle_login_click();

        let state = app.state.read();
        assert!(!state.login.submitting);
        assert_eq!(state.login.error.as_deref(), Some("Username is required"));
        assert!(app.event_rx.is_empty());
    }

    #[test]
    fn search_submit_sends_trimmed_filters_and_page_size() {
        let (mut app, api) = authenticated_app(MockApi::default());
        {
            let mut state = app.state.write();
            state.search.condition_input = " asthma ".to_string();
            state.search.location_input = "Denver".to_string();
        }

        app.handle_search_submit();
        drain_one(&mut app);

        let params = api.search_params.lock();
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].condition, "asthma");
        assert_eq!(params[0].page_size, Some(SEARCH_PAGE_SIZE));
        assert_eq!(params[0].page_token, None);
        assert!(app.state.read().search.searched);
    }

    #[test]
    fn load_more_appends_instead_of_replacing() {
        let first_page = TrialsSearchResponse {
            studies: Some(vec![Default::default()]),
            total_count: Some(2),
            next_page_token: Some("tok".to_string()),
            ..Default::default()
        };
        let (mut app, api) = authenticated_app(MockApi {
            search: Ok(first_page),
            ..Default::default()
        });

        app.handle_search_submit();
        drain_one(&mut app);
        assert_eq!(app.state.read().search.studies.len(), 1);

        app.handle_load_more();
        drain_one(&mut app);

        let state = app.state.read();
        assert_eq!(state.search.studies.len(), 2);
        let params = api.search_params.lock();
        assert_eq!(params[1].page_token.as_deref(), Some("tok"));
    }

    #[test]
    fn chat_turn_grows_transcript_by_two_and_excludes_greeting() {
        let (mut app, api) = authenticated_app(MockApi::default());

        app.send_chat_message("I have asthma".to_string());
        assert!(app.state.read().chat.typing);
        drain_one(&mut app);

        let state = app.state.read();
        assert_eq!(state.chat.messages.len(), 3);
        assert_eq!(state.chat.messages[2].content, "Found 2 trials");
        assert!(!state.chat.typing);
        assert!(state.chat.error.is_none());

        let requests = api.chat_requests.lock();
        assert!(
            requests[0].conversation_history.is_empty(),
            "greeting never enters the history"
        );
    }

    #[test]
    fn failed_chat_turn_appends_the_apology() {
        let (mut app, _) = authenticated_app(MockApi {
            chat: Err("timeout".to_string()),
            ..Default::default()
        });

        app.send_chat_message("hello".to_string());
        drain_one(&mut app);

        let state = app.state.read();
        assert_eq!(state.chat.messages.len(), 3);
        assert_eq!(state.chat.messages[2].content, CHAT_APOLOGY);
        assert_eq!(state.chat.error.as_deref(), Some("timeout"));
        assert!(!state.chat.typing);
    }

    #[test]
    fn medical_history_quick_action_sends_the_summary_as_a_turn() {
        let history = MedicalHistory {
            age: Some(34),
            gender: None,
            location: None,
            conditions: Some("asthma".to_string()),
            medications: None,
        };
        let (mut app, api) = authenticated_app(MockApi {
            history: Ok(MedicalHistoryResponse {
                success: true,
                data: Some(history),
                error: None,
            }),
            ..Default::default()
        });

        app.use_medical_history();
        drain_one(&mut app); // history arrives, summary is sent
        drain_one(&mut app); // chat response arrives

        let state = app.state.read();
        assert_eq!(state.chat.messages.len(), 3);
        let requests = api.chat_requests.lock();
        assert!(requests[0].message.contains("asthma"));
    }

    #[test]
    fn empty_profile_quick_action_shows_inline_error() {
        let (mut app, _) = authenticated_app(MockApi::default());

        app.use_medical_history();
        drain_one(&mut app);

        let state = app.state.read();
        assert_eq!(state.chat.messages.len(), 1, "no turn was sent");
        assert!(!state.chat.typing);
        assert!(state.chat.error.is_some());
    }

    #[test]
    fn save_toggle_round_trip_from_detail_screen() {
        let (mut app, api) = authenticated_app(MockApi::default());
        app.state.write().detail = DetailState::open("NCT001".to_string());

        app.handle_save_toggle();
        assert!(app.state.read().detail.save_pending);
        drain_one(&mut app);
        assert!(app.state.read().detail.saved);
        assert_eq!(api.saved.lock().len(), 1);

        app.handle_save_toggle();
        drain_one(&mut app);
        assert!(!app.state.read().detail.saved);
        assert!(api.saved.lock().is_empty());
        assert_eq!(app.take_notifications().len(), 2);
    }

    #[test]
    fn saved_screen_refetches_after_a_save() {
        let (mut app, api) = authenticated_app(MockApi::default());
        app.handle_screen_change(Screen::Saved);
        drain_one(&mut app);
        assert!(app.state.read().saved.trials.is_empty());

        {
            let mut state = app.state.write();
            state.detail = DetailState::open("NCT001".to_string());
            state.current_screen = Screen::TrialDetail;
        }
        app.handle_save_toggle();
        drain_one(&mut app);
        assert_eq!(api.saved.lock().len(), 1);

        app.handle_screen_change(Screen::Saved);
        assert!(app.state.read().saved.loading, "save should force a refetch");
        drain_one(&mut app);

        let state = app.state.read();
        assert_eq!(state.saved.trials.len(), 1);
        assert_eq!(state.saved.trials[0].nct_id, "NCT001");
    }

    #[test]
    fn removing_from_saved_screen_updates_the_list() {
        let api = MockApi::default();
        api.saved.lock().push(SavedTrial {
            nct_id: "NCT001".to_string(),
            trial_data: SavedTrialData::default(),
            saved_at: None,
        });
        let (mut app, _) = authenticated_app(api);
        app.handle_screen_change(Screen::Saved);
        drain_one(&mut app);
        assert_eq!(app.state.read().saved.trials.len(), 1);

        app.handle_remove_saved("NCT001".to_string());
        drain_one(&mut app);

        assert!(app.state.read().saved.trials.is_empty());
    }

    #[test]
    fn logout_clears_every_screen_state() {
        let (mut app, _) = authenticated_app(MockApi::default());
        {
            let mut state = app.state.write();
            state.chat.input = "draft".to_string();
            state.search.condition_input = "asthma".to_string();
        }

        app.handle_logout_click();

        let state = app.state.read();
        assert!(!state.is_authenticated());
        assert_eq!(state.current_screen, Screen::Login);
        assert!(state.chat.input.is_empty());
        assert!(state.search.condition_input.is_empty());
        assert_eq!(state.chat.messages.len(), 1, "fresh greeting only");
    }
}
