//! # Application State Types
//!
//! All state-related types for the client: screens, the session state
//! machine, and per-screen sub-states.

use std::sync::Arc;

use shared::{
    ChatMessage, MedicalHistory, ProtocolSection, Recommendation, RecruitmentStatus, RelatedTrial,
    SavedTrial, Study,
};

use crate::core::service::ApiService;

/// Fixed greeting at transcript index 0. Locally generated and never sent to
/// the backend as part of conversation history.
pub const CHAT_GREETING: &str = "Hello! I'm your Clinical Trial Matching Assistant. I'm here to \
help you find relevant clinical trials based on your medical conditions and location.\n\nTo get \
started, could you tell me about any medical conditions you're dealing with?";

/// Canned assistant turn appended when a chat request fails.
pub const CHAT_APOLOGY: &str = "I'm sorry, I encountered an error processing your message. Could \
you try rephrasing or try again in a moment?";

/// Page size the search screen requests.
pub const SEARCH_PAGE_SIZE: u32 = 20;

/// How many related trials / recommendations the UI asks for.
pub const PANEL_LIMIT: usize = 5;

/// Application screens. Browser routes in the original product; one window
/// with a `Screen` switch here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Splash shown while the session resolves
    Landing,
    /// Username form (public; mock auth treats login as signup)
    Login,
    /// Trial search with filters and recommendations
    Search,
    /// One trial's full protocol record
    TrialDetail,
    /// Bookmarked trials
    Saved,
    /// Medical history form
    Profile,
    /// Smart-match chat assistant
    Chat,
}

impl Screen {
    /// All screens reachable from the nav bar, in display order.
    pub fn nav_entries() -> &'static [Screen] {
        &[Screen::Search, Screen::Saved, Screen::Profile, Screen::Chat]
    }

    /// Title for the nav bar and window header.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Landing => "Clinect",
            Screen::Login => "Sign In",
            Screen::Search => "Search",
            Screen::TrialDetail => "Trial Details",
            Screen::Saved => "Saved Trials",
            Screen::Profile => "Profile",
            Screen::Chat => "Smart Match",
        }
    }

    /// Deny-by-default route guard: only the landing splash and the login
    /// form are public.
    pub fn requires_auth(self) -> bool {
        !matches!(self, Screen::Landing | Screen::Login)
    }
}

/// Session resolution lifecycle. Written only by the resolution event
/// handler and the logout handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// No "who am I" request issued yet
    #[default]
    Init,
    /// Request in flight
    Loading,
    /// Backend confirmed a logged-in principal
    Authenticated,
    /// No principal, or the check failed (treated identically)
    Anonymous,
}

/// Process-wide authentication state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub phase: SessionPhase,
    /// Minimal identity; set only when `phase == Authenticated`.
    pub username: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated
    }

    /// Record a resolved login.
    pub fn authenticate(&mut self, username: String) {
        self.phase = SessionPhase::Authenticated;
        self.username = Some(username);
    }

    /// Clear identity (logout or failed resolution).
    pub fn clear(&mut self) {
        self.phase = SessionPhase::Anonymous;
        self.username = None;
    }
}

/// Login screen state.
#[derive(Debug, Clone, Default)]
pub struct LoginState {
    pub username_input: String,
    pub error: Option<String>,
    /// Request outstanding; the submit button is disabled while set.
    pub submitting: bool,
}

/// Search screen state.
#[derive(Debug, Clone)]
pub struct SearchState {
    pub condition_input: String,
    pub location_input: String,
    pub status: RecruitmentStatus,
    pub loading: bool,
    /// Appending the next page rather than replacing results.
    pub loading_more: bool,
    pub error: Option<String>,
    pub studies: Vec<Study>,
    pub total_count: Option<u64>,
    pub next_page_token: Option<String>,
    /// Backend answered from its cache.
    pub cached: bool,
    /// Whether a search has been submitted at least once (controls the
    /// empty-state copy).
    pub searched: bool,
    pub recommendations: Vec<Recommendation>,
    /// Recommendations load once per screen entry.
    pub recommendations_loaded: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            condition_input: String::new(),
            location_input: String::new(),
            status: RecruitmentStatus::All,
            loading: false,
            loading_more: false,
            error: None,
            studies: Vec::new(),
            total_count: None,
            next_page_token: None,
            cached: false,
            searched: false,
            recommendations: Vec::new(),
            recommendations_loaded: false,
        }
    }
}

/// Trial detail screen state.
#[derive(Debug, Clone, Default)]
pub struct DetailState {
    /// NCT ID the screen is showing; set on navigation.
    pub nct_id: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub protocol: Option<ProtocolSection>,
    /// Resolved by listing saved trials and checking membership.
    pub saved: bool,
    /// Save/unsave call outstanding; the toggle is disabled while set.
    pub save_pending: bool,
    pub related: Vec<RelatedTrial>,
}

impl DetailState {
    /// Reset for a fresh trial, keeping nothing from the previous one.
    pub fn open(nct_id: String) -> Self {
        DetailState {
            nct_id: Some(nct_id),
            loading: true,
            ..Default::default()
        }
    }
}

/// Saved-trials screen state.
#[derive(Debug, Clone, Default)]
pub struct SavedListState {
    pub loading: bool,
    pub error: Option<String>,
    pub trials: Vec<SavedTrial>,
    /// List fetched once per screen entry.
    pub loaded: bool,
}

/// Profile screen state. Form fields are kept as strings and parsed on save.
#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    pub age_input: String,
    pub gender: String,
    pub location: String,
    pub conditions: String,
    pub medications: String,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
    /// Inline success text after a save.
    pub saved_message: Option<String>,
    /// History fetched once per screen entry.
    pub loaded: bool,
}

impl ProfileState {
    /// Pre-fill the form from a stored profile.
    pub fn fill_from(&mut self, history: &MedicalHistory) {
        self.age_input = history.age.map(|a| a.to_string()).unwrap_or_default();
        self.gender = history.gender.clone().unwrap_or_default();
        self.location = history.location.clone().unwrap_or_default();
        self.conditions = history.conditions.clone().unwrap_or_default();
        self.medications = history.medications.clone().unwrap_or_default();
    }
}

/// Chat screen state: the transcript plus the one-turn-at-a-time lock.
#[derive(Debug, Clone)]
pub struct ChatState {
    /// Append-only transcript. Index 0 is always the fixed greeting.
    pub messages: Vec<ChatMessage>,
    pub input: String,
    /// Request outstanding; input submission is disabled while set.
    pub typing: bool,
    /// Error banner text (separate from the apology turn).
    pub error: Option<String>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(CHAT_GREETING)],
            input: String::new(),
            typing: false,
            error: None,
        }
    }
}

impl ChatState {
    /// Conversation history for the backend: every genuine turn, i.e.
    /// everything after the fixed greeting. Call before appending the new
    /// user message.
    pub fn history_for_backend(&self) -> Vec<ChatMessage> {
        self.messages.iter().skip(1).cloned().collect()
    }

    /// Optimistically append the user's message and take the turn lock.
    /// Returns the history snapshot to send.
    pub fn begin_turn(&mut self, text: &str) -> Vec<ChatMessage> {
        let history = self.history_for_backend();
        self.messages.push(ChatMessage::user(text));
        self.typing = true;
        self.error = None;
        history
    }

    /// Append exactly one assistant message for the turn: the backend's
    /// answer, or the canned apology on any failure. Releases the lock.
    pub fn complete_turn(&mut self, assistant: ChatMessage, error: Option<String>) {
        self.messages.push(assistant);
        self.typing = false;
        self.error = error;
    }
}

/// Global application state behind `Arc<RwLock<_>>`. The render loop works
/// off a cloned snapshot; handlers and the event handler take short write
/// locks.
#[derive(Clone)]
pub struct AppState {
    pub current_screen: Screen,
    pub session: Session,
    pub login: LoginState,
    pub search: SearchState,
    pub detail: DetailState,
    pub saved: SavedListState,
    pub profile: ProfileState,
    pub chat: ChatState,
    /// Backend service; the one external collaborator.
    pub api: Arc<dyn ApiService>,
    /// Toasts queued by the event handler, drained by the frame loop
    /// (level, message).
    pub pending_notifications: Vec<(String, String)>,
}

impl AppState {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self {
            current_screen: Screen::Landing,
            session: Session::default(),
            login: LoginState::default(),
            search: SearchState::default(),
            detail: DetailState::default(),
            saved: SavedListState::default(),
            profile: ProfileState::default(),
            chat: ChatState::default(),
            api,
            pending_notifications: Vec::new(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_landing_and_login_are_public() {
        assert!(!Screen::Landing.requires_auth());
        assert!(!Screen::Login.requires_auth());
        for screen in [Screen::Search, Screen::TrialDetail, Screen::Saved, Screen::Profile, Screen::Chat] {
            assert!(screen.requires_auth(), "{:?} must be protected", screen);
        }
    }

    #[test]
    fn session_state_machine_transitions() {
        let mut session = Session::default();
        assert_eq!(session.phase, SessionPhase::Init);
        assert!(!session.is_authenticated());

        session.phase = SessionPhase::Loading;
        session.authenticate("alice".to_string());
        assert!(session.is_authenticated());
        assert_eq!(session.username.as_deref(), Some("alice"));

        session.clear();
        assert_eq!(session.phase, SessionPhase::Anonymous);
        assert!(session.username.is_none());
    }

    #[test]
    fn transcript_starts_with_the_greeting() {
        let chat = ChatState::default();
        assert_eq!(chat.messages.len(), 1);
        assert_eq!(chat.messages[0].content, CHAT_GREETING);
        assert!(chat.history_for_backend().is_empty());
    }

    #[test]
    fn begin_turn_snapshots_history_before_the_append() {
        let mut chat = ChatState::default();

        let first_history = chat.begin_turn("I have asthma");
        assert!(first_history.is_empty(), "greeting never enters the history");
        assert_eq!(chat.messages.len(), 2);
        assert!(chat.typing);

        chat.complete_turn(ChatMessage::assistant("Found 2 trials"), None);
        assert!(!chat.typing);

        let second_history = chat.begin_turn("Any in Denver?");
        assert_eq!(second_history.len(), 2);
        assert_eq!(second_history[0].content, "I have asthma");
        assert_eq!(second_history[1].content, "Found 2 trials");
    }

    #[test]
    fn every_turn_grows_the_transcript_by_exactly_two() {
        let mut chat = ChatState::default();
        let before = chat.messages.len();

        chat.begin_turn("hello");
        chat.complete_turn(ChatMessage::assistant(CHAT_APOLOGY), Some("Network error".to_string()));

        assert_eq!(chat.messages.len(), before + 2);
        assert_eq!(chat.messages.last().unwrap().content, CHAT_APOLOGY);
        assert_eq!(chat.error.as_deref(), Some("Network error"));
    }

    #[test]
    fn profile_fill_round_trips_blank_fields() {
        let mut profile = ProfileState::default();
        profile.fill_from(&MedicalHistory {
            age: Some(34),
            gender: None,
            location: Some("Denver".to_string()),
            conditions: None,
            medications: None,
        });
        assert_eq!(profile.age_input, "34");
        assert_eq!(profile.location, "Denver");
        assert!(profile.gender.is_empty());
        assert!(profile.conditions.is_empty());
    }
}
