use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::DefaultTerminal;

use crate::api::ApiClient;
use crate::api::types::AnalysisReport;
use crate::command::{self, Command};
use crate::config::AppConfig;
use crate::event::{ApiResult, AppEvent, Event, EventHandler};
use crate::ui;

// ---------------------------------------------------------------------------
// Request state
// ---------------------------------------------------------------------------

/// Lifecycle of the current analysis request. Exactly one variant holds at a
/// time; starting a new submission replaces the previous variant wholesale,
/// so no stale result or error survives.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(AnalysisReport),
    Failed(String),
}

/// What a submission resolved to before any network activity.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Empty/whitespace-only input: state was reset, nothing to dispatch.
    Reset,
    /// A request should be dispatched for this ID under this sequence number.
    Dispatch { researcher_id: String, seq: u64 },
}

/// Owned search/analysis state: the submitted query, the request lifecycle,
/// and the submission sequence counter that enforces latest-submission-wins.
#[derive(Debug, Default)]
pub struct AnalysisState {
    pub query: String,
    pub state: RequestState,
    seq: u64,
}

impl AnalysisState {
    /// Begin a submission. Trims the input; an empty result resets to
    /// [`RequestState::Idle`] without a network call, otherwise the state
    /// moves to [`RequestState::Loading`] and the caller must dispatch a
    /// request tagged with the returned sequence number.
    pub fn submit(&mut self, input: &str) -> Submission {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            self.query.clear();
            self.state = RequestState::Idle;
            // A reset supersedes any in-flight request; bump the sequence so
            // its late outcome cannot land on the fresh Idle state.
            self.seq += 1;
            return Submission::Reset;
        }

        self.query = trimmed.to_string();
        self.state = RequestState::Loading;
        self.seq += 1;
        Submission::Dispatch {
            researcher_id: self.query.clone(),
            seq: self.seq,
        }
    }

    /// Apply a request outcome. An outcome whose sequence number is not the
    /// latest belongs to a superseded submission and is discarded; returns
    /// whether the outcome was applied.
    pub fn settle(&mut self, seq: u64, result: Result<AnalysisReport, String>) -> bool {
        if seq != self.seq {
            return false;
        }
        self.state = match result {
            Ok(report) => RequestState::Success(report),
            Err(message) => RequestState::Failed(message),
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        self.state == RequestState::Loading
    }
}

// ---------------------------------------------------------------------------
// App mode
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    Command,
    Search,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    pub running: bool,
    pub events: EventHandler,
    pub config: AppConfig,

    pub mode: AppMode,
    pub show_help: bool,

    // Data state
    pub analysis: AnalysisState,

    // Input state
    pub command_input: String,
    pub search_input: String,

    // API client (shared with spawned fetch tasks)
    api_client: Arc<ApiClient>,

    // Status
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig, api_client: ApiClient) -> Self {
        Self {
            running: true,
            events: EventHandler::new(),
            config,
            mode: AppMode::Normal,
            show_help: false,
            analysis: AnalysisState::default(),
            command_input: String::new(),
            search_input: String::new(),
            api_client: Arc::new(api_client),
            status_message: None,
        }
    }

    // -- Main event loop ----------------------------------------------------

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        while self.running {
            terminal.draw(|frame| self.draw(frame))?;
            match self.events.next().await? {
                Event::Tick => self.tick(),
                Event::Crossterm(event) => {
                    if let crossterm::event::Event::Key(key) = event
                        && key.kind == crossterm::event::KeyEventKind::Press
                    {
                        self.handle_key_event(key);
                    }
                }
                Event::App(app_event) => self.handle_app_event(*app_event),
            }
        }
        Ok(())
    }

    fn draw(&self, frame: &mut ratatui::Frame) {
        ui::draw(frame, self);
    }

    fn tick(&self) {}

    // -- Key event routing --------------------------------------------------

    fn handle_key_event(&mut self, key: KeyEvent) {
        // Ctrl-C always quits.
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c' | 'C'))
        {
            self.events.send(AppEvent::Quit);
            return;
        }

        match self.mode {
            AppMode::Normal => self.handle_normal_key(key),
            AppMode::Command => self.handle_command_key(key),
            AppMode::Search => self.handle_search_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                if self.show_help {
                    self.events.send(AppEvent::ToggleHelp);
                } else {
                    self.events.send(AppEvent::Quit);
                }
            }
            KeyCode::Char('/') => {
                self.mode = AppMode::Search;
                self.search_input.clear();
            }
            KeyCode::Char(':') => {
                self.mode = AppMode::Command;
                self.command_input.clear();
            }
            KeyCode::Char('?') => {
                self.events.send(AppEvent::ToggleHelp);
            }
            _ => {}
        }
    }

    fn handle_command_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.mode = AppMode::Normal;
                self.command_input.clear();
            }
            KeyCode::Enter => {
                self.execute_command();
                self.mode = AppMode::Normal;
            }
            KeyCode::Backspace => {
                self.command_input.pop();
            }
            KeyCode::Char(c) => {
                self.command_input.push(c);
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.mode = AppMode::Normal;
                self.search_input.clear();
            }
            KeyCode::Enter => {
                let input = self.search_input.clone();
                self.submit(&input);
                self.mode = AppMode::Normal;
            }
            KeyCode::Backspace => {
                self.search_input.pop();
            }
            KeyCode::Char(c) => {
                self.search_input.push(c);
            }
            _ => {}
        }
    }

    // -- Command execution --------------------------------------------------

    fn execute_command(&mut self) {
        let input = self.command_input.clone();
        match command::parse_command(&input) {
            Some(Command::Analyze(id)) => {
                self.submit(&id);
            }
            Some(Command::Clear) => {
                self.submit("");
            }
            Some(Command::Help) => {
                self.events.send(AppEvent::ToggleHelp);
            }
            Some(Command::Quit) => {
                self.events.send(AppEvent::Quit);
            }
            None => {
                self.status_message = Some(format!("Unknown command: {input}"));
            }
        }
        self.command_input.clear();
    }

    // -- Submission ---------------------------------------------------------

    /// Run a submission through the state machine and dispatch the fetch if
    /// one is required.
    fn submit(&mut self, input: &str) {
        self.status_message = None;
        match self.analysis.submit(input) {
            Submission::Reset => {}
            Submission::Dispatch { researcher_id, seq } => {
                self.events.send(AppEvent::FetchAnalysis { researcher_id, seq });
            }
        }
    }

    // -- App event handling -------------------------------------------------

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => {
                self.running = false;
            }
            AppEvent::ToggleHelp => {
                self.show_help = !self.show_help;
            }
            AppEvent::FetchAnalysis { researcher_id, seq } => {
                self.dispatch_api_request(researcher_id, seq);
            }
            AppEvent::AnalysisLoaded { seq, result } => {
                let applied = self
                    .analysis
                    .settle(seq, result.map_err(|e| e.to_string()));
                if !applied {
                    tracing::debug!(seq, "discarding outcome of superseded request");
                }
            }
        }
    }

    // -- API dispatch -------------------------------------------------------

    fn dispatch_api_request(&self, researcher_id: String, seq: u64) {
        let client = Arc::clone(&self.api_client);
        let sender = self.events.sender();

        tokio::spawn(async move {
            let result = client.get_analysis(&researcher_id).await;
            let mapped: ApiResult<AnalysisReport> = result.map_err(|e| Arc::new(e.to_string()));
            let _ = sender.send(Event::App(Box::new(AppEvent::AnalysisLoaded {
                seq,
                result: mapped,
            })));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn sample_report() -> AnalysisReport {
        AnalysisReport {
            author_name: "D. Sculley".into(),
            final_score: 7.2,
            confidence_score: 0.8,
            final_rating: "Good".into(),
            summary: "Consistent output.".into(),
            breakdown: BTreeMap::new(),
        }
    }

    #[test]
    fn empty_submission_resets_to_idle() {
        let mut state = AnalysisState::default();
        assert_eq!(state.submit("   "), Submission::Reset);
        assert_eq!(state.state, RequestState::Idle);
        assert!(state.query.is_empty());
    }

    #[test]
    fn empty_submission_clears_previous_result() {
        let mut state = AnalysisState::default();
        let Submission::Dispatch { seq, .. } = state.submit("1743905") else {
            panic!("expected dispatch");
        };
        assert!(state.settle(seq, Ok(sample_report())));

        assert_eq!(state.submit(""), Submission::Reset);
        assert_eq!(state.state, RequestState::Idle);
    }

    #[test]
    fn submission_trims_and_enters_loading() {
        let mut state = AnalysisState::default();
        let submission = state.submit("  1743905  ");
        assert!(matches!(
            submission,
            Submission::Dispatch { ref researcher_id, .. } if researcher_id == "1743905"
        ));
        assert!(state.is_loading());
        assert_eq!(state.query, "1743905");
    }

    #[test]
    fn success_outcome_clears_loading() {
        let mut state = AnalysisState::default();
        let Submission::Dispatch { seq, .. } = state.submit("1743905") else {
            panic!("expected dispatch");
        };
        assert!(state.settle(seq, Ok(sample_report())));
        assert!(!state.is_loading());
        assert!(matches!(state.state, RequestState::Success(_)));
    }

    #[test]
    fn failure_outcome_clears_loading() {
        let mut state = AnalysisState::default();
        let Submission::Dispatch { seq, .. } = state.submit("999999999") else {
            panic!("expected dispatch");
        };
        assert!(state.settle(seq, Err("Researcher not found.".into())));
        assert!(!state.is_loading());
        assert_eq!(
            state.state,
            RequestState::Failed("Researcher not found.".into())
        );
    }

    #[test]
    fn resubmission_replaces_failed_with_loading() {
        let mut state = AnalysisState::default();
        let Submission::Dispatch { seq, .. } = state.submit("bad") else {
            panic!("expected dispatch");
        };
        state.settle(seq, Err("Researcher not found.".into()));

        state.submit("1743905");
        assert!(state.is_loading());
    }

    #[test]
    fn empty_submission_supersedes_in_flight_request() {
        let mut state = AnalysisState::default();
        let Submission::Dispatch { seq, .. } = state.submit("1743905") else {
            panic!("expected dispatch");
        };

        // The user clears the search while the request is still in flight.
        assert_eq!(state.submit("   "), Submission::Reset);

        // The late outcome must not revive a result on the fresh Idle state.
        assert!(!state.settle(seq, Ok(sample_report())));
        assert_eq!(state.state, RequestState::Idle);
    }

    #[test]
    fn stale_outcome_is_discarded() {
        let mut state = AnalysisState::default();
        let Submission::Dispatch { seq: first, .. } = state.submit("145896939") else {
            panic!("expected dispatch");
        };
        let Submission::Dispatch { seq: second, .. } = state.submit("1743905") else {
            panic!("expected dispatch");
        };

        // The superseded request resolves late; its outcome must not land.
        assert!(!state.settle(first, Err("timeout".into())));
        assert!(state.is_loading());

        assert!(state.settle(second, Ok(sample_report())));
        assert!(matches!(state.state, RequestState::Success(_)));
    }
}
