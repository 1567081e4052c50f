use crossterm::event::KeyEvent;
use std::sync::mpsc::Sender;
use std::time::Duration;
use tokio::runtime::Handle;

use crate::api::ApiClient;
use crate::config::{Config, ThemeName};
use crate::ui::chat::{
    pick_reply, ChatIntent, ChatReducer, ChatState, RandomPicker, ReplyPicker, ReplyScheduler,
};
use crate::ui::events::AppEvent;
use crate::ui::input::handle_key;
use crate::ui::mvi::Reducer;
use crate::ui::request::{
    AskIntent, AskReducer, AskState, FileSelection, Question, RequestIntent, RequestOutcome,
    SummarizeIntent, SummarizeReducer, SummarizeState,
};
use crate::upload::SelectedFile;

/// Pane that receives typed keys.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Ask,
    Summarize,
    Chat,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Ask => Focus::Summarize,
            Focus::Summarize => Focus::Chat,
            Focus::Chat => Focus::Ask,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Ask => Focus::Chat,
            Focus::Summarize => Focus::Ask,
            Focus::Chat => Focus::Summarize,
        }
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// View-model for the whole screen.
///
/// Owns one state per feature. Reducers stay pure; this type starts HTTP
/// calls and reply timers when a dispatch says so, and routes their results
/// back in as events.
pub struct App {
    should_quit: bool,
    focus: Focus,
    theme: ThemeName,
    ask: AskState,
    summarize: SummarizeState,
    /// Path being typed in the summarize pane.
    path_draft: String,
    /// Last rejected selection, shown under the path field.
    notice: Option<String>,
    chat: ChatState,
    replies: ReplyScheduler,
    picker: Box<dyn ReplyPicker>,
    reply_delay: Duration,
    client: ApiClient,
    runtime: Handle,
    events: Sender<AppEvent>,
}

impl App {
    pub fn new(config: &Config, client: ApiClient, runtime: Handle, events: Sender<AppEvent>) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Ask,
            theme: config.ui.theme,
            ask: AskState::default(),
            summarize: SummarizeState::default(),
            path_draft: String::new(),
            notice: None,
            chat: ChatState::default(),
            replies: ReplyScheduler::new(runtime.clone()),
            picker: Box::new(RandomPicker),
            reply_delay: config.chat.reply_delay(),
            client,
            runtime,
            events,
        }
    }

    /// Replace the reply source (tests use a fixed one).
    pub fn with_picker(mut self, picker: Box<dyn ReplyPicker>) -> Self {
        self.picker = picker;
        self
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn theme(&self) -> ThemeName {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::debug!(theme = ?self.theme, "theme toggled");
    }

    pub fn ask(&self) -> &AskState {
        &self.ask
    }

    pub fn summarize(&self) -> &SummarizeState {
        &self.summarize
    }

    pub fn chat(&self) -> &ChatState {
        &self.chat
    }

    pub fn path_draft(&self) -> &str {
        &self.path_draft
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.on_key(key),
            AppEvent::Paste(text) => self.on_paste(&text),
            AppEvent::Tick => self.on_tick(),
            AppEvent::Resize(_, _) => {}
            AppEvent::AskCompleted {
                generation,
                outcome,
            } => self.on_ask_completed(generation, outcome),
            AppEvent::SummaryCompleted {
                generation,
                outcome,
            } => self.on_summary_completed(generation, outcome),
            AppEvent::ChatReply { text } => {
                dispatch_mvi!(self, chat, ChatReducer, ChatIntent::ReplyArrived { text });
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        handle_key(self, key);
    }

    pub fn on_tick(&mut self) {
        self.replies.reap();
    }

    /// Pasted text goes to the focused field. On the summarize pane a paste
    /// is a drop and selects the file straight away.
    pub fn on_paste(&mut self, text: &str) {
        match self.focus {
            Focus::Ask => {
                let mut question = self.ask.input().text().to_string();
                question.push_str(text);
                self.edit_question(Question::new(question));
            }
            Focus::Summarize => self.select_file(text),
            Focus::Chat => {
                let mut draft = self.chat.draft().to_string();
                draft.push_str(text);
                self.edit_chat_draft(draft);
            }
        }
    }

    // -- Ask slot -------------------------------------------------------------

    pub fn edit_question(&mut self, question: Question) {
        self.dispatch_ask(RequestIntent::EditInput(question));
    }

    pub fn trigger_ask(&mut self) {
        self.dispatch_ask(RequestIntent::Trigger);
    }

    pub fn reset_ask(&mut self) {
        self.dispatch_ask(RequestIntent::Reset);
    }

    fn on_ask_completed(&mut self, generation: u64, outcome: RequestOutcome) {
        if !self.ask.is_in_flight() || generation != self.ask.generation() {
            tracing::debug!(generation, current = self.ask.generation(), "discarding stale ask completion");
        }
        self.dispatch_ask(RequestIntent::Complete {
            generation,
            outcome,
        });
    }

    fn dispatch_ask(&mut self, intent: AskIntent) {
        let before = self.ask.generation();
        dispatch_mvi!(self, ask, AskReducer, intent);
        if self.ask.generation() != before {
            self.spawn_ask();
        }
    }

    fn spawn_ask(&self) {
        let generation = self.ask.generation();
        let question = self.ask.input().text().to_string();
        let client = self.client.clone();
        let events = self.events.clone();
        tracing::info!(generation, "dispatching ask");

        self.runtime.spawn(async move {
            let outcome = RequestOutcome::from_result("ask", client.ask(&question).await);
            let _ = events.send(AppEvent::AskCompleted {
                generation,
                outcome,
            });
        });
    }

    // -- Summarize slot -------------------------------------------------------

    pub fn push_path_char(&mut self, ch: char) {
        self.path_draft.push(ch);
    }

    pub fn pop_path_char(&mut self) {
        self.path_draft.pop();
    }

    /// Submit the typed path: select it if there is one, otherwise upload
    /// the current selection.
    pub fn submit_path(&mut self) {
        if self.path_draft.trim().is_empty() {
            self.trigger_summarize();
        } else {
            let raw = std::mem::take(&mut self.path_draft);
            self.select_file(&raw);
        }
    }

    /// Select (or drop) a file. Applies the `.txt` filter; a rejected path
    /// leaves the slot untouched.
    pub fn select_file(&mut self, raw: &str) {
        if self.summarize.is_in_flight() {
            self.notice = Some("Upload in progress, wait for the summary.".to_string());
            return;
        }
        match SelectedFile::from_dropped(raw) {
            Ok(file) => {
                tracing::info!(file = file.name(), "file selected");
                self.notice = None;
                self.dispatch_summarize(RequestIntent::EditInput(FileSelection::new(file)));
            }
            Err(err) => {
                tracing::debug!(error = %err, "file selection rejected");
                self.notice = Some(err.to_string());
            }
        }
    }

    pub fn trigger_summarize(&mut self) {
        self.dispatch_summarize(RequestIntent::Trigger);
    }

    pub fn reset_summarize(&mut self) {
        self.path_draft.clear();
        self.notice = None;
        self.dispatch_summarize(RequestIntent::Reset);
    }

    fn on_summary_completed(&mut self, generation: u64, outcome: RequestOutcome) {
        if !self.summarize.is_in_flight() || generation != self.summarize.generation() {
            tracing::debug!(
                generation,
                current = self.summarize.generation(),
                "discarding stale summary completion"
            );
        }
        self.dispatch_summarize(RequestIntent::Complete {
            generation,
            outcome,
        });
    }

    fn dispatch_summarize(&mut self, intent: SummarizeIntent) {
        let before = self.summarize.generation();
        dispatch_mvi!(self, summarize, SummarizeReducer, intent);
        if self.summarize.generation() != before {
            self.spawn_summarize();
        }
    }

    fn spawn_summarize(&self) {
        let Some(file) = self.summarize.input().file().cloned() else {
            return;
        };
        let generation = self.summarize.generation();
        let client = self.client.clone();
        let events = self.events.clone();
        tracing::info!(generation, file = file.name(), "dispatching summarize");

        self.runtime.spawn(async move {
            let result = client.summarize_file(&file).await;
            let outcome = RequestOutcome::from_result("summarize", result);
            let _ = events.send(AppEvent::SummaryCompleted {
                generation,
                outcome,
            });
        });
    }

    // -- Chat -----------------------------------------------------------------

    pub fn edit_chat_draft(&mut self, draft: String) {
        dispatch_mvi!(self, chat, ChatReducer, ChatIntent::EditDraft(draft));
    }

    pub fn send_chat(&mut self) {
        let before = self.chat.pending_replies();
        dispatch_mvi!(self, chat, ChatReducer, ChatIntent::Send);
        if self.chat.pending_replies() > before {
            let text = pick_reply(self.picker.as_mut());
            let events = self.events.clone();
            self.replies.schedule(self.reply_delay, move || {
                let _ = events.send(AppEvent::ChatReply {
                    text: text.to_string(),
                });
            });
        }
    }

    /// Stop everything this view scheduled. Dispatched HTTP calls are not
    /// cancellable; their completions go nowhere once the loop stops.
    pub fn teardown(&mut self) {
        self.replies.cancel_all();
        dispatch_mvi!(self, chat, ChatReducer, ChatIntent::CancelPending);
    }
}
