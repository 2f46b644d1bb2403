//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. The Query Composer lives
//! here: it joins the typed keyword with the uploaded-file text, encodes the
//! result into a search route, and pushes the results view — which decodes
//! the route parameter back out and runs the filter.

use crate::{
    commands::Command,
    event::{self, AppEvent},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        help::HelpPopup,
        preview::Preview,
        results::{Results, ResultsState},
        search_bar::{SearchBar, SearchBarState},
        trending::{Trending, TrendingState},
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use munpul_core::{
    config::Config,
    query::{self, Route},
    search::filter_subjects,
    upload::{self, UploadError, UploadedFile},
    KeywordStore, Subject, TrendingSnapshot,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
    Frame, Terminal,
};
use std::{io, path::PathBuf, time::Duration};
use tokio::sync::{mpsc, watch};

// ---------------------------------------------------------------------------
// Focus + screen types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    SearchBar,
    Trending,
    Results,
    /// Vim-style `:` command line is active.
    Command,
}

/// One entry on the navigation stack. `screens[0]` is always [`Screen::Home`].
pub enum Screen {
    Home,
    Results(ResultsState),
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    /// Navigation stack; the last entry is the active view.
    pub screens: Vec<Screen>,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub search: SearchBarState,
    pub trending: TrendingState,
    /// Full decoded text of the uploaded file, empty when none.
    pub uploaded_text: String,
    /// First 500 characters of the uploaded text, for the preview pane.
    pub preview_text: String,
    /// User-facing notice (upload rejection, decode failure).
    pub notice: Option<String>,
    pub store: KeywordStore,
    pub subjects: Vec<Subject>,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    pub quit: bool,
}

impl AppState {
    fn active_results_mut(&mut self) -> Option<&mut ResultsState> {
        match self.screens.last_mut() {
            Some(Screen::Results(state)) => Some(state),
            _ => None,
        }
    }

    fn on_results(&self) -> bool {
        matches!(self.screens.last(), Some(Screen::Results(_)))
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

type UploadResult = Result<UploadedFile, UploadError>;

pub struct App {
    state: AppState,
    /// Handle used to spawn the async upload decode off the UI loop.
    runtime: tokio::runtime::Handle,
    /// Change notification from the keyword store.
    store_rx: watch::Receiver<TrendingSnapshot>,
    upload_tx: mpsc::UnboundedSender<UploadResult>,
    upload_rx: mpsc::UnboundedReceiver<UploadResult>,
    /// The decode currently in flight, aborted when superseded.
    in_flight: Option<tokio::task::JoinHandle<()>>,
}

impl App {
    pub fn new(
        store: KeywordStore,
        subjects: Vec<Subject>,
        config: Config,
        theme: Theme,
        runtime: tokio::runtime::Handle,
    ) -> Self {
        let store_rx = store.subscribe();
        let (upload_tx, upload_rx) = mpsc::unbounded_channel();

        let mut trending = TrendingState::new(config.ui.trending_limit);
        trending.update(store.read());

        let state = AppState {
            screens: vec![Screen::Home],
            focus: Focus::SearchBar,
            prev_focus: Focus::SearchBar,
            search: SearchBarState::default(),
            trending,
            uploaded_text: String::new(),
            preview_text: String::new(),
            notice: None,
            store,
            subjects,
            theme,
            config,
            show_help: false,
            command_bar: CommandBarState::default(),
            quit: false,
        };

        App {
            state,
            runtime,
            store_rx,
            upload_tx,
            upload_rx,
            in_flight: None,
        }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            self.poll_background();

            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping when a text widget is focused
                        let app_event = if is_insert_mode(self.state.focus) {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                            self.handle(ev);
                        }
                    }
                    // Repeat/release key events on terminals that emit them
                    Event::Key(_) => {}
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Drain completions from the background: store replacements and upload
    /// decode results. Runs once per tick, before drawing.
    fn poll_background(&mut self) {
        if self.store_rx.has_changed().unwrap_or(false) {
            let snapshot = self.store_rx.borrow_and_update().clone();
            tracing::debug!(count = snapshot.keywords.len(), "trending list replaced");
            self.state.trending.update(snapshot);
        }

        while let Ok(result) = self.upload_rx.try_recv() {
            match result {
                Ok(file) => {
                    tracing::debug!(chars = file.text.chars().count(), "upload decoded");
                    self.state.uploaded_text = file.text;
                    self.state.preview_text = file.preview;
                    self.state.notice = None;
                }
                // Decode failure: surface a notice, keep prior state intact.
                Err(err) => {
                    tracing::debug!(%err, "upload failed");
                    self.state.notice = Some(err.to_string());
                }
            }
        }
    }

    fn handle(&mut self, event: AppEvent) {
        // Help popup intercepts all events; only close keys pass through.
        if self.state.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                    self.state.show_help = false;
                }
                _ => {}
            }
            return;
        }

        // Command mode intercepts all events.
        if self.state.focus == Focus::Command {
            match event {
                AppEvent::Escape => {
                    self.state.command_bar.clear();
                    self.state.focus = self.state.prev_focus;
                }
                AppEvent::Enter => {
                    let input = self.state.command_bar.input.clone();
                    match Command::parse(&input) {
                        Ok(cmd) => {
                            tracing::debug!(command = ?cmd, "executing command");
                            self.state.command_bar.clear();
                            self.state.focus = self.state.prev_focus;
                            self.execute_command(cmd);
                        }
                        Err(msg) if msg.is_empty() => {
                            // Empty input: just close
                            self.state.command_bar.clear();
                            self.state.focus = self.state.prev_focus;
                        }
                        Err(msg) => {
                            // Show the error; bar stays open
                            self.state.command_bar.error = Some(msg);
                        }
                    }
                }
                other => self.state.command_bar.handle(&other),
            }
            return;
        }

        match event {
            // Toggle help (only when not typing in the search bar)
            AppEvent::Char('?') if self.state.focus != Focus::SearchBar => {
                self.state.show_help = true;
            }

            // Enter command mode with `:` (not from the search bar)
            AppEvent::Char(':') if self.state.focus != Focus::SearchBar => {
                self.state.prev_focus = self.state.focus;
                self.state.command_bar.clear();
                self.state.focus = Focus::Command;
            }

            // Quit / leave the results view
            AppEvent::Quit => {
                if self.state.on_results() {
                    self.pop_screen();
                } else {
                    tracing::debug!("quit");
                    self.state.quit = true;
                }
            }

            AppEvent::Escape => {
                if self.state.on_results() {
                    self.pop_screen();
                } else if self.state.focus == Focus::SearchBar
                    && !self.state.trending.is_empty()
                {
                    self.state.focus = Focus::Trending;
                }
            }

            // Tab-cycle focus between the home panes
            AppEvent::FocusNext if !self.state.on_results() => {
                let next = match self.state.focus {
                    Focus::SearchBar if !self.state.trending.is_empty() => Focus::Trending,
                    _ => Focus::SearchBar,
                };
                tracing::debug!(from = ?self.state.focus, to = ?next, "focus cycle");
                self.state.focus = next;
            }

            // Jump to the search bar (leaving the results view if needed)
            AppEvent::SearchFocus => {
                if self.state.on_results() {
                    self.pop_screen();
                }
                self.state.focus = Focus::SearchBar;
            }

            // `u` opens the command bar primed for a file path
            AppEvent::Upload if !self.state.on_results() => {
                self.state.prev_focus = self.state.focus;
                self.state.command_bar.prime("open ");
                self.state.focus = Focus::Command;
            }

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => self.dispatch_to_focused(other),
        }
    }

    /// Route an event to the widget that owns the current focus.
    fn dispatch_to_focused(&mut self, event: AppEvent) {
        match self.state.focus {
            Focus::SearchBar => {
                if event == AppEvent::Enter {
                    self.compose_and_search(None);
                } else {
                    self.state.search.handle(&event);
                }
            }
            Focus::Trending => {
                if event == AppEvent::Enter {
                    if let Some(word) = self.state.trending.selected().map(str::to_string) {
                        self.select_trending(word);
                    }
                } else {
                    self.state.trending.handle(&event);
                }
            }
            Focus::Results => {
                if let Some(results) = self.state.active_results_mut() {
                    results.handle(&event);
                }
            }
            Focus::Command => {} // handled before dispatch, should not reach here
        }
    }

    // ── Query Composer ─────────────────────────────────────────────────────

    /// Join the base keyword with the uploaded text and navigate to the
    /// results view. A blank combination is a silent no-op: no navigation,
    /// no error.
    fn compose_and_search(&mut self, override_keyword: Option<&str>) {
        let base = override_keyword.unwrap_or(&self.state.search.keyword);
        let Some(combined) = query::compose(base, &self.state.uploaded_text) else {
            tracing::debug!("compose: blank query, navigation suppressed");
            return;
        };
        self.navigate(Route::search(combined));
    }

    /// Push the results view for `route`. The query is encoded into the URI
    /// here and decoded back out of it on the other side, so the results view
    /// only ever sees what survived the round trip.
    fn navigate(&mut self, route: Route) {
        let uri = route.to_uri();
        let query = match Route::parse(&uri) {
            Some(Route::Search { query }) => query,
            None => String::new(),
        };
        tracing::debug!(%uri, %query, "navigating to results");
        let matches: Vec<Subject> = filter_subjects(&query, &self.state.subjects)
            .into_iter()
            .cloned()
            .collect();
        self.state
            .screens
            .push(Screen::Results(ResultsState::new(uri, query, matches)));
        self.state.focus = Focus::Results;
    }

    /// Trending-chip selection: show the word in the search field, drop any
    /// uploaded text, and search immediately with the word as override.
    fn select_trending(&mut self, word: String) {
        tracing::debug!(%word, "trending keyword selected");
        self.state.search.set_keyword(&word);
        self.clear_upload();
        self.compose_and_search(Some(&word));
    }

    fn pop_screen(&mut self) {
        if self.state.screens.len() > 1 {
            self.state.screens.pop();
        }
        self.state.focus = Focus::SearchBar;
    }

    // ── Upload ─────────────────────────────────────────────────────────────

    /// Start decoding an uploaded file. Files whose declared media type is
    /// not plain text are rejected up front — a notice is shown and no state
    /// changes. A decode already in flight is aborted: the newest upload
    /// wins, explicitly rather than by completion order.
    fn start_upload(&mut self, path: PathBuf) {
        let media_type = upload::declared_media_type(&path);
        if media_type != upload::TEXT_PLAIN {
            tracing::debug!(%media_type, path = %path.display(), "upload rejected");
            self.state.notice = Some(
                UploadError::NotPlainText {
                    media_type: media_type.to_string(),
                }
                .to_string(),
            );
            return;
        }

        if let Some(superseded) = self.in_flight.take() {
            tracing::debug!("aborting superseded upload decode");
            superseded.abort();
        }

        let tx = self.upload_tx.clone();
        self.in_flight = Some(self.runtime.spawn(async move {
            let _ = tx.send(upload::load_file(&path).await);
        }));
    }

    fn clear_upload(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.abort();
        }
        self.state.uploaded_text.clear();
        self.state.preview_text.clear();
    }

    // ── Commands ───────────────────────────────────────────────────────────

    fn execute_command(&mut self, cmd: Command) {
        match cmd {
            Command::Quit => {
                if self.state.on_results() {
                    self.pop_screen();
                } else {
                    self.state.quit = true;
                }
            }
            Command::Exit => {
                self.state.quit = true;
            }
            Command::Help => {
                self.state.show_help = !self.state.show_help;
            }
            Command::Theme(name) => {
                self.state.theme = match name.to_ascii_lowercase().as_str() {
                    "gruvbox" | "gruvbox_dark" | "gruvbox-dark" => Theme::load_gruvbox_dark(),
                    _ => Theme::load_default(),
                };
            }
            Command::Open(path) => {
                self.start_upload(path);
            }
            Command::Clear => {
                self.clear_upload();
                self.state.notice = None;
            }
            Command::Trending(keywords) => {
                self.state.store.replace_all(keywords);
            }
        }
    }
}

/// Returns true when the current focus is on a text-input widget, meaning
/// alphabetic keys should produce characters rather than trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::SearchBar | Focus::Command)
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    match state.screens.last() {
        Some(Screen::Results(results)) => {
            Results::new(results, &state.theme).render(area, frame.buffer_mut());
        }
        _ => draw_home(frame, state, area),
    }

    if state.show_help {
        HelpPopup::new(&state.theme).render(area, frame.buffer_mut());
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect {
            y: area.bottom().saturating_sub(1),
            height: 1,
            ..area
        };
        CommandBar::new(&state.command_bar, &state.theme).render(cmd_area, frame.buffer_mut());
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
    }
}

fn draw_home(frame: &mut Frame, state: &AppState, area: Rect) {
    let show_trending = !state.trending.is_empty();
    let show_preview = state.config.ui.show_preview && !state.preview_text.is_empty();

    // Vertical: hero text | search bar | trending | preview | notice | fill
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(if show_trending { 3 } else { 0 }),
            Constraint::Length(if show_preview {
                state.config.ui.preview_max_rows + 2
            } else {
                0
            }),
            Constraint::Length(if state.notice.is_some() { 1 } else { 0 }),
            Constraint::Fill(1),
        ])
        .split(area);

    let hero = Paragraph::new(vec![
        Line::from("한국사도, 국어도, 수학도, 해설까지 완벽하게"),
        Line::from("문풀과 함께 시작하세요").style(Style::default().add_modifier(Modifier::DIM)),
    ])
    .centered();
    hero.render(vert[0], frame.buffer_mut());

    let search_bar = SearchBar::new(
        &state.search,
        state.uploaded_text.chars().count(),
        state.focus == Focus::SearchBar,
        &state.theme,
    );
    if state.focus == Focus::SearchBar {
        let (cx, cy) = search_bar.cursor_position(vert[1]);
        frame.set_cursor_position((cx, cy));
    }
    search_bar.render(vert[1], frame.buffer_mut());

    if show_trending {
        Trending::new(
            &state.trending,
            state.focus == Focus::Trending,
            &state.theme,
        )
        .render(vert[2], frame.buffer_mut());
    }

    if show_preview {
        Preview::new(&state.preview_text, &state.theme).render(vert[3], frame.buffer_mut());
    }

    if let Some(ref notice) = state.notice {
        Paragraph::new(Line::from(notice.as_str()))
            .style(state.theme.notice_error)
            .render(vert[4], frame.buffer_mut());
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
