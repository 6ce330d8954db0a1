//! TUI application state and logic

use crate::core::Word;
use crate::game::{EnterOutcome, Game, KeyboardHints, Outcome, RevealTimeline};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long the transient notice stays on screen
const NOTICE_DURATION: Duration = Duration::from_secs(2);

/// Event poll interval; keeps reveal animation and notice expiry ticking
const TICK: Duration = Duration::from_millis(50);

/// A transient, auto-clearing message
pub struct Notice {
    pub text: String,
    shown_at: Instant,
}

/// An in-flight staggered reveal of a submitted row
pub struct Reveal {
    pub row_index: usize,
    timeline: RevealTimeline,
    started: Instant,
}

impl Reveal {
    fn start(row_index: usize) -> Self {
        Self {
            row_index,
            timeline: RevealTimeline::default(),
            started: Instant::now(),
        }
    }

    /// How many cells of the revealing row may be shown evaluated
    #[must_use]
    pub fn visible_cells(&self) -> usize {
        self.timeline.visible_cells(self.started.elapsed())
    }

    fn is_complete(&self) -> bool {
        self.timeline.is_complete(self.started.elapsed())
    }
}

/// Application state
pub struct App {
    pub game: Game,
    /// Hints as currently displayed; trails the game state until a reveal finishes
    pub shown_hints: KeyboardHints,
    pub reveal: Option<Reveal>,
    pub notice: Option<Notice>,
    pub should_quit: bool,
    goal_source: Box<dyn FnMut() -> Word>,
}

impl App {
    /// Build the app, drawing the first goal word from `goal_source`
    #[must_use]
    pub fn new(mut goal_source: Box<dyn FnMut() -> Word>) -> Self {
        let goal = goal_source();

        Self {
            game: Game::new(goal),
            shown_hints: KeyboardHints::new(),
            reveal: None,
            notice: None,
            should_quit: false,
            goal_source,
        }
    }

    /// Whether the game has ended and the final row is fully revealed
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.game.outcome().is_over() && self.reveal.is_none()
    }

    /// Advance time-driven state: notice expiry and reveal completion
    pub fn tick(&mut self) {
        if self
            .notice
            .as_ref()
            .is_some_and(|n| n.shown_at.elapsed() >= NOTICE_DURATION)
        {
            self.notice = None;
        }

        if self.reveal.as_ref().is_some_and(Reveal::is_complete) {
            self.reveal = None;
            // Keyboard hints become visible only once the whole row is shown
            self.shown_hints = self.game.hints().clone();
        }
    }

    pub fn new_game(&mut self) {
        let goal = (self.goal_source)();
        self.game = Game::new(goal);
        self.shown_hints = KeyboardHints::new();
        self.reveal = None;
        self.notice = None;
    }

    fn show_notice(&mut self, text: &str) {
        self.notice = Some(Notice {
            text: text.to_string(),
            shown_at: Instant::now(),
        });
    }

    /// Terminal message for a finished game, if any
    #[must_use]
    pub fn end_message(&self) -> Option<&'static str> {
        if !self.is_finished() {
            return None;
        }
        match self.game.outcome() {
            Outcome::Won => Some("You have won!"),
            Outcome::Lost => Some("You lost. Better luck next time."),
            Outcome::InProgress => None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            // Ignore game input while a row is being revealed
            _ if self.reveal.is_some() => {}
            KeyCode::Enter => match self.game.press_enter() {
                EnterOutcome::Submitted { row_index, .. } => {
                    self.notice = None;
                    self.reveal = Some(Reveal::start(row_index));
                }
                EnterOutcome::Incomplete => self.show_notice("Word incomplete"),
                EnterOutcome::Ignored => {}
            },
            KeyCode::Backspace => self.game.press_backspace(),
            KeyCode::Char(c) => {
                if self.is_finished() {
                    match c {
                        'n' | 'N' => self.new_game(),
                        'q' | 'Q' => self.should_quit = true,
                        _ => {}
                    }
                } else {
                    self.game.press_letter(c);
                }
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
