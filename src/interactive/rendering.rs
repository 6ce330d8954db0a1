//! TUI rendering with ratatui
//!
//! Board grid, hint-tinted keyboard, and message area for the game.

use super::app::App;
use crate::core::{Cell, LetterState, NUM_ROWS, WORD_LENGTH};
use crate::game::{KEY_ROWS, Outcome};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                    // Header
            Constraint::Length(NUM_ROWS as u16 + 2),  // Board
            Constraint::Length(3),                    // Message area
            Constraint::Length(5),                    // Keyboard
            Constraint::Length(3),                    // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_message(f, app, chunks[2]);
    render_keyboard(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Style for one board cell
fn cell_style(state: LetterState) -> Style {
    match state {
        LetterState::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterState::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterState::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterState::Default => Style::default().fg(Color::White),
    }
}

/// The state a cell may show right now, masking un-revealed evaluations
fn displayed_state(app: &App, cell: Cell) -> LetterState {
    match &app.reveal {
        Some(reveal)
            if cell.row() == reveal.row_index && cell.position() >= reveal.visible_cells() =>
        {
            LetterState::Default
        }
        _ => cell.state(),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(NUM_ROWS);

    for row in app.game.board().rows() {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for cell in row {
            let glyph = cell.letter().unwrap_or('·');
            spans.push(Span::styled(
                format!(" {glyph} "),
                cell_style(displayed_state(app, *cell)),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Board "),
    );
    f.render_widget(board, area);
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let line = if let Some(notice) = &app.notice {
        Line::from(Span::styled(
            notice.text.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    } else if let Some(message) = app.end_message() {
        let color = match app.game.outcome() {
            Outcome::Won => Color::Green,
            _ => Color::Red,
        };
        Line::from(Span::styled(
            message,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            "Guess the hidden five-letter word",
            Style::default().fg(Color::DarkGray),
        ))
    };

    let message = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(message, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(KEY_ROWS.len());

    for (i, key_row) in KEY_ROWS.iter().enumerate() {
        let mut spans = Vec::new();

        if i == KEY_ROWS.len() - 1 {
            spans.push(Span::styled(" ENTER ", Style::default().fg(Color::Cyan)));
            spans.push(Span::raw(" "));
        }

        for key in key_row.chars() {
            spans.push(Span::styled(
                format!(" {key} "),
                cell_style(app.shown_hints.state_of(key)),
            ));
            spans.push(Span::raw(" "));
        }

        if i == KEY_ROWS.len() - 1 {
            spans.push(Span::styled(" ⌫ ", Style::default().fg(Color::Cyan)));
        }

        lines.push(Line::from(spans).alignment(Alignment::Center));
    }

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Keyboard "),
    );
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let text = if app.is_finished() {
        "n: new game  |  q: quit  |  Esc: quit"
    } else {
        "Type letters  |  Enter: submit  |  Backspace: erase  |  Esc: quit"
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}
