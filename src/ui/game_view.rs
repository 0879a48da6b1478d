use crate::game::{Board, Cell, GameState, Phase, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

pub fn render(
    frame: &mut Frame,
    state: &GameState,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, state, chunks[0]);
    render_board(frame, state.board(), selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, state: &GameState, area: Rect) {
    let (status, color) = match state.phase() {
        Phase::InProgress => {
            let player = state.current_player();
            (
                format!("Current Player: {}", player.name()),
                player_color(player),
            )
        }
        Phase::Won(player) => (
            format!("Game Over: {} wins", player.name()),
            player_color(player),
        ),
        Phase::Tied => ("Game Over: it's a tie".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, board: &Board, selected_column: usize, area: Rect) {
    let width = board.width();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..width {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    lines.push(Line::from(col_line));

    // Borders sized from the runtime board width
    let horizontal = "═".repeat(width * 3);
    lines.push(Line::from(format!("  ╔{horizontal}╗")));

    for row in 0..board.height() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..width {
            let (symbol, color) = match board.get(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Occupied(player) => (" ● ", player_color(player)),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }

        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{horizontal}╝")));

    // Selection indicator under the chosen column
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..width {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter: Drop  |  R: Restart  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
