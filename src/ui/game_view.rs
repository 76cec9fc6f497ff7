use super::board_widget::{cell_span, player_color};
use crate::game::{Game, GameOutcome};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// One-line summary of where the game stands.
pub fn status_text(game: &Game) -> String {
    match game.outcome() {
        GameOutcome::InProgress => format!("Current Player: {}", game.current_player()),
        GameOutcome::Win(player) => format!("{player} won!"),
        GameOutcome::Tie => "Tie!".to_string(),
    }
}

pub fn render(frame: &mut Frame, game: &Game, selected_column: usize, message: &Option<String>) {
    // Column labels, two borders and the selection indicator around the rows
    let board_lines = u16::try_from(game.board().height() + 4).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),        // Header
            Constraint::Min(board_lines), // Board
            Constraint::Length(3),        // Message
            Constraint::Length(3),        // Controls
        ])
        .split(frame.area());

    render_header(frame, game, chunks[0]);
    render_board(frame, game, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, game: &Game, area: Rect) {
    let color = match game.outcome() {
        GameOutcome::InProgress => player_color(game.current_player()),
        GameOutcome::Win(player) => player_color(player),
        GameOutcome::Tie => Color::White,
    };

    let header = Paragraph::new(status_text(game))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, game: &Game, selected_column: usize, area: Rect) {
    let board = game.board();
    let width = board.width();
    let winning = game.winning_line();
    let show_selector = !game.is_terminal();

    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..width {
        let label = format!("{:^3}", col + 1);
        if show_selector && col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(width * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..board.height() {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..width {
            let highlight = winning.is_some_and(|line| line.contains(&(row, col)));
            if let Some(cell) = board.get(row, col) {
                row_spans.push(cell_span(cell, highlight));
            }
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..width {
        if show_selector && col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
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
    let line = Line::from("←/→: Move  |  Enter: Drop  |  1-9: Drop in column  |  R: New game  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        let mut game = Game::new(6, 7).unwrap();
        assert_eq!(status_text(&game), "Current Player: Player 1");

        for col in [0, 1, 0, 1, 0, 1, 0] {
            game.drop_piece(col).unwrap();
        }
        assert_eq!(status_text(&game), "Player 1 won!");

        let mut game = Game::new(1, 1).unwrap();
        game.drop_piece(0).unwrap();
        assert_eq!(status_text(&game), "Tie!");
    }
}
