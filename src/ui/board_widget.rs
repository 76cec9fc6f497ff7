use crate::game::{Cell, Player};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

pub fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

/// Three-column span for one board cell. Cells on the winning line are drawn
/// reversed.
pub fn cell_span(cell: Cell, highlight: bool) -> Span<'static> {
    let (symbol, color) = match cell {
        Cell::Empty => (" . ", Color::DarkGray),
        Cell::Occupied(player) => (" \u{25cf} ", player_color(player)),
    };
    let mut style = Style::default().fg(color);
    if highlight {
        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }
    Span::styled(symbol, style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_span_colors() {
        let span = cell_span(Cell::Occupied(Player::Two), false);
        assert_eq!(span.style.fg, Some(Color::Yellow));
        assert_eq!(span.content, " \u{25cf} ");

        let span = cell_span(Cell::Empty, false);
        assert_eq!(span.content, " . ");
    }

    #[test]
    fn test_highlighted_cell() {
        let span = cell_span(Cell::Occupied(Player::One), true);
        assert!(span.style.add_modifier.contains(Modifier::REVERSED));
    }
}
