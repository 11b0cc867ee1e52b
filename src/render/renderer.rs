use std::collections::HashSet;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameSnapshot, GridCoordinate};
use crate::metrics::SessionMetrics;

const BOARD_BACKGROUND: Color = Color::Black;
const BORDER_COLOR: Color = Color::Rgb(93, 216, 228);
const APPLE_COLOR: Color = Color::Rgb(255, 0, 0);
const SNAKE_COLOR: Color = Color::Rgb(0, 255, 0);

const FILLED: &str = "█";

pub struct Renderer {
    /// Terminal columns per grid cell
    cell_size: u16,
}

impl Renderer {
    pub fn new(cell_size: u16) -> Self {
        Self {
            cell_size: cell_size.max(1),
        }
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &GameSnapshot, metrics: &SessionMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(snapshot, metrics);
        frame.render_widget(stats, chunks[0]);

        let board_area = self.board_area(chunks[1], snapshot);
        let board = self.render_board(snapshot);
        frame.render_widget(board, board_area);

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    /// Centre a bordered board of the snapshot's size inside `area`, clipped to fit
    fn board_area(&self, area: Rect, snapshot: &GameSnapshot) -> Rect {
        let wanted_width = snapshot.grid_width as u32 * self.cell_size as u32 + 2;
        let wanted_height = snapshot.grid_height as u32 + 2;
        let width = wanted_width.min(area.width as u32) as u16;
        let height = wanted_height.min(area.height as u32) as u16;
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }

    fn render_board(&self, snapshot: &GameSnapshot) -> Paragraph<'_> {
        let body: HashSet<GridCoordinate> = snapshot.snake.iter().copied().collect();
        let head = snapshot.head();
        let cell_width = self.cell_size as usize;

        let filled = FILLED.repeat(cell_width);
        let empty = " ".repeat(cell_width);

        let mut lines = Vec::with_capacity(snapshot.grid_height as usize);
        for y in 0..snapshot.grid_height {
            let mut spans = Vec::with_capacity(snapshot.grid_width as usize);

            for x in 0..snapshot.grid_width {
                let pos = GridCoordinate::new(x, y);

                // The snake is drawn over the apple when they share a cell
                let cell = if Some(pos) == head {
                    Span::styled(
                        filled.clone(),
                        Style::default()
                            .fg(SNAKE_COLOR)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if body.contains(&pos) {
                    Span::styled(filled.clone(), Style::default().fg(SNAKE_COLOR))
                } else if pos == snapshot.apple {
                    Span::styled(filled.clone(), Style::default().fg(APPLE_COLOR))
                } else {
                    Span::raw(empty.clone())
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .style(Style::default().bg(BOARD_BACKGROUND))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Thick)
                    .border_style(Style::default().fg(BORDER_COLOR))
                    .title(" Snake "),
            )
    }

    fn render_stats(&self, snapshot: &GameSnapshot, metrics: &SessionMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Length: ", label),
            Span::styled(
                snapshot.snake_length().to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.best_length.to_string(), value),
            Span::raw("    "),
            Span::styled("Apples: ", label),
            Span::styled(metrics.apples_eaten.to_string(), value),
            Span::raw("    "),
            Span::styled("Resets: ", label),
            Span::styled(metrics.resets.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(2)
    }
}
