use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::game::{GameState, Phase, Position};

/// Pull-based presentation layer: reads a [`GameState`] snapshot after each
/// mutation and draws a frame. Never writes game state.
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(self.header(state), header);

        let board = self.centre(body, state);
        match state.phase {
            Phase::Over => frame.render_widget(self.game_over(state), board),
            _ => frame.render_widget(self.board(state), board),
        }

        frame.render_widget(self.footer(state), footer);
    }

    /// Board area sized to the grid, centred in the available space.
    fn centre(&self, area: Rect, state: &GameState) -> Rect {
        // Two terminal columns per cell, plus the border.
        let width = (state.grid_size as u16) * 2 + 2;
        let height = (state.grid_size as u16) + 2;
        let [board] = Layout::horizontal([Constraint::Length(width.min(area.width))])
            .flex(ratatui::layout::Flex::Center)
            .areas(area);
        let [board] = Layout::vertical([Constraint::Length(height.min(area.height))])
            .flex(ratatui::layout::Flex::Center)
            .areas(board);
        board
    }

    fn header(&self, state: &GameState) -> Paragraph<'_> {
        let line = Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.snake.len().to_string(),
                Style::default().fg(Color::White),
            ),
        ]);
        Paragraph::new(line).alignment(Alignment::Center)
    }

    fn board(&self, state: &GameState) -> Paragraph<'_> {
        let head = state.snake.head();
        let mut lines = Vec::with_capacity(state.grid_size as usize);

        for y in 0..state.grid_size {
            let mut spans = Vec::with_capacity(state.grid_size as usize);
            for x in 0..state.grid_size {
                let pos = Position::new(x, y);
                spans.push(if pos == head {
                    Span::styled(
                        "██",
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if state.snake.occupies(pos) {
                    Span::styled("▓▓", Style::default().fg(Color::Gray))
                } else if pos == state.food {
                    Span::styled(
                        "● ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled("· ", Style::default().fg(Color::DarkGray))
                });
            }
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
    }

    fn game_over(&self, state: &GameState) -> Paragraph<'_> {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("R", Style::default().fg(Color::Green)),
                Span::raw(" restart   "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" quit"),
            ]),
        ];

        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn footer(&self, state: &GameState) -> Paragraph<'_> {
        let line = match state.phase {
            Phase::NotStarted => Line::from(vec![
                Span::raw("Press "),
                Span::styled(
                    "SPACE",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" to play"),
            ]),
            _ => Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw("/"),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" move   "),
                Span::styled("R", Style::default().fg(Color::Cyan)),
                Span::raw(" restart   "),
                Span::styled("Q", Style::default().fg(Color::Cyan)),
                Span::raw(" quit"),
            ]),
        };
        Paragraph::new(line).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
