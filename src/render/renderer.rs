use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::palette::to_terminal_color;
use crate::game::{Position, Session, Snapshot};
use crate::input::{ButtonBar, ColorPrompt};
use crate::metrics::GameMetrics;

/// Screen regions for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub board: Rect,
    pub message: Rect,
    pub buttons: ButtonBar,
}

/// Transient UI text drawn on the message line
#[derive(Debug, Clone, Copy, Default)]
pub struct Overlay<'a> {
    pub notice: Option<&'a str>,
    pub prompt: Option<&'a ColorPrompt>,
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn layout(area: Rect) -> ScreenLayout {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(1), // Notice / prompt
                Constraint::Length(3), // Buttons
            ])
            .split(area);

        ScreenLayout {
            header: chunks[0],
            board: chunks[1],
            message: chunks[2],
            buttons: ButtonBar::layout(chunks[3]),
        }
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        snapshot: &Snapshot<'_>,
        session: &Session,
        metrics: &GameMetrics,
        overlay: Overlay<'_>,
    ) -> ScreenLayout {
        let layout = Self::layout(frame.area());

        frame.render_widget(self.render_stats(snapshot, session, metrics), layout.header);

        if snapshot.game_over {
            frame.render_widget(self.render_game_over(snapshot), layout.board);
        } else {
            frame.render_widget(self.render_grid(snapshot, session), layout.board);
        }

        frame.render_widget(self.render_message(overlay), layout.message);

        for (button, rect) in layout.buttons.slots() {
            let widget = Paragraph::new(button.label())
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(Color::Cyan)),
                );
            frame.render_widget(widget, *rect);
        }

        layout
    }

    fn render_grid(&self, snapshot: &Snapshot<'_>, session: &Session) -> Paragraph<'static> {
        let snake_color = to_terminal_color(session.snake_color);
        let food_color = to_terminal_color(session.food_color);
        let head = snapshot.head();

        let mut lines = Vec::with_capacity(snapshot.grid_height);

        for y in 0..snapshot.grid_height {
            let mut spans = Vec::with_capacity(snapshot.grid_width);

            for x in 0..snapshot.grid_width {
                let pos = Position::new(x as i32, y as i32);

                let cell = if pos == head {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(snake_color)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if snapshot.snake.contains(&pos) {
                    Span::styled("■ ", Style::default().fg(snake_color))
                } else if snapshot.food == Some(pos) {
                    Span::styled(
                        "● ",
                        Style::default().fg(food_color).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Thick)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(
        &self,
        snapshot: &Snapshot<'_>,
        session: &Session,
        metrics: &GameMetrics,
    ) -> Paragraph<'static> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let text = vec![Line::from(vec![
            Span::styled("Player: ", label),
            Span::styled(session.player_name.clone(), value),
            Span::raw("    "),
            Span::styled("Score: ", label),
            Span::styled(snapshot.score.to_string(), value),
            Span::raw("    "),
            Span::styled("High Score: ", label),
            Span::styled(snapshot.high_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, snapshot: &Snapshot<'_>) -> Paragraph<'static> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "Game Over!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "'R'",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to Restart", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_message(&self, overlay: Overlay<'_>) -> Paragraph<'static> {
        let line = if let Some(prompt) = overlay.prompt {
            Line::from(vec![
                Span::styled(prompt.title(), Style::default().fg(Color::Yellow)),
                Span::raw(" "),
                Span::styled(
                    format!("{}_", prompt.input()),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        } else if let Some(notice) = overlay.notice {
            Line::from(Span::styled(
                notice.to_string(),
                Style::default().fg(Color::Red),
            ))
        } else {
            Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("C", Style::default().fg(Color::Cyan)),
                Span::raw("/"),
                Span::styled("F", Style::default().fg(Color::Cyan)),
                Span::raw(" colors | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ])
        };

        Paragraph::new(line).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
