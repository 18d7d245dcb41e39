use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
};

use crate::game::{Cell, GRID_SIZE, Phase, Snapshot};

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &Snapshot) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(1), // Bonus countdown bar
                Constraint::Min(0),    // Main area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(chunks[0], snapshot);
        frame.render_widget(stats, chunks[0]);

        if let Some(special) = &snapshot.special {
            let bar = Gauge::default()
                .gauge_style(Style::default().fg(Color::LightRed).bg(Color::Black))
                .ratio(special.fraction_remaining.clamp(0.0, 1.0))
                .label("bonus");
            frame.render_widget(bar, chunks[1]);
        }

        // Center the main area horizontally
        let main_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[2])[1];

        match snapshot.phase {
            Phase::Menu => {
                let menu = self.render_menu(main_area, snapshot);
                frame.render_widget(menu, main_area);
            }
            Phase::Running | Phase::Paused => {
                let grid = self.render_grid(main_area, snapshot);
                frame.render_widget(grid, main_area);
            }
            Phase::GameOver => {
                let game_over = self.render_game_over(main_area, snapshot);
                frame.render_widget(game_over, main_area);
            }
        }

        let controls = self.render_controls(chunks[3], snapshot.phase);
        frame.render_widget(controls, chunks[3]);
    }

    fn render_grid(&self, _area: Rect, snapshot: &Snapshot) -> Paragraph<'_> {
        let head = snapshot.snake.first().copied();
        let mut lines = Vec::new();

        for y in 0..GRID_SIZE {
            let mut spans = Vec::new();

            for x in 0..GRID_SIZE {
                let cell = Cell::new(x, y);

                let span = if Some(cell) == head {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if snapshot.snake.contains(&cell) {
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if snapshot
                    .special
                    .as_ref()
                    .is_some_and(|s| covers_block(s.anchor, cell))
                {
                    Span::styled(
                        "◆ ",
                        Style::default()
                            .fg(Color::LightRed)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if cell == snapshot.food {
                    Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(span);
            }

            lines.push(Line::from(spans));
        }

        let title = if snapshot.phase == Phase::Paused {
            " Paused "
        } else {
            " Snake "
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, _area: Rect, snapshot: &Snapshot) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("High Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.high_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Speed: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.speed.to_string(),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_menu(&self, _area: Rect, snapshot: &Snapshot) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "SNAKE",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Speed: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.speed.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("  (1 slow - 20 fast, ", Style::default().fg(Color::Gray)),
                Span::styled("+", Style::default().fg(Color::Cyan)),
                Span::styled("/", Style::default().fg(Color::Gray)),
                Span::styled("-", Style::default().fg(Color::Cyan)),
                Span::styled(" to adjust)", Style::default().fg(Color::Gray)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to start", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::Green)),
        )
    }

    fn render_game_over(&self, _area: Rect, snapshot: &Snapshot) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Your Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("High Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.high_score.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" for the menu or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, _area: Rect, phase: Phase) -> Paragraph<'_> {
        let text = match phase {
            Phase::Menu => vec![Line::from(vec![
                Span::styled("Enter", Style::default().fg(Color::Cyan)),
                Span::raw(" to start | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ])],
            _ => vec![Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("P", Style::default().fg(Color::Cyan)),
                Span::raw(" to pause | "),
                Span::styled("R", Style::default().fg(Color::Cyan)),
                Span::raw(" for menu | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ])],
        };

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a cell lies inside the 2x2 block at the given anchor
fn covers_block(anchor: Cell, cell: Cell) -> bool {
    anchor.x <= cell.x && cell.x <= anchor.x + 1 && anchor.y <= cell.y && cell.y <= anchor.y + 1
}
