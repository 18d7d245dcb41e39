//! The clock/driver around the game engine
//!
//! Owns the terminal, translates key events into engine commands, fires
//! `tick()` at the interval derived from the speed setting, and redraws at a
//! fixed frame rate. All engine calls happen on this one task.

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{GameConfig, GameEngine};
use crate::input::{InputHandler, KeyAction};
use crate::render::Renderer;

pub struct App {
    engine: GameEngine,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        Self {
            engine: GameEngine::new(config),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run the event loop with cleanup
        let result = self.run_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_rate = self.engine.tick_interval();
        let mut tick_timer = interval(tick_rate);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.engine.tick();
                }

                // Render frame
                _ = render_timer.tick() => {
                    let snapshot = self.engine.snapshot();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &snapshot);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            // Speed changes take effect on the next tick
            if self.engine.tick_interval() != tick_rate {
                tick_rate = self.engine.tick_interval();
                tick_timer = interval(tick_rate);
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => self.engine.set_direction(direction),
                KeyAction::Start => self.engine.start(),
                KeyAction::TogglePause => self.engine.toggle_pause(),
                KeyAction::Restart => self.engine.restart(),
                KeyAction::SpeedUp => self.engine.set_speed(self.engine.speed() + 1),
                KeyAction::SpeedDown => self.engine.set_speed(self.engine.speed().saturating_sub(1)),
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Phase;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_app_starts_on_menu() {
        let app = App::new(GameConfig::default());
        assert_eq!(app.engine.phase(), Phase::Menu);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_enter_starts_game() {
        let mut app = App::new(GameConfig::default());
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.engine.phase(), Phase::Running);
    }

    #[test]
    fn test_speed_keys_clamp_at_bounds() {
        let mut app = App::new(GameConfig::new(20));
        app.handle_event(key(KeyCode::Char('+')));
        assert_eq!(app.engine.speed(), 20);

        let mut app = App::new(GameConfig::new(1));
        app.handle_event(key(KeyCode::Char('-')));
        assert_eq!(app.engine.speed(), 1);
    }

    #[test]
    fn test_quit_key_sets_flag() {
        let mut app = App::new(GameConfig::default());
        app.handle_event(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
