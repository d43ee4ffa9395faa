use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{GameConfig, GameEngine, Phase};
use crate::input::{InputCommand, InputHandler};
use crate::render::Renderer;

/// The interactive shell around the engine: one task that serializes clock
/// ticks, key events and renders, so the engine only ever has a single
/// caller at a time.
pub struct App {
    engine: GameEngine,
    input_handler: InputHandler,
    renderer: Renderer,
    should_quit: bool,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        Self {
            engine: GameEngine::new(config),
            input_handler: InputHandler::new(),
            renderer: Renderer::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(Duration::from_millis(
            self.engine.config().tick_interval_ms,
        ));

        // Render at 30 FPS, independent of the simulation cadence.
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Clock collaborator: drive the engine only while running.
                _ = tick_timer.tick() => {
                    if self.engine.state().phase == Phase::Running {
                        self.engine.tick();
                    }
                }

                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.renderer.render(frame, self.engine.state());
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                return;
            }
            self.apply(self.input_handler.handle_key_event(key));
        }
    }

    fn apply(&mut self, command: InputCommand) {
        match command {
            InputCommand::Start => self.engine.start(),
            InputCommand::Turn(direction) => {
                // The first interaction on the start screen also starts the
                // game, so the opening key press is never swallowed.
                self.engine.start();
                self.engine.set_direction(direction);
            }
            InputCommand::Restart => self.engine.reset(),
            InputCommand::Quit => self.should_quit = true,
            InputCommand::Ignored => {}
        }
    }

    fn cleanup_terminal(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
