use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{debug, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};

use crate::game::{Actor, GameConfig, GameState, Session};
use crate::input::{Button, ColorPrompt, InputHandler, KeyAction, PromptEvent};
use crate::metrics::GameMetrics;
use crate::render::{Overlay, Renderer, ScreenLayout, resolve_color};

/// Interactive play: ticks on a timer, keyboard and mouse drive the game.
///
/// Timer, input and rendering all run on one task, so the game state is
/// only ever touched from here.
pub struct HumanMode {
    state: GameState,
    session: Session,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    prompt: Option<ColorPrompt>,
    notice: Option<&'static str>,
    layout: Option<ScreenLayout>,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, session: Session) -> Self {
        Self::with_state(GameState::new(config), session)
    }

    pub fn with_state(state: GameState, session: Session) -> Self {
        Self {
            state,
            session,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            prompt: None,
            notice: None,
            layout: None,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(
            "starting game for {} on a {}x{} grid",
            self.session.player_name,
            self.state.config().grid_width,
            self.state.config().grid_height
        );

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        info!(
            "session over: high score {}, {} games played",
            self.state.high_score(),
            self.metrics.games_played
        );

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.state.config().tick_interval());
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    let overlay = Overlay {
                        notice: self.notice,
                        prompt: self.prompt.as_ref(),
                    };
                    let snapshot = self.state.snapshot();
                    let mut layout = None;
                    terminal.draw(|frame| {
                        layout = Some(self.renderer.render(
                            frame,
                            &snapshot,
                            &self.session,
                            &self.metrics,
                            overlay,
                        ));
                    }).context("Failed to draw frame")?;
                    self.layout = layout;
                }

                // Handle Ctrl+C
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
        match event {
            Event::Key(key) => {
                // Only process key press events, not release
                if key.kind != KeyEventKind::Press {
                    return;
                }

                if let Some(prompt) = self.prompt.as_mut() {
                    match prompt.handle_key_event(key) {
                        PromptEvent::Editing => {}
                        PromptEvent::Submit(input) => {
                            let actor = prompt.actor();
                            self.prompt = None;
                            self.apply_color(actor, &input);
                        }
                        PromptEvent::Cancel => self.prompt = None,
                        PromptEvent::Quit => self.should_quit = true,
                    }
                    return;
                }

                match self.input_handler.handle_key_event(key) {
                    KeyAction::Turn(direction) => {
                        self.state.set_direction(direction);
                    }
                    KeyAction::Restart => {
                        // The keyboard shortcut only works once the game has ended
                        if self.state.is_game_over() {
                            self.reset_game();
                        }
                    }
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::ChooseColor(actor) => self.open_prompt(actor),
                    KeyAction::None => {}
                }
            }
            Event::Mouse(mouse) => {
                if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
                    return;
                }
                let clicked = self
                    .layout
                    .as_ref()
                    .and_then(|layout| layout.buttons.hit(mouse.column, mouse.row));
                if let Some(button) = clicked {
                    self.press_button(button);
                }
            }
            _ => {}
        }
    }

    fn press_button(&mut self, button: Button) {
        debug!("button pressed: {}", button.label());
        match button {
            Button::Restart => self.reset_game(),
            Button::Quit => self.should_quit = true,
            Button::ChangeColor(actor) => self.open_prompt(actor),
        }
    }

    fn open_prompt(&mut self, actor: Actor) {
        self.notice = None;
        self.prompt = Some(ColorPrompt::new(actor));
    }

    fn apply_color(&mut self, actor: Actor, input: &str) {
        let choice = resolve_color(input, actor);
        self.session.set_color(actor, choice.color);
        self.notice = choice.notice;
    }

    fn update_game(&mut self) {
        // The board is frozen while a colour is being typed
        if self.prompt.is_some() || self.state.is_game_over() {
            return;
        }

        let outcome = self.state.tick();

        if outcome.collision.is_some() {
            self.metrics.on_game_over();
        }
    }

    fn reset_game(&mut self) {
        self.state.restart();
        self.metrics.on_game_start();
        self.notice = None;
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        )
        .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, NamedColor, Position, Snake};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
    use ratatui::layout::Rect;

    fn mode() -> HumanMode {
        HumanMode::with_state(
            GameState::with_seed(GameConfig::default(), 11),
            Session::default(),
        )
    }

    fn press(mode: &mut HumanMode, code: KeyCode) {
        mode.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn click(mode: &mut HumanMode, column: u16, row: u16) {
        mode.handle_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }));
    }

    fn crash(mode: &mut HumanMode) {
        let snake = Snake::new(Position::new(0, 0), Direction::Up, 1);
        mode.state.place(snake, None);
        mode.update_game();
        assert!(mode.state.is_game_over());
    }

    #[test]
    fn test_game_initialization() {
        let mode = mode();
        assert!(!mode.state.is_game_over());
        assert_eq!(mode.state.score(), 0);
        assert_eq!(mode.session.player_name, "Player");
    }

    #[test]
    fn test_arrow_key_turns_snake() {
        let mut mode = mode();
        press(&mut mode, KeyCode::Down);
        assert_eq!(mode.state.direction(), Direction::Down);

        press(&mut mode, KeyCode::Up);
        assert_eq!(mode.state.direction(), Direction::Down);
    }

    #[test]
    fn test_restart_key_only_after_game_over() {
        let mut mode = mode();
        mode.update_game();
        let head = mode.state.snake().head();

        press(&mut mode, KeyCode::Char('r'));
        assert_eq!(mode.state.snake().head(), head);

        crash(&mut mode);
        assert_eq!(mode.metrics.games_played, 1);
        press(&mut mode, KeyCode::Char('r'));
        assert!(!mode.state.is_game_over());
        assert_eq!(mode.state.snake().head(), Position::new(10, 10));
    }

    #[test]
    fn test_ticks_skipped_while_over_or_prompting() {
        let mut mode = mode();
        press(&mut mode, KeyCode::Char('c'));
        let head = mode.state.snake().head();
        mode.update_game();
        assert_eq!(mode.state.snake().head(), head);

        press(&mut mode, KeyCode::Esc);
        assert!(mode.prompt.is_none());
        assert!(!mode.should_quit);
        mode.update_game();
        assert_ne!(mode.state.snake().head(), head);
    }

    #[test]
    fn test_color_prompt_applies_valid_name() {
        let mut mode = mode();
        press(&mut mode, KeyCode::Char('f'));
        for ch in "Blue".chars() {
            press(&mut mode, KeyCode::Char(ch));
        }
        press(&mut mode, KeyCode::Enter);

        assert!(mode.prompt.is_none());
        assert_eq!(mode.session.food_color, NamedColor::Blue);
        assert_eq!(mode.notice, None);
    }

    #[test]
    fn test_color_prompt_falls_back_on_invalid_name() {
        let mut mode = mode();
        mode.session.snake_color = NamedColor::White;
        press(&mut mode, KeyCode::Char('c'));
        for ch in "teal".chars() {
            press(&mut mode, KeyCode::Char(ch));
        }
        press(&mut mode, KeyCode::Enter);

        assert_eq!(mode.session.snake_color, NamedColor::Green);
        assert!(mode.notice.is_some());
    }

    #[test]
    fn test_mouse_buttons() {
        let mut mode = mode();
        mode.layout = Some(Renderer::layout(Rect::new(0, 0, 120, 48)));
        let slots = mode.layout.as_ref().unwrap().buttons.slots().to_vec();
        let find = |wanted: Button| {
            slots
                .iter()
                .find(|(button, _)| *button == wanted)
                .map(|(_, rect)| (rect.x + 1, rect.y + 1))
                .unwrap()
        };

        // Restart button works mid-game
        mode.update_game();
        let (x, y) = find(Button::Restart);
        click(&mut mode, x, y);
        assert_eq!(mode.state.snake().head(), Position::new(10, 10));

        let (x, y) = find(Button::ChangeColor(Actor::Snake));
        click(&mut mode, x, y);
        assert_eq!(mode.prompt.as_ref().map(|p| p.actor()), Some(Actor::Snake));
        press(&mut mode, KeyCode::Esc);

        let (x, y) = find(Button::Quit);
        click(&mut mode, x, y);
        assert!(mode.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_color_prompt() {
        let mut mode = mode();
        press(&mut mode, KeyCode::Char('f'));
        assert!(mode.prompt.is_some());

        mode.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));

        assert!(mode.should_quit);
    }

    #[test]
    fn test_quit_key() {
        let mut mode = mode();
        press(&mut mode, KeyCode::Char('q'));
        assert!(mode.should_quit);
    }
}
