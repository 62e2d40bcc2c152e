use std::io;
use std::thread::sleep;
use std::time::{Duration, Instant};

use crossterm::event::Event;
use log::{debug, info};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::config::GameConfig;
use crate::input::Input;
use crate::render::{self, PANEL_TOP, PANEL_WIDTH};
use crate::session::{GameSession, TickOutcome};
use crate::term::TermManager;
use crate::widget::SettingsPanel;

const TICK_INTERVAL_MS: u64 = 5;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
    /// A new round began; time spent on the game-over screen must not count.
    Restarted,
}

/// The session plus the settings widgets that drive it.
pub struct Game<R = ThreadRng> {
    session: GameSession<R>,
    panel: SettingsPanel,
    dirty: bool,
}

impl Game<ThreadRng> {
    pub fn new(config: &GameConfig, center_x: i32) -> Self {
        Game::new_with_rng(config, center_x, rand::thread_rng())
    }
}

impl<R: Rng> Game<R> {
    pub fn new_with_rng(config: &GameConfig, center_x: i32, rng: R) -> Game<R> {
        Game {
            session: GameSession::new_with_rng(config, rng),
            panel: SettingsPanel::new(config, center_x, PANEL_TOP, PANEL_WIDTH),
            dirty: true,
        }
    }

    pub fn session(&self) -> &GameSession<R> {
        &self.session
    }

    pub fn panel(&self) -> &SettingsPanel {
        &self.panel
    }

    /// The live settings, as shown by the panel.
    pub fn config(&self) -> GameConfig {
        let grid = self.session.grid();
        GameConfig {
            speed: self.session.speed() as i32,
            width: grid.width(),
            height: grid.height(),
            cell_size: grid.cell_size(),
        }
    }

    /// Re-centres the settings panel, e.g. after the terminal was resized.
    pub fn relayout(&mut self, center_x: i32) {
        self.panel = SettingsPanel::new(&self.config(), center_x, PANEL_TOP, PANEL_WIDTH);
        self.dirty = true;
    }

    pub fn handle_input(&mut self, input: Input) -> Control {
        match input {
            Input::Quit => return Control::Quit,
            Input::Steer(direction) => self.session.steer(direction),
            Input::Confirm => {
                if self.session.restart() {
                    self.dirty = true;
                    return Control::Restarted;
                }
            }
            Input::Click(pos) => {
                for (kind, value) in self.panel.handle_click(pos) {
                    self.session.apply_setting(kind, value);
                    self.dirty = true;
                }
            }
        }
        Control::Continue
    }

    pub fn tick(&mut self, elapsed_ms: u64) -> TickOutcome {
        let outcome = self.session.tick(elapsed_ms);
        if outcome != TickOutcome::Idle {
            self.dirty = true;
        }
        outcome
    }

    /// Whether anything changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

/// Runs frames until the player quits.
pub fn play<R: Rng>(game: &mut Game<R>, term: &mut TermManager) -> io::Result<()> {
    let mut last_frame = Instant::now();

    loop {
        sleep(Duration::from_millis(TICK_INTERVAL_MS));

        for ev in term.read_events_queue()? {
            if let Event::Resize(width, height) = ev {
                term.set_size(width, height);
                game.relayout(width as i32 / 2);
                continue;
            }

            let Some(input) = Input::from_event(&ev) else { continue };
            debug!("Input {:?}", input);

            match game.handle_input(input) {
                Control::Quit => {
                    info!("Quit with score {}", game.session().score());
                    return Ok(());
                }
                Control::Restarted => last_frame = Instant::now(),
                Control::Continue => {}
            }
        }

        // Only whole milliseconds are consumed; the fraction stays on the clock
        let elapsed_ms = last_frame.elapsed().as_millis() as u64;
        last_frame += Duration::from_millis(elapsed_ms);
        game.tick(elapsed_ms);

        if game.take_dirty() {
            render::draw(term, game)?;
        }
    }
}
