mod dialog;
mod direction;
mod food;
mod grid;
mod legend;
mod render;
mod sim;
mod snake;
mod speed;
mod timers;
use self::dialog::{Dialog, DialogOutcome};
use self::direction::Direction;
use self::grid::Grid;
use self::sim::{Simulation, Tick};
use self::timers::Timers;
use crate::app::AppState;
use crate::audio::{Audio, Effect};
use crate::command::Command;
use crate::config::Config;
use crossterm::event::{poll, read, Event};
use rand::{rngs::StdRng, Rng};
use ratatui::Frame;
use std::io;
use std::time::Instant;

/// The screen on which the game is played: the simulation plus everything
/// that drives it (timers, input, sound) and presents it (rendering, dialogs)
#[derive(Debug)]
pub(crate) struct GameScreen<R = StdRng> {
    sim: Simulation<R>,
    timers: Timers,
    dialog: Option<Dialog>,
    audio: Audio,
    /// Keep respawning food on schedule even while the snake isn't moving
    respawn_while_paused: bool,
}

impl<R: Rng> GameScreen<R> {
    pub(crate) fn new(config: &Config, rng: R, now: Instant) -> GameScreen<R> {
        let sim = Simulation::new(Grid::new(config.game.grid_size), rng);
        let mut timers = Timers::new(sim.interval().get());
        timers.start(now);
        let mut audio = Audio::new(config.sound.enabled);
        audio.start_music();
        tracing::info!(grid_size = config.game.grid_size, "game started");
        GameScreen {
            sim,
            timers,
            dialog: None,
            audio,
            respawn_while_paused: config.food.respawn_while_paused,
        }
    }

    /// Wait for either the next timer deadline or an input event, and handle
    /// whichever comes first.  Returns `Some` if the app should change state.
    pub(crate) fn process_input(&mut self) -> io::Result<Option<AppState>> {
        if let Some(deadline) = self.timers.next_deadline() {
            let wait = deadline.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.fire_timers(Instant::now());
                return Ok(None);
            }
        }
        Ok(self.handle_event(read()?, Instant::now()))
    }

    fn fire_timers(&mut self, now: Instant) {
        if self.timers.tick.is_due(now) {
            let tick = self.sim.tick();
            self.timers.tick.set_period(self.sim.interval().get());
            self.timers.tick.start(now);
            self.on_tick(tick, now);
        }
        if self.timers.spawn.is_due(now) {
            self.sim.respawn_foods();
            self.timers.spawn.start(now);
        }
    }

    fn handle_event(&mut self, event: Event, now: Instant) -> Option<AppState> {
        if event == Event::FocusLost {
            if self.sim.running() {
                self.toggle_pause(now);
            }
            return None;
        }
        let cmd = Command::from_key_event(event.as_key_press_event()?)?;
        if cmd == Command::Quit {
            return Some(AppState::Quit);
        }
        if let Some(dialog) = self.dialog.as_mut() {
            match dialog.handle_command(cmd)? {
                DialogOutcome::Acknowledged => {
                    self.dialog = None;
                    self.sim.acknowledge_level_up();
                    self.sync_timers(now);
                }
                DialogOutcome::PlayAgain => self.restart(now),
                DialogOutcome::Exit => return Some(AppState::Quit),
            }
            return None;
        }
        match cmd {
            Command::Up => self.turn(Direction::Up),
            Command::Down => self.turn(Direction::Down),
            Command::Left => self.turn(Direction::Left),
            Command::Right => self.turn(Direction::Right),
            Command::P | Command::Esc => self.toggle_pause(now),
            Command::Q => return Some(AppState::Quit),
            _ => (),
        }
        None
    }

    fn restart(&mut self, now: Instant) {
        self.sim.reset();
        self.timers = Timers::new(self.sim.interval().get());
        self.timers.start(now);
        self.dialog = None;
        self.audio.start_music();
        tracing::info!("game restarted");
    }
}

impl<R> GameScreen<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn on_tick(&mut self, tick: Tick, now: Instant) {
        match tick {
            Tick::Idle => (),
            Tick::Moved { eaten, level_up } => {
                if eaten.is_some() {
                    self.audio.play_effect(Effect::Eat);
                }
                if let Some(level) = level_up {
                    self.dialog = Some(Dialog::level_up(level));
                    self.sync_timers(now);
                }
            }
            Tick::Crashed(_) => {
                self.timers.stop();
                self.audio.stop_music();
                self.dialog = Some(Dialog::game_over(self.sim.level()));
            }
        }
    }

    fn turn(&mut self, direction: Direction) {
        if !self.sim.request_turn(direction) {
            tracing::trace!(?direction, current = ?self.sim.direction(), "turn rejected");
        }
    }

    fn toggle_pause(&mut self, now: Instant) {
        if self.sim.toggle_pause() {
            self.audio.pause_music();
        } else {
            self.audio.resume_music();
        }
        tracing::debug!(paused = self.sim.paused(), "pause toggled");
        self.sync_timers(now);
    }

    /// Freeze the timers while the snake isn't moving and thaw them once it
    /// is.  Stopped timers stay stopped.
    fn sync_timers(&mut self, now: Instant) {
        if self.sim.running() {
            self.timers.tick.resume(now);
            self.timers.spawn.resume(now);
        } else {
            self.timers.tick.suspend(now);
            if !self.respawn_while_paused {
                self.timers.spawn.suspend(now);
            }
        }
    }
}
