use std::{thread::sleep, time::Instant};

use crate::TermInt;
use crate::config::Config;
use crate::error::{GameError, Result};
use crate::input::{Command, RepeatFilter, is_ctrl_c};
use crate::render::{self, Viewport};
use crate::snake::Field;
use crate::term::TermManager;
use crate::theme::{self, Theme};
use crate::world::World;

use log::{debug, info};

const MIN_WIDTH: TermInt = 32;
const MIN_HEIGHT: TermInt = 12;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Restart,
    Quit,
}

pub struct SnakeGame {
    config: Config,
    width: TermInt,
    height: TermInt,
    paused: bool,
    theme: Theme,
    term: TermManager,
    input: RepeatFilter,
}

impl SnakeGame {
    pub fn new(config: Config) -> Result<Self> {
        Ok(SnakeGame {
            config,
            width: 0,
            height: 0,
            paused: false,
            theme: theme::LIGHT,
            term: TermManager::new()?,
            input: RepeatFilter::new(),
        })
    }

    pub fn initialize(&mut self) -> Result<()> {
        let (w, h) = self.term.get_terminal_size();
        if w < MIN_WIDTH || h < MIN_HEIGHT {
            return Err(GameError::TerminalTooSmall {
                width: w,
                height: h,
                min_width: MIN_WIDTH,
                min_height: MIN_HEIGHT,
            });
        }

        self.width = w;
        self.height = h;
        self.term.setup()
    }

    pub fn restore(&mut self) -> Result<()> {
        self.term.restore()
    }

    /// Returns false if the player quit instead of starting.
    pub fn show_intro(&mut self) -> Result<bool> {
        let lines = &[
            "Arrow keys or WASD to move",
            "Esc or P to pause",
            "T to switch theme",
            "R to restart",
            "Q or CTRL+C to quit",
            "",
            "Press any key to begin"
        ];

        self.term.show_message(lines)?;

        let key = self.term.read_key_blocking()?;
        if is_ctrl_c(&key) {
            return Ok(false);
        }

        self.term.hide_message()?;
        Ok(true)
    }

    pub fn play(&mut self) -> Result<Outcome> {
        self.term.clear()?;
        self.term.draw_borders(Some((self.width, self.height)))?;
        self.term.hide_message()?;
        self.paused = false;
        self.input.reset();

        let field = Field::new(self.config.field_width, self.config.field_height);
        let viewport = Viewport::new((1, 1), self.width - 2, self.height - 2, field);

        let mut world = World::new(&self.config);
        info!(
            "new session: head at {:?} moving {:?}, pickup at {:?}, speed {}",
            world.player().head(),
            world.player().direction(),
            world.pickup().pos,
            world.player().speed()
        );

        self.term.present(&render::compose(&world, &self.theme, &viewport), &viewport)?;
        let mut last_frame = Instant::now();

        loop {
            sleep(self.config.frame_interval);

            for key_ev in self.term.read_key_events_queue()? {
                match self.input.accept(&key_ev) {
                    Some(Command::Turn(dir)) => world.set_direction(dir),
                    Some(Command::TogglePause) => self.toggle_pause()?,
                    Some(Command::ToggleTheme) => self.toggle_theme(),
                    Some(Command::Restart) => return Ok(Outcome::Restart),
                    Some(Command::Quit) => return Ok(Outcome::Quit),
                    None => {}
                }
            }

            // Paused time must not turn into one huge step on resume
            let now = Instant::now();
            let dt = now.duration_since(last_frame);
            last_frame = now;

            if self.paused { continue; }

            let adv = world.advance(dt.as_secs_f64());
            if adv.consumed {
                debug!(
                    "pickup consumed at {:?}: length {}, pickup moved to {:?}",
                    adv.step.new_head,
                    world.player().len(),
                    world.pickup().pos
                );
            }

            let frame = render::compose(&world, &self.theme, &viewport);
            self.term.present(&frame, &viewport)?;
        } // Frame loop
    }

    ///////////////////////////////////////////////////////////////////////////

    fn toggle_pause(&mut self) -> Result<()> {
        if !self.paused {
            self.term.show_message(&["Paused", "Press Esc to resume", "or Q to quit"])?;
            info!("paused");
        } else {
            self.term.hide_message()?;
            info!("resumed");
        }

        self.paused = !self.paused;
        Ok(())
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        info!("switched to {} theme", self.theme.name);
    }
}
