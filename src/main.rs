mod config;
mod error;
mod game;
mod input;
mod render;
mod snake;
mod term;
mod theme;
mod world;

use std::{env, fs::File, process::exit};

use game::{Outcome, SnakeGame};
use log::{error, info, LevelFilter};
use simplelog::WriteLogger;

pub type TermInt = u16;
pub type Coords = (u16, u16);

const LOG_FILE: &str = "snake.log";
const LOG_LEVEL_ENV: &str = "SNAKE_LOG";

fn init_logging() {
    let level = match env::var(LOG_LEVEL_ENV).as_deref() {
        Ok("debug") => LevelFilter::Debug,
        _ => LevelFilter::Info,
    };

    // The terminal belongs to the game, so logs go to a file or nowhere
    match File::create(LOG_FILE) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(level, simplelog::Config::default(), file) {
                eprintln!("logging disabled: {}", e);
            }
        }
        Err(e) => eprintln!("logging disabled, cannot create {}: {}", LOG_FILE, e),
    }
}

fn run(game: &mut SnakeGame) -> error::Result<()> {
    game.initialize()?;
    if !game.show_intro()? {
        return Ok(());
    }

    loop {
        match game.play()? {
            Outcome::Restart => info!("restarting"),
            Outcome::Quit => return Ok(()),
        }
    }
}

fn main() {
    init_logging();
    info!("starting");

    let mut game = match SnakeGame::new(config::Config::default()) {
        Ok(game) => game,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            exit(1);
        }
    };

    let res = run(&mut game);
    let restored = game.restore();

    match res.and(restored) {
        Ok(()) => info!("quit"),
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            exit(1);
        }
    }
}
