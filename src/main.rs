mod app;
mod clock;
mod command;
mod config;
mod consts;
mod game;
mod highscore;
mod messages;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::game::Game;
use crate::highscore::FileScoreStore;
use crate::messages::MessageKind;
use crate::util::error_chain;
use crossterm::{
    event::{DisableFocusChange, EnableFocusChange},
    execute,
};
use simplelog::{LevelFilter, WriteLogger};
use std::io::{self, ErrorKind};
use std::path::Path;
use std::process::ExitCode;

const BANNER: [&str; 3] = [
    "Starting Snake...",
    "Steer with WASD or the arrow keys, pause with Space, quit with Esc.",
    "Walls and your own tail are fatal.",
];

fn main() -> ExitCode {
    let config = load_config();
    if let Some(path) = config.log_file() {
        init_logging(&path);
    }
    log::info!("Starting gridsnake {}", env!("CARGO_PKG_VERSION"));

    let greeting = messages::pick(MessageKind::Startup, &mut rand::rng());
    for line in BANNER {
        println!("{line}");
    }
    println!("{greeting}");
    log::info!("{greeting}");

    let game = Game::new(FileScoreStore::new(config.high_score_file()));
    let terminal = ratatui::init();
    let mut stdout = io::stdout();
    let r = execute!(stdout, EnableFocusChange)
        .and_then(|()| App::new(game).run(terminal))
        .and(execute!(stdout, DisableFocusChange));
    ratatui::restore();
    io_exit(r)
}

/// Read the configuration file, falling back to the defaults if it can't be
/// read
fn load_config() -> Config {
    match Config::default_path().and_then(|path| Config::load(&path, true)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("gridsnake: {}; using default settings", error_chain(&e));
            Config::default()
        }
    }
}

fn init_logging(path: &Path) {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs_err::create_dir_all(parent) {
            eprintln!("gridsnake: could not set up logging: {e}");
            return;
        }
    }
    let file = match fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("gridsnake: could not set up logging: {e}");
            return;
        }
    };
    if let Err(e) = WriteLogger::init(LevelFilter::Info, simplelog::Config::default(), file) {
        eprintln!("gridsnake: could not set up logging: {e}");
    }
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
