use std::io::{self, Write};
use std::path::PathBuf;

use colored::Colorize;
use tracing::debug;

use rz_core::Difficulty;
use rz_engine::{ChannelConsole, Console, EngineConfig, FileStore, GameSession, parse_command};

/// Ask for a difficulty until a valid one is typed. `None` at end of input.
fn choose_difficulty(console: &mut ChannelConsole) -> Option<Difficulty> {
    loop {
        console.show("Choose difficulty (easy, normal, hard, expert):");
        prompt();
        let line = console.read_line()?;
        match line.parse::<Difficulty>() {
            Ok(difficulty) => return Some(difficulty),
            Err(e) => println!("{}", e.to_string().yellow()),
        }
    }
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

pub fn run(save_dir: PathBuf, seed: Option<u64>) -> Result<(), String> {
    let mut console = ChannelConsole::stdin();
    println!("{}", "Tales of Razukan".bold());

    let Some(difficulty) = choose_difficulty(&mut console) else {
        return Ok(());
    };
    let mut config = EngineConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    debug!(save_dir = %save_dir.display(), "save directory");

    let mut session = GameSession::new(difficulty, console, FileStore::new(save_dir), config);
    let start = session.current_location().map_err(|e| e.to_string())?;
    println!("{}", start.describe());

    loop {
        prompt();
        let Some(line) = session.read_line() else {
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") {
            break;
        }

        match parse_command(input) {
            Ok(command) => match session.execute(command) {
                Ok(output) => println!("{output}"),
                Err(e) => println!("{}", e.to_string().yellow()),
            },
            Err(e) => println!("{}", e.to_string().yellow()),
        }

        if session.is_finished() {
            break;
        }
    }

    Ok(())
}
