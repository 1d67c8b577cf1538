use rand::Rng;
use tracing::debug;

use crate::error::{GameError, GameResult};
use crate::session::GameSession;

impl GameSession {
    pub(crate) fn do_memorize(&mut self) -> GameResult<String> {
        let location = self.world.location(self.player.location.as_str())?;
        match location.puzzle_solved {
            None => return Err(GameError::NoPuzzle),
            Some(true) => return Ok("Puzzle already solved.".to_string()),
            Some(false) => {}
        }

        let sequence: Vec<u32> = (0..self.config.sequence_length)
            .map(|_| self.rng.random_range(1..=9))
            .collect();
        let tokens: Vec<String> = sequence.iter().map(u32::to_string).collect();
        self.console.show("Memorize the sequence:");
        self.console.flash(&tokens, self.config.sequence_pace);
        self.console
            .show("Now, enter the sequence separated by spaces:");
        let answer = self.console.read_line().unwrap_or_default();

        let Ok(guess) = answer
            .split_whitespace()
            .map(str::parse::<u32>)
            .collect::<Result<Vec<_>, _>>()
        else {
            return Ok("Invalid input.".to_string());
        };
        if guess != sequence {
            debug!("puzzle attempt failed");
            return Ok("Wrong. Try again.".to_string());
        }
        self.world
            .location_mut(self.player.location.as_str())?
            .puzzle_solved = Some(true);
        Ok("Correct! You can now get the magic scroll.".to_string())
    }
}
