use crate::error::GameResult;
use crate::session::GameSession;

impl GameSession {
    pub(crate) fn do_go(&mut self, direction: &str) -> GameResult<String> {
        let here = self.world.location(self.player.location.as_str())?;
        if let Some(to) = here.exits().get(direction) {
            let there = self.world.location(to.as_str())?;
            let response = format!(
                "You go {direction}. Now in {}. {}",
                there.name,
                there.describe()
            );
            self.player.location = there.id.clone();
            Ok(response)
        } else if here.locked_exits().contains_key(direction) {
            Ok(format!("The {direction} exit is locked."))
        } else {
            Ok("Can't go there.".to_string())
        }
    }

    pub(crate) fn do_look(&self) -> GameResult<String> {
        Ok(self.world.location(self.player.location.as_str())?.describe())
    }
}

#[cfg(test)]
mod tests {
    use crate::session::tests::session;

    #[test]
    fn locked_exits_stay_shut() {
        let mut s = session(&[]);
        assert_eq!(s.process("go north").unwrap(), "The north exit is locked.");
        assert_eq!(s.player().location.as_str(), "castle_start");
    }

    #[test]
    fn unknown_direction() {
        let mut s = session(&[]);
        assert_eq!(s.process("go sideways").unwrap(), "Can't go there.");
    }

    #[test]
    fn moving_describes_the_new_room() {
        let mut s = session(&[]);
        s.process("get key").unwrap();
        s.process("use key").unwrap();
        let response = s.process("go north").unwrap();
        assert!(response.starts_with("You go north. Now in Castle Hall. "));
        assert!(response.contains("Available directions: "));
        assert_eq!(s.player().location.as_str(), "castle_hall");
    }
}
