//! Command parsing for player input.
//!
//! The first whitespace-separated word picks the verb (case-insensitive); the
//! rest, lowercased and re-joined with single spaces, is the argument. Parsing
//! never looks at game state.

use crate::error::{GameError, GameResult};

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Pick up an item.
    Get {
        /// Item name.
        item: String,
    },
    /// Start a fight.
    Attack {
        /// Enemy name.
        enemy: String,
    },
    /// Use a carried item.
    Use {
        /// Item name.
        item: String,
    },
    /// Buy from a shop.
    Buy {
        /// Item name.
        item: String,
    },
    /// Move through an exit.
    Go {
        /// Exit direction.
        direction: String,
    },
    /// Describe the current location.
    Look,
    /// List what the player carries.
    Inventory,
    /// Talk to an NPC.
    Talk {
        /// NPC name.
        npc: String,
    },
    /// Attempt the shrine's memorization puzzle.
    Memorize,
    /// Write a save.
    Save {
        /// Slot name, if given.
        slot: Option<String>,
    },
    /// Restore a save.
    Load {
        /// Slot name, if given.
        slot: Option<String>,
    },
    /// Change the difficulty.
    SetDifficulty {
        /// Requested tier.
        level: String,
    },
    /// Spell casting outside combat.
    Cast,
    /// Show the command list.
    Help,
    /// End the session.
    Quit,
}

/// Parse a player input line into a command.
pub fn parse_command(input: &str) -> GameResult<Command> {
    let words: Vec<String> = input.split_whitespace().map(str::to_lowercase).collect();
    let Some((verb, rest)) = words.split_first() else {
        return Err(GameError::EmptyCommand);
    };
    let arg = (!rest.is_empty()).then(|| rest.join(" "));
    let required = |prompt: &'static str| arg.clone().ok_or(GameError::MissingTarget(prompt));

    let command = match verb.as_str() {
        "get" => Command::Get {
            item: required("Get what?")?,
        },
        "attack" => Command::Attack {
            enemy: required("Attack what?")?,
        },
        "use" => Command::Use {
            item: required("Use what?")?,
        },
        "buy" => Command::Buy {
            item: required("Buy what?")?,
        },
        "go" => Command::Go {
            direction: required("Go where?")?,
        },
        "talk" => Command::Talk {
            npc: required("Talk to whom?")?,
        },
        "set_difficulty" => Command::SetDifficulty {
            level: required("Set difficulty to what? (easy, normal, hard, expert)")?,
        },
        "look" => Command::Look,
        "inventory" => Command::Inventory,
        "memorize" => Command::Memorize,
        "save" => Command::Save { slot: arg },
        "load" => Command::Load { slot: arg },
        "cast" => Command::Cast,
        "help" => Command::Help,
        "quit" if arg.is_none() => Command::Quit,
        _ => return Err(GameError::UnknownCommand(verb.clone())),
    };
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn verb_is_case_insensitive() {
        assert_eq!(
            parse_command("GO North").unwrap(),
            Command::Go {
                direction: "north".to_string()
            }
        );
        assert_eq!(parse_command("LOOK").unwrap(), Command::Look);
    }

    #[test]
    fn argument_is_rejoined_with_single_spaces() {
        assert_eq!(
            parse_command("  get   Health    Potion ").unwrap(),
            Command::Get {
                item: "health potion".to_string()
            }
        );
    }

    #[test]
    fn missing_target_prompts_per_verb() {
        let err = parse_command("attack").unwrap_err();
        assert_eq!(err.to_string(), "Attack what?");
        let err = parse_command("talk").unwrap_err();
        assert_eq!(err.to_string(), "Talk to whom?");
        let err = parse_command("go").unwrap_err();
        assert_eq!(err.to_string(), "Go where?");
    }

    #[test]
    fn unknown_and_empty() {
        assert_eq!(
            parse_command("dance wildly").unwrap_err().to_string(),
            "Unknown command. Try 'help'."
        );
        assert!(matches!(parse_command("   "), Err(GameError::EmptyCommand)));
    }

    #[test]
    fn quit_takes_no_argument() {
        assert_eq!(parse_command(" QUIT ").unwrap(), Command::Quit);
        assert!(matches!(
            parse_command("quit now"),
            Err(GameError::UnknownCommand(_))
        ));
    }

    #[test]
    fn save_slot_is_optional() {
        assert_eq!(parse_command("save").unwrap(), Command::Save { slot: None });
        assert_eq!(
            parse_command("load 3").unwrap(),
            Command::Load {
                slot: Some("3".to_string())
            }
        );
    }

    #[test]
    fn set_difficulty_takes_level() {
        assert_eq!(
            parse_command("set_difficulty HARD").unwrap(),
            Command::SetDifficulty {
                level: "hard".to_string()
            }
        );
    }

    proptest! {
        #[test]
        fn parsing_never_panics(input in "\\PC{0,40}") {
            let _ = parse_command(&input);
        }

        #[test]
        fn argument_is_normalised(item in "[A-Za-z]{1,8}( [A-Za-z]{1,8}){0,2}", pad in " {1,4}") {
            let input = format!("GET{pad}{}", item.replace(' ', &pad));
            prop_assert_eq!(
                parse_command(&input).unwrap(),
                Command::Get { item: item.to_lowercase() }
            );
        }
    }
}
