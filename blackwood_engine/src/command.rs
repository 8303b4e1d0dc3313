//! Command module
//!
//! Describes possible commands used during gameplay.
use variantly;

/// Exit names that work as commands on their own.
pub const BARE_DIRECTIONS: [&str; 9] = ["north", "south", "east", "west", "up", "down", "secret", "exit", "back"];

/// Commands that can be executed by the player.
///
/// Argument-taking commands carry whatever followed the verb, possibly empty;
/// the handlers decide what an empty argument means.
#[derive(Debug, Clone, PartialEq, Eq, variantly::Variantly)]
pub enum Command {
    Attack,
    Empty,
    Examine(String),
    Help,
    Inventory,
    Look,
    MoveTo(String),
    Quit,
    Take(String),
    Unknown(String),
    UseItem(String),
}

/// Parses an input string and returns a corresponding `Command`.
///
/// The line is trimmed and lower-cased, then split once at the first run of
/// whitespace into a verb and a single argument.
pub fn parse_command(input: &str) -> Command {
    let line = input.trim().to_lowercase();
    if line.is_empty() {
        return Command::Empty;
    }
    let (verb, arg) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line.as_str(), ""),
    };

    match verb {
        "help" => Command::Help,
        "look" => Command::Look,
        "go" | "move" | "walk" => Command::MoveTo(arg.to_string()),
        dir if BARE_DIRECTIONS.contains(&dir) => Command::MoveTo(dir.to_string()),
        "take" | "grab" => Command::Take(arg.to_string()),
        "pick" => Command::Take(
            arg.strip_prefix("up")
                .filter(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
                .map_or(arg, str::trim_start)
                .to_string(),
        ),
        "use" => Command::UseItem(arg.to_string()),
        "inventory" | "inv" | "i" => Command::Inventory,
        "attack" | "fight" | "kill" => Command::Attack,
        "examine" | "inspect" => Command::Examine(arg.to_string()),
        "quit" => Command::Quit,
        _ => Command::Unknown(line.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_first_whitespace_only() {
        assert_eq!(parse_command("take rusty key"), Command::Take("rusty key".into()));
        assert_eq!(parse_command("  USE   Health Potion "), Command::UseItem("health potion".into()));
    }

    #[test]
    fn movement_synonyms_and_bare_directions() {
        assert_eq!(parse_command("go north"), Command::MoveTo("north".into()));
        assert_eq!(parse_command("walk up"), Command::MoveTo("up".into()));
        assert_eq!(parse_command("move"), Command::MoveTo(String::new()));
        for dir in BARE_DIRECTIONS {
            assert_eq!(parse_command(dir), Command::MoveTo(dir.into()));
        }
    }

    #[test]
    fn verb_aliases() {
        assert_eq!(parse_command("grab knife"), Command::Take("knife".into()));
        assert_eq!(parse_command("pick up knife"), Command::Take("knife".into()));
        assert_eq!(parse_command("pick knife"), Command::Take("knife".into()));
        assert_eq!(parse_command("pick upholstery"), Command::Take("upholstery".into()));
        assert_eq!(parse_command("i"), Command::Inventory);
        assert_eq!(parse_command("inv"), Command::Inventory);
        assert_eq!(parse_command("fight"), Command::Attack);
        assert_eq!(parse_command("kill"), Command::Attack);
        assert_eq!(parse_command("inspect tome"), Command::Examine("tome".into()));
    }

    #[test]
    fn missing_arguments_are_empty_strings() {
        assert_eq!(parse_command("take"), Command::Take(String::new()));
        assert_eq!(parse_command("use"), Command::UseItem(String::new()));
        assert_eq!(parse_command("examine"), Command::Examine(String::new()));
    }

    #[test]
    fn blank_and_unknown_input() {
        assert_eq!(parse_command("   "), Command::Empty);
        assert_eq!(parse_command("Dance wildly"), Command::Unknown("dance wildly".into()));
        assert!(parse_command("quit").is_quit());
    }
}
