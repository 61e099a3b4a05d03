use crate::shared::Floor;
use std::fmt;
use std::str::FromStr;

pub const HELP_TEXT: &str = "Commands:
  call <floor>       - hall call at floor
  select <floor>     - choose floor inside car
  step [n]           - advance time by 1 (or n) ticks
  status             - show state
  help               - show this text
  quit               - exit";

/// A single line typed at the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Call(Floor),
    Select(Floor),
    Step(u32),
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    MissingFloor,
    InvalidNumber(String),
    Unknown(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "Empty command."),
            CommandError::MissingFloor => write!(f, "Need a floor number."),
            CommandError::InvalidNumber(_) => write!(f, "Invalid number."),
            CommandError::Unknown(_) => write!(f, "Unknown command. Type 'help'."),
        }
    }
}

impl std::error::Error for CommandError {}

impl Command {
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let mut parts = line.split_whitespace();
        let word = parts.next().ok_or(CommandError::Empty)?.to_lowercase();
        let argument = parts.next();

        match word.as_str() {
            "call" => Ok(Command::Call(parse_floor(argument)?)),
            "select" => Ok(Command::Select(parse_floor(argument)?)),
            "step" => Ok(Command::Step(parse_ticks(argument)?)),
            "status" => Ok(Command::Status),
            "help" => Ok(Command::Help),
            "quit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(word)),
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        Command::parse(line)
    }
}

fn parse_floor(argument: Option<&str>) -> Result<Floor, CommandError> {
    let text = argument.ok_or(CommandError::MissingFloor)?;
    text.parse::<Floor>()
        .map_err(|_| CommandError::InvalidNumber(text.to_string()))
}

// Missing count means one tick, non-positive counts are raised to one
fn parse_ticks(argument: Option<&str>) -> Result<u32, CommandError> {
    let Some(text) = argument else {
        return Ok(1);
    };
    let ticks = text
        .parse::<i32>()
        .map_err(|_| CommandError::InvalidNumber(text.to_string()))?;
    Ok(ticks.max(1) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_floor_commands() {
        assert_eq!(Command::parse("call 3"), Ok(Command::Call(3)));
        assert_eq!(Command::parse("  SELECT   7 "), Ok(Command::Select(7)));
        assert_eq!(Command::parse("call -2"), Ok(Command::Call(-2)));
        assert_eq!("select 0".parse::<Command>(), Ok(Command::Select(0)));
    }

    #[test]
    fn test_parse_step() {
        assert_eq!(Command::parse("step"), Ok(Command::Step(1)));
        assert_eq!(Command::parse("step 4"), Ok(Command::Step(4)));
        assert_eq!(Command::parse("step 0"), Ok(Command::Step(1)));
        assert_eq!(Command::parse("step -9"), Ok(Command::Step(1)));
        assert_eq!(
            Command::parse("step 2147483647"),
            Ok(Command::Step(2147483647))
        );
    }

    #[test]
    fn test_parse_plain_commands() {
        assert_eq!(Command::parse("status"), Ok(Command::Status));
        assert_eq!(Command::parse("Help"), Ok(Command::Help));
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Command::parse("   "), Err(CommandError::Empty));
        assert_eq!(Command::parse("call"), Err(CommandError::MissingFloor));
        assert_eq!(
            Command::parse("select five"),
            Err(CommandError::InvalidNumber("five".to_string()))
        );
        assert_eq!(
            Command::parse("call 99999999999"),
            Err(CommandError::InvalidNumber("99999999999".to_string()))
        );
        assert_eq!(
            Command::parse("step 99999999999"),
            Err(CommandError::InvalidNumber("99999999999".to_string()))
        );
        assert_eq!(
            Command::parse("step x"),
            Err(CommandError::InvalidNumber("x".to_string()))
        );
        assert_eq!(
            Command::parse("jump 3"),
            Err(CommandError::Unknown("jump".to_string()))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(CommandError::MissingFloor.to_string(), "Need a floor number.");
        assert_eq!(
            CommandError::InvalidNumber("x".to_string()).to_string(),
            "Invalid number."
        );
        assert_eq!(
            CommandError::Unknown("jump".to_string()).to_string(),
            "Unknown command. Type 'help'."
        );
    }
}
