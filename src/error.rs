use std::fmt;
use std::io;

#[derive(Debug)]
pub enum GameError {
    /// A command, upgrade or launch flag that the game does not understand.
    InvalidCommand { command: String },
    Io(io::Error),
}

impl GameError {
    pub fn invalid_command(command: impl Into<String>) -> Self {
        GameError::InvalidCommand { command: command.into() }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidCommand { command } => write!(f, "invalid command: {command:?}"),
            GameError::Io(err) => write!(f, "terminal i/o failed: {err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(err) => Some(err),
            GameError::InvalidCommand { .. } => None,
        }
    }
}

impl From<io::Error> for GameError {
    fn from(err: io::Error) -> Self {
        GameError::Io(err)
    }
}

pub type GameResult<T> = Result<T, GameError>;
