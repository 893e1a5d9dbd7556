use std::fmt;
use std::path::PathBuf;

/// Main error type for the Plantmon game core
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Error related to loading creature data from disk
    Data(DataError),
    /// Error related to constructing a creature
    Creature(CreatureError),
}

/// Errors related to creature data loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// The creature data directory does not exist
    DirectoryNotFound(PathBuf),
    /// Reading a data file failed
    Io(String),
    /// A data file failed to parse as RON
    Parse(String),
    /// The directory exists but contains no creature definitions
    EmptyPool(PathBuf),
}

/// Errors related to creature construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreatureError {
    /// A creature must know at least one skill
    NoSkills,
    /// A creature must carry at least one element attribute
    NoAttributes,
    /// Max health must be positive
    ZeroMaxHealth,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Data(err) => write!(f, "Data error: {}", err),
            GameError::Creature(err) => write!(f, "Creature error: {}", err),
        }
    }
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::DirectoryNotFound(path) => {
                write!(f, "Creature data directory not found: {}", path.display())
            }
            DataError::Io(details) => write!(f, "Failed to read creature data: {}", details),
            DataError::Parse(details) => write!(f, "Malformed creature data: {}", details),
            DataError::EmptyPool(path) => {
                write!(f, "No creature definitions in: {}", path.display())
            }
        }
    }
}

impl fmt::Display for CreatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreatureError::NoSkills => write!(f, "Creature has no skills"),
            CreatureError::NoAttributes => write!(f, "Creature has no attributes"),
            CreatureError::ZeroMaxHealth => write!(f, "Creature max health must be positive"),
        }
    }
}

impl std::error::Error for GameError {}
impl std::error::Error for DataError {}
impl std::error::Error for CreatureError {}

impl From<DataError> for GameError {
    fn from(err: DataError) -> Self {
        GameError::Data(err)
    }
}

impl From<CreatureError> for GameError {
    fn from(err: CreatureError) -> Self {
        GameError::Creature(err)
    }
}

impl From<std::io::Error> for DataError {
    fn from(err: std::io::Error) -> Self {
        DataError::Io(err.to_string())
    }
}

impl From<ron::error::SpannedError> for DataError {
    fn from(err: ron::error::SpannedError) -> Self {
        DataError::Parse(err.to_string())
    }
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

/// Type alias for Results using DataError
pub type DataResult<T> = Result<T, DataError>;

/// Type alias for Results using CreatureError
pub type CreatureResult<T> = Result<T, CreatureError>;
