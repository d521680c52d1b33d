/// Convenience result type used across boardcast.
pub type BoardcastResult<T> = Result<T, BoardcastError>;

/// Soft limit on how many players a single space can hold; the offset table
/// in the board module is defined for exactly this many occupants.
pub const MAX_OCCUPANTS: usize = 7;

/// Top-level error taxonomy used by engine APIs.
///
/// Script errors split into three families: syntax (the reader could not make
/// sense of the text), semantic (the script names things that do not exist or
/// violate board rules), and resource (an image, font, or avatar could not be
/// obtained). All three are fatal: a script either renders completely or not
/// at all.
#[derive(thiserror::Error, Debug)]
pub enum BoardcastError {
    /// The script text is not a well-formed S-expression.
    #[error("script syntax error at offset {position}: {message}")]
    Syntax {
        /// Human-readable description of what was expected.
        message: String,
        /// Byte offset into the script text.
        position: usize,
    },

    /// The script parsed as S-expressions but does not have the expected
    /// section or form shape.
    #[error("malformed script: {0}")]
    Malformed(String),

    /// A command tag that is not in the command registry.
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    /// A known command with the wrong argument arity or types.
    #[error("malformed command: {0}")]
    CommandParse(String),

    /// Attempt to add a player name that is already tracked by the board.
    #[error("player '{0}' is already on the board")]
    DuplicatePlayer(String),

    /// A player name that the board does not track.
    #[error("player '{0}' is not on the board")]
    UnknownPlayer(String),

    /// A space name that was never defined in the script's spaces section.
    #[error("space '{0}' does not exist")]
    UnknownSpace(String),

    /// More occupants on one space than the offset table supports.
    #[error("{count} occupants on space '{space}' exceeds the limit of {MAX_OCCUPANTS}")]
    TooManyOccupants {
        /// The overfull space.
        space: String,
        /// How many occupants it holds.
        count: usize,
    },

    /// A named object lookup in the engine found nothing.
    #[error("object '{0}' not found")]
    ObjectNotFound(String),

    /// Attempt to register an object under a name that is already taken.
    #[error("an object named '{0}' already exists")]
    DuplicateObject(String),

    /// Attempt to move the timeline backwards.
    #[error("timeline cannot advance by {0} frames")]
    InvalidAdvance(i64),

    /// An image, font, or avatar could not be loaded or fetched.
    #[error("resource error: {0}")]
    Resource(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BoardcastError {
    /// Build a [`BoardcastError::Syntax`] value.
    pub fn syntax(message: impl Into<String>, position: usize) -> Self {
        Self::Syntax {
            message: message.into(),
            position,
        }
    }

    /// Build a [`BoardcastError::Malformed`] value.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }

    /// Build a [`BoardcastError::CommandParse`] value.
    pub fn command_parse(message: impl Into<String>) -> Self {
        Self::CommandParse(message.into())
    }

    /// Build a [`BoardcastError::Resource`] value.
    pub fn resource(message: impl Into<String>) -> Self {
        Self::Resource(message.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
