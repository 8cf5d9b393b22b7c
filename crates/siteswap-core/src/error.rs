use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Pattern is empty")]
    EmptyPattern,

    #[error("Invalid character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },

    #[error("Pattern contains no throws (all heights are zero)")]
    AllZeroPattern,

    #[error("Throw heights sum to {sum}, which is not divisible by the period {period}")]
    NonIntegerAverage { sum: usize, period: usize },

    #[error("Throws at positions {first} and {second} both land on beat {slot}")]
    LandingCollision {
        slot: usize,
        first: usize,
        second: usize,
    },

    #[error("Pattern yields no balls")]
    ZeroBalls,

    #[error("Internal error: ball {ball} scheduled to land on beat {beat}, which is already reserved")]
    LandingConflict { beat: usize, ball: usize },

    #[error("Internal error: no ball available to throw at beat {beat}")]
    IdentityExhausted { beat: usize },

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error stems from user input and can be fixed by re-entering the pattern.
    ///
    /// Planner consistency faults return `false`: they mean the validator accepted
    /// a pattern the planner could not schedule.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyPattern
                | Self::InvalidCharacter { .. }
                | Self::AllZeroPattern
                | Self::NonIntegerAverage { .. }
                | Self::LandingCollision { .. }
                | Self::ZeroBalls
        )
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParseError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
