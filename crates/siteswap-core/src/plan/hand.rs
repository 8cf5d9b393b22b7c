use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};

/// One of the juggler's two hands.
///
/// Hands alternate every beat: even beats belong to the left hand, odd beats
/// to the right.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, IntoStaticStr, Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Hand {
    #[strum(serialize = "left")]
    Left,
    #[strum(serialize = "right")]
    Right,
}

impl Hand {
    /// Hand that acts on the given beat.
    pub fn at_beat(beat: usize) -> Self {
        if beat % 2 == 0 { Self::Left } else { Self::Right }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
