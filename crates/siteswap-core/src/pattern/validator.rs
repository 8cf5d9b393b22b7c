use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

use super::alphabet;

/// A validated siteswap: throw heights in beats plus derived metadata.
///
/// Only constructed through [`validate`], so every instance satisfies
/// `sum(heights) == ball_count * period` with a collision-free landing map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ThrowPattern {
    heights: Vec<u8>,
    period: usize,
    ball_count: usize,
    max_throw_height: u8,
}

impl ThrowPattern {
    pub fn heights(&self) -> &[u8] {
        &self.heights
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn ball_count(&self) -> usize {
        self.ball_count
    }

    pub fn max_throw_height(&self) -> u8 {
        self.max_throw_height
    }

    /// Throw height at an absolute beat, wrapping around the period.
    pub fn height_at(&self, beat: usize) -> u8 {
        self.heights[beat % self.period]
    }

    /// Pattern-relative landing slot of the throw at `index`.
    ///
    /// Returns `None` for zero-height entries (nothing is thrown) and for
    /// indices outside the period.
    pub fn landing_slot(&self, index: usize) -> Option<usize> {
        match self.heights.get(index) {
            Some(&h) if h > 0 => Some((index + h as usize) % self.period),
            _ => None,
        }
    }

    /// Landing slots for every index, in pattern order.
    pub fn landing_slots(&self) -> Vec<Option<usize>> {
        (0..self.period).map(|i| self.landing_slot(i)).collect()
    }

    /// Canonical notation: lower-case symbols, no whitespace.
    pub fn to_notation(&self) -> String {
        self.heights
            .iter()
            .filter_map(|&h| alphabet::symbol_of(h))
            .collect()
    }
}

impl fmt::Display for ThrowPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}

impl FromStr for ThrowPattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        validate(s)
    }
}

/// Parse and validate a siteswap string.
///
/// Input is lower-cased and stripped of whitespace before parsing, so
/// `"5 3 1"` and `"531"` are equivalent.
///
/// # Example
///
/// ```
/// use siteswap_core::pattern::validate;
///
/// let pattern = validate("531").unwrap();
/// assert_eq!(pattern.heights(), &[5, 3, 1]);
/// assert_eq!(pattern.ball_count(), 3);
/// assert_eq!(pattern.max_throw_height(), 5);
/// ```
pub fn validate(raw: &str) -> Result<ThrowPattern> {
    let normalized: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(|c| c.to_lowercase())
        .collect();

    if normalized.is_empty() {
        return Err(Error::EmptyPattern);
    }

    let heights = normalized
        .chars()
        .enumerate()
        .map(|(position, ch)| {
            alphabet::height_of(ch).ok_or(Error::InvalidCharacter { ch, position })
        })
        .collect::<Result<Vec<u8>>>()?;

    if heights.iter().all(|&h| h == 0) {
        return Err(Error::AllZeroPattern);
    }

    let period = heights.len();
    let sum: usize = heights.iter().map(|&h| h as usize).sum();
    if sum % period != 0 {
        return Err(Error::NonIntegerAverage { sum, period });
    }

    check_landing_slots(&heights)?;

    let ball_count = sum / period;
    if ball_count < 1 {
        return Err(Error::ZeroBalls);
    }

    let max_throw_height = heights.iter().copied().max().unwrap_or(0);

    debug!(
        "Validated pattern {} (period {}, {} balls, max height {})",
        normalized, period, ball_count, max_throw_height
    );

    Ok(ThrowPattern {
        heights,
        period,
        ball_count,
        max_throw_height,
    })
}

/// Verify that no two throws land in the same beat-phase of the pattern.
///
/// Zero-height entries throw nothing and claim no slot.
fn check_landing_slots(heights: &[u8]) -> Result<()> {
    let period = heights.len();
    let mut owner: Vec<Option<usize>> = vec![None; period];

    for (index, &height) in heights.iter().enumerate() {
        if height == 0 {
            continue;
        }
        let slot = (index + height as usize) % period;
        if let Some(first) = owner[slot] {
            return Err(Error::LandingCollision {
                slot,
                first,
                second: index,
            });
        }
        owner[slot] = Some(index);
    }

    Ok(())
}
