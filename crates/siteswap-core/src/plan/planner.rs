use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::config::PlannerConfig;
use crate::error::{Error, Result};
use crate::pattern::ThrowPattern;

use super::{Flight, Hand, SimulationPlan};

/// Repetitions materialized when the caller does not choose.
pub const DEFAULT_REPETITIONS: usize = 6;

/// Balls in flight, keyed by the absolute beat they will be caught on.
///
/// Lives for a single planning call.
#[derive(Debug, Default)]
struct PendingLandings {
    by_beat: HashMap<usize, usize>,
}

impl PendingLandings {
    /// Remove and return the ball arriving on `beat`.
    fn take(&mut self, beat: usize) -> Option<usize> {
        self.by_beat.remove(&beat)
    }

    /// Book `ball` to land on `beat`.
    fn reserve(&mut self, beat: usize, ball: usize) -> Result<()> {
        if self.by_beat.contains_key(&beat) {
            return Err(Error::LandingConflict { beat, ball });
        }
        self.by_beat.insert(beat, ball);
        Ok(())
    }

    fn len(&self) -> usize {
        self.by_beat.len()
    }
}

/// Hands out ball identifiers `0..ball_count` in order of first use.
#[derive(Debug)]
struct BallPool {
    next: usize,
    size: usize,
}

impl BallPool {
    fn new(size: usize) -> Self {
        Self { next: 0, size }
    }

    fn introduce(&mut self) -> Option<usize> {
        if self.next < self.size {
            self.next += 1;
            Some(self.next - 1)
        } else {
            None
        }
    }
}

/// Number of beats simulated: whole periods, never less than one.
pub fn total_beats(period: usize, repetitions: usize) -> usize {
    repetitions.saturating_mul(period).max(period)
}

/// Expand a pattern into a flight schedule covering `repetitions` periods.
///
/// Walks the beats in order, carrying a table of pending landings. A ball
/// arriving on a beat is the one thrown from it; otherwise a new identifier
/// is drawn from the pool of `ball_count`. Zero-height beats never emit a
/// flight and never draw a new ball.
///
/// # Errors
///
/// - [`Error::ZeroBalls`] if `ball_count` is zero
/// - [`Error::IdentityExhausted`] if a throw has no ball available: either
///   `ball_count` is smaller than the pattern requires, or earlier throws
///   landed on zero-height beats and left the throwing hand empty (`3100`)
/// - [`Error::LandingConflict`] if two flights would land on one beat; this
///   indicates a validator/planner mismatch and also trips a debug assertion
///
/// # Example
///
/// ```
/// use siteswap_core::pattern::validate;
/// use siteswap_core::plan::plan;
///
/// let pattern = validate("3").unwrap();
/// let schedule = plan(&pattern, 3, 2).unwrap();
/// assert_eq!(schedule.total_beats(), 2);
/// assert_eq!(schedule.flights()[1].ball_id, 1);
/// ```
pub fn plan(pattern: &ThrowPattern, ball_count: usize, repetitions: usize) -> Result<SimulationPlan> {
    if ball_count == 0 {
        return Err(Error::ZeroBalls);
    }

    let total_beats = total_beats(pattern.period(), repetitions);
    let mut pending = PendingLandings::default();
    let mut pool = BallPool::new(ball_count);
    let mut flights = Vec::new();

    for beat in 0..total_beats {
        let height = pattern.height_at(beat);
        let arriving = pending.take(beat);

        if height == 0 {
            if let Some(ball) = arriving {
                trace!("beat {}: ball {} held", beat, ball);
            }
            continue;
        }

        let ball_id = match arriving.or_else(|| pool.introduce()) {
            Some(id) => id,
            None => {
                warn!("beat {}: no ball available for a {} throw", beat, height);
                return Err(Error::IdentityExhausted { beat });
            }
        };

        let landing_beat = beat + height as usize;
        pending.reserve(landing_beat, ball_id).inspect_err(|e| {
            warn!("Planner consistency fault: {}", e);
            if cfg!(debug_assertions) {
                unreachable!("validated pattern produced a landing conflict: {}", e);
            }
        })?;

        let flight = Flight {
            ball_id,
            throw_height: height,
            start_beat: beat,
            end_beat: landing_beat,
            from_hand: Hand::at_beat(beat),
            to_hand: Hand::at_beat(landing_beat),
        };
        trace!(
            "beat {}: ball {} {} -> {} landing {}",
            beat, ball_id, flight.from_hand, flight.to_hand, landing_beat
        );
        flights.push(flight);
    }

    debug!(
        "Planned {} flights over {} beats ({} still airborne at end)",
        flights.len(),
        total_beats,
        pending.len()
    );

    Ok(SimulationPlan::new(
        flights,
        total_beats,
        ball_count,
        pattern.period(),
    ))
}

/// Plan using the pattern's own ball count and configured repetitions.
pub fn plan_with_config(pattern: &ThrowPattern, config: &PlannerConfig) -> Result<SimulationPlan> {
    plan(pattern, pattern.ball_count(), config.repetitions)
}
