use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pattern::ThrowPattern;

use super::Hand;

/// A single release-to-catch event on the absolute beat timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flight {
    pub ball_id: usize,
    pub throw_height: u8,
    pub start_beat: usize,
    pub end_beat: usize,
    pub from_hand: Hand,
    pub to_hand: Hand,
}

impl Flight {
    /// Whether the ball is in the air during `beat` (caught at `end_beat`).
    pub fn is_airborne_at(&self, beat: usize) -> bool {
        self.start_beat <= beat && beat < self.end_beat
    }

    /// Odd heights cross to the other hand.
    pub fn crosses(&self) -> bool {
        self.from_hand != self.to_hand
    }
}

/// A guarantee of [`SimulationPlan`] that a plan failed to uphold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("Flight starting at beat {0} is out of order or duplicated")]
    UnorderedStart(usize),

    #[error("Flight at beat {beat} uses ball {ball_id} outside the pool of {ball_count}")]
    BallOutOfRange {
        beat: usize,
        ball_id: usize,
        ball_count: usize,
    },

    #[error("Flight at beat {0} has a duration that does not match its height")]
    DurationMismatch(usize),

    #[error("Flight at beat {0} has hands inconsistent with beat parity")]
    HandMismatch(usize),

    #[error("Beat {0} should have exactly one flight")]
    MissingFlight(usize),

    #[error("Flight at beat {0} does not correspond to a throw in the pattern")]
    UnexpectedFlight(usize),

    #[error("Two flights land on beat {0}")]
    SharedLanding(usize),

    #[error("Ball {ball_id} is thrown at beat {beat} while still in the air")]
    BallInTwoPlaces { ball_id: usize, beat: usize },
}

/// The finished flight schedule for one (pattern, ball count, repetitions) request.
///
/// Flights are sorted by `start_beat`, and each beat with a non-zero throw in
/// `0..total_beats` has exactly one flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationPlan {
    flights: Vec<Flight>,
    total_beats: usize,
    ball_count: usize,
    period: usize,
}

impl SimulationPlan {
    pub(crate) fn new(
        flights: Vec<Flight>,
        total_beats: usize,
        ball_count: usize,
        period: usize,
    ) -> Self {
        Self {
            flights,
            total_beats,
            ball_count,
            period,
        }
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn total_beats(&self) -> usize {
        self.total_beats
    }

    pub fn ball_count(&self) -> usize {
        self.ball_count
    }

    pub fn period(&self) -> usize {
        self.period
    }

    /// Number of whole pattern repetitions covered by the plan.
    pub fn repetitions(&self) -> usize {
        self.total_beats / self.period
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Flight thrown on `beat`, if any.
    pub fn flight_at(&self, beat: usize) -> Option<&Flight> {
        self.flights
            .binary_search_by_key(&beat, |f| f.start_beat)
            .ok()
            .map(|i| &self.flights[i])
    }

    /// Flights in the air during `beat`, in throw order.
    pub fn airborne_at(&self, beat: usize) -> impl Iterator<Item = &Flight> {
        self.flights.iter().filter(move |f| f.is_airborne_at(beat))
    }

    /// All flights of one ball, in throw order.
    pub fn flights_for_ball(&self, ball_id: usize) -> impl Iterator<Item = &Flight> {
        self.flights.iter().filter(move |f| f.ball_id == ball_id)
    }

    /// All flights released from `hand`.
    pub fn throws_from(&self, hand: Hand) -> impl Iterator<Item = &Flight> {
        self.flights.iter().filter(move |f| f.from_hand == hand)
    }

    /// Re-check every guarantee a renderer relies on against `pattern`.
    ///
    /// Returns the first violation found.
    pub fn check_contract(&self, pattern: &ThrowPattern) -> Result<(), ContractViolation> {
        let mut previous_start: Option<usize> = None;
        let mut landings = HashSet::new();
        let mut ball_free_at: HashMap<usize, usize> = HashMap::new();

        for flight in &self.flights {
            let beat = flight.start_beat;

            if previous_start.is_some_and(|prev| prev >= beat) {
                return Err(ContractViolation::UnorderedStart(beat));
            }
            previous_start = Some(beat);

            if flight.ball_id >= self.ball_count {
                return Err(ContractViolation::BallOutOfRange {
                    beat,
                    ball_id: flight.ball_id,
                    ball_count: self.ball_count,
                });
            }

            if flight.throw_height == 0
                || flight.end_beat != beat + flight.throw_height as usize
            {
                return Err(ContractViolation::DurationMismatch(beat));
            }

            if flight.from_hand != Hand::at_beat(beat)
                || flight.to_hand != Hand::at_beat(flight.end_beat)
            {
                return Err(ContractViolation::HandMismatch(beat));
            }

            if beat >= self.total_beats || pattern.height_at(beat) != flight.throw_height {
                return Err(ContractViolation::UnexpectedFlight(beat));
            }

            if !landings.insert(flight.end_beat) {
                return Err(ContractViolation::SharedLanding(flight.end_beat));
            }

            if let Some(&free_at) = ball_free_at.get(&flight.ball_id)
                && beat < free_at
            {
                return Err(ContractViolation::BallInTwoPlaces {
                    ball_id: flight.ball_id,
                    beat,
                });
            }
            ball_free_at.insert(flight.ball_id, flight.end_beat);
        }

        if let Some(beat) = (0..self.total_beats)
            .find(|&b| pattern.height_at(b) > 0 && self.flight_at(b).is_none())
        {
            return Err(ContractViolation::MissingFlight(beat));
        }

        Ok(())
    }
}
