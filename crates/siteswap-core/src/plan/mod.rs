//! Beat-indexed flight scheduling.
//!
//! This module expands a validated [`ThrowPattern`](crate::pattern::ThrowPattern)
//! into a finite timeline of ball flights:
//! - `Hand` - which hand throws or catches on a beat
//! - `Flight` / `SimulationPlan` - the schedule handed to renderers
//! - `plan` - the planner itself

mod flight;
mod hand;
mod planner;

pub use flight::*;
pub use hand::*;
pub use planner::*;
