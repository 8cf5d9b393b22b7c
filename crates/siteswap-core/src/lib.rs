pub mod config;
pub mod error;
pub mod export;
pub mod pattern;
pub mod plan;

pub use config::{Config, OutputFormat, PlannerConfig};
pub use error::{Error, Result};
pub use pattern::{ThrowPattern, validate};
pub use plan::{
    ContractViolation, DEFAULT_REPETITIONS, Flight, Hand, SimulationPlan, plan, plan_with_config,
};
