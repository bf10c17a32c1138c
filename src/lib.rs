// src/lib.rs

pub mod core;
pub mod error;
pub mod input;
pub mod c_api;
pub use crate::core::engine::{EngineConfig, NumerologyEngine};
pub use crate::core::types::{DateOfBirth, Language, NumerologyReport, Reduced, ResultKey, ResultValue};
pub use crate::error::NumerologyError;
