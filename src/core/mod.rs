// src/core/mod.rs

pub mod calculators;
pub mod classifier;
pub mod engine;
pub mod normalizer;
pub mod reducer;
pub mod summation;
pub mod tables;
pub mod types;
