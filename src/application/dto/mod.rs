//! Data Transfer Objects

pub mod resolved_inputs;
pub mod upload_outcome;
