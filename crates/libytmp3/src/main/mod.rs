//! Module containing the main functionality of the library

pub mod destination;
pub mod fetch;
pub mod orchestrator;
pub mod tag;
