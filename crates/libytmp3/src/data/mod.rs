//! Module for all data structures that get passed around between the stages

pub mod batch;
pub mod job;
pub mod media;
pub mod title;
