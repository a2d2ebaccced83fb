//! Module for the traits at the seams to external tools and the user

pub mod batch_control;
pub mod fetcher;
pub mod metadata_writer;
