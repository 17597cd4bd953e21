//! Trend Pulse library.
//!
//! Fetches social-media trend data from the analysis pipeline and shapes it
//! into the categories, topics and posts the dashboard renders.

pub mod config;
pub mod constants;
pub mod dashboard;
pub mod pipeline;
