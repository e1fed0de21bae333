//! Type definitions for the message classifier

pub mod classification;

pub use classification::{Classification, DECISION_THRESHOLD};
