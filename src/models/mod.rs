//! Data types shared by the analysis pipeline and its front ends.
//!
//! Contains the raw provider payload ([`market_chart`]), validated dated
//! observations ([`datapoint`]) and the serializable result envelopes
//! ([`report`]).

pub mod datapoint;
pub mod market_chart;
pub mod report;

pub use datapoint::{Datapoint, Series};
pub use market_chart::{MarketChart, RawSample};
pub use report::{AnalysisReport, Outcome};
