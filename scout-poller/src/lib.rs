//! Scout Poller
//!
//! Drives a player research request to a terminal outcome.
//!
//! Architecture:
//! - Research flow: submit a name, dispatch on the response
//! - Scheduler: the job poller that waits for a queued job to finish
//! - Seams: an injectable [`Sleeper`] and [`ProgressReporter`] so callers
//!   (and tests) control waiting and progress rendering
//!
//! A pending job is polled at most [`MAX_POLL_ATTEMPTS`] times,
//! [`POLL_INTERVAL`] apart. Every failure mode surfaces as one
//! [`ResearchError`].

pub mod config;
pub mod error;
pub mod progress;
pub mod research;
pub mod scheduler;
pub mod sleeper;

pub use config::{MAX_POLL_ATTEMPTS, POLL_INTERVAL};
pub use error::{ResearchError, Result};
pub use progress::{NoProgress, ProgressReporter, ResearchProgress};
pub use research::{OutcomeSource, ResearchOutcome, Researcher};
pub use scheduler::JobPoller;
pub use sleeper::{Sleeper, TokioSleeper};
