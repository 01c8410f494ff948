//! Core domain types
//!
//! This module contains the domain structures shared by the HTTP client,
//! the job poller and the CLI. They are the normalized view of what the
//! scouting API returns; wire-specific shapes live in [`crate::dto`].

pub mod health;
pub mod job;
pub mod player;
pub mod report;
pub mod research;
