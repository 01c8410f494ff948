//! Data Transfer Objects for the scouting API
//!
//! DTOs mirror the JSON bodies the backend sends and accepts. Each one that
//! has a domain counterpart converts into it with `From`, which is where
//! wire quirks (status spellings, duplicated error fields) are normalized.

pub mod error;
pub mod job;
pub mod player;
pub mod report;
pub mod research;
