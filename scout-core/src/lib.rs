//! Scout Core
//!
//! Core types and abstractions for the Scout scouting-report client.
//!
//! This crate contains:
//! - Domain types: Reports, research jobs, player candidates, health
//! - DTOs: Wire payloads exchanged with the scouting API

pub mod domain;
pub mod dto;
