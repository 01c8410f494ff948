//! Scheduler layer
//!
//! This layer waits for queued research jobs. It owns the poll loop, its
//! attempt ceiling and the non-re-entrancy guard per job id.

pub mod poller;

pub use poller::JobPoller;
