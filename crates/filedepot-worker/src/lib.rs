//! Background job processing for FileDepot.
//!
//! This crate provides:
//! - A worker runner that polls the work queue and executes jobs
//! - A job executor that dispatches jobs to the correct handler
//! - The thumbnail generation job implementation

pub mod executor;
pub mod jobs;
pub mod runner;

pub use executor::{JobExecutionError, JobExecutor, JobHandler};
pub use jobs::ThumbnailJobHandler;
pub use runner::WorkerRunner;
