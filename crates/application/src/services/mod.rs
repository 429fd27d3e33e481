//! Application services

mod midpoint_service;

pub use midpoint_service::{MidpointOutcome, MidpointService, Notice, NoticeLevel, PipelineStage};
