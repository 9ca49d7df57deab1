//! vidagent: video transcription and query-analysis HTTP service.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
