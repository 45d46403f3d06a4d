pub mod app;
pub mod auth;
pub mod config;
pub mod feedback;
pub mod input;
pub mod journal_entry;
pub mod journal_state;
pub mod logging;
pub mod mood;
pub mod paths;
pub mod router;
pub mod stats;
pub mod storage;
pub mod transcription;
pub mod ui;
