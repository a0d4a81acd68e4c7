// ABOUTME: Public library API for Traduora translation sync
// ABOUTME: Re-exports core modules for the CLI and integration tests

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod observer;
pub mod storage;
pub mod sync;
pub mod util;

pub use config::Config;
pub use error::{Error, Result};
pub use observer::{ConsoleObserver, RecordingObserver, Stage, SyncObserver};
pub use sync::{reconcile_locales, run, SyncOptions, SyncReport};
