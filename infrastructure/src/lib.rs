//! Infrastructure layer for quiz-trainer
//!
//! Adapters for the application ports: the SQLite quiz store and the
//! figment-based configuration loader.

pub mod config;
pub mod storage;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, StorageConfig, default_database_path};
pub use storage::{SqliteInitError, SqliteQuizStore};
