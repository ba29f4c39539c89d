//! Sprint board state: a sprint roster, a three-column kanban board and
//! per-task comment threads, persisted as named JSON records in SQLite.

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod seed;
pub mod store;
pub mod views;
