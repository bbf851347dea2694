//! Use cases: one module for the per-command pipelines, one for play mode

pub mod commands;
pub mod play;
