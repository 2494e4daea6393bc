// src/lib.rs

pub mod analyzer;
pub mod config;
pub mod emotion;
pub mod error;
pub mod llm;
pub mod server;
