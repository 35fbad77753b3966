//! # SQL Query Loader Library
//!
//! Embedded loader for named SQL query blocks annotated inside plain SQL
//! files.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod scanner;
pub mod store;
