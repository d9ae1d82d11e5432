//! Common library for the campus-market application
//!
//! This crate provides shared functionality used across different services
//! in the campus-market application, including database connectivity and
//! error handling.

pub mod database;
pub mod error;
