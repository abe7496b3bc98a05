//! Supporting utilities for the Covergrid server.

/// Utility for running the CLI.
pub mod cli;
/// Utility functions for serving HTTP content.
pub mod http;
