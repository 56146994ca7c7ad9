//! # CLI Module
//!
//! Command-line entry points of the weather playlist service.
//!
//! - [`serve`] - Runs the HTTP server until the process is stopped
//! - [`playlist`] - Runs a single lookup for a zip code and prints the
//!   result as a table, handy for checking credentials and configuration
//!
//! ## Usage Patterns
//!
//! ```bash
//! weatherplay serve                          # listen on SERVER_ADDRESS
//! weatherplay serve --addr 0.0.0.0:8080      # override the bind address
//! weatherplay playlist --zip-code 94040,us   # one-off lookup
//! ```

mod playlist;
mod serve;

pub use playlist::playlist;
pub use serve::serve;
