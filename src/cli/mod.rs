//! # CLI Module
//!
//! Command implementations behind the `songpop` binary.
//!
//! - [`serve`] - runs the HTTP API (`/songs`, `/health`)
//! - [`list_songs`] - prints the enriched catalog as a table, using the same
//!   token cache, batch fetcher and sorting as the `/songs` endpoint
//!
//! Commands report progress through the crate's console macros and exit
//! through `error!` on failures the user has to fix (missing credentials,
//! unreadable catalog, address already in use).
//!
//! ## Usage Patterns
//!
//! ```bash
//! songpop serve                               # bind SERVER_ADDRESS
//! songpop serve --addr 0.0.0.0:9000
//! songpop songs --sort-by popularity --sort-order asc
//! ```

mod serve;
mod songs;

pub use serve::serve;
pub use songs::list_songs;
