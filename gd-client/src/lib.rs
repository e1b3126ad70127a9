//! Asynchronous client for the Geometry Dash server API.
//!
//! The Geometry Dash servers speak an undocumented, delimiter-based text
//! protocol over HTTP POST. This crate turns high-level operations ("get
//! private messages, page 0") into that exchange: it builds the request,
//! injects the session credentials, dispatches with a bounded timeout,
//! classifies the raw result, decodes it into typed entities, and serves
//! repeated reads from a time-bounded in-memory cache.
//!
//! # Quick Start
//!
//! ```no_run
//! use gd_client::GdClientBuilder;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GdClientBuilder::new().build()?;
//! let user = client.get_user(71).await?;
//! println!("{} has {} stars", user.username, user.stars);
//! # Ok(())
//! # }
//! ```
//!
//! Authenticated operations need a login at build time:
//!
//! ```no_run
//! use gd_client::{Credentials, GdClientBuilder};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GdClientBuilder::new()
//!     .build_authenticated(Credentials::new("user", "password"))
//!     .await?;
//! let inbox = client.get_private_messages(0).await?;
//! for message in inbox.items() {
//!     println!("{}: {}", message.sender_name, message.subject);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Error model
//!
//! Every remote operation resolves to one of four failure kinds (see
//! [`Error`]): an invalid argument rejected before dispatch, a transport
//! failure, the server's `-1` sentinel (which conflates "nothing found" with
//! "access denied"; the distinction does not exist on the wire), or a
//! response body the decoder could not make sense of. The pipeline never
//! retries and never caches failures.

pub mod builder;
pub mod cache;
pub mod client;
pub mod entity;
pub mod error;
pub mod paginator;
pub mod request;
pub mod response;
pub mod routes;
pub mod session;

mod http;
mod pipeline;

pub use builder::GdClientBuilder;
pub use client::{DemonDifficulty, GdClient, LeaderboardKind};
pub use entity::{GdLevel, GdMessage, GdUser, LevelLength};
pub use error::{Error, Result};
pub use paginator::Paginator;
pub use request::Request;
pub use session::{Credentials, Session};
