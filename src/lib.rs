//! Client library for the Open Tree Hole forum REST API.
//!
//! A *hole* is a forum thread, a *floor* is a post within a thread, and a
//! *division* is a category containing holes. Endpoint functions live in
//! [`api`], one module per resource group, each in four variants:
//!
//! - `op(client, ...)`: async, returns the decoded payload
//! - `op_detailed(client, ...)`: async, returns [`Response`] with status,
//!   headers and raw body alongside the payload
//! - `blocking::op` / `blocking::op_detailed`: synchronous counterparts
//!   (cargo feature `blocking`, on by default)
//!
//! ```no_run
//! use treehole_client::{api, Client};
//!
//! # async fn run() -> treehole_client::Result<()> {
//! let client = Client::authenticated("https://hole.example.com/api", "token")?;
//! let holes = api::hole::list_holes_old(&client, &Default::default()).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
#[cfg(feature = "blocking")]
pub mod blocking;
pub mod client;
pub mod config;
pub mod models;
pub mod response;
pub mod utils;

pub use client::{Client, ClientBuilder};
pub use config::ClientConfig;
pub use response::Response;
pub use utils::error::{ApiError, Result};
