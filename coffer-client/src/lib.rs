//! Client library for Coffer remote key-value stores.
//!
//! The crate connects to a Coffer server over gRPC and exposes the store
//! operations as one round trip each, plus stream-backed cursors for ordered
//! traversal.  Every outcome is reported through [`Status`], whose code
//! taxonomy is shared with the server; transport faults map to
//! [`StatusCode::NetworkError`] and misuse of a disconnected client maps to
//! [`StatusCode::PreconditionError`].
//!
//! ```no_run
//! use coffer_client::Client;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), coffer_client::Status> {
//! let mut client = Client::new();
//! client.connect("127.0.0.1:1978", Some(Duration::from_secs(5))).await?;
//!
//! client.set("hello", "world", true).await?;
//! println!("{}", client.get_str("hello").await?);
//!
//! let mut cursor = client.make_cursor().await?;
//! cursor.first().await?;
//! while let Some((key, value)) = cursor.next_record().await? {
//!     println!("{:?} => {:?}", key, value);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
mod convert;
pub mod cursor;
pub mod status;

// Re-export key types
pub use client::{Client, SearchMode, INCREMENT_NOOP};
pub use cursor::Cursor;
pub use status::{Status, StatusCode};
