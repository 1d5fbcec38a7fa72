//! Protocol Buffers definitions for the Coffer gRPC API.
//!
//! The message and service code in `src/coffer.rs` is the `tonic-build`
//! output for `proto/coffer.proto`, committed to the repository so that
//! building the workspace does not require `protoc`.  When the proto file
//! changes, regenerate with `tonic-build` and replace `src/coffer.rs`
//! wholesale.

mod coffer;

pub use coffer::*;
