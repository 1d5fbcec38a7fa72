//! Conversions between wire-level messages and client-facing types, plus the
//! deadline plumbing shared by unary calls and cursor round trips.

use std::future::Future;
use std::time::Duration;

use bytes::Bytes;
use coffer_proto as proto;
use tokio::time;

use crate::status::{Status, StatusCode};

/// Builds a [`Status`] from the status embedded in a response message.
///
/// A response without a status field decodes as the protobuf default, which
/// is success with an empty message.
pub(crate) fn status_from_proto(status: Option<proto::OpStatus>) -> Status {
    match status {
        Some(status) => Status::new(StatusCode::from_i32(status.code), status.message),
        None => Status::ok(),
    }
}

/// Folds an embedded response status into a `Result`.
pub(crate) fn expect_ok(status: Option<proto::OpStatus>) -> Result<(), Status> {
    let status = status_from_proto(status);
    if status.is_ok() {
        Ok(())
    } else {
        Err(status)
    }
}

/// Maps a transport-level failure to a network status carrying the gRPC code
/// name and details.
pub(crate) fn transport_status(error: tonic::Status) -> Status {
    Status::new(
        StatusCode::NetworkError,
        format!("{:?}: {}", error.code(), error.message()),
    )
}

/// Runs one wire call under the connection-wide operation timeout.
///
/// `None` means unlimited: the call is awaited directly.  A timeout expiry is
/// indistinguishable from any other transport fault to callers and surfaces
/// as a network status.
pub(crate) async fn with_deadline<T, F>(limit: Option<Duration>, call: F) -> Result<T, Status>
where
    F: Future<Output = std::result::Result<T, tonic::Status>>,
{
    let outcome = match limit {
        Some(limit) => match time::timeout(limit, call).await {
            Ok(outcome) => outcome,
            Err(_) => {
                return Err(Status::new(StatusCode::NetworkError, "operation timeout"));
            }
        },
        None => call.await,
    };
    outcome.map_err(transport_status)
}

/// Copies caller-supplied key or value data into an owned wire buffer.
pub(crate) fn copy_bytes(data: impl AsRef<[u8]>) -> Bytes {
    Bytes::copy_from_slice(data.as_ref())
}

/// Decodes a returned key or value as UTF-8 for the string-returning call
/// variants.
pub(crate) fn decode_utf8(data: Bytes) -> Result<String, Status> {
    String::from_utf8(Vec::from(data))
        .map_err(|_| Status::new(StatusCode::BrokenDataError, "not a valid UTF-8 string"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_status_decodes_as_success() {
        assert!(status_from_proto(None).is_ok());
    }

    #[test]
    fn embedded_status_is_mirrored() {
        let status = status_from_proto(Some(proto::OpStatus {
            code: StatusCode::InfeasibleError as i32,
            message: "status mismatch".to_string(),
        }));
        assert_eq!(status, StatusCode::InfeasibleError);
        assert_eq!(status.message(), "status mismatch");
    }

    #[test]
    fn utf8_decoding_flags_broken_data() {
        assert_eq!(decode_utf8(Bytes::from_static(b"plain")).unwrap(), "plain");
        let err = decode_utf8(Bytes::from_static(&[0xff, 0xfe])).unwrap_err();
        assert_eq!(err, StatusCode::BrokenDataError);
    }
}
