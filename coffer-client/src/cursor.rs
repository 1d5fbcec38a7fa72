//! Cursor over a remote store, bridged onto one duplex stream.

use std::time::Duration;

use bytes::Bytes;
use coffer_proto::iterate_request::Operation;
use coffer_proto::{self as proto, coffer_db_client::CofferDbClient};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tonic::transport::Channel;
use tonic::Streaming;
use tracing::debug;

use crate::convert::{copy_bytes, decode_utf8, expect_ok, with_deadline};
use crate::status::{Status, StatusCode};

/// Cursor for traversing, reading, and mutating the records of a remote
/// database one at a time.
///
/// Each cursor owns one duplex stream.  The stream decouples the outbound
/// request feed from the inbound response feed, so the cursor re-imposes
/// strict ordering on top of it: every call parks exactly one request in a
/// single-slot channel, the transport drains the slot onto the stream, and
/// the caller then waits for the one response correlated to it.  Because the
/// slot holds at most one request and responses arrive in send order on a
/// single stream, no second request can overtake the first and no
/// correlation ids are needed.
///
/// The `&mut self` receivers make the one-outstanding-request rule a
/// compile-time property; to traverse concurrently, open one cursor per
/// task.
///
/// Dropping the cursor closes the request feed, which the transport observes
/// as end-of-requests and uses to complete the stream, so no consumer is
/// left blocked on the server side.
///
/// # Example
/// ```no_run
/// # use coffer_client::Client;
/// # async fn example(client: &Client) -> Result<(), coffer_client::Status> {
/// let mut cursor = client.make_cursor().await?;
/// cursor.first().await?;
/// while let Some((key, value)) = cursor.next_record().await? {
///     println!("{:?} => {:?}", key, value);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Cursor {
    db_index: i32,
    timeout: Option<Duration>,
    requests: mpsc::Sender<proto::IterateRequest>,
    responses: Streaming<proto::IterateResponse>,
}

impl Cursor {
    pub(crate) async fn open(
        mut stub: CofferDbClient<Channel>,
        db_index: i32,
        timeout: Option<Duration>,
    ) -> Result<Cursor, Status> {
        // Capacity of one: the slot is the mailbox for the single in-flight
        // request.
        let (requests, feed) = mpsc::channel(1);
        let responses = with_deadline(timeout, async move {
            stub.iterate(ReceiverStream::new(feed))
                .await
                .map(tonic::Response::into_inner)
        })
        .await?;
        debug!(db_index, "cursor opened");
        Ok(Cursor {
            db_index,
            timeout,
            requests,
            responses,
        })
    }

    /// Positions the cursor at the first record.
    ///
    /// Does not fail on an empty database; the cursor is simply left
    /// unpositioned and the next read reports `NOT_FOUND_ERROR`.
    pub async fn first(&mut self) -> Result<(), Status> {
        let request = self.request(Operation::First);
        self.apply(request).await
    }

    /// Positions the cursor at the last record.
    ///
    /// Does not fail on an empty database.  Supported only by ordered
    /// backends; others report `NOT_IMPLEMENTED_ERROR`.
    pub async fn last(&mut self) -> Result<(), Status> {
        let request = self.request(Operation::Last);
        self.apply(request).await
    }

    /// Positions the cursor at the record of a key.
    ///
    /// Ordered backends fall back to the first record whose key is greater
    /// than or equal to `key` when there is no exact match; unordered
    /// backends fail instead.
    pub async fn jump(&mut self, key: impl AsRef<[u8]>) -> Result<(), Status> {
        let mut request = self.request(Operation::Jump);
        request.key = copy_bytes(key);
        self.apply(request).await
    }

    /// Positions the cursor at the last record whose key is lower than
    /// `key`, or at the exact match too when `inclusive` is set.
    ///
    /// Does not fail when nothing is below the key.  Supported only by
    /// ordered backends.
    pub async fn jump_lower(
        &mut self,
        key: impl AsRef<[u8]>,
        inclusive: bool,
    ) -> Result<(), Status> {
        let mut request = self.request(Operation::JumpLower);
        request.key = copy_bytes(key);
        request.jump_inclusive = inclusive;
        self.apply(request).await
    }

    /// Positions the cursor at the first record whose key is greater than
    /// `key`, or at the exact match too when `inclusive` is set.
    ///
    /// Does not fail when nothing is above the key.  Supported only by
    /// ordered backends.
    pub async fn jump_upper(
        &mut self,
        key: impl AsRef<[u8]>,
        inclusive: bool,
    ) -> Result<(), Status> {
        let mut request = self.request(Operation::JumpUpper);
        request.key = copy_bytes(key);
        request.jump_inclusive = inclusive;
        self.apply(request).await
    }

    /// Moves the cursor to the next record.
    ///
    /// Fails only when the cursor has no current record; stepping past the
    /// last record succeeds and makes the following read report
    /// `NOT_FOUND_ERROR`.
    pub async fn next(&mut self) -> Result<(), Status> {
        let request = self.request(Operation::Next);
        self.apply(request).await
    }

    /// Moves the cursor to the previous record.
    ///
    /// Fails only when the cursor has no current record.  Supported only by
    /// ordered backends.
    pub async fn previous(&mut self) -> Result<(), Status> {
        let request = self.request(Operation::Previous);
        self.apply(request).await
    }

    /// Gets the key and the value of the current record, without moving the
    /// cursor.
    pub async fn get(&mut self) -> Result<(Bytes, Bytes), Status> {
        let request = self.request(Operation::Get);
        let response = self.round_trip(request).await?;
        expect_ok(response.status)?;
        Ok((response.key, response.value))
    }

    /// Gets the current record, decoded as UTF-8 strings.
    pub async fn get_str(&mut self) -> Result<(String, String), Status> {
        let (key, value) = self.get().await?;
        Ok((decode_utf8(key)?, decode_utf8(value)?))
    }

    /// Gets the key of the current record.
    pub async fn get_key(&mut self) -> Result<Bytes, Status> {
        let mut request = self.request(Operation::Get);
        request.omit_value = true;
        let response = self.round_trip(request).await?;
        expect_ok(response.status)?;
        Ok(response.key)
    }

    /// Gets the key of the current record, decoded as a UTF-8 string.
    pub async fn get_key_str(&mut self) -> Result<String, Status> {
        decode_utf8(self.get_key().await?)
    }

    /// Gets the value of the current record.
    pub async fn get_value(&mut self) -> Result<Bytes, Status> {
        let mut request = self.request(Operation::Get);
        request.omit_key = true;
        let response = self.round_trip(request).await?;
        expect_ok(response.status)?;
        Ok(response.value)
    }

    /// Gets the value of the current record, decoded as a UTF-8 string.
    pub async fn get_value_str(&mut self) -> Result<String, Status> {
        decode_utf8(self.get_value().await?)
    }

    /// Replaces the value of the current record.
    pub async fn set(&mut self, value: impl AsRef<[u8]>) -> Result<(), Status> {
        let mut request = self.request(Operation::Set);
        request.value = copy_bytes(value);
        self.apply(request).await
    }

    /// Removes the current record.
    pub async fn remove(&mut self) -> Result<(), Status> {
        let request = self.request(Operation::Remove);
        self.apply(request).await
    }

    /// Gets the current record and moves the cursor to the next record in
    /// one round trip.
    ///
    /// The read and the move form one logical unit on this cursor, but the
    /// pair is not atomic against mutation by other clients.
    pub async fn step(&mut self) -> Result<(Bytes, Bytes), Status> {
        let request = self.request(Operation::Step);
        let response = self.round_trip(request).await?;
        expect_ok(response.status)?;
        Ok((response.key, response.value))
    }

    /// Gets the current record as strings and moves the cursor to the next
    /// record.
    pub async fn step_str(&mut self) -> Result<(String, String), Status> {
        let (key, value) = self.step().await?;
        Ok((decode_utf8(key)?, decode_utf8(value)?))
    }

    /// Treats the cursor as a forward-only sequence: returns the current
    /// record and advances, or `None` once the records are exhausted.
    ///
    /// Running off the end is not an error, so this is the natural loop
    /// primitive:
    ///
    /// ```no_run
    /// # use coffer_client::Cursor;
    /// # async fn example(cursor: &mut Cursor) -> Result<(), coffer_client::Status> {
    /// cursor.first().await?;
    /// while let Some((key, value)) = cursor.next_record().await? {
    ///     // ...
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn next_record(&mut self) -> Result<Option<(Bytes, Bytes)>, Status> {
        match self.step().await {
            Ok(record) => Ok(Some(record)),
            Err(status) if status == StatusCode::NotFoundError => Ok(None),
            Err(status) => Err(status),
        }
    }

    fn request(&self, operation: Operation) -> proto::IterateRequest {
        proto::IterateRequest {
            db_index: self.db_index,
            operation: operation as i32,
            ..Default::default()
        }
    }

    /// One full round trip: park the request in the single slot, then wait
    /// for the next inbound message, which stream ordering guarantees is the
    /// matching response.
    async fn round_trip(
        &mut self,
        request: proto::IterateRequest,
    ) -> Result<proto::IterateResponse, Status> {
        if self.requests.send(request).await.is_err() {
            return Err(Status::new(StatusCode::NetworkError, "request feed closed"));
        }
        match with_deadline(self.timeout, self.responses.message()).await? {
            Some(response) => Ok(response),
            None => Err(Status::new(StatusCode::NetworkError, "response feed closed")),
        }
    }

    async fn apply(&mut self, request: proto::IterateRequest) -> Result<(), Status> {
        let response = self.round_trip(request).await?;
        expect_ok(response.status)
    }
}
