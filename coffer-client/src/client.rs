//! Remote store client: connection lifecycle and the unary operation surface.

use std::collections::HashMap;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use bytes::Bytes;
use coffer_proto::{self as proto, coffer_db_client::CofferDbClient};
use tokio::time;
use tonic::transport::{Channel, Endpoint};
use tracing::debug;

use crate::convert::{copy_bytes, decode_utf8, expect_ok, with_deadline};
use crate::cursor::Cursor;
use crate::status::{Status, StatusCode};

/// How long each wait for connection readiness lasts before the deadline and
/// the failure count are rechecked.
const CONNECT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Consecutive connection failures tolerated before `connect` gives up ahead
/// of its deadline.
const CONNECT_FAILURE_LIMIT: u32 = 3;

const NOT_OPENED: &str = "not opened connection";
const ALREADY_OPENED: &str = "opened connection";

/// Delta value that makes [`Client::increment`] report the current value
/// without modifying the record.
pub const INCREMENT_NOOP: i64 = i64::MIN;

/// Connectivity as observed by one poll of the readiness loop in
/// [`Client::connect`].
enum Connectivity {
    /// The transport is still trying to reach the endpoint.
    Connecting,
    /// The attempt was rejected or dropped.
    TransientFailure(tonic::transport::Error),
    /// The channel is established.
    Ready(Channel),
}

/// Key matching modes understood by the server for [`Client::search`].
///
/// Which modes a database accepts depends on the backend; unsupported modes
/// are reported by the server, not rejected locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchMode {
    /// Keys containing the pattern.
    Contain,
    /// Keys beginning with the pattern.
    Begin,
    /// Keys ending with the pattern.
    End,
    /// Keys partially matching a regular expression.
    Regex,
    /// Keys with the least edit distance to the UTF-8 pattern.
    Edit,
    /// Keys with the least edit distance to the binary pattern.
    EditBin,
}

impl SearchMode {
    /// Wire name of the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            SearchMode::Contain => "contain",
            SearchMode::Begin => "begin",
            SearchMode::End => "end",
            SearchMode::Regex => "regex",
            SearchMode::Edit => "edit",
            SearchMode::EditBin => "editbin",
        }
    }
}

/// Client for a remote Coffer store.
///
/// A client starts out disconnected; [`Client::connect`] opens the transport
/// channel and every operation issued afterwards is one request/response
/// round trip against the selected database.  Operations taken by shared
/// reference are safe to issue concurrently from multiple tasks; the
/// connection-wide settings ([`Client::connect`], [`Client::disconnect`],
/// [`Client::set_db_index`]) take `&mut self` and therefore cannot race
/// against in-flight calls.
///
/// # Example
/// ```no_run
/// # use coffer_client::Client;
/// # use std::time::Duration;
/// # async fn example() -> Result<(), coffer_client::Status> {
/// let mut client = Client::new();
/// client.connect("127.0.0.1:1978", Some(Duration::from_secs(5))).await?;
/// client.set("greeting", "hello", true).await?;
/// println!("{}", client.get_str("greeting").await?);
/// client.disconnect()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Client {
    stub: Option<CofferDbClient<Channel>>,
    timeout: Option<Duration>,
    db_index: i32,
}

impl Client {
    /// Creates a disconnected client.
    pub fn new() -> Client {
        Client::default()
    }

    /// Returns true while a connection is open.
    pub fn is_connected(&self) -> bool {
        self.stub.is_some()
    }

    /// The index of the database that operations address.
    pub fn db_index(&self) -> i32 {
        self.db_index
    }

    /// Connects to the server.
    ///
    /// # Arguments
    /// * `address` - The server address: `"127.0.0.1:1978"`, `"[::1]:1978"`,
    ///   or a full URI such as `"http://db.example.com:1978"`.
    /// * `timeout` - Deadline for establishing the connection, applied
    ///   afterwards to every operation issued through this client.  `None`
    ///   means unlimited.
    ///
    /// Readiness is polled in short bounded waits so the call neither spins
    /// nor hangs: each failed attempt counts toward a small limit, and the
    /// deadline bounds the total wait even while the transport keeps
    /// retrying.
    pub async fn connect(
        &mut self,
        address: &str,
        timeout: Option<Duration>,
    ) -> Result<(), Status> {
        if self.stub.is_some() {
            return Err(Status::new(StatusCode::PreconditionError, ALREADY_OPENED));
        }
        let endpoint = endpoint_for(address)?;
        let deadline = timeout.map(|limit| time::Instant::now() + limit);
        let mut attempt = Box::pin(endpoint.connect());
        let mut failures = 0u32;
        let channel = loop {
            let poll_started = time::Instant::now();
            let observed = match time::timeout(CONNECT_POLL_INTERVAL, attempt.as_mut()).await {
                Ok(Ok(channel)) => Connectivity::Ready(channel),
                Ok(Err(error)) => Connectivity::TransientFailure(error),
                Err(_) => Connectivity::Connecting,
            };
            match observed {
                Connectivity::Ready(channel) => break channel,
                Connectivity::TransientFailure(error) => {
                    failures += 1;
                    debug!(%error, failures, "connection attempt failed");
                    if failures >= CONNECT_FAILURE_LIMIT {
                        return Err(Status::new(StatusCode::NetworkError, "connection failed"));
                    }
                    if past_deadline(deadline) {
                        return Err(Status::new(StatusCode::NetworkError, "connection timeout"));
                    }
                    // Pace retries to the polling interval before opening a
                    // fresh attempt.
                    time::sleep_until(poll_started + CONNECT_POLL_INTERVAL).await;
                    attempt = Box::pin(endpoint.connect());
                }
                Connectivity::Connecting => {
                    if past_deadline(deadline) {
                        return Err(Status::new(StatusCode::NetworkError, "connection timeout"));
                    }
                }
            }
        };
        debug!(address, "connected");
        self.stub = Some(CofferDbClient::new(channel));
        self.timeout = timeout;
        self.db_index = 0;
        Ok(())
    }

    /// Disconnects from the server.
    ///
    /// The channel and all connection state are cleared unconditionally; a
    /// disconnected client must not be reconnected while other tasks still
    /// hold operations in flight, and cursors made from this client stop
    /// working once their streams collapse.
    pub fn disconnect(&mut self) -> Result<(), Status> {
        if self.stub.is_none() {
            return Err(Status::new(StatusCode::PreconditionError, NOT_OPENED));
        }
        // Dropping the stub tears down the underlying channel.
        self.stub = None;
        self.timeout = None;
        self.db_index = 0;
        debug!("disconnected");
        Ok(())
    }

    /// Selects which database on the server subsequent operations address.
    ///
    /// A negative index addresses the whole server and is meaningful only
    /// for [`Client::inspect`].  The index is connection-wide state: set it
    /// before sharing the client across tasks.
    pub fn set_db_index(&mut self, db_index: i32) -> Result<(), Status> {
        if self.stub.is_none() {
            return Err(Status::new(StatusCode::PreconditionError, NOT_OPENED));
        }
        self.db_index = db_index;
        Ok(())
    }

    /// Sends a message and gets back the echoed message.
    pub async fn echo(&self, message: &str) -> Result<String, Status> {
        let mut stub = self.stub()?;
        let request = proto::EchoRequest {
            message: message.to_string(),
        };
        let response = with_deadline(self.timeout, async move {
            stub.echo(request).await.map(tonic::Response::into_inner)
        })
        .await?;
        expect_ok(response.status)?;
        Ok(response.echo)
    }

    /// Inspects the database and returns its properties.
    ///
    /// With a negative database index, basic metadata of every database on
    /// the server is returned instead.
    pub async fn inspect(&self) -> Result<HashMap<String, String>, Status> {
        let mut stub = self.stub()?;
        let request = proto::InspectRequest {
            db_index: self.db_index,
        };
        let response = with_deadline(self.timeout, async move {
            stub.inspect(request).await.map(tonic::Response::into_inner)
        })
        .await?;
        expect_ok(response.status)?;
        Ok(response
            .properties
            .into_iter()
            .map(|property| (property.name, property.value))
            .collect())
    }

    /// Gets the value of a record.
    ///
    /// Returns `NOT_FOUND_ERROR` if there is no record of the key.
    pub async fn get(&self, key: impl AsRef<[u8]>) -> Result<Bytes, Status> {
        let mut stub = self.stub()?;
        let request = proto::GetRequest {
            db_index: self.db_index,
            key: copy_bytes(key),
        };
        let response = with_deadline(self.timeout, async move {
            stub.get(request).await.map(tonic::Response::into_inner)
        })
        .await?;
        expect_ok(response.status)?;
        Ok(response.value)
    }

    /// Gets the value of a record, decoded as a UTF-8 string.
    pub async fn get_str(&self, key: impl AsRef<[u8]>) -> Result<String, Status> {
        decode_utf8(self.get(key).await?)
    }

    /// Gets the values of multiple records in one round trip.
    ///
    /// Keys which don't match existing records are omitted from the result;
    /// partial matches are not an error.
    pub async fn get_multi<K>(&self, keys: &[K]) -> Result<HashMap<Bytes, Bytes>, Status>
    where
        K: AsRef<[u8]>,
    {
        let mut stub = self.stub()?;
        let request = proto::GetMultiRequest {
            db_index: self.db_index,
            keys: keys.iter().map(copy_bytes).collect(),
        };
        let response = with_deadline(self.timeout, async move {
            stub.get_multi(request)
                .await
                .map(tonic::Response::into_inner)
        })
        .await?;
        expect_ok(response.status)?;
        Ok(response
            .records
            .into_iter()
            .map(|record| (record.key, record.value))
            .collect())
    }

    /// Gets the values of multiple records, decoded as UTF-8 strings.
    pub async fn get_multi_str<K>(&self, keys: &[K]) -> Result<HashMap<String, String>, Status>
    where
        K: AsRef<[u8]>,
    {
        let records = self.get_multi(keys).await?;
        let mut result = HashMap::with_capacity(records.len());
        for (key, value) in records {
            result.insert(decode_utf8(key)?, decode_utf8(value)?);
        }
        Ok(result)
    }

    /// Sets a record.
    ///
    /// # Arguments
    /// * `key` - The key of the record.
    /// * `value` - The value of the record.
    /// * `overwrite` - Whether to overwrite an existing value.  When false
    ///   and the record exists, `DUPLICATION_ERROR` is returned and the
    ///   stored value is left unchanged.
    pub async fn set(
        &self,
        key: impl AsRef<[u8]>,
        value: impl AsRef<[u8]>,
        overwrite: bool,
    ) -> Result<(), Status> {
        let mut stub = self.stub()?;
        let request = proto::SetRequest {
            db_index: self.db_index,
            key: copy_bytes(key),
            value: copy_bytes(value),
            overwrite,
        };
        let response = with_deadline(self.timeout, async move {
            stub.set(request).await.map(tonic::Response::into_inner)
        })
        .await?;
        expect_ok(response.status)
    }

    /// Sets multiple records in one round trip.
    ///
    /// Overwrite semantics apply per record but the outcomes are folded into
    /// one aggregate status: if any record avoids overwriting,
    /// `DUPLICATION_ERROR` is returned while the remaining records are still
    /// stored.
    pub async fn set_multi<K, V>(&self, records: &[(K, V)], overwrite: bool) -> Result<(), Status>
    where
        K: AsRef<[u8]>,
        V: AsRef<[u8]>,
    {
        let mut stub = self.stub()?;
        let request = proto::SetMultiRequest {
            db_index: self.db_index,
            records: records
                .iter()
                .map(|(key, value)| proto::Record {
                    key: copy_bytes(key),
                    value: copy_bytes(value),
                })
                .collect(),
            overwrite,
        };
        let response = with_deadline(self.timeout, async move {
            stub.set_multi(request)
                .await
                .map(tonic::Response::into_inner)
        })
        .await?;
        expect_ok(response.status)
    }

    /// Removes a record.
    ///
    /// Returns `NOT_FOUND_ERROR` if there is no record of the key.
    pub async fn remove(&self, key: impl AsRef<[u8]>) -> Result<(), Status> {
        let mut stub = self.stub()?;
        let request = proto::RemoveRequest {
            db_index: self.db_index,
            key: copy_bytes(key),
        };
        let response = with_deadline(self.timeout, async move {
            stub.remove(request).await.map(tonic::Response::into_inner)
        })
        .await?;
        expect_ok(response.status)
    }

    /// Removes multiple records in one round trip.
    ///
    /// Missing keys do not block removal of the others; they surface as an
    /// aggregate `NOT_FOUND_ERROR` after every present key was removed.
    pub async fn remove_multi<K>(&self, keys: &[K]) -> Result<(), Status>
    where
        K: AsRef<[u8]>,
    {
        let mut stub = self.stub()?;
        let request = proto::RemoveMultiRequest {
            db_index: self.db_index,
            keys: keys.iter().map(copy_bytes).collect(),
        };
        let response = with_deadline(self.timeout, async move {
            stub.remove_multi(request)
                .await
                .map(tonic::Response::into_inner)
        })
        .await?;
        expect_ok(response.status)
    }

    /// Appends data to a record.
    ///
    /// If there is no existing record, the value is stored bare; otherwise
    /// the stored value becomes `existing + delim + value`.
    pub async fn append(
        &self,
        key: impl AsRef<[u8]>,
        value: impl AsRef<[u8]>,
        delim: impl AsRef<[u8]>,
    ) -> Result<(), Status> {
        let mut stub = self.stub()?;
        let request = proto::AppendRequest {
            db_index: self.db_index,
            key: copy_bytes(key),
            value: copy_bytes(value),
            delim: copy_bytes(delim),
        };
        let response = with_deadline(self.timeout, async move {
            stub.append(request).await.map(tonic::Response::into_inner)
        })
        .await?;
        expect_ok(response.status)
    }

    /// Appends data to multiple records in one round trip.
    pub async fn append_multi<K, V>(
        &self,
        records: &[(K, V)],
        delim: impl AsRef<[u8]>,
    ) -> Result<(), Status>
    where
        K: AsRef<[u8]>,
        V: AsRef<[u8]>,
    {
        let mut stub = self.stub()?;
        let request = proto::AppendMultiRequest {
            db_index: self.db_index,
            records: records
                .iter()
                .map(|(key, value)| proto::Record {
                    key: copy_bytes(key),
                    value: copy_bytes(value),
                })
                .collect(),
            delim: copy_bytes(delim),
        };
        let response = with_deadline(self.timeout, async move {
            stub.append_multi(request)
                .await
                .map(tonic::Response::into_inner)
        })
        .await?;
        expect_ok(response.status)
    }

    /// Compares the state of a record and exchanges it if the condition
    /// meets.
    ///
    /// # Arguments
    /// * `key` - The key of the record.
    /// * `expected` - The expected value, or `None` if no record is expected
    ///   to exist.
    /// * `desired` - The desired value, or `None` to remove the record on
    ///   success.
    ///
    /// When the actual state does not match `expected` the server reports
    /// `INFEASIBLE_ERROR`; that is the expected contended outcome, not a
    /// fault.
    ///
    /// # Example
    /// ```no_run
    /// # use coffer_client::Client;
    /// # async fn example(client: &Client) -> Result<(), coffer_client::Status> {
    /// // Create the record only if it does not exist yet.
    /// client.compare_exchange("lock", None, Some(b"owner-1".as_ref())).await?;
    /// // Release it only while we still own it.
    /// client.compare_exchange("lock", Some(b"owner-1".as_ref()), None).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn compare_exchange(
        &self,
        key: impl AsRef<[u8]>,
        expected: Option<&[u8]>,
        desired: Option<&[u8]>,
    ) -> Result<(), Status> {
        let mut stub = self.stub()?;
        let request = proto::CompareExchangeRequest {
            db_index: self.db_index,
            key: copy_bytes(key),
            expected_existence: expected.is_some(),
            expected_value: expected.map(Bytes::copy_from_slice).unwrap_or_default(),
            desired_existence: desired.is_some(),
            desired_value: desired.map(Bytes::copy_from_slice).unwrap_or_default(),
        };
        let response = with_deadline(self.timeout, async move {
            stub.compare_exchange(request)
                .await
                .map(tonic::Response::into_inner)
        })
        .await?;
        expect_ok(response.status)
    }

    /// Compares the state of multiple records and exchanges them if every
    /// condition meets.
    ///
    /// The whole batch is one atomic check-then-apply on the server: either
    /// all expected conditions hold and all desired writes apply, or nothing
    /// changes and `INFEASIBLE_ERROR` is returned.  Other clients never
    /// observe a partial application.
    pub async fn compare_exchange_multi(
        &self,
        expected: &[(&[u8], Option<&[u8]>)],
        desired: &[(&[u8], Option<&[u8]>)],
    ) -> Result<(), Status> {
        let mut stub = self.stub()?;
        let request = proto::CompareExchangeMultiRequest {
            db_index: self.db_index,
            expected: expected
                .iter()
                .map(|(key, value)| record_state(key, *value))
                .collect(),
            desired: desired
                .iter()
                .map(|(key, value)| record_state(key, *value))
                .collect(),
        };
        let response = with_deadline(self.timeout, async move {
            stub.compare_exchange_multi(request)
                .await
                .map(tonic::Response::into_inner)
        })
        .await?;
        expect_ok(response.status)
    }

    /// Increments the numeric value of a record and returns the result.
    ///
    /// The record value is an 8-byte big-endian signed integer.  An absent
    /// record is seeded with `initial` before `delta` is applied.  Passing
    /// [`INCREMENT_NOOP`] as the delta reports the current value without
    /// modifying the record.
    pub async fn increment(
        &self,
        key: impl AsRef<[u8]>,
        delta: i64,
        initial: i64,
    ) -> Result<i64, Status> {
        let mut stub = self.stub()?;
        let request = proto::IncrementRequest {
            db_index: self.db_index,
            key: copy_bytes(key),
            increment: delta,
            initial,
        };
        let response = with_deadline(self.timeout, async move {
            stub.increment(request)
                .await
                .map(tonic::Response::into_inner)
        })
        .await?;
        expect_ok(response.status)?;
        Ok(response.current)
    }

    /// Changes the key of a record.
    ///
    /// # Arguments
    /// * `old_key` - The current key.  `NOT_FOUND_ERROR` if absent.
    /// * `new_key` - The new key.  `DUPLICATION_ERROR` if present and
    ///   `overwrite` is false.
    /// * `overwrite` - Whether to overwrite an existing record of the new
    ///   key.
    /// * `copying` - Whether to retain the record of the old key.
    ///
    /// The rename is atomic on the server: other clients observe the record
    /// under either the old key or the new key, never neither or both.
    pub async fn rekey(
        &self,
        old_key: impl AsRef<[u8]>,
        new_key: impl AsRef<[u8]>,
        overwrite: bool,
        copying: bool,
    ) -> Result<(), Status> {
        let mut stub = self.stub()?;
        let request = proto::RekeyRequest {
            db_index: self.db_index,
            old_key: copy_bytes(old_key),
            new_key: copy_bytes(new_key),
            overwrite,
            copying,
        };
        let response = with_deadline(self.timeout, async move {
            stub.rekey(request).await.map(tonic::Response::into_inner)
        })
        .await?;
        expect_ok(response.status)
    }

    /// Gets the first record in key order and removes it.
    ///
    /// With `retry_wait` set, an empty store makes the server wait up to
    /// that long for a write notification before reporting
    /// `NOT_FOUND_ERROR`.  Keep the wait below the connection timeout or the
    /// round trip is cut short on the client side.
    pub async fn pop_first(
        &self,
        retry_wait: Option<Duration>,
    ) -> Result<(Bytes, Bytes), Status> {
        let mut stub = self.stub()?;
        let request = proto::PopFirstRequest {
            db_index: self.db_index,
            retry_wait: retry_wait.map_or(0.0, |wait| wait.as_secs_f64()),
        };
        let response = with_deadline(self.timeout, async move {
            stub.pop_first(request)
                .await
                .map(tonic::Response::into_inner)
        })
        .await?;
        expect_ok(response.status)?;
        Ok((response.key, response.value))
    }

    /// Gets the first record as strings and removes it.
    pub async fn pop_first_str(
        &self,
        retry_wait: Option<Duration>,
    ) -> Result<(String, String), Status> {
        let (key, value) = self.pop_first(retry_wait).await?;
        Ok((decode_utf8(key)?, decode_utf8(value)?))
    }

    /// Adds a record keyed by a timestamp.
    ///
    /// The key is the 8-byte big-endian timestamp taken from `wall_time`, or
    /// from the server clock when `None`.  If the generated key collides
    /// with an existing record the server regenerates it and retries, so no
    /// record is ever overwritten.  With `notify` set, waiters blocked in
    /// [`Client::pop_first`] are woken.
    pub async fn push_last(
        &self,
        value: impl AsRef<[u8]>,
        wall_time: Option<SystemTime>,
        notify: bool,
    ) -> Result<(), Status> {
        let mut stub = self.stub()?;
        let request = proto::PushLastRequest {
            db_index: self.db_index,
            value: copy_bytes(value),
            wall_time: wall_time.map_or(-1.0, |at| {
                at.duration_since(UNIX_EPOCH)
                    .map_or(0.0, |since| since.as_secs_f64())
            }),
            notify,
        };
        let response = with_deadline(self.timeout, async move {
            stub.push_last(request)
                .await
                .map(tonic::Response::into_inner)
        })
        .await?;
        expect_ok(response.status)
    }

    /// Gets the number of records.
    pub async fn count(&self) -> Result<i64, Status> {
        let mut stub = self.stub()?;
        let request = proto::CountRequest {
            db_index: self.db_index,
        };
        let response = with_deadline(self.timeout, async move {
            stub.count(request).await.map(tonic::Response::into_inner)
        })
        .await?;
        expect_ok(response.status)?;
        Ok(response.count)
    }

    /// Gets the current file size of the database.
    pub async fn file_size(&self) -> Result<i64, Status> {
        let mut stub = self.stub()?;
        let request = proto::GetFileSizeRequest {
            db_index: self.db_index,
        };
        let response = with_deadline(self.timeout, async move {
            stub.get_file_size(request)
                .await
                .map(tonic::Response::into_inner)
        })
        .await?;
        expect_ok(response.status)?;
        Ok(response.file_size)
    }

    /// Removes all records of the database.
    pub async fn clear(&self) -> Result<(), Status> {
        let mut stub = self.stub()?;
        let request = proto::ClearRequest {
            db_index: self.db_index,
        };
        let response = with_deadline(self.timeout, async move {
            stub.clear(request).await.map(tonic::Response::into_inner)
        })
        .await?;
        expect_ok(response.status)
    }

    /// Rebuilds the entire database.
    ///
    /// Tuning parameters are passed through as opaque name/value pairs that
    /// the server interprets; omitted parameters keep their current values.
    pub async fn rebuild(&self, params: &[(&str, &str)]) -> Result<(), Status> {
        let mut stub = self.stub()?;
        let request = proto::RebuildRequest {
            db_index: self.db_index,
            params: properties(params),
        };
        let response = with_deadline(self.timeout, async move {
            stub.rebuild(request).await.map(tonic::Response::into_inner)
        })
        .await?;
        expect_ok(response.status)
    }

    /// Checks whether the database should be rebuilt.
    pub async fn should_be_rebuilt(&self) -> Result<bool, Status> {
        let mut stub = self.stub()?;
        let request = proto::ShouldBeRebuiltRequest {
            db_index: self.db_index,
        };
        let response = with_deadline(self.timeout, async move {
            stub.should_be_rebuilt(request)
                .await
                .map(tonic::Response::into_inner)
        })
        .await?;
        expect_ok(response.status)?;
        Ok(response.needed)
    }

    /// Synchronizes the database content to the file system.
    ///
    /// # Arguments
    /// * `hard` - True for physical synchronization with the hardware, false
    ///   for logical synchronization with the file system.
    /// * `params` - Opaque name/value pairs interpreted by the server.
    pub async fn synchronize(&self, hard: bool, params: &[(&str, &str)]) -> Result<(), Status> {
        let mut stub = self.stub()?;
        let request = proto::SynchronizeRequest {
            db_index: self.db_index,
            hard,
            params: properties(params),
        };
        let response = with_deadline(self.timeout, async move {
            stub.synchronize(request)
                .await
                .map(tonic::Response::into_inner)
        })
        .await?;
        expect_ok(response.status)
    }

    /// Searches the database for keys matching a pattern.
    ///
    /// Only keys are returned, never values.  `capacity` bounds the number
    /// of matches; zero means unlimited.
    pub async fn search(
        &self,
        mode: SearchMode,
        pattern: impl AsRef<[u8]>,
        capacity: usize,
    ) -> Result<Vec<Bytes>, Status> {
        let mut stub = self.stub()?;
        let request = proto::SearchRequest {
            db_index: self.db_index,
            mode: mode.as_str().to_string(),
            pattern: copy_bytes(pattern),
            capacity: capacity as i32,
        };
        let response = with_deadline(self.timeout, async move {
            stub.search(request).await.map(tonic::Response::into_inner)
        })
        .await?;
        expect_ok(response.status)?;
        Ok(response.matched)
    }

    /// Searches the database and returns matching keys as UTF-8 strings.
    pub async fn search_str(
        &self,
        mode: SearchMode,
        pattern: impl AsRef<[u8]>,
        capacity: usize,
    ) -> Result<Vec<String>, Status> {
        let matched = self.search(mode, pattern, capacity).await?;
        matched.into_iter().map(decode_utf8).collect()
    }

    /// Opens a cursor over the records of the selected database.
    ///
    /// Each cursor runs on its own duplex stream; make one cursor per task
    /// rather than sharing one across tasks.
    pub async fn make_cursor(&self) -> Result<Cursor, Status> {
        let stub = self.stub()?;
        Cursor::open(stub, self.db_index, self.timeout).await
    }

    fn stub(&self) -> Result<CofferDbClient<Channel>, Status> {
        self.stub
            .clone()
            .ok_or_else(|| Status::new(StatusCode::PreconditionError, NOT_OPENED))
    }
}

fn endpoint_for(address: &str) -> Result<Endpoint, Status> {
    let uri = if address.contains("://") {
        address.to_string()
    } else {
        format!("http://{}", address)
    };
    Endpoint::from_shared(uri).map_err(|error| {
        Status::new(StatusCode::NetworkError, error.to_string())
    })
}

fn past_deadline(deadline: Option<time::Instant>) -> bool {
    deadline.map_or(false, |deadline| time::Instant::now() > deadline)
}

fn record_state(key: &[u8], value: Option<&[u8]>) -> proto::RecordState {
    proto::RecordState {
        key: Bytes::copy_from_slice(key),
        existence: value.is_some(),
        value: value.map(Bytes::copy_from_slice).unwrap_or_default(),
    }
}

fn properties(params: &[(&str, &str)]) -> Vec<proto::Property> {
    params
        .iter()
        .map(|(name, value)| proto::Property {
            name: name.to_string(),
            value: value.to_string(),
        })
        .collect()
}
