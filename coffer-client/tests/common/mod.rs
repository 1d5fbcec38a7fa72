//! In-process server used by the integration tests.
//!
//! Backs the full service surface with ordered in-memory maps so the client
//! can be exercised end-to-end over a real gRPC transport on a loopback
//! socket.
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::ops::Bound;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use bytes::Bytes;
use coffer_client::{Client, StatusCode};
use coffer_proto::coffer_db_server::{CofferDb, CofferDbServer};
use coffer_proto::iterate_request::Operation;
use coffer_proto::{self as proto};
use tokio::net::TcpListener;
use tokio::sync::{mpsc, Notify};
use tokio::time::{sleep_until, Instant};
use tokio_stream::wrappers::{ReceiverStream, TcpListenerStream};
use tonic::transport::Server;
use tonic::{Request, Response, Status, Streaming};

fn ok() -> Option<proto::OpStatus> {
    Some(proto::OpStatus::default())
}

fn err(code: StatusCode, message: &str) -> Option<proto::OpStatus> {
    Some(proto::OpStatus {
        code: code as i32,
        message: message.to_string(),
    })
}

fn proto_status(status: &coffer_client::Status) -> Option<proto::OpStatus> {
    Some(proto::OpStatus {
        code: status.code() as i32,
        message: status.message().to_string(),
    })
}

fn contains_subslice(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|window| window == needle)
}

/// Ordered in-memory databases plus the write notification used by blocking
/// pops.
pub struct TestStore {
    dbs: Vec<Mutex<BTreeMap<Bytes, Bytes>>>,
    writes: Notify,
}

impl TestStore {
    fn new(num_dbs: usize) -> TestStore {
        TestStore {
            dbs: (0..num_dbs).map(|_| Mutex::new(BTreeMap::new())).collect(),
            writes: Notify::new(),
        }
    }

    fn db(&self, index: i32) -> Result<MutexGuard<'_, BTreeMap<Bytes, Bytes>>, proto::OpStatus> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.dbs.get(index))
            .map(|slot| slot.lock().unwrap())
            .ok_or_else(|| proto::OpStatus {
                code: StatusCode::InvalidArgumentError as i32,
                message: "db_index is out of range".to_string(),
            })
    }

    fn get(&self, req: proto::GetRequest) -> (Option<proto::OpStatus>, Bytes) {
        let db = match self.db(req.db_index) {
            Ok(db) => db,
            Err(status) => return (Some(status), Bytes::new()),
        };
        match db.get(&req.key) {
            Some(value) => (ok(), value.clone()),
            None => (
                err(StatusCode::NotFoundError, "no such record"),
                Bytes::new(),
            ),
        }
    }

    fn get_multi(&self, req: proto::GetMultiRequest) -> (Option<proto::OpStatus>, Vec<proto::Record>) {
        let db = match self.db(req.db_index) {
            Ok(db) => db,
            Err(status) => return (Some(status), Vec::new()),
        };
        let records = req
            .keys
            .iter()
            .filter_map(|key| {
                db.get(key).map(|value| proto::Record {
                    key: key.clone(),
                    value: value.clone(),
                })
            })
            .collect();
        (ok(), records)
    }

    fn set(&self, req: proto::SetRequest) -> Option<proto::OpStatus> {
        let mut db = match self.db(req.db_index) {
            Ok(db) => db,
            Err(status) => return Some(status),
        };
        if !req.overwrite && db.contains_key(&req.key) {
            return err(StatusCode::DuplicationError, "record duplication");
        }
        db.insert(req.key, req.value);
        ok()
    }

    fn set_multi(&self, req: proto::SetMultiRequest) -> Option<proto::OpStatus> {
        let mut db = match self.db(req.db_index) {
            Ok(db) => db,
            Err(status) => return Some(status),
        };
        let mut aggregate = coffer_client::Status::ok();
        for record in req.records {
            if !req.overwrite && db.contains_key(&record.key) {
                aggregate.join(coffer_client::Status::new(
                    StatusCode::DuplicationError,
                    "record duplication",
                ));
            } else {
                db.insert(record.key, record.value);
            }
        }
        proto_status(&aggregate)
    }

    fn remove(&self, req: proto::RemoveRequest) -> Option<proto::OpStatus> {
        let mut db = match self.db(req.db_index) {
            Ok(db) => db,
            Err(status) => return Some(status),
        };
        match db.remove(&req.key) {
            Some(_) => ok(),
            None => err(StatusCode::NotFoundError, "no such record"),
        }
    }

    fn remove_multi(&self, req: proto::RemoveMultiRequest) -> Option<proto::OpStatus> {
        let mut db = match self.db(req.db_index) {
            Ok(db) => db,
            Err(status) => return Some(status),
        };
        let mut aggregate = coffer_client::Status::ok();
        for key in req.keys {
            if db.remove(&key).is_none() {
                aggregate.join(coffer_client::Status::new(
                    StatusCode::NotFoundError,
                    "no such record",
                ));
            }
        }
        proto_status(&aggregate)
    }

    fn append(&self, req: proto::AppendRequest) -> Option<proto::OpStatus> {
        let mut db = match self.db(req.db_index) {
            Ok(db) => db,
            Err(status) => return Some(status),
        };
        let joined = db.get(&req.key).map(|existing| {
            let mut joined =
                Vec::with_capacity(existing.len() + req.delim.len() + req.value.len());
            joined.extend_from_slice(existing);
            joined.extend_from_slice(&req.delim);
            joined.extend_from_slice(&req.value);
            joined
        });
        match joined {
            Some(joined) => db.insert(req.key, Bytes::from(joined)),
            None => db.insert(req.key, req.value),
        };
        ok()
    }

    fn append_multi(&self, req: proto::AppendMultiRequest) -> Option<proto::OpStatus> {
        for record in req.records {
            let status = self.append(proto::AppendRequest {
                db_index: req.db_index,
                key: record.key,
                value: record.value,
                delim: req.delim.clone(),
            });
            if status.as_ref().map_or(false, |status| status.code != 0) {
                return status;
            }
        }
        ok()
    }

    fn compare_exchange(&self, req: proto::CompareExchangeRequest) -> Option<proto::OpStatus> {
        let mut db = match self.db(req.db_index) {
            Ok(db) => db,
            Err(status) => return Some(status),
        };
        let holds = if req.expected_existence {
            db.get(&req.key)
                .map_or(false, |value| *value == req.expected_value)
        } else {
            !db.contains_key(&req.key)
        };
        if !holds {
            return err(StatusCode::InfeasibleError, "status mismatch");
        }
        if req.desired_existence {
            db.insert(req.key, req.desired_value);
        } else {
            db.remove(&req.key);
        }
        ok()
    }

    fn compare_exchange_multi(
        &self,
        req: proto::CompareExchangeMultiRequest,
    ) -> Option<proto::OpStatus> {
        let mut db = match self.db(req.db_index) {
            Ok(db) => db,
            Err(status) => return Some(status),
        };
        let holds = req.expected.iter().all(|state| {
            if state.existence {
                db.get(&state.key).map_or(false, |value| *value == state.value)
            } else {
                !db.contains_key(&state.key)
            }
        });
        if !holds {
            return err(StatusCode::InfeasibleError, "status mismatch");
        }
        for state in req.desired {
            if state.existence {
                db.insert(state.key, state.value);
            } else {
                db.remove(&state.key);
            }
        }
        ok()
    }

    fn increment(&self, req: proto::IncrementRequest) -> (Option<proto::OpStatus>, i64) {
        let mut db = match self.db(req.db_index) {
            Ok(db) => db,
            Err(status) => return (Some(status), 0),
        };
        let existing = match db.get(&req.key) {
            Some(value) => match <[u8; 8]>::try_from(value.as_ref()) {
                Ok(raw) => Some(i64::from_be_bytes(raw)),
                Err(_) => {
                    return (
                        err(StatusCode::BrokenDataError, "value is not an 8-byte integer"),
                        0,
                    );
                }
            },
            None => None,
        };
        if req.increment == i64::MIN {
            return (ok(), existing.unwrap_or(req.initial));
        }
        let current = existing.unwrap_or(req.initial).wrapping_add(req.increment);
        db.insert(req.key, Bytes::copy_from_slice(&current.to_be_bytes()));
        (ok(), current)
    }

    fn rekey(&self, req: proto::RekeyRequest) -> Option<proto::OpStatus> {
        let mut db = match self.db(req.db_index) {
            Ok(db) => db,
            Err(status) => return Some(status),
        };
        let value = match db.get(&req.old_key) {
            Some(value) => value.clone(),
            None => return err(StatusCode::NotFoundError, "no such record"),
        };
        if req.new_key != req.old_key && !req.overwrite && db.contains_key(&req.new_key) {
            return err(StatusCode::DuplicationError, "record duplication");
        }
        if !req.copying {
            db.remove(&req.old_key);
        }
        db.insert(req.new_key, value);
        ok()
    }

    async fn pop_first(
        &self,
        req: proto::PopFirstRequest,
    ) -> (Option<proto::OpStatus>, Bytes, Bytes) {
        let deadline = Instant::now() + Duration::from_secs_f64(req.retry_wait.max(0.0));
        loop {
            {
                let mut db = match self.db(req.db_index) {
                    Ok(db) => db,
                    Err(status) => return (Some(status), Bytes::new(), Bytes::new()),
                };
                if let Some(key) = db.keys().next().cloned() {
                    let value = db.remove(&key).unwrap();
                    return (ok(), key, value);
                }
            }
            if req.retry_wait <= 0.0 || Instant::now() >= deadline {
                return (
                    err(StatusCode::NotFoundError, "no record"),
                    Bytes::new(),
                    Bytes::new(),
                );
            }
            tokio::select! {
                _ = self.writes.notified() => {}
                _ = sleep_until(deadline) => {}
            }
        }
    }

    fn push_last(&self, req: proto::PushLastRequest) -> Option<proto::OpStatus> {
        let status = {
            let mut db = match self.db(req.db_index) {
                Ok(db) => db,
                Err(status) => return Some(status),
            };
            let base = if req.wall_time < 0.0 {
                SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .unwrap()
                    .as_nanos() as u64
            } else {
                (req.wall_time * 1_000_000_000.0) as u64
            };
            let mut stamp = base;
            loop {
                let key = Bytes::copy_from_slice(&stamp.to_be_bytes());
                if !db.contains_key(&key) {
                    db.insert(key, req.value.clone());
                    break;
                }
                stamp += 1;
            }
            ok()
        };
        if req.notify {
            self.writes.notify_one();
        }
        status
    }

    fn count(&self, db_index: i32) -> (Option<proto::OpStatus>, i64) {
        match self.db(db_index) {
            Ok(db) => (ok(), db.len() as i64),
            Err(status) => (Some(status), 0),
        }
    }

    fn file_size(&self, db_index: i32) -> (Option<proto::OpStatus>, i64) {
        match self.db(db_index) {
            Ok(db) => (
                ok(),
                db.iter().map(|(key, value)| (key.len() + value.len()) as i64).sum(),
            ),
            Err(status) => (Some(status), 0),
        }
    }

    fn clear(&self, db_index: i32) -> Option<proto::OpStatus> {
        match self.db(db_index) {
            Ok(mut db) => {
                db.clear();
                ok()
            }
            Err(status) => Some(status),
        }
    }

    fn search(&self, req: proto::SearchRequest) -> (Option<proto::OpStatus>, Vec<Bytes>) {
        let db = match self.db(req.db_index) {
            Ok(db) => db,
            Err(status) => return (Some(status), Vec::new()),
        };
        let mut matched = Vec::new();
        for key in db.keys() {
            let hit = match req.mode.as_str() {
                "contain" => contains_subslice(key, &req.pattern),
                "begin" => key.starts_with(req.pattern.as_ref()),
                "end" => key.ends_with(req.pattern.as_ref()),
                _ => {
                    return (
                        err(StatusCode::NotImplementedError, "unsupported search mode"),
                        Vec::new(),
                    );
                }
            };
            if hit {
                matched.push(key.clone());
                if req.capacity > 0 && matched.len() >= req.capacity as usize {
                    break;
                }
            }
        }
        (ok(), matched)
    }

    fn iterate_op(
        &self,
        position: &mut Option<Bytes>,
        req: proto::IterateRequest,
    ) -> proto::IterateResponse {
        let mut response = proto::IterateResponse::default();
        let mut db = match self.db(req.db_index) {
            Ok(db) => db,
            Err(status) => {
                response.status = Some(status);
                return response;
            }
        };
        let operation = Operation::try_from(req.operation).unwrap_or(Operation::None);
        match operation {
            Operation::First => {
                *position = db.keys().next().cloned();
                response.status = ok();
            }
            Operation::Last => {
                *position = db.keys().next_back().cloned();
                response.status = ok();
            }
            Operation::Jump => {
                *position = db
                    .range(req.key.clone()..)
                    .next()
                    .map(|(key, _)| key.clone());
                response.status = ok();
            }
            Operation::JumpLower => {
                let bound = if req.jump_inclusive {
                    Bound::Included(req.key.clone())
                } else {
                    Bound::Excluded(req.key.clone())
                };
                *position = db
                    .range((Bound::Unbounded, bound))
                    .next_back()
                    .map(|(key, _)| key.clone());
                response.status = ok();
            }
            Operation::JumpUpper => {
                let bound = if req.jump_inclusive {
                    Bound::Included(req.key.clone())
                } else {
                    Bound::Excluded(req.key.clone())
                };
                *position = db
                    .range((bound, Bound::Unbounded))
                    .next()
                    .map(|(key, _)| key.clone());
                response.status = ok();
            }
            Operation::Next => match position.clone() {
                Some(current) => {
                    *position = db
                        .range((Bound::Excluded(current), Bound::Unbounded))
                        .next()
                        .map(|(key, _)| key.clone());
                    response.status = ok();
                }
                None => {
                    response.status = err(StatusCode::NotFoundError, "no current record");
                }
            },
            Operation::Previous => match position.clone() {
                Some(current) => {
                    *position = db
                        .range((Bound::Unbounded, Bound::Excluded(current)))
                        .next_back()
                        .map(|(key, _)| key.clone());
                    response.status = ok();
                }
                None => {
                    response.status = err(StatusCode::NotFoundError, "no current record");
                }
            },
            Operation::Get => match current_record(&db, position) {
                Some((key, value)) => {
                    if !req.omit_key {
                        response.key = key;
                    }
                    if !req.omit_value {
                        response.value = value;
                    }
                    response.status = ok();
                }
                None => {
                    response.status = err(StatusCode::NotFoundError, "no current record");
                }
            },
            Operation::Set => match current_record(&db, position) {
                Some((key, _)) => {
                    db.insert(key, req.value.clone());
                    response.status = ok();
                }
                None => {
                    response.status = err(StatusCode::NotFoundError, "no current record");
                }
            },
            Operation::Remove => match current_record(&db, position) {
                Some((key, _)) => {
                    db.remove(&key);
                    *position = db
                        .range((Bound::Excluded(key), Bound::Unbounded))
                        .next()
                        .map(|(next, _)| next.clone());
                    response.status = ok();
                }
                None => {
                    response.status = err(StatusCode::NotFoundError, "no current record");
                }
            },
            Operation::Step => match current_record(&db, position) {
                Some((key, value)) => {
                    *position = db
                        .range((Bound::Excluded(key.clone()), Bound::Unbounded))
                        .next()
                        .map(|(next, _)| next.clone());
                    response.key = key;
                    response.value = value;
                    response.status = ok();
                }
                None => {
                    response.status = err(StatusCode::NotFoundError, "no current record");
                }
            },
            Operation::None => {
                response.status = err(StatusCode::InvalidArgumentError, "unknown operation");
            }
        }
        response
    }
}

fn current_record(db: &BTreeMap<Bytes, Bytes>, position: &Option<Bytes>) -> Option<(Bytes, Bytes)> {
    let key = position.as_ref()?;
    let value = db.get(key)?;
    Some((key.clone(), value.clone()))
}

/// gRPC service wrapping a [`TestStore`].
pub struct TestService {
    store: Arc<TestStore>,
}

impl TestService {
    pub fn new(num_dbs: usize) -> TestService {
        TestService {
            store: Arc::new(TestStore::new(num_dbs)),
        }
    }
}

#[tonic::async_trait]
impl CofferDb for TestService {
    async fn echo(
        &self,
        request: Request<proto::EchoRequest>,
    ) -> Result<Response<proto::EchoResponse>, Status> {
        let echo = request.into_inner().message;
        Ok(Response::new(proto::EchoResponse { status: ok(), echo }))
    }

    async fn inspect(
        &self,
        request: Request<proto::InspectRequest>,
    ) -> Result<Response<proto::InspectResponse>, Status> {
        let req = request.into_inner();
        if req.db_index < 0 {
            let properties = self
                .store
                .dbs
                .iter()
                .enumerate()
                .map(|(index, slot)| proto::Property {
                    name: format!("db_{}_count", index),
                    value: slot.lock().unwrap().len().to_string(),
                })
                .collect();
            return Ok(Response::new(proto::InspectResponse {
                status: ok(),
                properties,
            }));
        }
        let response = match self.store.db(req.db_index) {
            Ok(db) => proto::InspectResponse {
                status: ok(),
                properties: vec![
                    proto::Property {
                        name: "class".to_string(),
                        value: "tree".to_string(),
                    },
                    proto::Property {
                        name: "num_records".to_string(),
                        value: db.len().to_string(),
                    },
                ],
            },
            Err(status) => proto::InspectResponse {
                status: Some(status),
                properties: Vec::new(),
            },
        };
        Ok(Response::new(response))
    }

    async fn get(
        &self,
        request: Request<proto::GetRequest>,
    ) -> Result<Response<proto::GetResponse>, Status> {
        let (status, value) = self.store.get(request.into_inner());
        Ok(Response::new(proto::GetResponse { status, value }))
    }

    async fn get_multi(
        &self,
        request: Request<proto::GetMultiRequest>,
    ) -> Result<Response<proto::GetMultiResponse>, Status> {
        let (status, records) = self.store.get_multi(request.into_inner());
        Ok(Response::new(proto::GetMultiResponse { status, records }))
    }

    async fn set(
        &self,
        request: Request<proto::SetRequest>,
    ) -> Result<Response<proto::SetResponse>, Status> {
        let status = self.store.set(request.into_inner());
        Ok(Response::new(proto::SetResponse { status }))
    }

    async fn set_multi(
        &self,
        request: Request<proto::SetMultiRequest>,
    ) -> Result<Response<proto::SetMultiResponse>, Status> {
        let status = self.store.set_multi(request.into_inner());
        Ok(Response::new(proto::SetMultiResponse { status }))
    }

    async fn remove(
        &self,
        request: Request<proto::RemoveRequest>,
    ) -> Result<Response<proto::RemoveResponse>, Status> {
        let status = self.store.remove(request.into_inner());
        Ok(Response::new(proto::RemoveResponse { status }))
    }

    async fn remove_multi(
        &self,
        request: Request<proto::RemoveMultiRequest>,
    ) -> Result<Response<proto::RemoveMultiResponse>, Status> {
        let status = self.store.remove_multi(request.into_inner());
        Ok(Response::new(proto::RemoveMultiResponse { status }))
    }

    async fn append(
        &self,
        request: Request<proto::AppendRequest>,
    ) -> Result<Response<proto::AppendResponse>, Status> {
        let status = self.store.append(request.into_inner());
        Ok(Response::new(proto::AppendResponse { status }))
    }

    async fn append_multi(
        &self,
        request: Request<proto::AppendMultiRequest>,
    ) -> Result<Response<proto::AppendMultiResponse>, Status> {
        let status = self.store.append_multi(request.into_inner());
        Ok(Response::new(proto::AppendMultiResponse { status }))
    }

    async fn compare_exchange(
        &self,
        request: Request<proto::CompareExchangeRequest>,
    ) -> Result<Response<proto::CompareExchangeResponse>, Status> {
        let status = self.store.compare_exchange(request.into_inner());
        Ok(Response::new(proto::CompareExchangeResponse { status }))
    }

    async fn compare_exchange_multi(
        &self,
        request: Request<proto::CompareExchangeMultiRequest>,
    ) -> Result<Response<proto::CompareExchangeMultiResponse>, Status> {
        let status = self.store.compare_exchange_multi(request.into_inner());
        Ok(Response::new(proto::CompareExchangeMultiResponse { status }))
    }

    async fn increment(
        &self,
        request: Request<proto::IncrementRequest>,
    ) -> Result<Response<proto::IncrementResponse>, Status> {
        let (status, current) = self.store.increment(request.into_inner());
        Ok(Response::new(proto::IncrementResponse { status, current }))
    }

    async fn rekey(
        &self,
        request: Request<proto::RekeyRequest>,
    ) -> Result<Response<proto::RekeyResponse>, Status> {
        let status = self.store.rekey(request.into_inner());
        Ok(Response::new(proto::RekeyResponse { status }))
    }

    async fn pop_first(
        &self,
        request: Request<proto::PopFirstRequest>,
    ) -> Result<Response<proto::PopFirstResponse>, Status> {
        let (status, key, value) = self.store.pop_first(request.into_inner()).await;
        Ok(Response::new(proto::PopFirstResponse { status, key, value }))
    }

    async fn push_last(
        &self,
        request: Request<proto::PushLastRequest>,
    ) -> Result<Response<proto::PushLastResponse>, Status> {
        let status = self.store.push_last(request.into_inner());
        Ok(Response::new(proto::PushLastResponse { status }))
    }

    async fn count(
        &self,
        request: Request<proto::CountRequest>,
    ) -> Result<Response<proto::CountResponse>, Status> {
        let (status, count) = self.store.count(request.into_inner().db_index);
        Ok(Response::new(proto::CountResponse { status, count }))
    }

    async fn get_file_size(
        &self,
        request: Request<proto::GetFileSizeRequest>,
    ) -> Result<Response<proto::GetFileSizeResponse>, Status> {
        let (status, file_size) = self.store.file_size(request.into_inner().db_index);
        Ok(Response::new(proto::GetFileSizeResponse { status, file_size }))
    }

    async fn clear(
        &self,
        request: Request<proto::ClearRequest>,
    ) -> Result<Response<proto::ClearResponse>, Status> {
        let status = self.store.clear(request.into_inner().db_index);
        Ok(Response::new(proto::ClearResponse { status }))
    }

    async fn rebuild(
        &self,
        _request: Request<proto::RebuildRequest>,
    ) -> Result<Response<proto::RebuildResponse>, Status> {
        Ok(Response::new(proto::RebuildResponse { status: ok() }))
    }

    async fn should_be_rebuilt(
        &self,
        _request: Request<proto::ShouldBeRebuiltRequest>,
    ) -> Result<Response<proto::ShouldBeRebuiltResponse>, Status> {
        Ok(Response::new(proto::ShouldBeRebuiltResponse {
            status: ok(),
            needed: false,
        }))
    }

    async fn synchronize(
        &self,
        _request: Request<proto::SynchronizeRequest>,
    ) -> Result<Response<proto::SynchronizeResponse>, Status> {
        Ok(Response::new(proto::SynchronizeResponse { status: ok() }))
    }

    async fn search(
        &self,
        request: Request<proto::SearchRequest>,
    ) -> Result<Response<proto::SearchResponse>, Status> {
        let (status, matched) = self.store.search(request.into_inner());
        Ok(Response::new(proto::SearchResponse { status, matched }))
    }

    type IterateStream = ReceiverStream<Result<proto::IterateResponse, Status>>;

    async fn iterate(
        &self,
        request: Request<Streaming<proto::IterateRequest>>,
    ) -> Result<Response<Self::IterateStream>, Status> {
        let mut inbound = request.into_inner();
        let store = Arc::clone(&self.store);
        let (tx, rx) = mpsc::channel(4);
        tokio::spawn(async move {
            let mut position: Option<Bytes> = None;
            loop {
                let req = match inbound.message().await {
                    Ok(Some(req)) => req,
                    _ => break,
                };
                let response = store.iterate_op(&mut position, req);
                if tx.send(Ok(response)).await.is_err() {
                    break;
                }
            }
        });
        Ok(Response::new(ReceiverStream::new(rx)))
    }
}

/// Starts a server on an ephemeral loopback port and returns its address.
pub async fn spawn_server(num_dbs: usize) -> SocketAddr {
    init_tracing();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let service = TestService::new(num_dbs);
    tokio::spawn(async move {
        Server::builder()
            .add_service(CofferDbServer::new(service))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });
    addr
}

/// Connects a client to a test server with a generous operation timeout.
pub async fn connect_client(addr: SocketAddr) -> Client {
    let mut client = Client::new();
    client
        .connect(&addr.to_string(), Some(Duration::from_secs(30)))
        .await
        .unwrap();
    client
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
