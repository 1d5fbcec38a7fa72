/// Status of an operation, carried in every response message.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OpStatus {
    #[prost(int32, tag = "1")]
    pub code: i32,
    #[prost(string, tag = "2")]
    pub message: ::prost::alloc::string::String,
}
/// One key/value record.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Record {
    #[prost(bytes = "bytes", tag = "1")]
    pub key: ::prost::bytes::Bytes,
    #[prost(bytes = "bytes", tag = "2")]
    pub value: ::prost::bytes::Bytes,
}
/// A named textual property, used for inspection results and tuning
/// parameters.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Property {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub value: ::prost::alloc::string::String,
}
/// Expected or desired state of one record in a multi-record exchange.
/// If `existence` is false the record is expected to be (or becomes) absent
/// and `value` is ignored.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RecordState {
    #[prost(bytes = "bytes", tag = "1")]
    pub key: ::prost::bytes::Bytes,
    #[prost(bool, tag = "2")]
    pub existence: bool,
    #[prost(bytes = "bytes", tag = "3")]
    pub value: ::prost::bytes::Bytes,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EchoRequest {
    #[prost(string, tag = "1")]
    pub message: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EchoResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<OpStatus>,
    #[prost(string, tag = "2")]
    pub echo: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InspectRequest {
    #[prost(int32, tag = "1")]
    pub db_index: i32,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InspectResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<OpStatus>,
    #[prost(message, repeated, tag = "2")]
    pub properties: ::prost::alloc::vec::Vec<Property>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetRequest {
    #[prost(int32, tag = "1")]
    pub db_index: i32,
    #[prost(bytes = "bytes", tag = "2")]
    pub key: ::prost::bytes::Bytes,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<OpStatus>,
    #[prost(bytes = "bytes", tag = "2")]
    pub value: ::prost::bytes::Bytes,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetMultiRequest {
    #[prost(int32, tag = "1")]
    pub db_index: i32,
    #[prost(bytes = "bytes", repeated, tag = "2")]
    pub keys: ::prost::alloc::vec::Vec<::prost::bytes::Bytes>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetMultiResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<OpStatus>,
    #[prost(message, repeated, tag = "2")]
    pub records: ::prost::alloc::vec::Vec<Record>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetRequest {
    #[prost(int32, tag = "1")]
    pub db_index: i32,
    #[prost(bytes = "bytes", tag = "2")]
    pub key: ::prost::bytes::Bytes,
    #[prost(bytes = "bytes", tag = "3")]
    pub value: ::prost::bytes::Bytes,
    #[prost(bool, tag = "4")]
    pub overwrite: bool,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<OpStatus>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetMultiRequest {
    #[prost(int32, tag = "1")]
    pub db_index: i32,
    #[prost(message, repeated, tag = "2")]
    pub records: ::prost::alloc::vec::Vec<Record>,
    #[prost(bool, tag = "3")]
    pub overwrite: bool,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetMultiResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<OpStatus>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RemoveRequest {
    #[prost(int32, tag = "1")]
    pub db_index: i32,
    #[prost(bytes = "bytes", tag = "2")]
    pub key: ::prost::bytes::Bytes,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RemoveResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<OpStatus>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RemoveMultiRequest {
    #[prost(int32, tag = "1")]
    pub db_index: i32,
    #[prost(bytes = "bytes", repeated, tag = "2")]
    pub keys: ::prost::alloc::vec::Vec<::prost::bytes::Bytes>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RemoveMultiResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<OpStatus>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AppendRequest {
    #[prost(int32, tag = "1")]
    pub db_index: i32,
    #[prost(bytes = "bytes", tag = "2")]
    pub key: ::prost::bytes::Bytes,
    #[prost(bytes = "bytes", tag = "3")]
    pub value: ::prost::bytes::Bytes,
    #[prost(bytes = "bytes", tag = "4")]
    pub delim: ::prost::bytes::Bytes,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AppendResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<OpStatus>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AppendMultiRequest {
    #[prost(int32, tag = "1")]
    pub db_index: i32,
    #[prost(message, repeated, tag = "2")]
    pub records: ::prost::alloc::vec::Vec<Record>,
    #[prost(bytes = "bytes", tag = "3")]
    pub delim: ::prost::bytes::Bytes,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AppendMultiResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<OpStatus>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CompareExchangeRequest {
    #[prost(int32, tag = "1")]
    pub db_index: i32,
    #[prost(bytes = "bytes", tag = "2")]
    pub key: ::prost::bytes::Bytes,
    #[prost(bool, tag = "3")]
    pub expected_existence: bool,
    #[prost(bytes = "bytes", tag = "4")]
    pub expected_value: ::prost::bytes::Bytes,
    #[prost(bool, tag = "5")]
    pub desired_existence: bool,
    #[prost(bytes = "bytes", tag = "6")]
    pub desired_value: ::prost::bytes::Bytes,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CompareExchangeResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<OpStatus>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CompareExchangeMultiRequest {
    #[prost(int32, tag = "1")]
    pub db_index: i32,
    #[prost(message, repeated, tag = "2")]
    pub expected: ::prost::alloc::vec::Vec<RecordState>,
    #[prost(message, repeated, tag = "3")]
    pub desired: ::prost::alloc::vec::Vec<RecordState>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CompareExchangeMultiResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<OpStatus>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IncrementRequest {
    #[prost(int32, tag = "1")]
    pub db_index: i32,
    #[prost(bytes = "bytes", tag = "2")]
    pub key: ::prost::bytes::Bytes,
    #[prost(int64, tag = "3")]
    pub increment: i64,
    #[prost(int64, tag = "4")]
    pub initial: i64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IncrementResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<OpStatus>,
    #[prost(int64, tag = "2")]
    pub current: i64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RekeyRequest {
    #[prost(int32, tag = "1")]
    pub db_index: i32,
    #[prost(bytes = "bytes", tag = "2")]
    pub old_key: ::prost::bytes::Bytes,
    #[prost(bytes = "bytes", tag = "3")]
    pub new_key: ::prost::bytes::Bytes,
    #[prost(bool, tag = "4")]
    pub overwrite: bool,
    #[prost(bool, tag = "5")]
    pub copying: bool,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RekeyResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<OpStatus>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PopFirstRequest {
    #[prost(int32, tag = "1")]
    pub db_index: i32,
    /// Maximum time in seconds to wait for a write notification when the
    /// store is empty.  Zero or negative means no waiting.
    #[prost(double, tag = "2")]
    pub retry_wait: f64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PopFirstResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<OpStatus>,
    #[prost(bytes = "bytes", tag = "2")]
    pub key: ::prost::bytes::Bytes,
    #[prost(bytes = "bytes", tag = "3")]
    pub value: ::prost::bytes::Bytes,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PushLastRequest {
    #[prost(int32, tag = "1")]
    pub db_index: i32,
    #[prost(bytes = "bytes", tag = "2")]
    pub value: ::prost::bytes::Bytes,
    /// Wall time in seconds used to generate the record key.  Negative means
    /// the server clock is used.
    #[prost(double, tag = "3")]
    pub wall_time: f64,
    #[prost(bool, tag = "4")]
    pub notify: bool,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PushLastResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<OpStatus>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CountRequest {
    #[prost(int32, tag = "1")]
    pub db_index: i32,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CountResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<OpStatus>,
    #[prost(int64, tag = "2")]
    pub count: i64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFileSizeRequest {
    #[prost(int32, tag = "1")]
    pub db_index: i32,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFileSizeResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<OpStatus>,
    #[prost(int64, tag = "2")]
    pub file_size: i64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClearRequest {
    #[prost(int32, tag = "1")]
    pub db_index: i32,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClearResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<OpStatus>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RebuildRequest {
    #[prost(int32, tag = "1")]
    pub db_index: i32,
    #[prost(message, repeated, tag = "2")]
    pub params: ::prost::alloc::vec::Vec<Property>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RebuildResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<OpStatus>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ShouldBeRebuiltRequest {
    #[prost(int32, tag = "1")]
    pub db_index: i32,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ShouldBeRebuiltResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<OpStatus>,
    #[prost(bool, tag = "2")]
    pub needed: bool,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SynchronizeRequest {
    #[prost(int32, tag = "1")]
    pub db_index: i32,
    #[prost(bool, tag = "2")]
    pub hard: bool,
    #[prost(message, repeated, tag = "3")]
    pub params: ::prost::alloc::vec::Vec<Property>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SynchronizeResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<OpStatus>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchRequest {
    #[prost(int32, tag = "1")]
    pub db_index: i32,
    #[prost(string, tag = "2")]
    pub mode: ::prost::alloc::string::String,
    #[prost(bytes = "bytes", tag = "3")]
    pub pattern: ::prost::bytes::Bytes,
    #[prost(int32, tag = "4")]
    pub capacity: i32,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<OpStatus>,
    #[prost(bytes = "bytes", repeated, tag = "2")]
    pub matched: ::prost::alloc::vec::Vec<::prost::bytes::Bytes>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IterateRequest {
    #[prost(int32, tag = "1")]
    pub db_index: i32,
    #[prost(enumeration = "iterate_request::Operation", tag = "2")]
    pub operation: i32,
    #[prost(bytes = "bytes", tag = "3")]
    pub key: ::prost::bytes::Bytes,
    #[prost(bytes = "bytes", tag = "4")]
    pub value: ::prost::bytes::Bytes,
    #[prost(bool, tag = "5")]
    pub jump_inclusive: bool,
    #[prost(bool, tag = "6")]
    pub omit_key: bool,
    #[prost(bool, tag = "7")]
    pub omit_value: bool,
}
/// Nested message and enum types in `IterateRequest`.
pub mod iterate_request {
    #[derive(
        Clone,
        Copy,
        Debug,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        ::prost::Enumeration
    )]
    #[repr(i32)]
    pub enum Operation {
        None = 0,
        First = 1,
        Last = 2,
        Jump = 3,
        JumpLower = 4,
        JumpUpper = 5,
        Next = 6,
        Previous = 7,
        Get = 8,
        Set = 9,
        Remove = 10,
        Step = 11,
    }
    impl Operation {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Operation::None => "NONE",
                Operation::First => "FIRST",
                Operation::Last => "LAST",
                Operation::Jump => "JUMP",
                Operation::JumpLower => "JUMP_LOWER",
                Operation::JumpUpper => "JUMP_UPPER",
                Operation::Next => "NEXT",
                Operation::Previous => "PREVIOUS",
                Operation::Get => "GET",
                Operation::Set => "SET",
                Operation::Remove => "REMOVE",
                Operation::Step => "STEP",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "NONE" => Some(Self::None),
                "FIRST" => Some(Self::First),
                "LAST" => Some(Self::Last),
                "JUMP" => Some(Self::Jump),
                "JUMP_LOWER" => Some(Self::JumpLower),
                "JUMP_UPPER" => Some(Self::JumpUpper),
                "NEXT" => Some(Self::Next),
                "PREVIOUS" => Some(Self::Previous),
                "GET" => Some(Self::Get),
                "SET" => Some(Self::Set),
                "REMOVE" => Some(Self::Remove),
                "STEP" => Some(Self::Step),
                _ => None,
            }
        }
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IterateResponse {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<OpStatus>,
    #[prost(bytes = "bytes", tag = "2")]
    pub key: ::prost::bytes::Bytes,
    #[prost(bytes = "bytes", tag = "3")]
    pub value: ::prost::bytes::Bytes,
}
/// Generated client implementations.
pub mod coffer_db_client {
    #![allow(unused_variables, dead_code, missing_docs, clippy::let_unit_value)]
    use tonic::codegen::http::Uri;
    use tonic::codegen::*;
    #[derive(Debug, Clone)]
    pub struct CofferDbClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl CofferDbClient<tonic::transport::Channel> {
        /// Attempt to create a new client by connecting to a given endpoint.
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }
    impl<T> CofferDbClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_origin(inner: T, origin: Uri) -> Self {
            let inner = tonic::client::Grpc::with_origin(inner, origin);
            Self { inner }
        }
        pub fn with_interceptor<F>(
            inner: T,
            interceptor: F,
        ) -> CofferDbClient<InterceptedService<T, F>>
        where
            F: tonic::service::Interceptor,
            T::ResponseBody: Default,
            T: tonic::codegen::Service<
                http::Request<tonic::body::BoxBody>,
                Response = http::Response<
                    <T as tonic::client::GrpcService<tonic::body::BoxBody>>::ResponseBody,
                >,
            >,
            <T as tonic::codegen::Service<
                http::Request<tonic::body::BoxBody>,
            >>::Error: Into<StdError> + Send + Sync,
        {
            CofferDbClient::new(InterceptedService::new(inner, interceptor))
        }
        /// Compress requests with the given encoding.
        ///
        /// This requires the server to support it otherwise it might respond with an
        /// error.
        #[must_use]
        pub fn send_compressed(mut self, encoding: tonic::codec::CompressionEncoding) -> Self {
            self.inner = self.inner.send_compressed(encoding);
            self
        }
        /// Enable decompressing responses.
        #[must_use]
        pub fn accept_compressed(mut self, encoding: tonic::codec::CompressionEncoding) -> Self {
            self.inner = self.inner.accept_compressed(encoding);
            self
        }
        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_decoding_message_size(limit);
            self
        }
        /// Limits the maximum size of an encoded message.
        ///
        /// Default: `usize::MAX`
        #[must_use]
        pub fn max_encoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_encoding_message_size(limit);
            self
        }
        pub async fn echo(
            &mut self,
            request: impl tonic::IntoRequest<super::EchoRequest>,
        ) -> std::result::Result<tonic::Response<super::EchoResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/coffer.CofferDb/Echo");
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new("coffer.CofferDb", "Echo"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn inspect(
            &mut self,
            request: impl tonic::IntoRequest<super::InspectRequest>,
        ) -> std::result::Result<tonic::Response<super::InspectResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/coffer.CofferDb/Inspect");
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new("coffer.CofferDb", "Inspect"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn get(
            &mut self,
            request: impl tonic::IntoRequest<super::GetRequest>,
        ) -> std::result::Result<tonic::Response<super::GetResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/coffer.CofferDb/Get");
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new("coffer.CofferDb", "Get"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn get_multi(
            &mut self,
            request: impl tonic::IntoRequest<super::GetMultiRequest>,
        ) -> std::result::Result<tonic::Response<super::GetMultiResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/coffer.CofferDb/GetMulti");
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new("coffer.CofferDb", "GetMulti"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn set(
            &mut self,
            request: impl tonic::IntoRequest<super::SetRequest>,
        ) -> std::result::Result<tonic::Response<super::SetResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/coffer.CofferDb/Set");
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new("coffer.CofferDb", "Set"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn set_multi(
            &mut self,
            request: impl tonic::IntoRequest<super::SetMultiRequest>,
        ) -> std::result::Result<tonic::Response<super::SetMultiResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/coffer.CofferDb/SetMulti");
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new("coffer.CofferDb", "SetMulti"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn remove(
            &mut self,
            request: impl tonic::IntoRequest<super::RemoveRequest>,
        ) -> std::result::Result<tonic::Response<super::RemoveResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/coffer.CofferDb/Remove");
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new("coffer.CofferDb", "Remove"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn remove_multi(
            &mut self,
            request: impl tonic::IntoRequest<super::RemoveMultiRequest>,
        ) -> std::result::Result<
            tonic::Response<super::RemoveMultiResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/coffer.CofferDb/RemoveMulti");
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new("coffer.CofferDb", "RemoveMulti"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn append(
            &mut self,
            request: impl tonic::IntoRequest<super::AppendRequest>,
        ) -> std::result::Result<tonic::Response<super::AppendResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/coffer.CofferDb/Append");
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new("coffer.CofferDb", "Append"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn append_multi(
            &mut self,
            request: impl tonic::IntoRequest<super::AppendMultiRequest>,
        ) -> std::result::Result<
            tonic::Response<super::AppendMultiResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/coffer.CofferDb/AppendMulti");
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new("coffer.CofferDb", "AppendMulti"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn compare_exchange(
            &mut self,
            request: impl tonic::IntoRequest<super::CompareExchangeRequest>,
        ) -> std::result::Result<
            tonic::Response<super::CompareExchangeResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/coffer.CofferDb/CompareExchange",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("coffer.CofferDb", "CompareExchange"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn compare_exchange_multi(
            &mut self,
            request: impl tonic::IntoRequest<super::CompareExchangeMultiRequest>,
        ) -> std::result::Result<
            tonic::Response<super::CompareExchangeMultiResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/coffer.CofferDb/CompareExchangeMulti",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("coffer.CofferDb", "CompareExchangeMulti"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn increment(
            &mut self,
            request: impl tonic::IntoRequest<super::IncrementRequest>,
        ) -> std::result::Result<
            tonic::Response<super::IncrementResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/coffer.CofferDb/Increment");
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new("coffer.CofferDb", "Increment"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn rekey(
            &mut self,
            request: impl tonic::IntoRequest<super::RekeyRequest>,
        ) -> std::result::Result<tonic::Response<super::RekeyResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/coffer.CofferDb/Rekey");
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new("coffer.CofferDb", "Rekey"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn pop_first(
            &mut self,
            request: impl tonic::IntoRequest<super::PopFirstRequest>,
        ) -> std::result::Result<tonic::Response<super::PopFirstResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/coffer.CofferDb/PopFirst");
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new("coffer.CofferDb", "PopFirst"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn push_last(
            &mut self,
            request: impl tonic::IntoRequest<super::PushLastRequest>,
        ) -> std::result::Result<tonic::Response<super::PushLastResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/coffer.CofferDb/PushLast");
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new("coffer.CofferDb", "PushLast"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn count(
            &mut self,
            request: impl tonic::IntoRequest<super::CountRequest>,
        ) -> std::result::Result<tonic::Response<super::CountResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/coffer.CofferDb/Count");
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new("coffer.CofferDb", "Count"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn get_file_size(
            &mut self,
            request: impl tonic::IntoRequest<super::GetFileSizeRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetFileSizeResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/coffer.CofferDb/GetFileSize");
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new("coffer.CofferDb", "GetFileSize"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn clear(
            &mut self,
            request: impl tonic::IntoRequest<super::ClearRequest>,
        ) -> std::result::Result<tonic::Response<super::ClearResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/coffer.CofferDb/Clear");
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new("coffer.CofferDb", "Clear"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn rebuild(
            &mut self,
            request: impl tonic::IntoRequest<super::RebuildRequest>,
        ) -> std::result::Result<tonic::Response<super::RebuildResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/coffer.CofferDb/Rebuild");
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new("coffer.CofferDb", "Rebuild"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn should_be_rebuilt(
            &mut self,
            request: impl tonic::IntoRequest<super::ShouldBeRebuiltRequest>,
        ) -> std::result::Result<
            tonic::Response<super::ShouldBeRebuiltResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/coffer.CofferDb/ShouldBeRebuilt",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("coffer.CofferDb", "ShouldBeRebuilt"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn synchronize(
            &mut self,
            request: impl tonic::IntoRequest<super::SynchronizeRequest>,
        ) -> std::result::Result<
            tonic::Response<super::SynchronizeResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/coffer.CofferDb/Synchronize");
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new("coffer.CofferDb", "Synchronize"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn search(
            &mut self,
            request: impl tonic::IntoRequest<super::SearchRequest>,
        ) -> std::result::Result<tonic::Response<super::SearchResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/coffer.CofferDb/Search");
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new("coffer.CofferDb", "Search"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn iterate(
            &mut self,
            request: impl tonic::IntoStreamingRequest<Message = super::IterateRequest>,
        ) -> std::result::Result<
            tonic::Response<tonic::codec::Streaming<super::IterateResponse>>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/coffer.CofferDb/Iterate");
            let mut req = request.into_streaming_request();
            req.extensions_mut().insert(GrpcMethod::new("coffer.CofferDb", "Iterate"));
            self.inner.streaming(req, path, codec).await
        }
    }
}
/// Generated server implementations.
pub mod coffer_db_server {
    #![allow(unused_variables, dead_code, missing_docs, clippy::let_unit_value)]
    use tonic::codegen::*;
    /// Generated trait containing gRPC methods that should be implemented for use with CofferDbServer.
    #[async_trait]
    pub trait CofferDb: Send + Sync + 'static {
        async fn echo(
            &self,
            request: tonic::Request<super::EchoRequest>,
        ) -> std::result::Result<tonic::Response<super::EchoResponse>, tonic::Status>;
        async fn inspect(
            &self,
            request: tonic::Request<super::InspectRequest>,
        ) -> std::result::Result<tonic::Response<super::InspectResponse>, tonic::Status>;
        async fn get(
            &self,
            request: tonic::Request<super::GetRequest>,
        ) -> std::result::Result<tonic::Response<super::GetResponse>, tonic::Status>;
        async fn get_multi(
            &self,
            request: tonic::Request<super::GetMultiRequest>,
        ) -> std::result::Result<tonic::Response<super::GetMultiResponse>, tonic::Status>;
        async fn set(
            &self,
            request: tonic::Request<super::SetRequest>,
        ) -> std::result::Result<tonic::Response<super::SetResponse>, tonic::Status>;
        async fn set_multi(
            &self,
            request: tonic::Request<super::SetMultiRequest>,
        ) -> std::result::Result<tonic::Response<super::SetMultiResponse>, tonic::Status>;
        async fn remove(
            &self,
            request: tonic::Request<super::RemoveRequest>,
        ) -> std::result::Result<tonic::Response<super::RemoveResponse>, tonic::Status>;
        async fn remove_multi(
            &self,
            request: tonic::Request<super::RemoveMultiRequest>,
        ) -> std::result::Result<tonic::Response<super::RemoveMultiResponse>, tonic::Status>;
        async fn append(
            &self,
            request: tonic::Request<super::AppendRequest>,
        ) -> std::result::Result<tonic::Response<super::AppendResponse>, tonic::Status>;
        async fn append_multi(
            &self,
            request: tonic::Request<super::AppendMultiRequest>,
        ) -> std::result::Result<tonic::Response<super::AppendMultiResponse>, tonic::Status>;
        async fn compare_exchange(
            &self,
            request: tonic::Request<super::CompareExchangeRequest>,
        ) -> std::result::Result<tonic::Response<super::CompareExchangeResponse>, tonic::Status>;
        async fn compare_exchange_multi(
            &self,
            request: tonic::Request<super::CompareExchangeMultiRequest>,
        ) -> std::result::Result<tonic::Response<super::CompareExchangeMultiResponse>, tonic::Status>;
        async fn increment(
            &self,
            request: tonic::Request<super::IncrementRequest>,
        ) -> std::result::Result<tonic::Response<super::IncrementResponse>, tonic::Status>;
        async fn rekey(
            &self,
            request: tonic::Request<super::RekeyRequest>,
        ) -> std::result::Result<tonic::Response<super::RekeyResponse>, tonic::Status>;
        async fn pop_first(
            &self,
            request: tonic::Request<super::PopFirstRequest>,
        ) -> std::result::Result<tonic::Response<super::PopFirstResponse>, tonic::Status>;
        async fn push_last(
            &self,
            request: tonic::Request<super::PushLastRequest>,
        ) -> std::result::Result<tonic::Response<super::PushLastResponse>, tonic::Status>;
        async fn count(
            &self,
            request: tonic::Request<super::CountRequest>,
        ) -> std::result::Result<tonic::Response<super::CountResponse>, tonic::Status>;
        async fn get_file_size(
            &self,
            request: tonic::Request<super::GetFileSizeRequest>,
        ) -> std::result::Result<tonic::Response<super::GetFileSizeResponse>, tonic::Status>;
        async fn clear(
            &self,
            request: tonic::Request<super::ClearRequest>,
        ) -> std::result::Result<tonic::Response<super::ClearResponse>, tonic::Status>;
        async fn rebuild(
            &self,
            request: tonic::Request<super::RebuildRequest>,
        ) -> std::result::Result<tonic::Response<super::RebuildResponse>, tonic::Status>;
        async fn should_be_rebuilt(
            &self,
            request: tonic::Request<super::ShouldBeRebuiltRequest>,
        ) -> std::result::Result<tonic::Response<super::ShouldBeRebuiltResponse>, tonic::Status>;
        async fn synchronize(
            &self,
            request: tonic::Request<super::SynchronizeRequest>,
        ) -> std::result::Result<tonic::Response<super::SynchronizeResponse>, tonic::Status>;
        async fn search(
            &self,
            request: tonic::Request<super::SearchRequest>,
        ) -> std::result::Result<tonic::Response<super::SearchResponse>, tonic::Status>;
        /// Server streaming response type for the Iterate method.
        type IterateStream: tonic::codegen::tokio_stream::Stream<
                Item = std::result::Result<super::IterateResponse, tonic::Status>,
            >
            + Send
            + 'static;
        async fn iterate(
            &self,
            request: tonic::Request<tonic::Streaming<super::IterateRequest>>,
        ) -> std::result::Result<tonic::Response<Self::IterateStream>, tonic::Status>;
    }
    #[derive(Debug)]
    pub struct CofferDbServer<T: CofferDb> {
        inner: _Inner<T>,
        accept_compression_encodings: EnabledCompressionEncodings,
        send_compression_encodings: EnabledCompressionEncodings,
        max_decoding_message_size: Option<usize>,
        max_encoding_message_size: Option<usize>,
    }
    struct _Inner<T>(Arc<T>);
    impl<T: CofferDb> CofferDbServer<T> {
        pub fn new(inner: T) -> Self {
            Self::from_arc(Arc::new(inner))
        }
        pub fn from_arc(inner: Arc<T>) -> Self {
            let inner = _Inner(inner);
            Self {
                inner,
                accept_compression_encodings: Default::default(),
                send_compression_encodings: Default::default(),
                max_decoding_message_size: None,
                max_encoding_message_size: None,
            }
        }
        pub fn with_interceptor<F>(
            inner: T,
            interceptor: F,
        ) -> InterceptedService<Self, F>
        where
            F: tonic::service::Interceptor,
        {
            InterceptedService::new(Self::new(inner), interceptor)
        }
        /// Enable decompressing requests with the given encoding.
        #[must_use]
        pub fn accept_compressed(mut self, encoding: tonic::codec::CompressionEncoding) -> Self {
            self.accept_compression_encodings.enable(encoding);
            self
        }
        /// Compress responses with the given encoding, if the client supports it.
        #[must_use]
        pub fn send_compressed(mut self, encoding: tonic::codec::CompressionEncoding) -> Self {
            self.send_compression_encodings.enable(encoding);
            self
        }
        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.max_decoding_message_size = Some(limit);
            self
        }
        /// Limits the maximum size of an encoded message.
        ///
        /// Default: `usize::MAX`
        #[must_use]
        pub fn max_encoding_message_size(mut self, limit: usize) -> Self {
            self.max_encoding_message_size = Some(limit);
            self
        }
    }
    impl<T, B> tonic::codegen::Service<http::Request<B>> for CofferDbServer<T>
    where
        T: CofferDb,
        B: Body + Send + 'static,
        B::Error: Into<StdError> + Send + 'static,
    {
        type Response = http::Response<tonic::body::BoxBody>;
        type Error = std::convert::Infallible;
        type Future = BoxFuture<Self::Response, Self::Error>;
        fn poll_ready(
            &mut self,
            _cx: &mut Context<'_>,
        ) -> Poll<std::result::Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }
        fn call(&mut self, req: http::Request<B>) -> Self::Future {
            let inner = self.inner.clone();
            match req.uri().path() {
                "/coffer.CofferDb/Echo" => {
                    #[allow(non_camel_case_types)]
                    struct EchoSvc<T: CofferDb>(pub Arc<T>);
                    impl<T: CofferDb> tonic::server::UnaryService<super::EchoRequest>
                    for EchoSvc<T> {
                        type Response = super::EchoResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::EchoRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CofferDb>::echo(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = EchoSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coffer.CofferDb/Inspect" => {
                    #[allow(non_camel_case_types)]
                    struct InspectSvc<T: CofferDb>(pub Arc<T>);
                    impl<T: CofferDb> tonic::server::UnaryService<super::InspectRequest>
                    for InspectSvc<T> {
                        type Response = super::InspectResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::InspectRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CofferDb>::inspect(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = InspectSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coffer.CofferDb/Get" => {
                    #[allow(non_camel_case_types)]
                    struct GetSvc<T: CofferDb>(pub Arc<T>);
                    impl<T: CofferDb> tonic::server::UnaryService<super::GetRequest>
                    for GetSvc<T> {
                        type Response = super::GetResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CofferDb>::get(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = GetSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coffer.CofferDb/GetMulti" => {
                    #[allow(non_camel_case_types)]
                    struct GetMultiSvc<T: CofferDb>(pub Arc<T>);
                    impl<T: CofferDb> tonic::server::UnaryService<super::GetMultiRequest>
                    for GetMultiSvc<T> {
                        type Response = super::GetMultiResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetMultiRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CofferDb>::get_multi(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = GetMultiSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coffer.CofferDb/Set" => {
                    #[allow(non_camel_case_types)]
                    struct SetSvc<T: CofferDb>(pub Arc<T>);
                    impl<T: CofferDb> tonic::server::UnaryService<super::SetRequest>
                    for SetSvc<T> {
                        type Response = super::SetResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::SetRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CofferDb>::set(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = SetSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coffer.CofferDb/SetMulti" => {
                    #[allow(non_camel_case_types)]
                    struct SetMultiSvc<T: CofferDb>(pub Arc<T>);
                    impl<T: CofferDb> tonic::server::UnaryService<super::SetMultiRequest>
                    for SetMultiSvc<T> {
                        type Response = super::SetMultiResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::SetMultiRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CofferDb>::set_multi(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = SetMultiSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coffer.CofferDb/Remove" => {
                    #[allow(non_camel_case_types)]
                    struct RemoveSvc<T: CofferDb>(pub Arc<T>);
                    impl<T: CofferDb> tonic::server::UnaryService<super::RemoveRequest>
                    for RemoveSvc<T> {
                        type Response = super::RemoveResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::RemoveRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CofferDb>::remove(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = RemoveSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coffer.CofferDb/RemoveMulti" => {
                    #[allow(non_camel_case_types)]
                    struct RemoveMultiSvc<T: CofferDb>(pub Arc<T>);
                    impl<T: CofferDb> tonic::server::UnaryService<super::RemoveMultiRequest>
                    for RemoveMultiSvc<T> {
                        type Response = super::RemoveMultiResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::RemoveMultiRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CofferDb>::remove_multi(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = RemoveMultiSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coffer.CofferDb/Append" => {
                    #[allow(non_camel_case_types)]
                    struct AppendSvc<T: CofferDb>(pub Arc<T>);
                    impl<T: CofferDb> tonic::server::UnaryService<super::AppendRequest>
                    for AppendSvc<T> {
                        type Response = super::AppendResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::AppendRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CofferDb>::append(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = AppendSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coffer.CofferDb/AppendMulti" => {
                    #[allow(non_camel_case_types)]
                    struct AppendMultiSvc<T: CofferDb>(pub Arc<T>);
                    impl<T: CofferDb> tonic::server::UnaryService<super::AppendMultiRequest>
                    for AppendMultiSvc<T> {
                        type Response = super::AppendMultiResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::AppendMultiRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CofferDb>::append_multi(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = AppendMultiSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coffer.CofferDb/CompareExchange" => {
                    #[allow(non_camel_case_types)]
                    struct CompareExchangeSvc<T: CofferDb>(pub Arc<T>);
                    impl<T: CofferDb> tonic::server::UnaryService<super::CompareExchangeRequest>
                    for CompareExchangeSvc<T> {
                        type Response = super::CompareExchangeResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::CompareExchangeRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CofferDb>::compare_exchange(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = CompareExchangeSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coffer.CofferDb/CompareExchangeMulti" => {
                    #[allow(non_camel_case_types)]
                    struct CompareExchangeMultiSvc<T: CofferDb>(pub Arc<T>);
                    impl<T: CofferDb> tonic::server::UnaryService<super::CompareExchangeMultiRequest>
                    for CompareExchangeMultiSvc<T> {
                        type Response = super::CompareExchangeMultiResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::CompareExchangeMultiRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CofferDb>::compare_exchange_multi(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = CompareExchangeMultiSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coffer.CofferDb/Increment" => {
                    #[allow(non_camel_case_types)]
                    struct IncrementSvc<T: CofferDb>(pub Arc<T>);
                    impl<T: CofferDb> tonic::server::UnaryService<super::IncrementRequest>
                    for IncrementSvc<T> {
                        type Response = super::IncrementResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::IncrementRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CofferDb>::increment(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = IncrementSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coffer.CofferDb/Rekey" => {
                    #[allow(non_camel_case_types)]
                    struct RekeySvc<T: CofferDb>(pub Arc<T>);
                    impl<T: CofferDb> tonic::server::UnaryService<super::RekeyRequest>
                    for RekeySvc<T> {
                        type Response = super::RekeyResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::RekeyRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CofferDb>::rekey(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = RekeySvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coffer.CofferDb/PopFirst" => {
                    #[allow(non_camel_case_types)]
                    struct PopFirstSvc<T: CofferDb>(pub Arc<T>);
                    impl<T: CofferDb> tonic::server::UnaryService<super::PopFirstRequest>
                    for PopFirstSvc<T> {
                        type Response = super::PopFirstResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::PopFirstRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CofferDb>::pop_first(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = PopFirstSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coffer.CofferDb/PushLast" => {
                    #[allow(non_camel_case_types)]
                    struct PushLastSvc<T: CofferDb>(pub Arc<T>);
                    impl<T: CofferDb> tonic::server::UnaryService<super::PushLastRequest>
                    for PushLastSvc<T> {
                        type Response = super::PushLastResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::PushLastRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CofferDb>::push_last(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = PushLastSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coffer.CofferDb/Count" => {
                    #[allow(non_camel_case_types)]
                    struct CountSvc<T: CofferDb>(pub Arc<T>);
                    impl<T: CofferDb> tonic::server::UnaryService<super::CountRequest>
                    for CountSvc<T> {
                        type Response = super::CountResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::CountRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CofferDb>::count(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = CountSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coffer.CofferDb/GetFileSize" => {
                    #[allow(non_camel_case_types)]
                    struct GetFileSizeSvc<T: CofferDb>(pub Arc<T>);
                    impl<T: CofferDb> tonic::server::UnaryService<super::GetFileSizeRequest>
                    for GetFileSizeSvc<T> {
                        type Response = super::GetFileSizeResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetFileSizeRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CofferDb>::get_file_size(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = GetFileSizeSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coffer.CofferDb/Clear" => {
                    #[allow(non_camel_case_types)]
                    struct ClearSvc<T: CofferDb>(pub Arc<T>);
                    impl<T: CofferDb> tonic::server::UnaryService<super::ClearRequest>
                    for ClearSvc<T> {
                        type Response = super::ClearResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ClearRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CofferDb>::clear(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = ClearSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coffer.CofferDb/Rebuild" => {
                    #[allow(non_camel_case_types)]
                    struct RebuildSvc<T: CofferDb>(pub Arc<T>);
                    impl<T: CofferDb> tonic::server::UnaryService<super::RebuildRequest>
                    for RebuildSvc<T> {
                        type Response = super::RebuildResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::RebuildRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CofferDb>::rebuild(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = RebuildSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coffer.CofferDb/ShouldBeRebuilt" => {
                    #[allow(non_camel_case_types)]
                    struct ShouldBeRebuiltSvc<T: CofferDb>(pub Arc<T>);
                    impl<T: CofferDb> tonic::server::UnaryService<super::ShouldBeRebuiltRequest>
                    for ShouldBeRebuiltSvc<T> {
                        type Response = super::ShouldBeRebuiltResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ShouldBeRebuiltRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CofferDb>::should_be_rebuilt(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = ShouldBeRebuiltSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coffer.CofferDb/Synchronize" => {
                    #[allow(non_camel_case_types)]
                    struct SynchronizeSvc<T: CofferDb>(pub Arc<T>);
                    impl<T: CofferDb> tonic::server::UnaryService<super::SynchronizeRequest>
                    for SynchronizeSvc<T> {
                        type Response = super::SynchronizeResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::SynchronizeRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CofferDb>::synchronize(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = SynchronizeSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coffer.CofferDb/Search" => {
                    #[allow(non_camel_case_types)]
                    struct SearchSvc<T: CofferDb>(pub Arc<T>);
                    impl<T: CofferDb> tonic::server::UnaryService<super::SearchRequest>
                    for SearchSvc<T> {
                        type Response = super::SearchResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::SearchRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CofferDb>::search(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = SearchSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coffer.CofferDb/Iterate" => {
                    #[allow(non_camel_case_types)]
                    struct IterateSvc<T: CofferDb>(pub Arc<T>);
                    impl<T: CofferDb> tonic::server::StreamingService<super::IterateRequest>
                    for IterateSvc<T> {
                        type Response = super::IterateResponse;
                        type ResponseStream = T::IterateStream;
                        type Future = BoxFuture<
                            tonic::Response<Self::ResponseStream>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<tonic::Streaming<super::IterateRequest>>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as CofferDb>::iterate(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let inner = inner.0;
                        let method = IterateSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.streaming(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                _ => {
                    Box::pin(async move {
                        Ok(
                            http::Response::builder()
                                .status(200)
                                .header("grpc-status", "12")
                                .header("content-type", "application/grpc")
                                .body(empty_body())
                                .unwrap(),
                        )
                    })
                }
            }
        }
    }
    impl<T: CofferDb> Clone for CofferDbServer<T> {
        fn clone(&self) -> Self {
            let inner = self.inner.clone();
            Self {
                inner,
                accept_compression_encodings: self.accept_compression_encodings,
                send_compression_encodings: self.send_compression_encodings,
                max_decoding_message_size: self.max_decoding_message_size,
                max_encoding_message_size: self.max_encoding_message_size,
            }
        }
    }
    impl<T: CofferDb> Clone for _Inner<T> {
        fn clone(&self) -> Self {
            Self(Arc::clone(&self.0))
        }
    }
    impl<T: std::fmt::Debug> std::fmt::Debug for _Inner<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.0)
        }
    }
    impl<T: CofferDb> tonic::server::NamedService for CofferDbServer<T> {
        const NAME: &'static str = "coffer.CofferDb";
    }
}
