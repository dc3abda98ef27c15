//! gRPC listener.
//!
//! The gateway serves over TCP only. The listener is bound before anything
//! is announced to the discovery agent, so the advertised port is always the
//! one actually accepting connections.

use std::future::Future;
use std::net::SocketAddr;

use serde::Deserialize;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::service::Routes;
use tonic::transport::server::Router;
use tower::{Layer, Service};
use tower_http::classify::{GrpcErrorsAsFailures, SharedClassifier};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Request header carrying the caller's correlation id.
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("listener has no local address: {0}")]
    LocalAddr(#[source] std::io::Error),

    #[error("gRPC server failed: {0}")]
    Serve(#[from] tonic::transport::Error),
}

/// Listen address. Unknown keys are rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransportConfig {
    pub host: String,
    /// `0` picks a free port.
    pub port: u16,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 50051,
        }
    }
}

impl TransportConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Bind the listener described by `config`.
pub async fn bind(config: &TransportConfig) -> Result<TcpListener, TransportError> {
    TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|source| TransportError::Bind {
            addr: config.addr(),
            source,
        })
}

/// Serve `router` on `listener` until `signal` completes.
pub async fn serve_with_shutdown<L, ResBody, F>(
    router: Router<L>,
    listener: TcpListener,
    service_name: &str,
    signal: F,
) -> Result<(), TransportError>
where
    L: Layer<Routes> + Clone,
    L::Service: Service<http::Request<tonic::body::BoxBody>, Response = http::Response<ResBody>>
        + Clone
        + Send
        + 'static,
    <L::Service as Service<http::Request<tonic::body::BoxBody>>>::Future: Send + 'static,
    <L::Service as Service<http::Request<tonic::body::BoxBody>>>::Error:
        Into<Box<dyn std::error::Error + Send + Sync>> + Send,
    ResBody: http_body::Body<Data = bytes::Bytes> + Send + 'static,
    ResBody::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    F: Future<Output = ()> + Send,
{
    let addr: SocketAddr = listener.local_addr().map_err(TransportError::LocalAddr)?;
    info!(service = %service_name, address = %addr, "Server listening");

    router
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), signal)
        .await?;

    info!(service = %service_name, "Server stopped");
    Ok(())
}

/// Trace layer opening one span per gRPC request, tagged with the path and
/// the caller's correlation id.
pub fn grpc_trace_layer() -> TraceLayer<
    SharedClassifier<GrpcErrorsAsFailures>,
    impl Fn(&http::Request<tonic::body::BoxBody>) -> tracing::Span + Clone,
> {
    TraceLayer::new_for_grpc().make_span_with(|request: &http::Request<tonic::body::BoxBody>| {
        let correlation_id = request
            .headers()
            .get(CORRELATION_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        let path = request.uri().path();
        tracing::info_span!("grpc", %correlation_id, %path)
    })
}
