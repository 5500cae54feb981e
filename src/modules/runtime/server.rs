//! HTTP server for the Simple JSON protocol

use axum::{
    handler::Handler,
    http::{Method, Uri},
    response::Response,
    routing::{get, MethodRouter},
    Router,
};
use simplejson_core::{Settings, SimpleJsonError};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::capabilities::CapabilityRegistry;
use crate::dispatcher::Dispatcher;
use crate::handlers::{error_response, AnnotationsHandler, QueryHandler, SearchHandler, TagsHandler};
use crate::state::AppState;

/// Protocol server for one datasource backend
pub struct Server {
    settings: Arc<Settings>,
    state: AppState,
}

impl Server {
    /// Create a server answering with the given capabilities
    pub fn new(settings: Settings, registry: CapabilityRegistry) -> Self {
        let dispatcher = Arc::new(Dispatcher::new(Arc::new(registry)));
        let state = AppState::new(dispatcher, settings.request_timeout());

        Self {
            settings: Arc::new(settings),
            state,
        }
    }

    /// Build the Axum router; every endpoint accepts GET and POST
    pub fn router(&self) -> Router {
        let router = Router::new()
            .route("/", Self::endpoint(Self::liveness))
            .route("/query", Self::endpoint(QueryHandler::handle))
            .route("/search", Self::endpoint(SearchHandler::handle))
            .route("/annotations", Self::endpoint(AnnotationsHandler::handle))
            .route("/tag-keys", Self::endpoint(TagsHandler::keys))
            .route("/tag-values", Self::endpoint(TagsHandler::values))
            .fallback(Self::not_found)
            .with_state(self.state.clone())
            .layer(TraceLayer::new_for_http());

        if self.settings.server().cors_enabled() {
            router.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
        } else {
            router
        }
    }

    /// Route `handler` for GET and POST, answering other methods with `{error}`
    fn endpoint<H, T>(handler: H) -> MethodRouter<AppState>
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        get(handler.clone())
            .post(handler)
            .fallback(Self::method_not_allowed)
    }

    async fn not_found(uri: Uri) -> Response {
        error_response("router", SimpleJsonError::NotFound(uri.path().to_string()))
    }

    async fn method_not_allowed(method: Method, uri: Uri) -> Response {
        let err = SimpleJsonError::MethodNotAllowed(format!("{} {}", method, uri.path()));
        error_response("router", err)
    }

    /// Liveness endpoint used by "Test connection"
    async fn liveness() -> &'static str {
        "OK"
    }

    /// Bind and serve until CTRL+C or SIGTERM
    pub async fn run(&self) -> Result<(), SimpleJsonError> {
        let server = self.settings.server();
        let addr: SocketAddr = format!("{}:{}", server.host(), server.port())
            .parse()
            .map_err(|e| SimpleJsonError::Server(format!("Invalid address: {}", e)))?;

        let registered: Vec<String> = self
            .registry()
            .registered()
            .iter()
            .map(ToString::to_string)
            .collect();

        info!("Starting Simple JSON datasource '{}' on http://{}", self.settings.name, addr);
        info!("Capabilities: {}", registered.join(", "));
        info!("Request timeout: {:?}", self.state.request_timeout);

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| SimpleJsonError::Server(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, self.router())
            .with_graceful_shutdown(Self::shutdown_signal())
            .await
            .map_err(|e| SimpleJsonError::Server(format!("Server error: {}", e)))?;

        info!("Server stopped");
        Ok(())
    }

    /// Wait for shutdown signal
    async fn shutdown_signal() {
        let ctrl_c = async {
            if let Err(e) = signal::ctrl_c().await {
                warn!("Failed to listen for CTRL+C: {}", e);
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match signal::unix::signal(signal::unix::SignalKind::terminate()) {
                Ok(mut sigterm) => {
                    sigterm.recv().await;
                }
                Err(e) => {
                    warn!("Failed to listen for SIGTERM: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                debug!("Received CTRL+C, shutting down...");
            }
            _ = terminate => {
                debug!("Received SIGTERM, shutting down...");
            }
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn registry(&self) -> &CapabilityRegistry {
        self.state.dispatcher.registry()
    }
}
