pub mod error;
pub mod handlers;
pub mod persist;
pub mod routing;
pub mod store;


pub use error::Error;

use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use axum::{
    body::Body,
    extract::State,
    http::{Method, Request},
    Router,
};
use serde_json::Value;

use crate::{handlers::Reply, persist::Persistence, store::Store};

#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<Store>>,
    persist: Arc<dyn Persistence>,
    test_mode: bool,
}

impl AppState {
    pub fn new(store: Store) -> AppState {
        AppState {
            store: Arc::new(Mutex::new(store)),
            persist: Arc::new(persist::NoopPersistence),
            test_mode: false,
        }
    }

    pub fn with_persistence(mut self, persist: Arc<dyn Persistence>) -> AppState {
        self.persist = persist;
        self
    }

    /// Test mode disables persistence hook invocation.
    pub fn test_mode(mut self) -> AppState {
        self.test_mode = true;
        self
    }
}

pub fn app(state: AppState) -> Router {
    // A single fallback handler carries the whole surface: the route table
    // answers 400 for unmatched (route, method) pairs, which axum's own
    // router would turn into 404s and 405s.
    Router::new()
        .fallback(handle_request)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}

/// Normalizes the transport request, resolves the route, runs the matching
/// entity operation against the store, and triggers the save hook for
/// mutating requests outside test mode.
async fn handle_request(
    State(state): State<AppState>,
    req: Request<Body>,
) -> Result<Reply, Error> {
    let (parts, body) = req.into_parts();
    let method = parts.method;
    let path = parts.uri.path().to_owned();

    let body = if method == Method::POST || method == Method::PUT {
        let bytes = hyper::body::to_bytes(body)
            .await
            .map_err(|err| anyhow!(err).context("reading request body"))?;
        serde_json::from_slice(&bytes).map_err(|_| Error::bad_request())?
    } else {
        Value::Null
    };

    let mut store = state
        .store
        .lock()
        .map_err(|_| anyhow!("store mutex poisoned"))?;
    let reply = routing::dispatch(&mut store, &method, &path, body)?;

    let mutating = method == Method::POST || method == Method::PUT || method == Method::DELETE;
    if !state.test_mode && mutating {
        if let Err(err) = state.persist.save(&store) {
            tracing::error!(?err, "saving store snapshot");
        }
    }

    Ok(reply)
}
