//! Web server module for the line server.
//!
//! Serves `GET /` over HTTPS: loads the corpus, picks the line at the
//! persisted rotation cursor, encrypts it through the cipher oracle and
//! returns it base64-encoded, then advances the cursor (wrapping around
//! the corpus). Any other path is a 404; serve failures come back as a
//! 200 with an `Error: ...` body so the route keeps a single status
//! family for its one real endpoint.
//!
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_server::tls_rustls::RustlsConfig;
use base64::{Engine as _, engine::general_purpose};
use lineproto::oracle::CipherOracle;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{config::Config, corpus, cursor::CursorStore, error::ServeError};

/// Application state shared by all requests
pub(crate) struct AppState {
    /// Startup configuration, owned here rather than by a global
    pub(crate) config: Config,
    /// Payload encryptor, keyed once for the process lifetime
    pub(crate) oracle: CipherOracle,
    /// Cursor store behind the lock that serializes read-modify-write;
    /// without it two requests could serve the same line and skip one
    pub(crate) rotation: Mutex<CursorStore>,
}

impl AppState {
    pub(crate) fn new(config: Config) -> Self {
        let oracle = CipherOracle::new(config.cipher_key.clone(), config.policy);
        let rotation = Mutex::new(CursorStore::new(config.index_file.clone()));
        Self {
            config,
            oracle,
            rotation,
        }
    }
}

/// Start the HTTPS server
pub async fn run() {
    let state = Arc::new(AppState::new(Config::from_env()));

    let tls = RustlsConfig::from_pem(
        state.config.cert.as_bytes().to_vec(),
        state.config.key.as_bytes().to_vec(),
    )
    .await
    .unwrap();

    let app = Router::new()
        .route("/", get(serve_line))
        .fallback(not_found)
        .with_state(Arc::clone(&state));

    let addr = format!("0.0.0.0:{}", state.config.port)
        .parse::<std::net::SocketAddr>()
        .unwrap();

    println!("🚀 Line server listening on https://{addr}");
    println!(
        "   📄 Corpus: {} | Cursor: {}",
        state.config.data_file.display(),
        state.config.index_file.display()
    );

    axum_server::bind_rustls(addr, tls)
        .serve(app.into_make_service())
        .await
        .unwrap();
}

/// `GET /`: encrypt and serve the next corpus line
async fn serve_line(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match next_line(&state).await {
        Ok(body) => body,
        Err(e) => {
            println!("❌ Request failed: {e}");
            format!("Error: {e}\n")
        }
    }
}

/// Everything except `/` is not a real endpoint
async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// One full rotation step
///
/// Loads the corpus, reads the cursor (bounded into the corpus size),
/// encrypts the selected line and persists the successor index. The
/// rotation lock is held across the whole step so each index is served
/// by exactly one response. Any failure before encryption returns early
/// and leaves the cursor untouched; a failed cursor write is only
/// logged — the client already has its line, the worst case is serving
/// the same line again next time.
pub(crate) async fn next_line(state: &AppState) -> Result<String, ServeError> {
    let store = state.rotation.lock().await;

    let lines = corpus::load_lines(&state.config.data_file)?;

    let current = store.read() % lines.len();
    let line = &lines[current];

    let encrypted = state.oracle.encrypt(line.as_bytes())?;
    let body = format!("{}\n", general_purpose::STANDARD.encode(&encrypted));

    let next = (current + 1) % lines.len();
    if let Err(e) = store.write(next) {
        println!(
            "⚠️ Unable to update line index file {}: {e}",
            state.config.index_file.display()
        );
    }

    Ok(body)
}
