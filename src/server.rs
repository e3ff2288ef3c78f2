use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse,
    },
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::{Duration, SystemTime, UNIX_EPOCH},
};
use tokio::sync::{broadcast, Mutex};
use tokio_stream::{wrappers::BroadcastStream, StreamExt};
use tower_http::services::{ServeDir, ServeFile};

use crate::api::{ApiAnalysisRequest, ApiAnalysisResponse};
use retention_os::analyze;
use retention_os::config::{PacingConfig, ServerConfig};

#[derive(Clone)]
struct AppState {
    delay: Duration,
    channels: Arc<Mutex<HashMap<String, broadcast::Sender<StreamEvent>>>>,
}

#[derive(Clone, Serialize)]
struct StreamEvent {
    event: String,
    message: String,
    timestamp_ms: u128,
}

#[derive(serde::Deserialize)]
struct StreamQuery {
    request_id: String,
}

static REQUEST_COUNTER: AtomicUsize = AtomicUsize::new(0);

pub async fn serve(server: ServerConfig, pacing: PacingConfig) -> Result<(), String> {
    let state = AppState {
        delay: Duration::from_millis(pacing.delay_ms),
        channels: Arc::new(Mutex::new(HashMap::new())),
    };

    let web_root = server.web_root;
    let index_path = format!("{}/index.html", web_root.trim_end_matches('/'));
    let static_service = ServeDir::new(&web_root).not_found_service(ServeFile::new(index_path));

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/analyze", post(analyze_handler))
        .route("/api/analyze/stream", get(stream_handler))
        .nest_service("/", static_service)
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", server.host, server.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| format!("failed to bind server: {}", err))?;
    tracing::info!(%addr, web_root = %web_root, delay_ms = pacing.delay_ms, "server listening");

    axum::serve(listener, app)
        .await
        .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiAnalysisRequest>,
) -> Result<Json<ApiAnalysisResponse>, (StatusCode, String)> {
    let content = request.content().map_err(|err| {
        tracing::warn!(error = %err, "rejected analysis request");
        (StatusCode::BAD_REQUEST, err)
    })?;

    // Only callers that name their request can subscribe to its progress.
    let channel = match request.request_id.as_deref() {
        Some(request_id) => Some(get_or_create_channel(&state, request_id).await),
        None => None,
    };
    let request_id = request.request_id.unwrap_or_else(generate_request_id);

    if let Some(sender) = channel.as_ref() {
        send_event(sender, "start", "Reading content");
        send_event(sender, "analyzing", "Scoring hook, retention and AI signals");
    }

    // Dropping the request future here cancels the wait; the engine has not run yet.
    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    let report = analyze(&content);
    tracing::info!(
        request_id = %request_id,
        words = report.metrics.word_count,
        retention_score = report.retention_score,
        viral_tier = report.viral_potential.potential.label(),
        "analysis complete"
    );

    if let Some(sender) = channel.as_ref() {
        send_event(sender, "done", "Analysis complete");
        schedule_cleanup(state.channels.clone(), request_id.clone());
    }

    let delay_ms = state.delay.as_millis() as u64;
    Ok(Json(ApiAnalysisResponse::from_report(report, request_id, delay_ms)))
}

async fn stream_handler(
    State(state): State<AppState>,
    Query(query): Query<StreamQuery>,
) -> Result<Sse<impl tokio_stream::Stream<Item = Result<Event, std::convert::Infallible>>>, StatusCode>
{
    let sender = get_or_create_channel(&state, &query.request_id).await;
    let receiver = sender.subscribe();
    let stream = BroadcastStream::new(receiver).filter_map(|event| match event {
        Ok(event) => {
            let data = serde_json::to_string(&event).unwrap_or_default();
            Some(Ok(Event::default().data(data)))
        }
        Err(_) => None,
    });

    send_event(&sender, "connected", "Streaming analysis status");
    Ok(Sse::new(stream).keep_alive(KeepAlive::new().interval(Duration::from_secs(8))))
}

async fn get_or_create_channel(
    state: &AppState,
    request_id: &str,
) -> broadcast::Sender<StreamEvent> {
    let mut guard = state.channels.lock().await;
    if let Some(sender) = guard.get(request_id) {
        return sender.clone();
    }
    let (sender, _) = broadcast::channel(32);
    guard.insert(request_id.to_string(), sender.clone());
    sender
}

fn send_event(sender: &broadcast::Sender<StreamEvent>, event: &str, message: &str) {
    let _ = sender.send(StreamEvent {
        event: event.to_string(),
        message: message.to_string(),
        timestamp_ms: now_ms(),
    });
}

fn schedule_cleanup(
    channels: Arc<Mutex<HashMap<String, broadcast::Sender<StreamEvent>>>>,
    request_id: String,
) {
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(10)).await;
        let mut guard = channels.lock().await;
        guard.remove(&request_id);
    });
}

fn generate_request_id() -> String {
    let counter = REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("req-{}-{}", now_ms(), counter)
}

fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis())
        .unwrap_or(0)
}
