//! Servidor web Axum com WebSocket para anotação de texto em tempo real

mod config;

use askama::Template;
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use dashaway_core::{
    demo::demo_texts, AnalysisEngine, AnalysisResult, EngineEvent, IssueCategory, IssueCounts,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

const DEFAULT_LOG_FILTER: &str = "dashaway_web=info,dashaway_core=info,tower_http=info";

/// Estado compartilhado da aplicação
struct AppState {
    engine: AnalysisEngine,
    config: ServerConfig,
}

impl AppState {
    fn new(config: ServerConfig) -> Self {
        Self {
            engine: AnalysisEngine::new(),
            config,
        }
    }

    /// Rejeita textos acima do limite configurado.
    fn check_length(&self, text: &str) -> Result<(), Response> {
        let chars = text.chars().count();
        if chars > self.config.max_text_chars {
            return Err(error_response(
                StatusCode::PAYLOAD_TOO_LARGE,
                format!(
                    "Texto com {} caracteres excede o limite de {}",
                    chars, self.config.max_text_chars
                ),
            ));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct TextRequest {
    text: String,
}

#[derive(Deserialize)]
struct BatchRequest {
    texts: Vec<String>,
}

/// Mensagem WebSocket recebida do cliente
#[derive(Deserialize)]
struct WsRequest {
    text: String,
}

#[derive(Serialize)]
struct ProcessResponse {
    #[serde(flatten)]
    result: AnalysisResult,
    counts: IssueCounts,
}

impl From<AnalysisResult> for ProcessResponse {
    fn from(result: AnalysisResult) -> Self {
        let counts = result.counts();
        Self { result, counts }
    }
}

struct CategoryView {
    name: &'static str,
    label: &'static str,
    color: &'static str,
}

struct DemoView {
    label: &'static str,
    text: &'static str,
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    version: &'static str,
    categories: Vec<CategoryView>,
    demos: Vec<DemoView>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = ServerConfig::from_env();
    let addr = config.bind_addr();
    let state = Arc::new(AppState::new(config));
    info!(
        categories = state.engine.matchers().categories().count(),
        "motor de análise pronto"
    );

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🚀 Servidor dashaway iniciado em http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

fn create_router(state: Arc<AppState>) -> Router {
    let cors = state.config.cors_layer();

    Router::new()
        .route("/", get(index_handler))
        .route("/api/health", get(health_handler))
        .route("/api/process", post(process_handler))
        .route("/api/process/batch", post(batch_handler))
        .route("/api/readability", post(readability_handler))
        .route("/api/demo-texts", get(demo_texts_handler))
        .route("/ws", get(ws_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

/// Roda trabalho de CPU do motor fora do runtime async.
async fn run_blocking<T, F>(state: &Arc<AppState>, task: &'static str, f: F) -> Result<T, Response>
where
    F: FnOnce(&AppState) -> T + Send + 'static,
    T: Send + 'static,
{
    let worker = Arc::clone(state);
    tokio::task::spawn_blocking(move || f(&worker))
        .await
        .map_err(|err| {
            warn!(error = %err, task, "tarefa de análise interrompida");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("Tarefa interrompida: {}", task))
        })
}

/// Executa a análise em streaming e devolve todos os eventos em ordem.
///
/// Texto acima do limite vira um único evento `Error`; qualquer outro texto,
/// inclusive vazio ou só com espaços, termina em `Done`.
async fn analyze_events(state: &Arc<AppState>, text: String) -> Vec<EngineEvent> {
    if state.check_length(&text).is_err() {
        return vec![EngineEvent::Error {
            message: format!("Texto excede o limite de {} caracteres", state.config.max_text_chars),
        }];
    }

    let (tx, rx) = std::sync::mpsc::channel::<EngineEvent>();
    let outcome = run_blocking(state, "análise em streaming", move |s| {
        s.engine.analyze_streaming(&text, tx)
    })
    .await;
    if outcome.is_err() {
        return vec![EngineEvent::Error {
            message: "Falha na análise".to_string(),
        }];
    }
    rx.try_iter().collect()
}

/// Retorna a página principal HTML
async fn index_handler() -> Response {
    let template = IndexTemplate {
        version: env!("CARGO_PKG_VERSION"),
        categories: IssueCategory::ALL
            .iter()
            .map(|c| CategoryView {
                name: c.name(),
                label: c.label(),
                color: c.color(),
            })
            .collect(),
        demos: demo_texts()
            .into_iter()
            .map(|(label, text)| DemoView { label, text })
            .collect(),
    };

    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            warn!(error = %err, "falha ao renderizar a página inicial");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Falha ao renderizar a página".into())
        }
    }
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Anotação via HTTP POST (sem streaming)
async fn process_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TextRequest>,
) -> Response {
    if let Err(rejection) = state.check_length(&req.text) {
        return rejection;
    }

    let text = req.text;
    match run_blocking(&state, "análise", move |s| s.engine.process(&text)).await {
        Ok(result) => Json(ProcessResponse::from(result)).into_response(),
        Err(rejection) => rejection,
    }
}

/// Vários textos de uma vez, processados em paralelo fora do runtime
async fn batch_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BatchRequest>,
) -> Response {
    for text in &req.texts {
        if let Err(rejection) = state.check_length(text) {
            return rejection;
        }
    }

    let texts = req.texts;
    match run_blocking(&state, "processamento em lote", move |s| s.engine.process_batch(&texts)).await {
        Ok(results) => {
            let body: Vec<ProcessResponse> = results.into_iter().map(ProcessResponse::from).collect();
            Json(body).into_response()
        }
        Err(rejection) => rejection,
    }
}

async fn readability_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TextRequest>,
) -> Response {
    if let Err(rejection) = state.check_length(&req.text) {
        return rejection;
    }
    let text = req.text;
    match run_blocking(&state, "cálculo de legibilidade", move |s| s.engine.readability(&text)).await {
        Ok(report) => Json(report).into_response(),
        Err(rejection) => rejection,
    }
}

/// Retorna textos de demonstração
async fn demo_texts_handler() -> impl IntoResponse {
    let texts: Vec<serde_json::Value> = demo_texts()
        .iter()
        .map(|(label, text)| {
            serde_json::json!({
                "label": label,
                "text": text
            })
        })
        .collect();
    Json(texts)
}

/// Upgrade HTTP → WebSocket
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_websocket(socket, state))
}

/// Lógica do WebSocket: recebe texto, executa a análise e envia eventos em tempo real
async fn handle_websocket(mut socket: WebSocket, state: Arc<AppState>) {
    info!("WebSocket conectado");

    while let Some(Ok(msg)) = socket.recv().await {
        match msg {
            Message::Text(text) => {
                // Aceita JSON {text}; senão usa a mensagem como texto puro
                let text = match serde_json::from_str::<WsRequest>(&text) {
                    Ok(req) => req.text,
                    Err(_) => text,
                };

                info!(chars = text.len(), "analisando via WebSocket");

                // A análise é síncrona: roda fora do runtime e os eventos são coletados no fim
                let events = analyze_events(&state, text).await;
                for event in &events {
                    if let Ok(json) = serde_json::to_string(event) {
                        if socket.send(Message::Text(json)).await.is_err() {
                            return; // cliente desconectou
                        }
                        // Pequena pausa para animação visual (passo a passo)
                        tokio::time::sleep(state.config.ws_event_delay).await;
                    }
                }
            }
            Message::Close(_) => {
                info!("WebSocket desconectado");
                return;
            }
            Message::Ping(payload) => {
                let _ = socket.send(Message::Pong(payload)).await;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_app(config: ServerConfig) -> Router {
        create_router(test_state(config))
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_app(ServerConfig::default())
            .oneshot(get_request("/api/health"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "dashaway-web");
    }

    #[tokio::test]
    async fn test_process_returns_segments_and_counts() {
        let response = test_app(ServerConfig::default())
            .oneshot(post_json(
                "/api/process",
                serde_json::json!({ "text": "We need to leverage synergy—now." }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let segments = json["segments"].as_array().unwrap();
        assert_eq!(segments.len(), 6);
        assert_eq!(segments[1]["type"], "jargon");
        assert_eq!(segments[4]["type"], "em_dash");
        assert_eq!(json["counts"]["jargon"], 2);
        assert_eq!(json["counts"]["em_dash"], 1);
        assert!(json.get("error").is_none());
        assert!(json["readability_score"].is_number());
    }

    #[tokio::test]
    async fn test_process_empty_text_is_valid() {
        let response = test_app(ServerConfig::default())
            .oneshot(post_json("/api/process", serde_json::json!({ "text": "" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["segments"][0]["content"], "");
        assert_eq!(json["readability_score"], 0.0);
    }

    #[tokio::test]
    async fn test_text_over_limit_is_rejected() {
        let config = ServerConfig {
            max_text_chars: 10,
            ..ServerConfig::default()
        };
        let response = test_app(config)
            .oneshot(post_json(
                "/api/process",
                serde_json::json!({ "text": "This text is longer than ten characters." }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_malformed_body_is_client_error() {
        let response = test_app(ServerConfig::default())
            .oneshot(post_json("/api/process", serde_json::json!({ "body": "no text" })))
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }

    fn test_state(config: ServerConfig) -> Arc<AppState> {
        Arc::new(AppState::new(config))
    }

    #[tokio::test]
    async fn test_ws_whitespace_text_gets_done() {
        let events = analyze_events(&test_state(ServerConfig::default()), "   ".to_string()).await;

        match events.last() {
            Some(EngineEvent::Done { result }) => {
                assert_eq!(result.segments.len(), 1);
                assert_eq!(result.segments[0].content, "   ");
                assert_eq!(result.counts().total(), 0);
                assert!(result.error.is_none());
            }
            other => panic!("último evento deveria ser Done, veio {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_ws_empty_text_gets_only_done() {
        let events = analyze_events(&test_state(ServerConfig::default()), String::new()).await;
        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], EngineEvent::Done { result } if *result == AnalysisResult::empty()));
    }

    #[tokio::test]
    async fn test_ws_text_over_limit_gets_error() {
        let config = ServerConfig {
            max_text_chars: 5,
            ..ServerConfig::default()
        };
        let events = analyze_events(&test_state(config), "far too long".to_string()).await;
        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], EngineEvent::Error { message } if message.contains('5')));
    }

    #[tokio::test]
    async fn test_readability_endpoint() {
        let response = test_app(ServerConfig::default())
            .oneshot(post_json(
                "/api/readability",
                serde_json::json!({
                    "text": "This extraordinarily sophisticated sentence demonstrates complicated vocabulary."
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert!(json["readability_score"].as_f64().unwrap() > 5.0);
        assert!(!json["complex_words"].as_array().unwrap().is_empty());
        assert!(json["long_sentences"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_batch_keeps_order() {
        let response = test_app(ServerConfig::default())
            .oneshot(post_json(
                "/api/process/batch",
                serde_json::json!({ "texts": ["Plain words.", "We leverage synergy."] }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let results = json.as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["counts"]["jargon"], 0);
        assert_eq!(results[1]["counts"]["jargon"], 2);
    }

    #[tokio::test]
    async fn test_demo_texts() {
        let response = test_app(ServerConfig::default())
            .oneshot(get_request("/api/demo-texts"))
            .await
            .unwrap();
        let json = body_json(response).await;
        let demos = json.as_array().unwrap();

        assert_eq!(demos.len(), demo_texts().len());
        assert!(demos.iter().all(|d| d["label"].is_string() && d["text"].is_string()));
    }

    #[tokio::test]
    async fn test_index_lists_categories() {
        let response = test_app(ServerConfig::default())
            .oneshot(get_request("/"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8_lossy(&bytes);
        for category in IssueCategory::ALL {
            assert!(html.contains(category.name()));
        }
        assert!(html.contains("Comunicado corporativo"));
    }
}
