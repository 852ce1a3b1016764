use axum::{
    extract::State,
    routing::{get, post},
    Json,
};
use serde_json::{Map, Value};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use calorie_predictor::error::PipelineError;
use calorie_predictor::model::{LinearModel, Predictor};
use calorie_predictor::{calculate_calories, CalorieEstimate};

// ---------- Server state ----------

#[derive(Clone)]
struct AppState {
    predictor: Arc<LinearModel>,
}

// ---------- Handlers ----------

async fn health() -> &'static str {
    "API is running!"
}

async fn calculate(
    State(state): State<AppState>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<Json<CalorieEstimate>, PipelineError> {
    let out = calculate_calories(&payload, state.predictor.as_ref())?;
    Ok(Json(out))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let model_path = std::env::var("MODEL_PATH").expect("MODEL_PATH not set");
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);

    let mdl = LinearModel::load(&model_path)?;
    // Warmup forward before accepting traffic
    let _ = mdl.predict(&vec![0.0; mdl.schema().len()])?;
    tracing::info!(
        "loaded model; schema[{}]: {:?}",
        mdl.schema().len(),
        mdl.schema()
    );

    let state = AppState {
        predictor: Arc::new(mdl),
    };

    let app = axum::Router::new()
        .route("/", get(health))
        .route("/calculate-calories", post(calculate))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
