// ABOUTME: In-process stub of the upstream recipe-search service for tests
// ABOUTME: Serves canned findByIngredients responses on an ephemeral local port

use axum::{extract::Query, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use tokio::net::TcpListener;

/// Behavior of the stub service for a test scenario
#[derive(Clone)]
pub enum StubBehavior {
    /// Return the given JSON body with 200
    Recipes(serde_json::Value),
    /// Return the given error status with an empty JSON object
    ErrorStatus(u16),
}

/// A running stub recipe service
pub struct StubRecipeService {
    /// Base URL (http://127.0.0.1:{port}) to point the client at
    pub base_url: String,
    /// Number of requests the stub has served
    hits: Arc<AtomicUsize>,
}

impl StubRecipeService {
    /// Spawn a stub service serving `GET /recipes/findByIngredients`
    pub async fn spawn(behavior: StubBehavior) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let hits_for_handler = hits.clone();

        let app = Router::new().route(
            "/recipes/findByIngredients",
            get(move |Query(_params): Query<HashMap<String, String>>| {
                let behavior = behavior.clone();
                let hits = hits_for_handler.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    match behavior {
                        StubBehavior::Recipes(body) => {
                            (StatusCode::OK, Json(body)).into_response()
                        }
                        StubBehavior::ErrorStatus(status) => (
                            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                            Json(serde_json::json!({})),
                        )
                            .into_response(),
                    }
                }
            }),
        );

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub service");
        let addr = listener.local_addr().expect("Failed to read stub address");

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://{addr}"),
            hits,
        }
    }

    /// Number of lookup requests the stub has served
    pub fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Two-recipe canned response mirroring the upstream findByIngredients shape
pub fn two_recipe_response() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 715538,
            "title": "Chicken and Rice Skillet",
            "image": "https://img.example.com/715538.jpg",
            "usedIngredients": [{"name": "chicken"}, {"name": "rice"}],
            "missedIngredients": [{"name": "scallions"}]
        },
        {
            "id": 716627,
            "title": "Tomato Chicken Stew",
            "usedIngredients": [{"name": "chicken"}, {"name": "tomato"}, {"name": "rice"}],
            "missedIngredients": []
        }
    ])
}
