//! Local stand-in for the exchange-rate provider.
//!
//! Serves `/v4/latest/{base}` with canned payloads and `/down/latest/{base}`
//! with a 500 for every base.

use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;

/// Codes are deliberately not in alphabetical order
pub const USD_BODY: &str = r#"{"base":"USD","date":"2024-05-01","rates":{"USD":1,"EUR":0.9,"GBP":0.79,"JPY":155.2,"AUD":1.52}}"#;
pub const EUR_BODY: &str = r#"{"base":"EUR","date":"2024-05-01","rates":{"EUR":1,"USD":1.11,"GBP":0.88}}"#;

pub fn app() -> Router {
    Router::new()
        .route("/v4/latest/{base}", get(latest))
        .route("/down/latest/{base}", get(down))
}

async fn latest(Path(base): Path<String>) -> Response {
    let json = [(header::CONTENT_TYPE, "application/json")];
    match base.as_str() {
        "USD" => (json, USD_BODY).into_response(),
        "EUR" => (json, EUR_BODY).into_response(),
        "BAD" => (json, "{\"rates\": not json").into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            json,
            r#"{"result":"error","error-type":"unsupported-code"}"#,
        )
            .into_response(),
    }
}

async fn down(Path(_base): Path<String>) -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

/// Start the provider on a random port and return its root URL
pub async fn spawn_provider() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app()).await.unwrap();
    });
    format!("http://{addr}")
}
