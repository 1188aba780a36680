use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

pub async fn handle() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "id-issuance",
    })
}

#[cfg(test)]
mod health_http_inbound_tests {
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::handle;

    #[tokio::test]
    async fn it_should_report_the_service_as_ok() {
        let app = Router::new().route("/healthz", get(handle));

        let response = app
            .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "ok", "service": "id-issuance"})
        );
    }
}
