//! Lever catalogue route.

use axum::{Json, Router, extract::State, routing::get};
use cockpit_core::reference::LeverSpec;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::AppState;

/// Creates the lever catalogue routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/levers", get(list_levers))
}

/// Reference figures and the levers a client can move.
#[derive(Debug, Serialize)]
pub struct LeverCatalogueResponse {
    /// Reference vintage.
    pub vintage: &'static str,
    /// Nominal GDP (Md€).
    pub gdp: Decimal,
    /// Opening public debt (Md€).
    pub initial_debt: Decimal,
    /// Opening general-government balance (Md€).
    pub initial_balance: Decimal,
    /// Lever specifications, in canonical order.
    pub levers: Vec<LeverSpec>,
}

/// GET /levers
async fn list_levers(State(state): State<AppState>) -> Json<LeverCatalogueResponse> {
    let reference = state.reference;
    Json(LeverCatalogueResponse {
        vintage: reference.vintage,
        gdp: reference.gdp,
        initial_debt: reference.initial_debt,
        initial_balance: reference.initial_balance(),
        levers: reference.levers.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use cockpit_core::EXEC_2024;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_list_levers() {
        let app = routes().with_state(AppState::new(&EXEC_2024));

        let response = app
            .oneshot(Request::builder().uri("/levers").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["vintage"], "exec-2024");
        assert_eq!(json["initial_balance"], "-151");
        let levers = json["levers"].as_array().unwrap();
        assert_eq!(levers.len(), 8);
        assert_eq!(levers[0]["id"], "vat_rate");
        assert_eq!(levers[0]["min"], "15.0");
        assert_eq!(levers[0]["max"], "25.0");
        assert_eq!(levers[0]["baseline"], "20.0");
        assert_eq!(levers[0]["coefficient"], "11.0");
        assert_eq!(levers[0]["kind"], "revenue");
        assert_eq!(levers[6]["id"], "pay_index_change");
        assert_eq!(levers[6]["kind"], "expense");
    }
}
