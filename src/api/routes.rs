use crate::api::AppState;
use crate::error::ResolveError;
use crate::quantity::Quote;
use crate::types::Listing;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;

#[derive(Debug, Default, Deserialize)]
pub struct ListingParams {
    #[serde(default)]
    pub refresh: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuoteParams {
    pub quantity: Option<String>,
}

impl QuoteParams {
    /// Missing or non-numeric quantities fall back to a single item. Numbers outside the
    /// `i64` range saturate so the listing bounds still clamp them.
    pub fn requested(&self) -> i64 {
        let Some(quantity) = self.quantity.as_deref() else {
            return 1;
        };

        match quantity.trim().parse::<i64>() {
            Ok(quantity) => quantity,
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => 1,
            },
        }
    }
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn listing(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> Result<Json<Listing>, (StatusCode, Json<APIResponse>)> {
    match state.storefront.listing(params.refresh).await {
        Ok(listing) => Ok(Json(listing)),
        Err(err) => Err(error_response(err)),
    }
}

pub async fn quote(
    State(state): State<AppState>,
    Query(params): Query<QuoteParams>,
) -> Result<Json<Quote>, (StatusCode, Json<APIResponse>)> {
    match state.storefront.quote(params.requested()).await {
        Ok(quote) => Ok(Json(quote)),
        Err(err) => Err(error_response(err)),
    }
}

fn error_response(err: ResolveError) -> (StatusCode, Json<APIResponse>) {
    tracing::warn!("Failed to resolve listing: {:?}", err);

    (
        StatusCode::BAD_GATEWAY,
        Json(APIResponse::Error {
            message: err.to_string(),
            retryable: true,
        }),
    )
}

#[derive(Serialize)]
pub enum APIResponse {
    Error { message: String, retryable: bool },
}
