use axum::{extract::Query, routing::get, Json, Router};
use chrono::NaiveDate;
use serde::Deserialize;

use aviro_core::FlightRecord;

use crate::error::AppError;
use crate::schedule;

pub fn routes() -> Router {
    Router::new().route("/api/flights", get(list_flights))
}

#[derive(Debug, Deserialize)]
struct FlightsQuery {
    date: String,
}

async fn list_flights(
    Query(query): Query<FlightsQuery>,
) -> Result<Json<Vec<FlightRecord>>, AppError> {
    let date = NaiveDate::parse_from_str(&query.date, "%Y-%m-%d").map_err(|_| {
        AppError::BadRequest(format!("invalid date: {:?}, expected YYYY-MM-DD", query.date))
    })?;

    let flights = schedule::generate(date, &mut rand::thread_rng());
    tracing::info!(%date, count = flights.len(), "served flight schedule");
    Ok(Json(flights))
}
