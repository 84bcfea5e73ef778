use axum::extract::Query;
use axum::Json;
use leadlight_common::error::LeadError;
use leadlight_scoring::signals::{signals_in_category, INTENT_SIGNALS};
use leadlight_scoring::SignalCategory;

use crate::error::ApiError;
use crate::signals::requests::SignalsQuery;
use crate::signals::responses::SignalsResponse;

pub async fn list_signals(
    Query(query): Query<SignalsQuery>,
) -> Result<Json<SignalsResponse>, ApiError> {
    let data: Vec<_> = match query.category.as_deref() {
        Some(label) => {
            let category = SignalCategory::parse(label).ok_or_else(|| {
                LeadError::Validation(format!("unknown category: {label}"))
            })?;
            signals_in_category(category).copied().collect()
        }
        None => INTENT_SIGNALS.to_vec(),
    };

    let count = data.len();
    Ok(Json(SignalsResponse { data, count }))
}
