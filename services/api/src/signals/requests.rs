use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SignalsQuery {
    pub category: Option<String>,
}
