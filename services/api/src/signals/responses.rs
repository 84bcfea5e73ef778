use leadlight_scoring::Signal;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SignalsResponse {
    pub data: Vec<Signal>,
    pub count: usize,
}
