use serde::{Deserialize, Serialize};
use crate::models::ResponseItem;

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Responses submitted successfully!";

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub responses: Vec<ResponseItem>,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub message: String,
    pub data: Vec<ResponseItem>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
