use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AddNameRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddNameResponse {
    pub message: String,
    pub name: String,
}

impl AddNameResponse {
    pub fn added(name: String) -> Self {
        Self {
            message: "Name added".to_string(),
            name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamesResponse {
    pub names: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
