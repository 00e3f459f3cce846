use serde::{Serialize, Deserialize};

/// `{"status": "success", "data": ..., "message": ...}` wrapper for listing responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    pub data: T,
    pub message: String,
}

impl<T> Envelope<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Envelope {
            status: String::from("success"),
            data,
            message: message.into(),
        }
    }
}
