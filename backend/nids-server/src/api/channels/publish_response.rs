use serde::Serialize;

/// Publish acknowledgement
#[derive(Debug, Serialize)]
pub struct PublishResponse {
    pub channel: String,
    /// Subscribers the record was delivered to
    pub receivers: usize,
}
