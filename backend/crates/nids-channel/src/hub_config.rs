/// Configuration for the channel hub
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Messages buffered per channel (bounded to prevent memory exhaustion)
    pub channel_capacity: usize,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 1024,
        }
    }
}
