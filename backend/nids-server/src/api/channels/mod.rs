#[allow(clippy::module_inception)]
pub mod channels;
pub mod publish_response;
