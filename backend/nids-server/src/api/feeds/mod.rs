pub mod feed_list_response;
#[allow(clippy::module_inception)]
pub mod feeds;
