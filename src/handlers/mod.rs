// Handlers module

pub mod ask;
pub mod pages;
pub mod rejection;

pub use ask::ask_handler;
pub use pages::{about_handler, index_handler};
pub use rejection::handle_rejection;

use crate::models::RelayReply;
use warp::http::StatusCode;

/// Serialize a relay reply as JSON with the given status
pub fn json_reply(
    reply: &RelayReply,
    status: StatusCode,
) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(warp::reply::json(reply), status)
}
