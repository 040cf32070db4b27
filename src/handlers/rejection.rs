// Turns warp rejections into JSON error bodies

use std::convert::Infallible;
use warp::filters::body::BodyDeserializeError;
use warp::http::StatusCode;
use warp::reject::{MethodNotAllowed, UnsupportedMediaType};
use warp::Rejection;

use super::json_reply;
use crate::models::RelayReply;
use crate::relay::RelayError;

pub async fn handle_rejection(err: Rejection) -> Result<impl warp::Reply, Infallible> {
    let (status, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found.".to_string())
    } else if let Some(e) = err.find::<BodyDeserializeError>() {
        tracing::warn!(error = %e, "invalid request body");
        let relay_err = RelayError::InvalidBody;
        (relay_err.status_code(), relay_err.to_string())
    } else if err.find::<UnsupportedMediaType>().is_some() {
        let relay_err = RelayError::InvalidBody;
        (relay_err.status_code(), relay_err.to_string())
    } else if err.find::<MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "Method not allowed.".to_string(),
        )
    } else {
        tracing::error!(rejection = ?err, "unhandled rejection");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error.".to_string(),
        )
    };

    Ok(json_reply(&RelayReply::error(message), status))
}
