// POST /api/doraemon handler

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;
use warp::http::StatusCode;

use super::json_reply;
use crate::models::{AskRequest, RelayReply};
use crate::relay::Relay;

pub async fn ask_handler(
    relay: Arc<Relay>,
    request: AskRequest,
) -> Result<impl warp::Reply, Infallible> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("ask", request_id = %request_id);

    async move {
        let started = Instant::now();
        let question_len = request.question.as_deref().map_or(0, str::len);
        tracing::info!(question_len, "POST /api/doraemon");

        let (reply, status) = match relay.ask(&request).await {
            Ok(answer) => {
                tracing::info!(
                    answer_len = answer.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "answered"
                );
                (RelayReply::answer(answer), StatusCode::OK)
            }
            Err(e) => {
                let status = e.status_code();
                if status.is_server_error() {
                    tracing::error!(
                        error = %e,
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "relay failed"
                    );
                } else {
                    tracing::warn!(error = %e, "rejected");
                }
                (RelayReply::error(e.to_string()), status)
            }
        };

        Ok::<_, Infallible>(json_reply(&reply, status))
    }
    .instrument(span)
    .await
}
