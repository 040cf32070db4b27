// Route definitions

use std::convert::Infallible;
use std::sync::Arc;
use warp::Filter;

use crate::handlers;
use crate::relay::Relay;

pub fn configure_routes(
    relay: Arc<Relay>,
) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
    // GET /
    let index = warp::path::end()
        .and(warp::get())
        .and_then(handlers::index_handler);

    // GET /about
    let about = warp::path("about")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(handlers::about_handler);

    // POST /api/doraemon
    let ask = warp::path("api")
        .and(warp::path("doraemon"))
        .and(warp::path::end())
        .and(warp::post())
        .and(with_relay(relay))
        .and(warp::body::json())
        .and_then(handlers::ask_handler);

    index.or(about).or(ask).recover(handlers::handle_rejection)
}

fn with_relay(relay: Arc<Relay>) -> impl Filter<Extract = (Arc<Relay>,), Error = Infallible> + Clone {
    warp::any().map(move || relay.clone())
}
