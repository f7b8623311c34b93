use actix_web::{HttpResponse, Responder, web};
use ginkgo::error::RouteError;
use ginkgo::models::{Coordinate, RideHint};
use ginkgo::odsay::OdsayClient;
use log::error;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize, Clone)]
pub struct RouteQuery {
    from_lat: f64,
    from_lng: f64,
    #[serde(default)]
    ride: String,
    #[serde(default)]
    board: String,
    #[serde(default)]
    drop: String,
}

/// Routes the clicked point to the library and returns ODsay's loadLane
/// JSON for the best-matching itinerary, verbatim.
#[actix_web::get("/api/route")]
pub async fn route_to_library(
    query: web::Query<RouteQuery>,
    odsay: web::Data<Arc<OdsayClient>>,
) -> impl Responder {
    let from = Coordinate {
        lat: query.from_lat,
        lng: query.from_lng,
    };
    let hint = RideHint {
        ride: query.ride.clone(),
        board: query.board.clone(),
        drop: query.drop.clone(),
    };

    match odsay.lane_graph_to_library(from, &hint).await {
        Ok(lane_json) => HttpResponse::Ok()
            .insert_header(("Cache-Control", "no-cache"))
            .json(lane_json),
        Err(err) => {
            error!("route resolution failed: {}", err);
            error_response(&err)
        }
    }
}

fn error_response(err: &RouteError) -> HttpResponse {
    let detail = err.to_string();
    match err {
        RouteError::UpstreamUnavailable(_) | RouteError::UpstreamReported { .. } => {
            HttpResponse::BadGateway()
                .insert_header(("Content-Type", "text/plain"))
                .body(detail)
        }
        RouteError::NoRouteFound => HttpResponse::NotFound()
            .insert_header(("Content-Type", "text/plain"))
            .body(detail),
        RouteError::MissingCredential
        | RouteError::MalformedResponse(_)
        | RouteError::MissingMapObject => HttpResponse::InternalServerError()
            .insert_header(("Content-Type", "text/plain"))
            .body(detail),
    }
}
