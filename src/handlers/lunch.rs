// src/handlers/lunch.rs
// DOCUMENTATION: HTTP handler for place suggestions
// PURPOSE: Parse the category, call PlaceService, return JSON

use crate::errors::LunchError;
use crate::models::{CategorySelector, LunchQuery, LunchResponse};
use crate::services::{pick_team, PlaceService};
use actix_web::{web, HttpResponse, Responder};

/// GET /lunch?category={전체|식당|카페}
/// Up to three nearby places for the category (default 전체)
pub async fn get_lunch(
    service: web::Data<PlaceService>,
    query: web::Query<LunchQuery>,
) -> Result<impl Responder, LunchError> {
    let selector = CategorySelector::from_query(query.category.as_deref())?;
    let results = service.query_nearby_places(selector).await?;
    Ok(HttpResponse::Ok().json(LunchResponse { results }))
}

/// GET /team
/// Today's lunch team as JSON
pub async fn get_team() -> impl Responder {
    HttpResponse::Ok().json(pick_team())
}

/// Configuration for lunch routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/lunch", web::get().to(get_lunch))
        .route("/team", web::get().to(get_team));
}
