// src/handlers/pages.rs
// DOCUMENTATION: HTML handlers for the lunch page
// PURPOSE: Serve the page shell, the team / places fragments and static assets

use crate::errors::LunchError;
use crate::models::{CategorySelector, LunchQuery};
use crate::services::{pick_team, PlaceService};
use crate::views::assets::{APP_JS, STYLE_CSS};
use crate::views::{render_page, render_places_card, render_places_unavailable, render_team_card};
use actix_web::{http::header::ContentType, web, HttpResponse, Responder};

/// GET /
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_page())
}

/// GET /fragments/team
/// Fresh team card; never touches the places provider
pub async fn team_fragment() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_team_card(&pick_team()))
}

/// GET /fragments/places?category=...
/// Places card, or a retry notice when the provider failed
pub async fn places_fragment(
    service: web::Data<PlaceService>,
    query: web::Query<LunchQuery>,
) -> Result<impl Responder, LunchError> {
    let selector = CategorySelector::from_query(query.category.as_deref())?;

    let body = match service.query_nearby_places(selector).await {
        Ok(places) => render_places_card(&places),
        Err(e) => {
            log::warn!("Places fragment unavailable: {}", e);
            render_places_unavailable()
        }
    };

    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(body))
}

/// GET /static/{file}
pub async fn static_asset(path: web::Path<String>) -> impl Responder {
    let (content, mime) = match path.as_str() {
        "app.js" => (APP_JS, "application/javascript; charset=utf-8"),
        "style.css" => (STYLE_CSS, "text/css; charset=utf-8"),
        _ => return HttpResponse::NotFound().body("File not found"),
    };

    HttpResponse::Ok()
        .content_type(mime)
        .insert_header(("Cache-Control", "public, max-age=86400"))
        .body(content)
}

/// Configuration for page routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/fragments/team", web::get().to(team_fragment))
        .route("/fragments/places", web::get().to(places_fragment))
        .route("/static/{file}", web::get().to(static_asset));
}
