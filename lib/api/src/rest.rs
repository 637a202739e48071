use actix_cors::Cors;
use actix_web::error::InternalError;
use actix_web::{web, App, HttpResponse, HttpServer};
use serde::Deserialize;
use std::sync::Arc;

use safebite_catalog::CatalogStore;

const NO_SAFE_MATCHES: &str = "No safe matches found.";

#[derive(Deserialize)]
struct RecommendRequest {
    #[serde(default)]
    scanned_text: String,
    #[serde(default)]
    user_allergies: Vec<String>,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(store: Arc<CatalogStore>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(store.clone()))
                .app_data(json_config())
                .route("/recommend", web::post().to(recommend))
                .route("/health", web::get().to(health))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

/// Malformed or missing JSON bodies get the same `{"error": ...}` shape
/// as every other failure response.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let body = serde_json::json!({
            "error": format!("Request body must be JSON: {}", err)
        });
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}

async fn recommend(
    store: web::Data<Arc<CatalogStore>>,
    req: web::Json<RecommendRequest>,
) -> HttpResponse {
    let scanned_text = req.scanned_text.trim();
    if scanned_text.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Field 'scanned_text' is required."
        }));
    }

    match store.recommend(scanned_text, &req.user_allergies) {
        Ok(Some(product)) => HttpResponse::Ok().json(product),
        // Nothing safe, or the store is degraded. Both are expected
        // outcomes and share the documented no-match body.
        Ok(None) | Err(_) => HttpResponse::Ok().json(serde_json::json!({
            "error": NO_SAFE_MATCHES
        })),
    }
}

async fn health(store: web::Data<Arc<CatalogStore>>) -> HttpResponse {
    let status = if store.is_degraded() { "degraded" } else { "ok" };
    HttpResponse::Ok().json(serde_json::json!({
        "status": status,
        "products": store.product_count(),
    }))
}
