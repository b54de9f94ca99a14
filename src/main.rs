pub mod inference;
pub mod models;
pub mod routes;

use std::io::{Error, ErrorKind};
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use log::{error, info};

use inference::{Classifier, OnnxClassifier};

const DEFAULT_MODEL_PATH: &str = "models/diabetes_model.onnx";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .format_module_path(false)
        .init();

    info!("🚀 Démarrage de l'API de Prédiction du Diabète");

    // Charger le modèle: échec fatal, aucune requête servie sans modèle.
    let model_path =
        std::env::var("MODEL_PATH").unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string());
    let model: Arc<dyn Classifier> = match OnnxClassifier::load(&model_path) {
        Ok(model) => {
            info!("✅ Modèle ONNX chargé: {}", model_path);
            Arc::new(model)
        }
        Err(e) => {
            error!("❌ {}", e);
            return Err(Error::new(ErrorKind::Other, e));
        }
    };
    let model_data = web::Data::new(model);

    // Configuration serveur
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let workers = std::env::var("WORKERS")
        .ok()
        .and_then(|w| w.parse().ok())
        .unwrap_or_else(num_cpus::get);

    let bind_address = format!("{}:{}", host, port);

    info!("🌐 Serveur démarré sur: http://{}", bind_address);
    info!("👷 Workers: {}", workers);
    info!("🔧 Endpoints API:");
    info!("   GET  /health               - Vérification santé");
    info!("   POST /diabetes_prediction  - Prédiction diabète");

    HttpServer::new(move || {
        // CORS permissif: toute origine, toute méthode, tout en-tête,
        // credentials autorisés (parité avec le déploiement d'origine).
        let cors = Cors::permissive();

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(model_data.clone())
            .app_data(web::JsonConfig::default().error_handler(routes::json_error_handler))
            .route("/health", web::get().to(routes::health_check))
            .route(
                "/diabetes_prediction",
                web::post().to(routes::diabetes_prediction),
            )
            .default_service(web::route().to(routes::not_found))
    })
    .workers(workers)
    .bind(&bind_address)?
    .run()
    .await
}
