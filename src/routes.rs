use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use log::error;

use crate::inference::Classifier;
use crate::models::{ErrorResponse, PatientMeasurements, PredictionResponse};

/// POST /diabetes_prediction — cycle requête/réponse complet: payload validé
/// par le schéma, vecteur assemblé dans l'ordre fixe, inférence, mapping de
/// l'étiquette vers sa chaîne.
pub async fn diabetes_prediction(
    model: web::Data<Arc<dyn Classifier>>,
    input: web::Json<PatientMeasurements>,
) -> impl Responder {
    let features = input.into_inner().to_feature_vector();
    let model = model.get_ref().clone();

    // L'inférence est du calcul pur: on la sort du runtime async.
    match web::block(move || model.predict(&features)).await {
        Ok(Ok(outcome)) => HttpResponse::Ok().json(PredictionResponse::from(outcome)),
        Ok(Err(e)) => {
            error!("Erreur d'inférence: {e}");
            HttpResponse::InternalServerError().json(ErrorResponse::new("Erreur interne du modèle"))
        }
        Err(e) => {
            error!("Erreur d'exécution bloquante: {e}");
            HttpResponse::InternalServerError().json(ErrorResponse::new("Erreur d'exécution"))
        }
    }
}

pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(ErrorResponse::new("Endpoint non trouvé"))
}

/// Erreurs de désérialisation du payload: 400 avec le détail du champ fautif.
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    let body = ErrorResponse::new(err.to_string());
    actix_web::error::InternalError::from_response(err, HttpResponse::BadRequest().json(body))
        .into()
}
