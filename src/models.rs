use serde::{Deserialize, Serialize};

/// Mesures cliniques attendues par le modèle, dans le schéma du payload JSON.
///
/// Les champs entiers doivent être intégraux; BMI et DiabetesPedigreeFunction
/// acceptent entier ou flottant. Aucune validation de plage: le modèle reçoit
/// les valeurs telles quelles.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[allow(non_snake_case)]
pub struct PatientMeasurements {
    pub Pregnancies: i64,
    pub Glucose: i64,
    pub BloodPressure: i64,
    pub SkinThickness: i64,
    pub Insulin: i64,
    pub BMI: f64,
    pub DiabetesPedigreeFunction: f64,
    pub Age: i64,
}

impl PatientMeasurements {
    /// Assemble le vecteur de features dans l'ordre d'entraînement du modèle.
    /// L'ordre est fixe: le permuter corromprait silencieusement les prédictions.
    pub fn to_feature_vector(&self) -> [f32; 8] {
        [
            self.Pregnancies as f32,
            self.Glucose as f32,
            self.BloodPressure as f32,
            self.SkinThickness as f32,
            self.Insulin as f32,
            self.BMI as f32,
            self.DiabetesPedigreeFunction as f32,
            self.Age as f32,
        ]
    }
}

/// Classe prédite par le modèle (étiquette binaire brute).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NotDiabetic,
    Diabetic,
}

impl Outcome {
    /// L'original mappe 0 vers "non diabétique" et toute autre valeur vers
    /// "diabétique"; le mapping est total sur {0, 1}.
    pub fn from_label(label: i64) -> Self {
        if label == 0 {
            Outcome::NotDiabetic
        } else {
            Outcome::Diabetic
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Outcome::NotDiabetic => "The person is not Diabetic",
            Outcome::Diabetic => "The person is Diabetic",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub result: &'static str,
}

impl From<Outcome> for PredictionResponse {
    fn from(outcome: Outcome) -> Self {
        PredictionResponse {
            result: outcome.message(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorResponse {
            error: message.into(),
        }
    }
}
