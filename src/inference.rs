use std::path::{Path, PathBuf};

use thiserror::Error;
use tract_onnx::prelude::*;

use crate::models::Outcome;

/// Échec de chargement de l'artefact modèle. Fatal au démarrage: le processus
/// ne doit servir aucune requête sans modèle.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("artefact modèle introuvable: {path}")]
    Missing { path: PathBuf },
    #[error("artefact modèle invalide ({path}): {reason}")]
    Invalid { path: PathBuf, reason: TractError },
}

/// Capacité d'inférence exposée au handler HTTP: un vecteur de 8 features,
/// une étiquette binaire. Le backend concret reste substituable.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &[f32; 8]) -> anyhow::Result<Outcome>;
}

/// Classifieur binaire chargé depuis un graphe ONNX via tract.
#[derive(Debug)]
pub struct OnnxClassifier {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>,
}

impl OnnxClassifier {
    pub fn load<P: AsRef<Path>>(model_path: P) -> Result<Self, ArtifactError> {
        let path = model_path.as_ref();
        if !path.exists() {
            return Err(ArtifactError::Missing {
                path: path.to_path_buf(),
            });
        }

        let model = tract_onnx::onnx()
            .model_for_path(path)
            .and_then(|m| {
                m.with_input_fact(0, InferenceFact::dt_shape(f32::datum_type(), tvec!(1, 8)))
            })
            .and_then(|m| m.into_optimized())
            .and_then(|m| m.into_runnable())
            .map_err(|e| ArtifactError::Invalid {
                path: path.to_path_buf(),
                reason: e,
            })?;

        Ok(Self { model })
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, features: &[f32; 8]) -> anyhow::Result<Outcome> {
        let input = Tensor::from_shape(&[1, 8], features)?;
        let outputs = self.model.run(tvec!(input.into()))?;
        let output = &outputs[0];

        // Les convertisseurs sklearn→ONNX émettent l'étiquette en i64; un
        // graphe à sortie continue est seuillé à 0.5.
        let label = if output.datum_type() == DatumType::I64 {
            *output
                .to_array_view::<i64>()?
                .iter()
                .next()
                .ok_or_else(|| anyhow::anyhow!("aucune sortie du modèle"))?
        } else {
            let score: f32 = *output
                .to_array_view::<f32>()?
                .iter()
                .next()
                .ok_or_else(|| anyhow::anyhow!("aucune sortie du modèle"))?;
            i64::from(score >= 0.5)
        };

        Ok(Outcome::from_label(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_fails_on_missing_artifact() {
        let err = OnnxClassifier::load("models/nexistepas.onnx").unwrap_err();
        assert!(matches!(err, ArtifactError::Missing { .. }));
    }

    #[test]
    fn load_fails_on_corrupt_artifact() {
        let dir = std::env::temp_dir();
        let path = dir.join("artefact_corrompu.onnx");
        std::fs::write(&path, b"pas un graphe onnx").unwrap();
        let err = OnnxClassifier::load(&path).unwrap_err();
        assert!(matches!(err, ArtifactError::Invalid { .. }));
        std::fs::remove_file(&path).ok();
    }
}
