use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Minimal capability surface the pipeline needs from a model: its declared
/// input columns, in order, and a single scalar prediction. Keeping the seam
/// this narrow lets tests drive the pipeline with stub predictors of
/// arbitrary schema shape.
pub trait Predictor: Send + Sync {
    /// Authoritative input column order.
    fn schema(&self) -> &[String];

    /// Predict calories burned for one schema-ordered feature vector.
    fn predict(&self, features: &[f64]) -> Result<f64>;
}

#[derive(Deserialize)]
struct ModelArtifact {
    feat_list: Vec<String>,
    weights: Vec<f64>,
    intercept: f64,
}

/// A fitted linear regression, loaded from its persisted JSON artifact.
/// Read-only for the process lifetime; no reload, no hot-swap.
#[derive(Debug)]
pub struct LinearModel {
    feat_list: Vec<String>,
    weights: Vec<f64>,
    intercept: f64,
}

impl LinearModel {
    pub fn load(path: &str) -> Result<Self> {
        let txt = fs::read_to_string(Path::new(path))
            .with_context(|| format!("failed to read model artifact at {}", path))?;
        let artifact: ModelArtifact =
            serde_json::from_str(&txt).with_context(|| "failed to parse model artifact")?;

        if artifact.feat_list.is_empty() {
            bail!("model artifact declares no input columns");
        }
        if artifact.weights.len() != artifact.feat_list.len() {
            bail!(
                "model artifact mismatch: {} weights for {} columns",
                artifact.weights.len(),
                artifact.feat_list.len()
            );
        }

        Ok(Self {
            feat_list: artifact.feat_list,
            weights: artifact.weights,
            intercept: artifact.intercept,
        })
    }
}

impl Predictor for LinearModel {
    fn schema(&self) -> &[String] {
        &self.feat_list
    }

    fn predict(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.weights.len() {
            bail!(
                "feature length mismatch: got {}, expected {}",
                features.len(),
                self.weights.len()
            );
        }
        let dot: f64 = self.weights.iter().zip(features).map(|(w, x)| w * x).sum();
        Ok(self.intercept + dot)
    }
}
