//! Generation parameters.

use serde::{Deserialize, Serialize};

use crate::engine::ScatterParams;
use crate::generate::GenerateError;

/// Largest accepted field dimension.
pub const MAX_DIM: u32 = 16384;

/// Linear tone-mapping range for the exported height image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToneRange {
    pub min: f32,
    pub max: f32,
}

impl Default for ToneRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 255.0,
        }
    }
}

impl ToneRange {
    pub fn validate(&self) -> Result<(), GenerateError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(GenerateError::InvalidParameter(format!(
                "tone_range must be finite, got [{}, {}]",
                self.min, self.max
            )));
        }
        if self.max <= self.min {
            return Err(GenerateError::InvalidParameter(format!(
                "tone_range max must exceed min, got [{}, {}]",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Parameters for one greeble generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GreebleParams {
    /// Field width and height in pixels.
    #[serde(default = "default_dim")]
    pub dim: u32,
    /// Minimum region/diameter size below which subdivision stops.
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// RNG seed.
    #[serde(default)]
    pub seed: u64,
    /// Top-level tiles per side, each partitioned independently.
    #[serde(default = "default_regions")]
    pub regions: u32,
    /// Height image tone mapping.
    #[serde(default)]
    pub tone_range: ToneRange,
    /// Free-floating detail added before partitioning.
    #[serde(default, skip_serializing_if = "ScatterParams::is_empty")]
    pub scatter: ScatterParams,
}

fn default_dim() -> u32 {
    1024
}

fn default_limit() -> u32 {
    32
}

fn default_regions() -> u32 {
    1
}

impl Default for GreebleParams {
    fn default() -> Self {
        Self {
            dim: default_dim(),
            limit: default_limit(),
            seed: 0,
            regions: default_regions(),
            tone_range: ToneRange::default(),
            scatter: ScatterParams::default(),
        }
    }
}

impl GreebleParams {
    /// Parameters for `dim`, `limit`, `seed` with everything else defaulted.
    pub fn new(dim: u32, limit: u32, seed: u64) -> Self {
        Self {
            dim,
            limit,
            seed,
            ..Self::default()
        }
    }

    /// Reject parameters that would produce a degenerate or unbounded run.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.dim == 0 {
            return Err(GenerateError::InvalidParameter(
                "dim must be positive".to_string(),
            ));
        }
        if self.dim > MAX_DIM {
            return Err(GenerateError::InvalidParameter(format!(
                "dim must be at most {}, got {}",
                MAX_DIM, self.dim
            )));
        }
        if self.limit == 0 {
            return Err(GenerateError::InvalidParameter(
                "limit must be positive".to_string(),
            ));
        }
        if self.limit >= self.dim {
            return Err(GenerateError::InvalidParameter(format!(
                "limit must be less than dim ({}), got {}",
                self.dim, self.limit
            )));
        }
        if self.regions == 0 || self.regions > self.dim {
            return Err(GenerateError::InvalidParameter(format!(
                "regions must be in [1, {}], got {}",
                self.dim, self.regions
            )));
        }
        self.tone_range.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_valid() {
        let params = GreebleParams::default();
        assert_eq!(params.dim, 1024);
        assert_eq!(params.regions, 1);
        params.validate().unwrap();
    }

    #[test]
    fn rejects_bad_dim_and_limit() {
        let cases = [
            (GreebleParams::new(0, 1, 0), "dim"),
            (GreebleParams::new(MAX_DIM + 1, 8, 0), "dim"),
            (GreebleParams::new(64, 0, 0), "limit"),
            (GreebleParams::new(64, 64, 0), "limit"),
            (GreebleParams::new(64, 100, 0), "limit"),
        ];
        for (params, field) in cases {
            let err = params.validate().unwrap_err();
            assert!(err.to_string().contains(field), "{}", err);
        }
    }

    #[test]
    fn rejects_bad_regions_and_tone_range() {
        let mut params = GreebleParams::new(64, 8, 0);
        params.regions = 0;
        assert!(params.validate().unwrap_err().to_string().contains("regions"));

        let mut params = GreebleParams::new(64, 8, 0);
        params.tone_range = ToneRange {
            min: 10.0,
            max: 10.0,
        };
        assert!(params.validate().unwrap_err().to_string().contains("tone_range"));

        params.tone_range = ToneRange {
            min: 0.0,
            max: f32::NAN,
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn json_uses_defaults_for_missing_fields() {
        let params: GreebleParams = serde_json::from_str(r#"{"dim": 256, "seed": 9}"#).unwrap();
        assert_eq!(
            params,
            GreebleParams {
                dim: 256,
                seed: 9,
                ..GreebleParams::default()
            }
        );
    }

    #[test]
    fn json_rejects_unknown_fields() {
        let result: Result<GreebleParams, _> = serde_json::from_str(r#"{"dimension": 256}"#);
        assert!(result.is_err());
    }

    #[test]
    fn json_scatter_roundtrip() {
        let json = r#"{"dim": 512, "limit": 16, "scatter": {"grooves": 100, "rows": 150}}"#;
        let params: GreebleParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.scatter.grooves, 100);
        assert_eq!(params.scatter.rectangles, 0);
        assert_eq!(params.scatter.rows, 150);
        params.validate().unwrap();
    }
}
