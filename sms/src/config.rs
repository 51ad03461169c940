//! Reordering configuration
//!
//! The configuration bundle recognizes the options `weight-a` .. `weight-e`,
//! either built in code or decoded from a flat JSON object. Any other key in
//! the object is rejected.

use crate::error::{Error, Result};
use serde::Deserialize;
use sms_core::SmsError;
use std::path::Path;

/// Weights of the five row-selection criteria
///
/// - `a`: share of the row's nonzeros relative to the densest row
/// - `b`: fraction of the row's nonzeros left of the cursor
/// - `c`: fraction of the row's nonzeros at or right of the cursor
/// - `d`: fraction of the row's nonzeros in columns no placed row touches yet
/// - `e`: closeness of the nearest non-pivot nonzero right of the cursor
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Weights {
    #[serde(rename = "weight-a")]
    pub a: f64,
    #[serde(rename = "weight-b")]
    pub b: f64,
    #[serde(rename = "weight-c")]
    pub c: f64,
    #[serde(rename = "weight-d")]
    pub d: f64,
    #[serde(rename = "weight-e")]
    pub e: f64,
}

impl Weights {
    /// Default weights (4.5, 2.0, 1.0, 2.0, 0.5)
    pub const DEFAULT: Weights = Weights {
        a: 4.5,
        b: 2.0,
        c: 1.0,
        d: 2.0,
        e: 0.5,
    };

    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64) -> Self {
        Self { a, b, c, d, e }
    }

    /// Sum of absolute values
    pub fn total(&self) -> f64 {
        self.a.abs() + self.b.abs() + self.c.abs() + self.d.abs() + self.e.abs()
    }

    /// Divide every weight by [`Weights::total`]
    ///
    /// Fails with a configuration error when the total is zero or not a
    /// finite number.
    pub fn normalized(&self) -> std::result::Result<Self, SmsError> {
        let t = self.total();
        if !(t.is_finite() && t > 0.0) {
            return Err(SmsError::DegenerateWeights);
        }
        Ok(Self {
            a: self.a / t,
            b: self.b / t,
            c: self.c / t,
            d: self.d / t,
            e: self.e / t,
        })
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration for a reordering run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReorderConfig {
    pub weights: Weights,
}

impl ReorderConfig {
    pub fn with_weights(weights: Weights) -> Self {
        Self { weights }
    }

    pub fn with_weight_a(mut self, a: f64) -> Self {
        self.weights.a = a;
        self
    }

    pub fn with_weight_b(mut self, b: f64) -> Self {
        self.weights.b = b;
        self
    }

    pub fn with_weight_c(mut self, c: f64) -> Self {
        self.weights.c = c;
        self
    }

    pub fn with_weight_d(mut self, d: f64) -> Self {
        self.weights.d = d;
        self
    }

    pub fn with_weight_e(mut self, e: f64) -> Self {
        self.weights.e = e;
        self
    }

    /// Decode a JSON bundle; absent options keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let weights: Weights = serde_json::from_str(json)?;
        Ok(Self::with_weights(weights))
    }

    /// Load a JSON bundle from a file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Cannot read configuration file '{}'", path.display()), e)
        })?;
        Self::from_json_str(&text)
    }
}
