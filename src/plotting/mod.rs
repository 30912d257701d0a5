// plotting/mod.rs
// Per-particle speed time series feeding the live chart

use crate::body::ParticleId;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

pub mod export;

pub use export::{export_series, write_series, ExportFormat};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: f64,
    /// A diverged step can leave this non-finite; serialized as "NaN",
    /// "inf" or "-inf" then.
    #[serde(with = "non_finite_as_text")]
    pub value: f32,
}

/// JSON has no NaN or infinity, so non-finite values travel as strings.
mod non_finite_as_text {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f32, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f32(*value)
        } else {
            serializer.serialize_str(&value.to_string())
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f32),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(v) => Ok(v),
            Repr::Text(t) => t.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Append-only (timestamp, value) log for one particle.
///
/// Unbounded unless a capacity is given, in which case only the newest
/// `capacity` samples are retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSeries {
    pub particle: ParticleId,
    /// Chart line hue in degrees [0, 360)
    pub hue: f32,
    capacity: Option<usize>,
    samples: VecDeque<Sample>,
}

impl SampleSeries {
    pub fn new(particle: ParticleId, hue: f32, capacity: Option<usize>) -> Self {
        Self {
            particle,
            hue,
            capacity,
            samples: VecDeque::new(),
        }
    }

    pub fn append(&mut self, timestamp: f64, value: f32) {
        if let Some(cap) = self.capacity {
            while self.samples.len() >= cap {
                self.samples.pop_front();
            }
        }
        self.samples.push_back(Sample { timestamp, value });
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Samples oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Sample> + '_ {
        self.samples.iter()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.back()
    }

    pub fn to_vec(&self) -> Vec<Sample> {
        self.samples.iter().copied().collect()
    }
}

/// Hue for a new chart line, uniform over the colour wheel.
pub fn random_hue(rng: &mut fastrand::Rng) -> f32 {
    rng.f32() * 360.0
}
