//! The resolved settings record handed to the grid renderer.
//!
//! A `PlotSettings` is built fresh for every render call by folding options
//! over the defaults (see [`crate::compose`]). Every field is normalized
//! independently; cross-field checks such as `lower < upper` are left to the
//! renderer.

use serde::{Deserialize, Serialize};

/// Fully resolved plot configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotSettings {
    /// Columns of plot body. 0 means derive from the series length.
    pub width: usize,
    /// Rows of plot body. 0 means derive from the value range.
    pub height: usize,
    /// Fixed lower bound of the value axis
    #[serde(with = "float_repr")]
    pub lower: f64,
    /// Fixed upper bound of the value axis
    #[serde(with = "float_repr")]
    pub upper: f64,
    /// Left margin before the plot body, in columns
    pub offset: i64,
    /// Label printed with the plot, stored trimmed
    pub caption: String,
}

impl PlotSettings {
    /// True when the width should be derived from the series length
    pub fn auto_width(&self) -> bool {
        self.width == 0
    }

    /// True when the height should be derived from the value range
    pub fn auto_height(&self) -> bool {
        self.height == 0
    }

    /// True when a non-empty caption is set
    pub fn has_caption(&self) -> bool {
        !self.caption.is_empty()
    }
}

// JSON has no NaN or infinity literals, so non-finite bounds are written as
// strings and read back from either form.
mod float_repr {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if value.is_sign_positive() {
            serializer.serialize_str("inf")
        } else {
            serializer.serialize_str("-inf")
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => match text.as_str() {
                "NaN" => Ok(f64::NAN),
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                other => Err(D::Error::custom(format!("invalid bound '{}'", other))),
            },
        }
    }
}
