use serde::{Deserialize, Serialize};

use crate::chunk::Number;

/// How numbers are rendered when a column converts them to categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NumberFormat {
    /// Integers as plain decimal, floats as the shortest round-trip text.
    Shortest,
    /// Every value as a float with a fixed number of decimals (`1.000000`).
    Fixed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ChunkConfig {
    #[serde(default = "ChunkConfig::default_number_format")]
    pub number_format: NumberFormat,
    #[serde(default = "ChunkConfig::default_fixed_precision")]
    pub fixed_precision: usize,
    #[serde(default)]
    pub initial_capacity: usize,
}

impl ChunkConfig {
    fn default_number_format() -> NumberFormat {
        NumberFormat::Shortest
    }

    fn default_fixed_precision() -> usize {
        6
    }

    /// Canonical decimal text of a number arriving on a categorical column.
    ///
    /// Under `Fixed`, integers keep their plain decimal form and floats are
    /// printed from their single-precision value.
    pub fn render(&self, value: Number) -> String {
        match (self.number_format, value) {
            (_, Number::Int(v)) => v.to_string(),
            (_, Number::UInt(v)) => v.to_string(),
            (NumberFormat::Shortest, Number::Float(v)) => v.to_string(),
            (NumberFormat::Fixed, Number::Float(v)) => self.fixed(v),
        }
    }

    /// Canonical decimal text of a value already held in a numeric store,
    /// used when the whole store converts to categories.
    pub fn render_stored(&self, value: Number) -> String {
        match self.number_format {
            NumberFormat::Shortest => self.render(value),
            NumberFormat::Fixed => self.fixed(value.as_f64()),
        }
    }

    fn fixed(&self, value: f64) -> String {
        format!("{:.*}", self.fixed_precision, value as f32)
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            number_format: Self::default_number_format(),
            fixed_precision: Self::default_fixed_precision(),
            initial_capacity: 0,
        }
    }
}
