use strum::Display;

use crate::Weight;

pub const POUNDS_PER_KILOGRAM: f32 = 2.205;

#[derive(Debug, Default, Display, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    #[default]
    #[strum(serialize = "lbs")]
    Pound,
    #[strum(serialize = "kg")]
    Kilogram,
}

impl WeightUnit {
    #[must_use]
    pub fn from_use_kg(use_kg: bool) -> Self {
        if use_kg {
            WeightUnit::Kilogram
        } else {
            WeightUnit::Pound
        }
    }

    #[must_use]
    pub fn is_kg(self) -> bool {
        self == WeightUnit::Kilogram
    }

    /// Convert a value in the stored unit into this unit.
    #[must_use]
    pub fn convert(self, value: f32) -> f32 {
        match self {
            WeightUnit::Pound => value,
            WeightUnit::Kilogram => value / POUNDS_PER_KILOGRAM,
        }
    }

    #[must_use]
    pub fn formatter(self) -> WeightFormatter<impl Fn(f32) -> f32> {
        WeightFormatter::new(self.is_kg(), move |value| self.convert(value))
    }
}

/// Renders stored weights in the unit the user prefers.
///
/// The conversion only affects text. Numeric values always stay in the stored unit.
pub struct WeightFormatter<F> {
    unit: WeightUnit,
    convert: F,
}

impl<F: Fn(f32) -> f32> WeightFormatter<F> {
    pub fn new(use_kg: bool, convert: F) -> Self {
        Self {
            unit: WeightUnit::from_use_kg(use_kg),
            convert,
        }
    }

    #[must_use]
    pub fn unit(&self) -> WeightUnit {
        self.unit
    }

    /// Format a weight, e.g. "102.5lbs" or "49.9kg".
    #[must_use]
    pub fn weight(&self, weight: Weight) -> String {
        self.weight_value(f32::from(weight))
    }

    #[must_use]
    pub fn weight_value(&self, value: f32) -> String {
        format!("{}{}", format_decimal((self.convert)(value)), self.unit)
    }

    /// Format a volume as a whole number with thousands separators, e.g. "12,480".
    #[must_use]
    pub fn volume(&self, volume: f32) -> String {
        let converted = (self.convert)(volume).round().max(0.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        group_thousands(converted as u64)
    }
}

fn format_decimal(value: f32) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract().abs() < f32::EPSILON {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}
