use std::fmt;

use serde::Serialize;

use crate::data::aggregate::{improvement_factor, round4, weighted_scaled_average};
use crate::data::model::{Comparison, SeriesKind};
use crate::error::Result;

/// Rounded averages of both series, known before the ratio is taken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Averages {
    pub shortest_certificate: f64,
    pub frechet_light: f64,
}

impl Averages {
    pub fn of(comparison: &Comparison) -> Self {
        Averages {
            shortest_certificate: round4(weighted_scaled_average(&comparison.first)),
            frechet_light: round4(weighted_scaled_average(&comparison.second)),
        }
    }

    pub fn get(&self, kind: SeriesKind) -> f64 {
        match kind {
            SeriesKind::First => self.shortest_certificate,
            SeriesKind::Second => self.frechet_light,
        }
    }

    /// The factor is taken over the rounded averages.
    pub fn into_report(self) -> Result<Report> {
        Ok(Report {
            shortest_certificate: self.shortest_certificate,
            frechet_light: self.frechet_light,
            improvement_factor: improvement_factor(self.shortest_certificate, self.frechet_light)?,
        })
    }
}

/// One line per series followed by a blank line. Values always carry a
/// decimal point (`5.0`, `0.044`).
impl fmt::Display for Averages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for kind in SeriesKind::ALL {
            writeln!(f, "Average certificate length {kind}: {:?}", self.get(kind))?;
        }
        writeln!(f)
    }
}

/// Averages of both series and how much larger the second one is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Report {
    pub shortest_certificate: f64,
    pub frechet_light: f64,
    pub improvement_factor: f64,
}

impl Report {
    pub fn compute(comparison: &Comparison) -> Result<Self> {
        Averages::of(comparison).into_report()
    }

    pub fn averages(&self) -> Averages {
        Averages {
            shortest_certificate: self.shortest_certificate,
            frechet_light: self.frechet_light,
        }
    }

    /// Last line of the text report.
    pub fn factor_line(&self) -> String {
        format!("Improvement factor: {:?}", self.improvement_factor)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.averages(), self.factor_line())
    }
}
