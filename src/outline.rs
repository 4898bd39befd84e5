use serde::{Deserialize, Serialize};

use crate::math::Point2;

/// One feeder's raw reception outline: an ordered ring of points.
///
/// Each point carries at least `[x, y]`; any further coordinates (readsb
/// writes an altitude as the third value) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawOutline {
    pub points: Vec<Vec<f64>>,
}

impl RawOutline {
    /// Creates an outline from planar `(x, y)` pairs.
    #[must_use]
    pub fn from_xy(points: &[(f64, f64)]) -> Self {
        Self {
            points: points.iter().map(|&(x, y)| vec![x, y]).collect(),
        }
    }

    /// Parses the `actualRange.last24h.points` ring out of an `outline.json`
    /// document.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the document is not valid JSON or
    /// the nested key path is missing.
    pub fn from_outline_json(json: &str) -> serde_json::Result<Self> {
        let record: OutlineRecord = serde_json::from_str(json)?;
        Ok(Self {
            points: record.actual_range.last24h.points,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OutlineRecord {
    #[serde(rename = "actualRange")]
    actual_range: ActualRange,
}

#[derive(Debug, Deserialize)]
struct ActualRange {
    last24h: RangeWindow,
}

#[derive(Debug, Deserialize)]
struct RangeWindow {
    points: Vec<Vec<f64>>,
}

/// The merged coverage document: one exterior boundary per merged region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiRange {
    #[serde(rename = "multiRange")]
    pub multi_range: Vec<Vec<[f64; 2]>>,
}

impl MultiRange {
    /// Appends a boundary, dropping any auxiliary dimension.
    pub fn push_boundary(&mut self, boundary: &[Point2]) {
        self.multi_range
            .push(boundary.iter().map(|p| [p.x, p.y]).collect());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.multi_range.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.multi_range.is_empty()
    }
}
