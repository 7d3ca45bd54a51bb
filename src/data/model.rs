use std::fmt;

// ---------------------------------------------------------------------------
// SeriesKind – which half of the data file a record came from
// ---------------------------------------------------------------------------

/// The two certificate producers compared by the benchmark, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    /// First section: SHORTEST_CERTIFICATE.
    First,
    /// Second section: FRECHET_LIGHT.
    Second,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 2] = [SeriesKind::First, SeriesKind::Second];

    /// Shift applied to every size so the two bars of a pair sit side by side.
    pub fn offset(self) -> f64 {
        match self {
            SeriesKind::First => -0.2,
            SeriesKind::Second => 0.2,
        }
    }

    /// Algorithm name used in the report and the chart legend.
    pub fn label(self) -> &'static str {
        match self {
            SeriesKind::First => "SHORTEST_CERTIFICATE",
            SeriesKind::Second => "FRECHET_LIGHT",
        }
    }

    /// Bar colour as plain RGB, shared by every chart backend.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            SeriesKind::First => [255, 0, 0],
            SeriesKind::Second => [0, 0, 255],
        }
    }

    pub fn index(self) -> usize {
        match self {
            SeriesKind::First => 0,
            SeriesKind::Second => 1,
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Record / Series
// ---------------------------------------------------------------------------

/// One data line: bar position and bar height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Certificate size with the series offset already applied.
    pub size: f64,
    /// Number of queries that produced a certificate of this size.
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub kind: SeriesKind,
    pub records: Vec<Record>,
}

impl Series {
    pub fn new(kind: SeriesKind) -> Self {
        Self {
            kind,
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Offset-adjusted sizes (x coordinates), in file order.
    pub fn sizes(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.size)
    }

    /// Smallest and largest x, or `None` for an empty series.
    pub fn size_range(&self) -> Option<(f64, f64)> {
        self.sizes().fold(None, |acc, x| match acc {
            None => Some((x, x)),
            Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
        })
    }
}

// ---------------------------------------------------------------------------
// Comparison – the complete parsed file
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub first: Series,
    pub second: Series,
}

impl Comparison {
    pub fn series(&self, kind: SeriesKind) -> &Series {
        match kind {
            SeriesKind::First => &self.first,
            SeriesKind::Second => &self.second,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_push_pairs_apart() {
        assert_eq!(SeriesKind::First.offset(), -0.2);
        assert_eq!(SeriesKind::Second.offset(), 0.2);
    }

    #[test]
    fn size_range_of_empty_series_is_none() {
        assert_eq!(Series::new(SeriesKind::First).size_range(), None);
    }

    #[test]
    fn size_range_ignores_file_order() {
        let series = Series {
            kind: SeriesKind::Second,
            records: vec![
                Record { size: 4.2, count: 1 },
                Record { size: 1.2, count: 3 },
                Record { size: 9.2, count: 2 },
            ],
        };
        assert_eq!(series.size_range(), Some((1.2, 9.2)));
    }
}
