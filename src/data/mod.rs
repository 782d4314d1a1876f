use serde::{Deserialize, Serialize};

/// One paired observation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Sample {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Ordered, read-only collection of samples. Length is not checked here;
/// the estimator rejects sets with fewer than two points.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleSet {
    samples: Vec<Sample>,
}

impl SampleSet {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        Self {
            samples: pairs.iter().copied().map(Sample::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Arithmetic mean of the x values. NaN for an empty set.
    pub fn mean_x(&self) -> f64 {
        self.samples.iter().map(|s| s.x).sum::<f64>() / self.samples.len() as f64
    }

    /// Arithmetic mean of the y values. NaN for an empty set.
    pub fn mean_y(&self) -> f64 {
        self.samples.iter().map(|s| s.y).sum::<f64>() / self.samples.len() as f64
    }

    pub fn to_pairs(&self) -> Vec<(f64, f64)> {
        self.samples.iter().map(|s| (s.x, s.y)).collect()
    }
}

impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_means_of_simple_set() {
        let set = SampleSet::from_pairs(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]);
        assert_eq!(set.len(), 3);
        assert!((set.mean_x() - 1.0).abs() < 1e-12);
        assert!((set.mean_y() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let set = SampleSet::from_pairs(&[(1.0, 2.0)]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"[{"x":1.0,"y":2.0}]"#);
    }
}
