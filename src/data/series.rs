use serde::Deserialize;

/// Two numeric series sharing one category axis
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPair {
    pub dataset_one: Vec<f64>,
    pub dataset_two: Vec<f64>,
}

impl SeriesPair {
    pub fn new(dataset_one: Vec<f64>, dataset_two: Vec<f64>) -> Self {
        Self {
            dataset_one,
            dataset_two,
        }
    }

    /// True when both series have no elements
    pub fn is_empty(&self) -> bool {
        self.dataset_one.is_empty() && self.dataset_two.is_empty()
    }
}
