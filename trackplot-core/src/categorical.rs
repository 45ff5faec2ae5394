use definition::LabelMap;
use serde::Serialize;
use std::collections::HashMap;

/// Integer codes for a string column plus the reverse code-to-label map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedColumn {
    pub codes: Vec<u32>,
    pub labels: LabelMap,
}

impl EncodedColumn {
    pub fn label(&self, code: u32) -> Option<&str> {
        self.labels.get(&code).map(String::as_str)
    }

    /// Number of distinct non-empty labels.
    pub fn category_count(&self) -> usize {
        self.labels.len().saturating_sub(1)
    }

    pub fn tick_values(&self) -> Vec<f64> {
        self.labels.keys().map(|code| f64::from(*code)).collect()
    }

    pub fn tick_text(&self) -> Vec<String> {
        self.labels.values().cloned().collect()
    }
}

fn as_label<S: AsRef<str>>(value: &Option<S>) -> Option<&str> {
    value.as_ref().map(|s| s.as_ref())
}

/// Encodes a categorical column. Missing and empty entries become `0`;
/// distinct labels get `1, 2, 3, ...` in order of first appearance.
pub fn encode<S: AsRef<str>>(column: &[Option<S>]) -> EncodedColumn {
    let mut lookup: HashMap<&str, u32> = HashMap::new();
    let mut labels = LabelMap::new();
    labels.insert(0, String::new());

    let codes = column
        .iter()
        .map(|value| match as_label(value) {
            None | Some("") => 0,
            Some(label) => {
                let next = lookup.len() as u32 + 1;
                *lookup.entry(label).or_insert_with(|| {
                    labels.insert(next, label.to_string());
                    next
                })
            }
        })
        .collect();

    EncodedColumn { codes, labels }
}
