use definition::LabelMap;
use trackplot_core::{encode, EncodedColumn};

#[test]
fn encodes_in_first_appearance_order() {
    let column = vec![
        Some("B1".to_string()),
        Some("GUF".to_string()),
        Some("B1".to_string()),
        Some(String::new()),
        None,
        Some("GUF".to_string()),
    ];
    let encoded = encode(&column);

    assert_eq!(encoded.codes, vec![1, 2, 1, 0, 0, 2]);
    let expected: LabelMap = [(0, ""), (1, "B1"), (2, "GUF")]
        .into_iter()
        .map(|(code, label)| (code, label.to_string()))
        .collect();
    assert_eq!(encoded.labels, expected);
    assert_eq!(encoded.category_count(), 2);
}

#[test]
fn accepts_borrowed_strings() {
    let encoded = encode(&[Some("Gas"), Some("Water"), Some("Gas")]);
    assert_eq!(encoded.codes, vec![1, 2, 1]);
    assert_eq!(encoded.label(2), Some("Water"));
    assert_eq!(encoded.label(7), None);
}

#[test]
fn empty_and_missing_only_column() {
    let encoded = encode::<&str>(&[None, Some(""), None]);
    assert_eq!(encoded.codes, vec![0, 0, 0]);
    assert_eq!(encoded.labels.len(), 1);
    assert_eq!(encoded.label(0), Some(""));
    assert_eq!(encoded.category_count(), 0);
}

#[test]
fn empty_column_still_reserves_zero() {
    let encoded = encode::<String>(&[]);
    assert!(encoded.codes.is_empty());
    assert_eq!(encoded.label(0), Some(""));
}

#[test]
fn tick_values_and_text_line_up() {
    let encoded = encode(&[Some("Coal"), None, Some("Sand")]);
    assert_eq!(encoded.tick_values(), vec![0.0, 1.0, 2.0]);
    assert_eq!(encoded.tick_text(), vec!["", "Coal", "Sand"]);
}

#[test]
fn input_column_is_left_untouched() {
    let column = vec![Some("A".to_string()), None];
    let before = column.clone();
    let _ = encode(&column);
    assert_eq!(column, before);
}

#[test]
fn hand_built_column_without_labels_has_no_categories() {
    let column = EncodedColumn {
        codes: Vec::new(),
        labels: LabelMap::new(),
    };
    assert_eq!(column.category_count(), 0);
}
