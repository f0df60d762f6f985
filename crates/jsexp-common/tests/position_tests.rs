use super::*;

#[test]
fn test_default_position_is_first_character() {
    assert_eq!(Position::default(), Position::new(1, 1));
    assert_eq!(Position::default(), Position::START);
}

#[test]
fn test_position_display() {
    assert_eq!(Position::new(12, 7).to_string(), "12:7");
}

#[test]
fn test_position_ordering_is_line_major() {
    assert!(Position::new(1, 40) < Position::new(2, 1));
    assert!(Position::new(3, 2) < Position::new(3, 9));
}

#[test]
fn test_position_json_shape() {
    let json = serde_json::to_string(&Position::new(4, 2)).unwrap();
    assert_eq!(json, r#"{"line":4,"column":2}"#);
    let back: Position = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Position::new(4, 2));
}
