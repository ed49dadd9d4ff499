use practice_booking_bot::store::slots::{validate_slot_labels, MAX_LABEL_LEN};
use practice_booking_bot::utils::validation::validate_player_name;

#[test]
fn test_validate_player_name_valid() {
    assert_eq!(validate_player_name("Alice").unwrap(), "Alice");
    assert_eq!(validate_player_name("Alice Smith").unwrap(), "Alice Smith");
    assert_eq!(validate_player_name("  Trimmed Name  ").unwrap(), "Trimmed Name");
    assert!(validate_player_name("O'Brien-Jones").is_ok());
}

#[test]
fn test_validate_player_name_empty() {
    assert!(validate_player_name("").is_err());
    assert!(validate_player_name("   ").is_err());
    assert!(validate_player_name("\t\n").is_err());
}

#[test]
fn test_validate_player_name_too_long() {
    let long_name = "a".repeat(101);
    assert!(validate_player_name(&long_name).is_err());

    let max_name = "a".repeat(100);
    assert!(validate_player_name(&max_name).is_ok());
}

#[test]
fn test_validate_player_name_line_breaks() {
    assert!(validate_player_name("Alice\nSmith").is_err());
    assert!(validate_player_name("Alice\rSmith").is_err());
}

#[test]
fn test_validate_slot_labels_valid() {
    assert!(validate_slot_labels("2024-05-01", "10:00").is_ok());
    assert!(validate_slot_labels("Mon 6 May", "6pm").is_ok());
    assert!(validate_slot_labels("  2024-05-01  ", "  10:00  ").is_ok());
}

#[test]
fn test_validate_slot_labels_empty() {
    assert!(validate_slot_labels("", "10:00").is_err());
    assert!(validate_slot_labels("2024-05-01", "").is_err());
    assert!(validate_slot_labels("   ", "10:00").is_err());
}

#[test]
fn test_validate_slot_labels_colon_rules() {
    // A colon in the date would make callback payloads ambiguous
    assert!(validate_slot_labels("2024:05:01", "10:00").is_err());
    // A colon in the time is expected
    assert!(validate_slot_labels("2024-05-01", "10:00").is_ok());
}

#[test]
fn test_validate_slot_labels_length() {
    let long_label = "a".repeat(MAX_LABEL_LEN + 1);
    assert!(validate_slot_labels(&long_label, "10:00").is_err());
    assert!(validate_slot_labels("2024-05-01", &long_label).is_err());

    let max_label = "a".repeat(MAX_LABEL_LEN);
    assert!(validate_slot_labels(&max_label, &max_label).is_ok());
}

#[test]
fn test_validate_slot_labels_line_breaks() {
    assert!(validate_slot_labels("2024-05-01\n", "10:00").is_err());
    assert!(validate_slot_labels("2024-05-01", "10:00\nnote").is_err());
}
