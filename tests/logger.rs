use foodboard::logger::Logger;

#[test]
fn test_entries_are_returned_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());

    let entries = logger.entries();
    assert_eq!(entries.len(), 2);
    assert!(entries[0].contains("second"));
    assert!(entries[1].contains("first"));
}

#[test]
fn test_entries_are_timestamped() {
    let logger = Logger::new();
    logger.log("hello".to_string());

    let entries = logger.entries();
    assert!(entries[0].starts_with('['));
    assert!(entries[0].ends_with("hello"));
}

#[test]
fn test_clear() {
    let logger = Logger::new();
    logger.log("hello".to_string());
    logger.clear();
    assert!(logger.entries().is_empty());
}

#[test]
fn test_clones_share_the_same_log() {
    let logger = Logger::new();
    let clone = logger.clone();
    clone.log("shared".to_string());
    assert_eq!(logger.entries().len(), 1);
}
