use std::fs;

/// Read sample patterns into string
pub fn read_sample_file() -> String {
    fs::read_to_string("tests/sample_patterns.txt").unwrap()
}

/// Read sample patterns, one per line. Empty line is a valid empty pattern
pub fn read_sample_patterns() -> Vec<String> {
    read_sample_file().lines().map(|s| s.to_owned()).collect()
}
