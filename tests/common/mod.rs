//! Common test utilities

use std::path::{Path, PathBuf};

/// Build the text of a flow file from a title, label and data lines
pub fn flow_file(title: &str, label: &str, lines: &[&str]) -> String {
    let mut text = format!("{}\n{}\n", title, label);
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    text
}

/// `count` flows named F1..Fn with values 1..n and no colours
pub fn numbered_flows(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("F{}, {}", i, i)).collect()
}

/// Write a flow file into `dir` and return its path
pub fn write_flow_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Number of non-overlapping occurrences of `needle`
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
