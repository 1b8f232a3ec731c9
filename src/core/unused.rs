use std::collections::HashSet;

/// Declared sprite identifiers that no source file references.
///
/// Keeps the order of `declared`.
pub fn find_unused_icons(declared: &[String], used: &HashSet<String>) -> Vec<String> {
    declared
        .iter()
        .filter(|id| !used.contains(*id))
        .cloned()
        .collect()
}
