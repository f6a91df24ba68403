//! Client-side keyword filtering over already-loaded table rows.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Case-insensitive substring match against any cell. Blank keywords match.
pub fn matches_keyword(cells: &[String], keyword: &str) -> bool {
    let needle = keyword.trim().to_lowercase();
    needle.is_empty() || cells.iter().any(|cell| cell.to_lowercase().contains(&needle))
}

/// Keep the rows whose cells match `keyword`.
pub fn filter_rows<T>(rows: Vec<T>, keyword: &str, cells: impl Fn(&T) -> Vec<String>) -> Vec<T> {
    if keyword.trim().is_empty() {
        return rows;
    }
    rows.into_iter().filter(|row| matches_keyword(&cells(row), keyword)).collect()
}
