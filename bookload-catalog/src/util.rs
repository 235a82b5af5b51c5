/// Pluralize a simple English noun for a count (e.g., "1 copy", "2 copies").
///
/// Only handles the cases the import reports need: a trailing `y` becomes
/// `ies`, everything else gets an `s`.
pub fn pluralize(word: &str, count: u64) -> String {
    if count == 1 {
        return word.to_string();
    }
    match word.strip_suffix('y') {
        Some(stem) => format!("{stem}ies"),
        None => format!("{word}s"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("book", 1), "book");
        assert_eq!(pluralize("book", 0), "books");
        assert_eq!(pluralize("book", 2), "books");
        assert_eq!(pluralize("copy", 1), "copy");
        assert_eq!(pluralize("copy", 3), "copies");
        assert_eq!(pluralize("row", 12), "rows");
    }
}
