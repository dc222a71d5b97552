/// Uppercases the first character only; everything else (spec §4.4:
/// enum case names and constructors) is assumed already camelCase.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// The 100-column line budget the Emitter reflows function signatures
/// and call expressions against (spec §4.4).
pub fn fits_line_budget(indent: &str, rendered: &str) -> bool {
    indent.chars().count() + rendered.chars().count() <= 100
}

/// A rendered scrutinee is treated as a range pattern -- and prefixed
/// with `in` in a `when` arm -- when it looks like one of Kotlin's range
/// constructors.
pub fn is_range_pattern(rendered: &str) -> bool {
    rendered.contains("..") || rendered.contains(" until ") || rendered.contains(".rangeTo(")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_uppercases_first_char_only() {
        assert_eq!(capitalize("circle"), "Circle");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn line_budget_accounts_for_indent() {
        let indent = "\t\t";
        assert!(fits_line_budget(indent, &"x".repeat(90)));
        assert!(!fits_line_budget(indent, &"x".repeat(99)));
    }

    #[test]
    fn detects_range_patterns() {
        assert!(is_range_pattern("0..<10"));
        assert!(is_range_pattern("0 until 10"));
        assert!(!is_range_pattern("n == 3"));
    }
}
