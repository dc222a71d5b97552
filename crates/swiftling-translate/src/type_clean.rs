/// Clean up a type string read from the dump (spec §4.2.3):
/// - strip a leading `@lvalue ` prefix;
/// - if the result is wrapped in a single redundant pair of parentheses
///   around something that is neither a tuple (`,`) nor a function type
///   (`->`), strip that pair too -- repeating until no more apply, so the
///   function is its own fixpoint and therefore idempotent (testable
///   property 2, spec §8) for every input, not just singly-parenthesized
///   ones.
pub fn clean_up_type(t: &str) -> String {
    let mut result = t.strip_prefix("@lvalue ").unwrap_or(t).to_string();
    loop {
        if let Some(inner) = strip_redundant_parens(&result) {
            result = inner;
        } else {
            break;
        }
    }
    result
}

fn strip_redundant_parens(t: &str) -> Option<String> {
    let inner = t.strip_prefix('(')?.strip_suffix(')')?;
    if inner.contains("->") || inner.contains(',') {
        None
    } else {
        Some(inner.to_string())
    }
}
