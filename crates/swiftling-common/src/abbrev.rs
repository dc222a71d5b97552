//! Node-name expansion table for the AST dump (spec §3).
//!
//! The Swift frontend's dump abbreviates common suffixes/prefixes in node
//! names (`Decl` -> `Declaration`, `Expr` -> `Expression`, ...). `RawTree`
//! construction expands every occurrence before the name is ever seen by
//! the translator, so downstream dispatch always matches against the
//! expanded form (e.g. `"Pattern Binding Declaration"`, never
//! `"Pattern Binding Decl"`).

const ABBREVIATIONS: &[(&str, &str)] = &[
    ("Declref", "Declaration Reference"),
    ("Decl", "Declaration"),
    ("Expr", "Expression"),
    ("Func", "Function"),
    ("Ident", "Identity"),
    ("Paren", "Parentheses"),
    ("Ref", "Reference"),
    ("Stmt", "Statement"),
    ("Var", "Variable"),
];

/// Expand every abbreviation in `name`, longest match first so that e.g.
/// `"Declref"` is expanded before a bare `"Decl"` or `"Ref"` substring
/// inside it would be.
pub fn expand_node_name(name: &str) -> String {
    let mut words: Vec<String> = name.split(' ').map(|w| w.to_string()).collect();
    for word in &mut words {
        *word = expand_word(word);
    }
    words.join(" ")
}

fn expand_word(word: &str) -> String {
    for (abbrev, full) in ABBREVIATIONS {
        if word == *abbrev {
            return (*full).to_string();
        }
        if let Some(rest) = word.strip_suffix(abbrev) {
            if !rest.is_empty() {
                return format!("{rest}{full}");
            }
        }
    }
    word.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_known_abbreviations() {
        assert_eq!(expand_node_name("Pattern Binding Decl"), "Pattern Binding Declaration");
        assert_eq!(expand_node_name("Call Expr"), "Call Expression");
        assert_eq!(expand_node_name("Declref Expr"), "Declaration Reference Expression");
        assert_eq!(expand_node_name("Paren Expr"), "Parentheses Expression");
        assert_eq!(expand_node_name("Var Decl"), "Variable Declaration");
    }

    #[test]
    fn declref_expands_before_decl_and_ref() {
        // Must not be mangled into "Declaration reference" via the wrong
        // order of table lookups.
        assert_eq!(expand_word("Declref"), "Declaration Reference");
    }

    #[test]
    fn leaves_unknown_words_unchanged() {
        assert_eq!(expand_node_name("Brace Statement"), "Brace Statement");
        assert_eq!(expand_node_name("Top Level Code Declaration"), "Top Level Code Declaration");
    }

    #[test]
    fn idempotent_on_already_expanded_names() {
        let once = expand_node_name("Pattern Binding Decl");
        let twice = expand_node_name(&once);
        assert_eq!(once, twice);
    }
}
