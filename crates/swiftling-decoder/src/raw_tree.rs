use std::fmt;

use serde::Serialize;
use swiftling_common::expand_node_name;

/// An ordered key-value attribute list. Insertion order is preserved;
/// re-inserting an existing key updates the value in place rather than
/// moving it to the end, so that duplicate keys "keep the last value"
/// (spec §3) without disturbing the attribute ordering used for
/// round-trip printing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeyValueAttrs(Vec<(String, String)>);

impl KeyValueAttrs {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(existing) = self.0.iter_mut().find(|(k, _)| *k == key) {
            existing.1 = value;
        } else {
            self.0.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A single node of the decoded AST dump (spec §3).
///
/// `name` is always in canonical expanded form (abbreviation expansion
/// happens here, in the constructor, never in the decoder itself -- spec
/// §4.1). `standalone_attributes` and `children` preserve the order they
/// appeared in the source dump.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawTree {
    pub name: String,
    pub standalone_attributes: Vec<String>,
    pub key_value_attributes: KeyValueAttrs,
    pub children: Vec<RawTree>,
}

impl RawTree {
    /// Construct a node, expanding `raw_name` (e.g. `pattern_binding_decl`)
    /// through the abbreviation table into its canonical form (e.g.
    /// `Pattern Binding Declaration`).
    pub fn new(
        raw_name: &str,
        standalone_attributes: Vec<String>,
        key_value_attributes: KeyValueAttrs,
        children: Vec<RawTree>,
    ) -> Self {
        Self {
            name: canonical_name(raw_name),
            standalone_attributes,
            key_value_attributes,
            children,
        }
    }

    /// Look up an attribute value by key.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.key_value_attributes.get(key)
    }

    /// The first child whose `name` equals `name`.
    pub fn subtree(&self, name: &str) -> Option<&RawTree> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All children whose `name` equals `name`, in order.
    pub fn subtrees(&self, name: &str) -> impl Iterator<Item = &RawTree> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// The child at `index`, if present.
    pub fn child(&self, index: usize) -> Option<&RawTree> {
        self.children.get(index)
    }
}

/// Split a snake_case dump identifier into Title Case words and expand
/// any abbreviated trailing word (`Decl` -> `Declaration`, etc.) per the
/// table in spec §3.
fn canonical_name(raw_name: &str) -> String {
    let title_case = raw_name
        .split('_')
        .filter(|w| !w.is_empty())
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ");
    expand_node_name(&title_case)
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

impl fmt::Display for RawTree {
    /// Reprint the canonical parenthesized form. Used both for
    /// round-tripping (testable property 1) and for rendering an
    /// offending subtree inside a diagnostic (spec §4.2).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        write!(f, "{}", raw_name_for_display(&self.name))?;
        for attr in &self.standalone_attributes {
            if needs_quotes(attr) {
                write!(f, " \"{attr}\"")?;
            } else {
                write!(f, " {attr}")?;
            }
        }
        for (k, v) in self.key_value_attributes.iter() {
            write!(f, " {k}={v}")?;
        }
        for child in &self.children {
            write!(f, " {child}")?;
        }
        write!(f, ")")
    }
}

fn needs_quotes(attr: &str) -> bool {
    attr.chars().any(|c| c.is_whitespace()) || attr.is_empty()
}

/// Best-effort reversal of `canonical_name`, used only for `Display` so
/// round-tripped output stays close to the original dump shape. Not
/// exact for names whose abbreviation table entry is not a suffix match,
/// but sufficient for diagnostics, which only need a readable label.
fn raw_name_for_display(name: &str) -> String {
    name.split(' ')
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_name_expands_and_title_cases() {
        let t = RawTree::new("pattern_binding_decl", vec![], KeyValueAttrs::new(), vec![]);
        assert_eq!(t.name, "Pattern Binding Declaration");
    }

    #[test]
    fn duplicate_keys_keep_last_value_and_position() {
        let mut kv = KeyValueAttrs::new();
        kv.insert("type", "Int");
        kv.insert("range", "a.swift:1:1");
        kv.insert("type", "String");
        let pairs: Vec<_> = kv.iter().collect();
        assert_eq!(pairs, vec![("type", "String"), ("range", "a.swift:1:1")]);
    }

    #[test]
    fn display_round_trips_a_simple_node() {
        let mut kv = KeyValueAttrs::new();
        kv.insert("type", "Int");
        let t = RawTree::new(
            "declref_expr",
            vec!["implicit".to_string()],
            kv,
            vec![],
        );
        assert_eq!(t.to_string(), "(declref_expr implicit type=Int)");
    }

    #[test]
    fn subtree_and_subtrees_filter_by_name() {
        let child_a = RawTree::new("pattern", vec![], KeyValueAttrs::new(), vec![]);
        let child_b = RawTree::new("pattern", vec![], KeyValueAttrs::new(), vec![]);
        let child_c = RawTree::new("expr", vec![], KeyValueAttrs::new(), vec![]);
        let root = RawTree::new(
            "pattern_binding_decl",
            vec![],
            KeyValueAttrs::new(),
            vec![child_a, child_b, child_c],
        );
        assert_eq!(root.subtrees("Pattern").count(), 2);
        assert!(root.subtree("Expression").is_some());
        assert!(root.subtree("Nonexistent").is_none());
    }
}
