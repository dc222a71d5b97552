//! Swift-to-Kotlin type name mapping (spec §4.4). Applied recursively so
//! that container shims (`[T]`, `[K: V]`, `ArrayReference<T>`,
//! `DictionaryReference<K, V>`) map their element types too.

const PRIMITIVES: &[(&str, &str)] = &[
    ("Bool", "Boolean"),
    ("Error", "Exception"),
    ("UInt8", "UByte"),
    ("UInt16", "UShort"),
    ("UInt32", "UInt"),
    ("UInt64", "ULong"),
    ("Int8", "Byte"),
    ("Int16", "Short"),
    ("Int32", "Int"),
    ("Int64", "Long"),
    ("Float32", "Float"),
    ("Float64", "Double"),
    ("Character", "Char"),
];

/// Maps one Swift type string to its Kotlin equivalent.
pub fn map_type(type_name: &str) -> String {
    let t = type_name.trim();

    if t == "()" {
        return "Unit".to_string();
    }

    if let Some(inner) = t.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        return match split_top_level(inner, ':') {
            Some((k, v)) => format!("MutableMap<{}, {}>", map_type(k), map_type(v)),
            None => format!("MutableList<{}>", map_type(inner)),
        };
    }

    if let Some(inner) = t.strip_prefix("ArrayReference<").and_then(|s| s.strip_suffix('>')) {
        return format!("MutableList<{}>", map_type(inner));
    }

    if let Some(inner) = t.strip_prefix("DictionaryReference<").and_then(|s| s.strip_suffix('>')) {
        return match split_top_level(inner, ',') {
            Some((k, v)) => format!("MutableMap<{}, {}>", map_type(k), map_type(v)),
            None => t.to_string(),
        };
    }

    for (from, to) in PRIMITIVES {
        if t == *from {
            return (*to).to_string();
        }
    }

    t.to_string()
}

/// Splits `s` at the first top-level occurrence of `sep`, skipping
/// occurrences nested inside `[]`, `()` or `<>`.
fn split_top_level(s: &str, sep: char) -> Option<(&str, &str)> {
    let mut depth = 0i32;
    for (i, c) in s.char_indices() {
        match c {
            '[' | '(' | '<' => depth += 1,
            ']' | ')' | '>' => depth -= 1,
            _ if c == sep && depth == 0 => return Some((s[..i].trim(), s[i + 1..].trim())),
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_primitive_types() {
        assert_eq!(map_type("Bool"), "Boolean");
        assert_eq!(map_type("Int32"), "Int");
        assert_eq!(map_type("Float64"), "Double");
        assert_eq!(map_type("Character"), "Char");
    }

    #[test]
    fn maps_unit() {
        assert_eq!(map_type("()"), "Unit");
    }

    #[test]
    fn maps_array_shorthand_recursively() {
        assert_eq!(map_type("[Int32]"), "MutableList<Int>");
    }

    #[test]
    fn maps_dictionary_shorthand_recursively() {
        assert_eq!(map_type("[String: Int32]"), "MutableMap<String, Int>");
    }

    #[test]
    fn maps_reference_shims() {
        assert_eq!(map_type("ArrayReference<Bool>"), "MutableList<Boolean>");
        assert_eq!(map_type("DictionaryReference<String, Int32>"), "MutableMap<String, Int>");
    }

    #[test]
    fn leaves_unknown_types_alone() {
        assert_eq!(map_type("Shape"), "Shape");
    }
}
