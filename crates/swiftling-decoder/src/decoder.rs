use crate::cursor::Cursor;
use crate::error::MalformedDump;
use crate::raw_tree::{KeyValueAttrs, RawTree};

/// Cursor over an AST dump string, exposing the primitive read
/// operations named in spec §4.1. Each `read_*` consumes input and
/// returns an error if the expected token isn't there; each `can_read_*`
/// peeks without consuming.
pub struct Decoder<'src> {
    cursor: Cursor<'src>,
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}

/// Characters that unconditionally terminate a "bare token" (identifier,
/// location, or declaration-reference token) when reading outside a
/// quoted string. `(`/`)` are handled separately by `read_bare_token`
/// since a declaration-reference token can embed a balanced `(file)`
/// segment.
fn is_token_terminator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

impl<'src> Decoder<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(|c| c.is_whitespace());
    }

    pub fn can_read_open_paren(&mut self) -> bool {
        self.skip_whitespace();
        self.cursor.peek() == Some('(')
    }

    pub fn read_open_paren(&mut self) -> Result<(), MalformedDump> {
        self.skip_whitespace();
        match self.cursor.advance() {
            Some('(') => Ok(()),
            _ => Err(MalformedDump::new("expected '('", self.cursor.pos())),
        }
    }

    pub fn can_read_close_paren(&mut self) -> bool {
        self.skip_whitespace();
        self.cursor.peek() == Some(')')
    }

    pub fn read_close_paren(&mut self) -> Result<(), MalformedDump> {
        self.skip_whitespace();
        match self.cursor.advance() {
            Some(')') => Ok(()),
            _ => Err(MalformedDump::new("expected ')'", self.cursor.pos())),
        }
    }

    /// Read a bare identifier: a run of alphanumeric/underscore/apostrophe
    /// characters. Used for node names and for the key half of a
    /// `key=value` attribute.
    pub fn read_identifier(&mut self) -> Result<String, MalformedDump> {
        self.skip_whitespace();
        let start = self.cursor.pos();
        self.cursor.eat_while(is_ident_char);
        let end = self.cursor.pos();
        if start == end {
            return Err(MalformedDump::new("expected an identifier", start));
        }
        Ok(self.cursor.slice(start, end).to_string())
    }

    /// Read a double-quoted string. Escaped quotes (`\"`) and literal
    /// newlines inside the string do not terminate it; the inner content
    /// is returned verbatim, including the backslash of any escape
    /// sequence (the decoder does not interpret escapes -- spec §4.1).
    pub fn read_double_quoted_string(&mut self) -> Result<String, MalformedDump> {
        self.skip_whitespace();
        if self.cursor.advance() != Some('"') {
            return Err(MalformedDump::new("expected opening '\"'", self.cursor.pos()));
        }
        let start = self.cursor.pos();
        loop {
            match self.cursor.advance() {
                None => {
                    return Err(MalformedDump::new(
                        "unterminated double-quoted string",
                        self.cursor.pos(),
                    ))
                }
                Some('\\') => {
                    // Skip the escaped character verbatim; it stays in the slice.
                    self.cursor.advance();
                }
                Some('"') => {
                    let end = self.cursor.pos() - 1;
                    return Ok(self.cursor.slice(start, end).to_string());
                }
                Some(_) => {}
            }
        }
    }

    /// Read the key half of a `key=value` attribute, if one is present at
    /// the cursor. Returns `None` (and leaves the cursor unmoved) if the
    /// next token is not followed by `=`, i.e. it's actually a standalone
    /// attribute.
    pub fn read_key(&mut self) -> Option<String> {
        self.skip_whitespace();
        let checkpoint = self.cursor.pos();
        let start = checkpoint;
        self.cursor.eat_while(is_ident_char);
        let end = self.cursor.pos();
        if start == end || self.cursor.peek() != Some('=') {
            self.rewind_to(checkpoint);
            return None;
        }
        let key = self.cursor.slice(start, end).to_string();
        self.cursor.advance(); // consume '='
        Some(key)
    }

    /// Read a standalone attribute: either a quoted string or a bare
    /// token (identifier, location token, or declaration-reference
    /// token), whichever is present.
    pub fn read_standalone_attribute(&mut self) -> Result<String, MalformedDump> {
        self.skip_whitespace();
        if self.cursor.peek() == Some('"') {
            return self.read_double_quoted_string();
        }
        self.read_bare_token()
    }

    /// Read a `file.swift:LINE:COL` location token.
    pub fn read_location(&mut self) -> Result<String, MalformedDump> {
        self.read_bare_token()
    }

    /// Read a declaration-reference token: dot-separated path segments
    /// ending in `@file:line:col`.
    pub fn read_declaration_location(&mut self) -> Result<String, MalformedDump> {
        self.read_bare_token()
    }

    /// Read a `", "`-separated identifier list (e.g. an `inherits` value
    /// naming several supertypes).
    pub fn read_identifier_list(&mut self) -> Result<String, MalformedDump> {
        let mut parts = vec![self.read_bare_token()?];
        loop {
            let checkpoint = self.cursor.pos();
            self.cursor.eat_while(|c| c == ' ');
            if self.cursor.peek() == Some(',') {
                self.cursor.advance();
                self.cursor.eat_while(|c| c == ' ');
                parts.push(self.read_bare_token()?);
            } else {
                self.rewind_to(checkpoint);
                break;
            }
        }
        Ok(parts.join(", "))
    }

    /// Read the value half of a `key=value` attribute: a quoted string,
    /// a (possibly comma-separated) run of bare tokens, or a two-location
    /// range span (`start - end`, e.g. a `range=` attribute) -- the one
    /// value shape with a literal space inside it (spec §4.2 location
    /// tokens).
    pub fn read_attribute_value(&mut self) -> Result<String, MalformedDump> {
        if self.cursor.peek() == Some('"') {
            return self.read_double_quoted_string();
        }
        let mut value = self.read_identifier_list()?;
        loop {
            let checkpoint = self.cursor.pos();
            self.cursor.eat_while(|c| c == ' ');
            if self.cursor.peek() != Some('-') {
                self.rewind_to(checkpoint);
                break;
            }
            self.cursor.advance(); // consume '-'
            if self.cursor.peek() != Some(' ') {
                self.rewind_to(checkpoint);
                break;
            }
            self.cursor.eat_while(|c| c == ' ');
            match self.read_bare_token() {
                Ok(end) => {
                    value.push_str(" - ");
                    value.push_str(&end);
                }
                Err(_) => {
                    self.rewind_to(checkpoint);
                    break;
                }
            }
        }
        Ok(value)
    }

    /// Read a bare token: a run of non-terminator characters, tolerating
    /// balanced `(...)` groups embedded in the token itself (e.g. the
    /// `Swift.(file).Int.init@test.swift:3:5` shape of a declaration
    /// reference, where `(file)` is part of the path, not a child node).
    /// Only whitespace, `,`, or an *unmatched* `)` terminate the token;
    /// the latter lets the enclosing node's own closing paren still end
    /// the token when the value contains no parens at all.
    fn read_bare_token(&mut self) -> Result<String, MalformedDump> {
        let start = self.cursor.pos();
        let mut depth: i32 = 0;
        loop {
            match self.cursor.peek() {
                None => break,
                Some(c) if is_token_terminator(c) => break,
                Some('(') => {
                    depth += 1;
                    self.cursor.advance();
                }
                Some(')') => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                    self.cursor.advance();
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }
        let end = self.cursor.pos();
        if start == end {
            return Err(MalformedDump::new(
                "expected an attribute token",
                start,
            ));
        }
        Ok(self.cursor.slice(start, end).to_string())
    }

    fn rewind_to(&mut self, pos: u32) {
        self.cursor.seek(pos);
    }

    pub fn is_eof(&mut self) -> bool {
        self.skip_whitespace();
        self.cursor.is_eof()
    }

    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }
}

/// Decode a full AST dump into a `RawTree`. Entry point used by the
/// driver's `swiftAstFromDump` (spec §4.6).
pub fn decode(source: &str) -> Result<RawTree, MalformedDump> {
    let mut decoder = Decoder::new(source);
    let tree = read_node(&mut decoder)?;
    if !decoder.is_eof() {
        return Err(MalformedDump::new(
            "trailing content after top-level node",
            decoder.pos(),
        ));
    }
    Ok(tree)
}

fn read_node(decoder: &mut Decoder) -> Result<RawTree, MalformedDump> {
    decoder.read_open_paren()?;
    let raw_name = decoder.read_identifier()?;
    let is_dictionary_expression = raw_name == "dictionary_expr";

    let mut standalone_attributes = Vec::new();
    let mut key_value_attributes = KeyValueAttrs::new();
    let mut children = Vec::new();

    loop {
        if decoder.can_read_close_paren() {
            break;
        }
        if decoder.can_read_open_paren() {
            children.push(read_node(decoder)?);
            continue;
        }
        if let Some(key) = decoder.read_key() {
            let value = decoder.read_attribute_value()?;
            key_value_attributes.insert(key, value);
        } else {
            standalone_attributes.push(decoder.read_standalone_attribute()?);
        }
    }

    decoder.read_close_paren()?;

    // Workaround for a known quirk in some frontend versions: dictionary
    // expression dumps occasionally carry one extra stray ')' emitted by
    // the key/value sub-expression pairing. Swallow it rather than
    // failing the whole decode (spec §4.1).
    if is_dictionary_expression && decoder.can_read_close_paren() {
        let _ = decoder.read_close_paren();
    }

    Ok(RawTree::new(
        &raw_name,
        standalone_attributes,
        key_value_attributes,
        children,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_leaf_node_with_standalone_and_keyed_attributes() {
        let tree = decode(r#"(declref_expr implicit type="Int")"#).unwrap();
        assert_eq!(tree.name, "Declaration Reference Expression");
        assert_eq!(tree.standalone_attributes, vec!["implicit"]);
        assert_eq!(tree.attribute("type"), Some("Int"));
    }

    #[test]
    fn decodes_nested_children() {
        let tree = decode(
            r#"(brace_stmt (return_stmt (integer_literal_expr value="1")))"#,
        )
        .unwrap();
        assert_eq!(tree.name, "Brace Statement");
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].name, "Return Statement");
        assert_eq!(
            tree.children[0].children[0].attribute("value"),
            Some("1")
        );
    }

    #[test]
    fn decodes_location_and_declref_tokens() {
        let tree = decode(
            r#"(call_expr range=test.swift:3:5 fn=Swift.(file).Int.init@test.swift:3:5)"#,
        )
        .unwrap();
        assert_eq!(tree.attribute("range"), Some("test.swift:3:5"));
        assert_eq!(
            tree.attribute("fn"),
            Some("Swift.(file).Int.init@test.swift:3:5")
        );
    }

    #[test]
    fn declref_value_with_embedded_parens_does_not_swallow_next_child() {
        let tree = decode(
            r#"(call_expr fn=Swift.(file).Int.init@test.swift:3:5 (tuple_expr))"#,
        )
        .unwrap();
        assert_eq!(
            tree.attribute("fn"),
            Some("Swift.(file).Int.init@test.swift:3:5")
        );
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].name, "Tuple Expression");
    }

    #[test]
    fn decodes_two_location_range_span() {
        let tree = decode(
            r#"(call_expr range=test.swift:3:5 - test.swift:4:9)"#,
        )
        .unwrap();
        assert_eq!(
            tree.attribute("range"),
            Some("test.swift:3:5 - test.swift:4:9")
        );
    }

    #[test]
    fn decodes_identifier_list_value() {
        let tree = decode(r#"(class_decl inherits=Equatable, Codable)"#).unwrap();
        assert_eq!(tree.attribute("inherits"), Some("Equatable, Codable"));
    }

    #[test]
    fn preserves_quoted_string_with_escaped_quote_verbatim() {
        let tree = decode(r#"(string_literal_expr value="say \"hi\"")"#).unwrap();
        assert_eq!(tree.attribute("value"), Some(r#"say \"hi\""#));
    }

    #[test]
    fn rejects_unbalanced_parens() {
        let err = decode("(brace_stmt (return_stmt)").unwrap_err();
        assert!(err.message.contains("')'"));
    }

    #[test]
    fn dictionary_expression_workaround_swallows_stray_close_paren() {
        // A well-formed dump never has a stray ')' here; this simulates
        // the known frontend quirk the decoder tolerates.
        let tree = decode(r#"(dictionary_expr (tuple_expr)))"#).unwrap();
        assert_eq!(tree.name, "Dictionary Expression");
    }

    #[test]
    fn round_trips_through_display() {
        let src = r#"(declref_expr implicit type="Int")"#;
        let tree = decode(src).unwrap();
        let reprinted = tree.to_string();
        let reparsed = decode(&reprinted).unwrap();
        assert_eq!(tree, reparsed);
    }
}
