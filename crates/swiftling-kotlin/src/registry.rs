//! The two lookup tables the Emitter consults while rendering (spec
//! §4.4): which enums are sealed classes vs. `enum class`es, and which
//! specific `(identifier, type)` function calls get a bespoke receiver
//! prefix and/or relabeled arguments. Both are populated by the driver
//! before emission begins -- typically by a template-processing pass
//! that recognizes well-known standard-library APIs.

use rustc_hash::FxHashMap;

/// How an `Enum Declaration` is rendered. Kotlin's `enum class` can't
/// give cases differing associated values, so only enums whose cases
/// are all uniform (no payload) can be `EnumClass`; anything else needs
/// `Sealed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumKind {
    Sealed,
    EnumClass,
}

#[derive(Debug, Default)]
pub struct EnumRegistry(FxHashMap<String, EnumKind>);

impl EnumRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, enum_name: impl Into<String>, kind: EnumKind) {
        self.0.insert(enum_name.into(), kind);
    }

    pub fn kind_of(&self, enum_name: &str) -> Option<EnumKind> {
        self.0.get(enum_name).copied()
    }
}

/// A rewrite for one specific Swift call, keyed by `(identifier, type)`
/// in [`FunctionTranslationRegistry`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionTranslation {
    /// Replaces the unfolded dot-chain receiver prefix, e.g. turning
    /// `Array(` into `mutableListOf(`.
    pub prefix: Option<String>,
    /// Replaces the argument labels positionally. `None` at an index
    /// leaves that argument's own label untouched; `Some(None)` forces
    /// that argument to render unlabeled.
    pub parameter_labels: Option<Vec<Option<String>>>,
}

#[derive(Debug, Default)]
pub struct FunctionTranslationRegistry(FxHashMap<(String, String), FunctionTranslation>);

impl FunctionTranslationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        identifier: impl Into<String>,
        type_name: impl Into<String>,
        translation: FunctionTranslation,
    ) {
        self.0.insert((identifier.into(), type_name.into()), translation);
    }

    pub fn lookup(&self, identifier: &str, type_name: &str) -> Option<&FunctionTranslation> {
        self.0.get(&(identifier.to_string(), type_name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_registry_round_trips() {
        let mut reg = EnumRegistry::new();
        reg.register("Shape", EnumKind::Sealed);
        assert_eq!(reg.kind_of("Shape"), Some(EnumKind::Sealed));
        assert_eq!(reg.kind_of("Unknown"), None);
    }

    #[test]
    fn function_translation_registry_keys_on_identifier_and_type() {
        let mut reg = FunctionTranslationRegistry::new();
        reg.register(
            "Array",
            "(Sequence) -> [Int]",
            FunctionTranslation { prefix: Some(String::new()), parameter_labels: None },
        );
        assert!(reg.lookup("Array", "(Sequence) -> [Int]").is_some());
        assert!(reg.lookup("Array", "other").is_none());
    }
}
