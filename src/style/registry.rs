//! Style name resolution
//!
//! Builtin names live in a static lookup table; user styles can be
//! registered at runtime in a [`StyleRegistry`]. All lookups are
//! case-insensitive, and an unknown name is a fatal configuration error.

use indexmap::IndexMap;
use phf::phf_map;

use super::{Csv, DebugStyle, LatexStyle, Markdown, Style};
use crate::utils::error::{TypesetError, TypesetResult};

#[derive(Debug, Clone, Copy)]
enum Builtin {
    Csv,
    Tsv,
    Latex,
    Markdown,
    Debug,
}

static BUILTIN_STYLES: phf::Map<&'static str, Builtin> = phf_map! {
    "csv" => Builtin::Csv,
    "tsv" => Builtin::Tsv,
    "latex" => Builtin::Latex,
    "markdown" => Builtin::Markdown,
    "debug" => Builtin::Debug,
};

/// Resolve a builtin style by name, case-insensitively.
pub fn resolve_style(name: &str) -> TypesetResult<Box<dyn Style>> {
    match BUILTIN_STYLES.get(name.to_ascii_lowercase().as_str()) {
        Some(Builtin::Csv) => Ok(Box::new(Csv::new())),
        Some(Builtin::Tsv) => Ok(Box::new(Csv::tab())),
        Some(Builtin::Latex) => Ok(Box::new(LatexStyle::new())),
        Some(Builtin::Markdown) => Ok(Box::new(Markdown::new())),
        Some(Builtin::Debug) => Ok(Box::new(DebugStyle::new())),
        None => Err(TypesetError::unknown_style(name)),
    }
}

type StyleCtor = Box<dyn Fn() -> Box<dyn Style> + Send + Sync>;

/// Name lookup extended with user-registered styles.
///
/// Registered names shadow the builtins, so a custom `csv` variant can
/// take over the standard name.
#[derive(Default)]
pub struct StyleRegistry {
    custom: IndexMap<String, StyleCtor>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        StyleRegistry::default()
    }

    /// Register a style constructor under a name.
    pub fn register<F>(&mut self, name: &str, ctor: F)
    where
        F: Fn() -> Box<dyn Style> + Send + Sync + 'static,
    {
        self.custom
            .insert(name.to_ascii_lowercase(), Box::new(ctor));
    }

    /// Resolve a registered or builtin style by name.
    pub fn resolve(&self, name: &str) -> TypesetResult<Box<dyn Style>> {
        match self.custom.get(name.to_ascii_lowercase().as_str()) {
            Some(ctor) => Ok(ctor()),
            None => resolve_style(name),
        }
    }

    /// Names registered on top of the builtins, in registration order.
    pub fn custom_names(&self) -> impl Iterator<Item = &str> {
        self.custom.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup_is_case_insensitive() {
        assert!(resolve_style("csv").is_ok());
        assert!(resolve_style("CSV").is_ok());
        assert!(resolve_style("Markdown").is_ok());
        assert!(resolve_style("LaTeX").is_ok());
        assert!(resolve_style("tsv").is_ok());
        assert!(resolve_style("debug").is_ok());
    }

    #[test]
    fn test_unknown_name_is_fatal() {
        let err = resolve_style("org-mode").err().unwrap();
        assert!(matches!(err, TypesetError::UnknownStyle { .. }));
    }

    #[test]
    fn test_registry_custom_style() {
        let mut registry = StyleRegistry::new();
        registry.register("Semi", || Box::new(Csv::with_separator(";")));
        let style = registry.resolve("semi").unwrap();
        assert_eq!(
            style.row(&["a".to_string(), "b".to_string()]),
            "a;b"
        );
        assert_eq!(registry.custom_names().collect::<Vec<_>>(), vec!["semi"]);
    }

    #[test]
    fn test_registry_falls_back_to_builtins() {
        let registry = StyleRegistry::new();
        assert!(registry.resolve("tsv").is_ok());
        assert!(registry.resolve("nope").is_err());
    }

    #[test]
    fn test_registry_shadows_builtin() {
        let mut registry = StyleRegistry::new();
        registry.register("csv", || Box::new(Csv::with_separator("#")));
        let style = registry.resolve("csv").unwrap();
        assert_eq!(style.row(&["a".to_string(), "b".to_string()]), "a#b");
    }
}
