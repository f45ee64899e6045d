//! # repolyzer-lang
//!
//! **Tier 1 (Classification)**
//!
//! Maps file extensions to language/format labels. The same table drives the
//! language aggregator and the marker scanner's file filter, so a file type is
//! either counted everywhere or nowhere.
//!
//! ## What belongs here
//! * The extension table and lookups over it
//! * Display color hints per language
//!
//! ## What does NOT belong here
//! * Reading files or counting lines (use repolyzer-content)
//! * Directory traversal (use repolyzer-walk)

#![forbid(unsafe_code)]

use std::path::Path;

/// Extension (case-sensitive, with leading dot) to language label.
pub const EXTENSIONS: &[(&str, &str)] = &[
    (".py", "Python"),
    (".js", "JavaScript"),
    (".ts", "TypeScript"),
    (".tsx", "TypeScript"),
    (".jsx", "JavaScript"),
    (".rs", "Rust"),
    (".go", "Go"),
    (".java", "Java"),
    (".kt", "Kotlin"),
    (".rb", "Ruby"),
    (".php", "PHP"),
    (".c", "C"),
    (".h", "C"),
    (".cpp", "C++"),
    (".cc", "C++"),
    (".hpp", "C++"),
    (".cs", "C#"),
    (".swift", "Swift"),
    (".m", "Objective-C"),
    (".scala", "Scala"),
    (".zig", "Zig"),
    (".lua", "Lua"),
    (".r", "R"),
    (".R", "R"),
    (".dart", "Dart"),
    (".ex", "Elixir"),
    (".exs", "Elixir"),
    (".erl", "Erlang"),
    (".hs", "Haskell"),
    (".ml", "OCaml"),
    (".v", "V"),
    (".nim", "Nim"),
    (".cr", "Crystal"),
    (".sh", "Shell"),
    (".bash", "Shell"),
    (".zsh", "Shell"),
    (".fish", "Shell"),
    (".html", "HTML"),
    (".htm", "HTML"),
    (".css", "CSS"),
    (".scss", "SCSS"),
    (".sass", "Sass"),
    (".less", "Less"),
    (".vue", "Vue"),
    (".svelte", "Svelte"),
    (".sql", "SQL"),
    (".yml", "YAML"),
    (".yaml", "YAML"),
    (".json", "JSON"),
    (".toml", "TOML"),
    (".xml", "XML"),
    (".md", "Markdown"),
    (".rst", "reStructuredText"),
    (".tf", "Terraform"),
    (".proto", "Protobuf"),
    (".graphql", "GraphQL"),
    (".gql", "GraphQL"),
];

/// Terminal color hints; languages not listed render white.
const COLORS: &[(&str, ColorHint)] = &[
    ("Python", ColorHint::Yellow),
    ("JavaScript", ColorHint::BrightYellow),
    ("TypeScript", ColorHint::Blue),
    ("Rust", ColorHint::Red),
    ("Go", ColorHint::Cyan),
    ("Java", ColorHint::BrightRed),
    ("Kotlin", ColorHint::Magenta),
    ("Ruby", ColorHint::Red),
    ("PHP", ColorHint::BrightMagenta),
    ("C", ColorHint::BrightBlue),
    ("C++", ColorHint::BrightBlue),
    ("C#", ColorHint::Green),
    ("Swift", ColorHint::BrightRed),
    ("Scala", ColorHint::Red),
    ("Shell", ColorHint::Green),
    ("HTML", ColorHint::BrightRed),
    ("CSS", ColorHint::BrightBlue),
    ("Vue", ColorHint::BrightGreen),
    ("Svelte", ColorHint::BrightRed),
    ("Dart", ColorHint::Cyan),
    ("Elixir", ColorHint::Magenta),
    ("Haskell", ColorHint::BrightMagenta),
    ("Zig", ColorHint::BrightYellow),
    ("Lua", ColorHint::Blue),
];

/// A renderer-agnostic color name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorHint {
    White,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
}

impl ColorHint {
    /// Whether this is one of the "bright" terminal variants.
    pub fn is_bright(&self) -> bool {
        matches!(
            self,
            ColorHint::BrightRed
                | ColorHint::BrightGreen
                | ColorHint::BrightYellow
                | ColorHint::BrightBlue
                | ColorHint::BrightMagenta
        )
    }
}

/// Look up the language for an extension such as `".rs"`.
///
/// # Examples
///
/// ```
/// use repolyzer_lang::language_for_extension;
///
/// assert_eq!(language_for_extension(".rs"), Some("Rust"));
/// assert_eq!(language_for_extension(".R"), Some("R"));
/// assert_eq!(language_for_extension(".RS"), None);
/// assert_eq!(language_for_extension("rs"), None);
/// ```
#[must_use]
pub fn language_for_extension(ext: &str) -> Option<&'static str> {
    EXTENSIONS
        .iter()
        .find(|(key, _)| *key == ext)
        .map(|(_, lang)| *lang)
}

/// Classify a path by its final extension. Dotfiles without a further
/// extension (`.bashrc`) and extension-less files are unclassified.
#[must_use]
pub fn classify_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?;
    let dotted = format!(".{ext}");
    language_for_extension(&dotted)
}

/// Whether files with this path are scanned for code markers.
#[must_use]
pub fn is_code_file(path: &Path) -> bool {
    classify_path(path).is_some()
}

#[must_use]
pub fn color_hint(language: &str) -> ColorHint {
    COLORS
        .iter()
        .find(|(name, _)| *name == language)
        .map(|(_, color)| *color)
        .unwrap_or(ColorHint::White)
}
