//! Idempotent registration mutation of shared project files
//!
//! The provider, bootstrap, and manifest files act as append-only
//! registries that accumulate entries across invocations and may carry
//! arbitrary hand edits in between. A [`Fact`] is a declarative "must be
//! present" assertion: applying it is a no-op when its presence substring
//! already occurs in the file, and otherwise splices the content in at a
//! structural [`Anchor`] without disturbing unrelated text.
//!
//! `apply_fact`/`apply_facts` are pure functions over in-memory text;
//! [`apply_to_file`] is the single read-modify-write wrapper. The manifest
//! (`composer.json`) is a second document kind, edited structurally as JSON
//! rather than spliced as text.
//!
//! Failure policy: when an anchor pattern is absent the fact fails with
//! [`Error::AnchorNotFound`] and the file is left unmodified. There is no
//! fallback to appending at end-of-file.

use std::fmt;
use std::fs;
use std::path::Path;

use regex::Regex;
use serde::Serialize;
use serde_json::json;

use crate::error::{Error, Result};

/// Structural location marker deciding where a fact's content is spliced in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anchor {
    /// After the last `use ...;` line, or after the `namespace ...;` line
    /// when no imports exist yet
    AfterImports,
    /// As the first statement inside a block whose opening brace is matched
    /// by a fixed regex pattern
    BlockStart {
        /// Regex whose match ends at the block's opening brace
        pattern: String,
    },
    /// Immediately after a literal list-opening marker
    AfterMarker {
        /// The literal marker text
        marker: String,
    },
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AfterImports => write!(f, "after-imports"),
            Self::BlockStart { pattern } => write!(f, "block-start `{pattern}`"),
            Self::AfterMarker { marker } => write!(f, "after-marker `{marker}`"),
        }
    }
}

/// A declarative "must be present" assertion against a shared file
#[derive(Debug, Clone)]
pub struct Fact {
    /// Text spliced into the file when the fact is not yet satisfied
    pub content: String,
    /// Where to splice
    pub anchor: Anchor,
    /// Substring whose presence marks the fact as satisfied; defaults to
    /// `content`
    pub presence: Option<String>,
}

impl Fact {
    /// An import line, anchored after the existing import section
    #[must_use]
    pub fn import(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            anchor: Anchor::AfterImports,
            presence: None,
        }
    }

    /// A code statement inserted first inside a pattern-matched block
    #[must_use]
    pub fn statement(pattern: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            anchor: Anchor::BlockStart {
                pattern: pattern.into(),
            },
            presence: None,
        }
    }

    /// A list entry inserted right after a literal list-opening marker
    ///
    /// The trailing comma belongs to the splice, not to the presence check.
    #[must_use]
    pub fn list_entry(marker: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            anchor: Anchor::AfterMarker {
                marker: marker.into(),
            },
            presence: None,
        }
    }

    /// Override the presence substring
    #[must_use]
    pub fn with_presence(mut self, presence: impl Into<String>) -> Self {
        self.presence = Some(presence.into());
        self
    }

    fn is_satisfied(&self, text: &str) -> bool {
        let presence = self.presence.as_deref().unwrap_or(&self.content);
        text.contains(presence)
    }
}

/// Offset just past the `;` of the last `use` line, if any
fn after_last_import(text: &str) -> Option<usize> {
    let pos = text.rfind("\nuse ")?;
    let semi = text[pos..].find(';')? + pos;
    Some(semi + 1)
}

/// Offset just past the `;` of the namespace declaration, if any
fn after_namespace(text: &str) -> Option<usize> {
    let pos = text.find("namespace ")?;
    let semi = text[pos..].find(';')? + pos;
    Some(semi + 1)
}

/// Apply a single fact to in-memory text
///
/// Returns `Ok(None)` when the fact is already satisfied, and
/// `Ok(Some(updated))` when content was spliced in.
///
/// # Errors
///
/// Returns [`Error::AnchorNotFound`] when the anchor cannot be located; the
/// input is never partially modified.
pub fn apply_fact(text: &str, fact: &Fact) -> Result<Option<String>> {
    if fact.is_satisfied(text) {
        return Ok(None);
    }

    let missing = || Error::AnchorNotFound {
        anchor: fact.anchor.to_string(),
    };

    let (offset, splice) = match &fact.anchor {
        Anchor::AfterImports => {
            if let Some(offset) = after_last_import(text) {
                (offset, format!("\n{}", fact.content))
            } else {
                // First import in the file: leave a blank line after the
                // namespace declaration.
                let offset = after_namespace(text).ok_or_else(missing)?;
                (offset, format!("\n\n{}", fact.content))
            }
        }
        Anchor::BlockStart { pattern } => {
            let re = Regex::new(pattern).map_err(|_| missing())?;
            let m = re.find(text).ok_or_else(missing)?;
            (m.end(), format!("\n        {}", fact.content))
        }
        Anchor::AfterMarker { marker } => {
            let pos = text.find(marker.as_str()).ok_or_else(missing)?;
            (pos + marker.len(), format!("\n        {},", fact.content))
        }
    };

    let mut updated = String::with_capacity(text.len() + splice.len());
    updated.push_str(&text[..offset]);
    updated.push_str(&splice);
    updated.push_str(&text[offset..]);
    Ok(Some(updated))
}

/// Apply a fact set sequentially, returning the updated text and the number
/// of facts that actually spliced content in
pub fn apply_facts(text: &str, facts: &[Fact]) -> Result<(String, usize)> {
    let mut current = text.to_string();
    let mut applied = 0;

    for fact in facts {
        if let Some(updated) = apply_fact(&current, fact)? {
            current = updated;
            applied += 1;
        }
    }

    Ok((current, applied))
}

/// Apply a fact set to a file on disk
///
/// When the file does not exist it is materialized from `baseline` first; a
/// missing file with no baseline is [`Error::MissingTargetFile`]. The file
/// is read once, mutated in memory, and written back once, and only when the
/// content changed.
///
/// Returns the number of facts applied.
pub fn apply_to_file(path: &Path, baseline: Option<&str>, facts: &[Fact]) -> Result<usize> {
    let (text, created) = if path.exists() {
        (fs::read_to_string(path)?, false)
    } else if let Some(baseline) = baseline {
        (baseline.to_string(), true)
    } else {
        return Err(Error::MissingTargetFile(path.to_path_buf()));
    };

    let (updated, applied) = apply_facts(&text, facts)?;
    if created || applied > 0 {
        fs::write(path, updated)?;
    }

    Ok(applied)
}

/// Ensure the manifest's `autoload.files` array contains `entry`
///
/// Pure transform over the manifest text. Returns `Ok(None)` when the entry
/// is already present, or the re-serialized manifest otherwise. Intermediate
/// objects/arrays are created when absent; a non-object `autoload` or
/// non-array `files` means the manifest deviates from the expected shape and
/// fails like any other missing anchor.
pub fn ensure_autoload_file(text: &str, entry: &str) -> Result<Option<String>> {
    let mut manifest: serde_json::Value = serde_json::from_str(text)?;

    let structure = |what: &str| Error::AnchorNotFound {
        anchor: format!("manifest {what}"),
    };

    let root = manifest
        .as_object_mut()
        .ok_or_else(|| structure("root object"))?;
    let autoload = root.entry("autoload").or_insert_with(|| json!({}));
    let files = autoload
        .as_object_mut()
        .ok_or_else(|| structure("autoload object"))?
        .entry("files")
        .or_insert_with(|| json!([]));
    let files = files
        .as_array_mut()
        .ok_or_else(|| structure("autoload.files array"))?;

    if files.iter().any(|value| value.as_str() == Some(entry)) {
        return Ok(None);
    }
    files.push(json!(entry));

    // Four-space pretty printing, matching the manifest's conventional
    // formatting; serde_json never escapes slashes.
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    manifest.serialize(&mut serializer)?;

    let mut out = String::from_utf8_lossy(&buf).into_owned();
    out.push('\n');
    Ok(Some(out))
}

/// Ensure the manifest file's `autoload.files` array contains `entry`
///
/// Returns whether the file was rewritten. The manifest must pre-exist.
pub fn register_autoload_file(path: &Path, entry: &str) -> Result<bool> {
    if !path.exists() {
        return Err(Error::MissingTargetFile(path.to_path_buf()));
    }

    let text = fs::read_to_string(path)?;
    match ensure_autoload_file(&text, entry)? {
        Some(updated) => {
            fs::write(path, updated)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROVIDER: &str = "<?php\n\nnamespace App\\Providers;\n\nuse Illuminate\\Support\\ServiceProvider;\n\nclass RepositoryServiceProvider extends ServiceProvider\n{\n    public function register(): void\n    {\n    }\n\n    public function boot(): void\n    {\n    }\n}\n";

    const BARE_PROVIDER: &str = "<?php\n\nnamespace App\\Providers;\n\nclass RepositoryServiceProvider\n{\n    public function register(): void\n    {\n    }\n}\n";

    const REGISTER_PATTERN: &str = r"public function register\(\): void\s*\{";

    #[test]
    fn test_import_inserts_after_last_use() {
        let fact = Fact::import("use App\\Repositories\\PostRepository;");
        let updated = apply_fact(PROVIDER, &fact).unwrap().unwrap();
        assert!(updated.contains(
            "use Illuminate\\Support\\ServiceProvider;\nuse App\\Repositories\\PostRepository;"
        ));
    }

    #[test]
    fn test_import_inserts_after_namespace_when_no_uses() {
        let fact = Fact::import("use App\\Repositories\\PostRepository;");
        let updated = apply_fact(BARE_PROVIDER, &fact).unwrap().unwrap();
        assert!(updated.contains(
            "namespace App\\Providers;\n\nuse App\\Repositories\\PostRepository;\n"
        ));
    }

    #[test]
    fn test_second_import_lands_after_the_first() {
        let first = Fact::import("use App\\Repositories\\PostRepository;");
        let second =
            Fact::import("use App\\Repositories\\Interfaces\\PostRepositoryInterface;");
        let (updated, applied) =
            apply_facts(PROVIDER, &[first, second]).unwrap();
        assert_eq!(applied, 2);
        assert!(updated.contains(
            "use App\\Repositories\\PostRepository;\nuse App\\Repositories\\Interfaces\\PostRepositoryInterface;"
        ));
    }

    #[test]
    fn test_statement_inserted_first_in_block() {
        let fact = Fact::statement(
            REGISTER_PATTERN,
            "$this->app->bind(PostRepositoryInterface::class, PostRepository::class);",
        );
        let updated = apply_fact(PROVIDER, &fact).unwrap().unwrap();
        assert!(updated.contains(
            "public function register(): void\n    {\n        $this->app->bind(PostRepositoryInterface::class, PostRepository::class);\n    }"
        ));
    }

    #[test]
    fn test_list_entry_inserted_after_marker_with_comma() {
        let config = "<?php\n\nreturn [\n    'providers' => ServiceProvider::defaultProviders()->merge([\n        App\\Providers\\AppServiceProvider::class,\n    ])->toArray(),\n];\n";
        let fact = Fact::list_entry(
            "'providers' => ServiceProvider::defaultProviders()->merge([",
            "App\\Providers\\RepositoryServiceProvider::class",
        );
        let updated = apply_fact(config, &fact).unwrap().unwrap();
        assert!(updated.contains(
            "->merge([\n        App\\Providers\\RepositoryServiceProvider::class,\n        App\\Providers\\AppServiceProvider::class,"
        ));
    }

    #[test]
    fn test_satisfied_fact_is_skipped() {
        let fact = Fact::import("use Illuminate\\Support\\ServiceProvider;");
        assert!(apply_fact(PROVIDER, &fact).unwrap().is_none());
    }

    #[test]
    fn test_presence_override() {
        let text = "$middleware->use([\\App\\Http\\Middleware\\DBTransaction::class]);";
        let fact = Fact::statement(
            r"->withMiddleware\(function \(Middleware \$middleware\) \{",
            "$middleware->append(\\App\\Http\\Middleware\\DBTransaction::class);",
        )
        .with_presence("DBTransaction::class");
        // Satisfied by the hand registration even though the exact statement
        // differs, so the (absent) anchor is never consulted.
        assert!(apply_fact(text, &fact).unwrap().is_none());
    }

    #[test]
    fn test_anchor_not_found_fails_without_fallback() {
        let fact = Fact::statement(REGISTER_PATTERN, "$this->app->bind(A::class, B::class);");
        let err = apply_fact("<?php\n\nclass Nothing {}\n", &fact).unwrap_err();
        assert!(matches!(err, Error::AnchorNotFound { .. }));
    }

    #[test]
    fn test_import_anchor_missing_in_plain_text() {
        let fact = Fact::import("use App\\Thing;");
        let err = apply_fact("just some text", &fact).unwrap_err();
        assert!(matches!(err, Error::AnchorNotFound { .. }));
    }

    #[test]
    fn test_apply_facts_idempotent() {
        let facts = vec![
            Fact::import("use App\\Repositories\\PostRepository;"),
            Fact::import("use App\\Repositories\\Interfaces\\PostRepositoryInterface;"),
            Fact::statement(
                REGISTER_PATTERN,
                "$this->app->bind(PostRepositoryInterface::class, PostRepository::class);",
            ),
        ];

        let (once, applied_once) = apply_facts(PROVIDER, &facts).unwrap();
        assert_eq!(applied_once, 3);

        let (twice, applied_twice) = apply_facts(&once, &facts).unwrap();
        assert_eq!(applied_twice, 0);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unrelated_content_is_preserved() {
        let hand_edited = PROVIDER.replace(
            "public function boot(): void\n    {\n    }",
            "public function boot(): void\n    {\n        // custom boot logic\n        $this->loadViews();\n    }",
        );
        let facts = vec![Fact::statement(
            REGISTER_PATTERN,
            "$this->app->bind(PostRepositoryInterface::class, PostRepository::class);",
        )];
        let (updated, _) = apply_facts(&hand_edited, &facts).unwrap();
        assert!(updated.contains("// custom boot logic"));
        assert!(updated.contains("$this->loadViews();"));
    }

    #[test]
    fn test_manifest_entry_added() {
        let manifest = r#"{
    "name": "acme/app",
    "autoload": {
        "psr-4": {
            "App\\": "app/"
        }
    }
}"#;
        let updated = ensure_autoload_file(manifest, "app/Helpers/functions.php")
            .unwrap()
            .unwrap();
        assert!(updated.contains("\"files\": ["));
        assert!(updated.contains("\"app/Helpers/functions.php\""));
        // Slashes stay unescaped and the psr-4 section survives.
        assert!(!updated.contains("app\\/Helpers"));
        assert!(updated.contains("\"psr-4\""));
    }

    #[test]
    fn test_manifest_entry_skipped_when_present() {
        let manifest = r#"{
    "autoload": {
        "files": [
            "app/Helpers/functions.php"
        ]
    }
}"#;
        assert!(ensure_autoload_file(manifest, "app/Helpers/functions.php")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_manifest_idempotent() {
        let manifest = r#"{"name": "acme/app"}"#;
        let once = ensure_autoload_file(manifest, "app/Helpers/functions.php")
            .unwrap()
            .unwrap();
        assert!(ensure_autoload_file(&once, "app/Helpers/functions.php")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_manifest_invalid_json_is_an_error() {
        assert!(matches!(
            ensure_autoload_file("{not json", "x.php"),
            Err(Error::Manifest(_))
        ));
    }

    #[test]
    fn test_manifest_wrong_shape_is_anchor_not_found() {
        let manifest = r#"{"autoload": "nope"}"#;
        assert!(matches!(
            ensure_autoload_file(manifest, "x.php"),
            Err(Error::AnchorNotFound { .. })
        ));
    }
}
