//! File-level registration mutator tests
//!
//! The pure splice logic is covered next to its module; these tests exercise
//! the read-modify-write wrapper against real files: baseline
//! materialization, batched single writes, and cross-invocation idempotence.

use std::fs;

use laraforge::registration::{apply_to_file, register_autoload_file, Fact};
use laraforge::Error;
use tempfile::TempDir;

const PROVIDER_BASELINE: &str = r"<?php

namespace App\Providers;

use Illuminate\Support\ServiceProvider;

class RepositoryServiceProvider extends ServiceProvider
{
    public function register(): void
    {
    }

    public function boot(): void
    {
    }
}
";

const REGISTER_PATTERN: &str = r"public function register\(\): void\s*\{";

fn provider_facts(model: &str) -> Vec<Fact> {
    vec![
        Fact::import(format!("use App\\Repositories\\{model}Repository;")),
        Fact::import(format!(
            "use App\\Repositories\\Interfaces\\{model}RepositoryInterface;"
        )),
        Fact::statement(
            REGISTER_PATTERN,
            format!(
                "$this->app->bind({model}RepositoryInterface::class, {model}Repository::class);"
            ),
        ),
    ]
}

#[test]
fn test_missing_file_is_materialized_from_baseline() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("RepositoryServiceProvider.php");

    let applied = apply_to_file(&path, Some(PROVIDER_BASELINE), &provider_facts("Post")).unwrap();
    assert_eq!(applied, 3);

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("use App\\Repositories\\PostRepository;"));
    assert!(content.contains(
        "$this->app->bind(PostRepositoryInterface::class, PostRepository::class);"
    ));
}

#[test]
fn test_missing_file_without_baseline_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bootstrap/app.php");

    let err = apply_to_file(&path, None, &provider_facts("Post")).unwrap_err();
    assert!(matches!(err, Error::MissingTargetFile(_)));
    assert!(!path.exists());
}

#[test]
fn test_second_invocation_applies_nothing_and_leaves_bytes_identical() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("RepositoryServiceProvider.php");

    let facts = provider_facts("Post");
    apply_to_file(&path, Some(PROVIDER_BASELINE), &facts).unwrap();
    let after_first = fs::read_to_string(&path).unwrap();

    let applied = apply_to_file(&path, Some(PROVIDER_BASELINE), &facts).unwrap();
    assert_eq!(applied, 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
}

#[test]
fn test_two_models_accumulate_in_one_provider() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("RepositoryServiceProvider.php");

    apply_to_file(&path, Some(PROVIDER_BASELINE), &provider_facts("Post")).unwrap();
    apply_to_file(&path, Some(PROVIDER_BASELINE), &provider_facts("Comment")).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("PostRepositoryInterface::class, PostRepository::class"));
    assert!(content.contains("CommentRepositoryInterface::class, CommentRepository::class"));
    assert_eq!(content.matches("use App\\Repositories\\").count(), 4);
}

#[test]
fn test_failed_anchor_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Mangled.php");
    fs::write(&path, "<?php\n\nnamespace App;\n\nfinal class Mangled {}\n").unwrap();
    let before = fs::read_to_string(&path).unwrap();

    let facts = vec![Fact::statement(
        REGISTER_PATTERN,
        "$this->app->bind(A::class, B::class);",
    )];
    let err = apply_to_file(&path, None, &facts).unwrap_err();
    assert!(matches!(err, Error::AnchorNotFound { .. }));
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_manifest_registration_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("composer.json");
    fs::write(
        &path,
        r#"{
    "name": "acme/app",
    "autoload": {
        "psr-4": {
            "App\\": "app/"
        }
    }
}
"#,
    )
    .unwrap();

    assert!(register_autoload_file(&path, "app/Helpers/functions.php").unwrap());
    let after_first = fs::read_to_string(&path).unwrap();
    assert!(after_first.contains("\"app/Helpers/functions.php\""));

    assert!(!register_autoload_file(&path, "app/Helpers/functions.php").unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
}

#[test]
fn test_manifest_must_pre_exist() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("composer.json");

    let err = register_autoload_file(&path, "app/Helpers/functions.php").unwrap_err();
    assert!(matches!(err, Error::MissingTargetFile(_)));
}
