use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use typegraph::discover_files;
use typegraph_core::ErrorKind;

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "interface A { a: string }\n").unwrap();
}

fn project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for file in [
        "src/b.ts",
        "src/a.ts",
        "src/nested/c.ts",
        "src/.hidden/d.ts",
        "src/.e.ts",
        "src/readme.md",
        "src/node_modules/lib/f.ts",
    ] {
        touch(dir.path(), file);
    }
    fs::write(dir.path().join("src/.gitignore"), "b.ts\n").unwrap();
    dir
}

fn pattern(root: &Path, glob: &str) -> String {
    format!("{}/{glob}", root.display())
}

fn relative(root: &Path, files: &[String]) -> Vec<String> {
    let prefix = format!("{}/", root.display());
    files
        .iter()
        .map(|f| f.strip_prefix(&prefix).unwrap_or(f).to_string())
        .collect()
}

#[test]
fn recursive_glob_is_sorted_and_skips_hidden() {
    let dir = project();
    let files = discover_files(&[pattern(dir.path(), "src/**/*.ts")]).unwrap();
    assert_eq!(
        relative(dir.path(), &files),
        vec![
            "src/a.ts",
            "src/b.ts",
            "src/nested/c.ts",
            "src/node_modules/lib/f.ts",
        ]
    );
}

#[test]
fn single_star_stays_in_its_directory() {
    let dir = project();
    let files = discover_files(&[pattern(dir.path(), "src/*.ts")]).unwrap();
    assert_eq!(relative(dir.path(), &files), vec!["src/a.ts", "src/b.ts"]);
}

#[test]
fn patterns_concatenate_without_cross_pattern_dedupe() {
    let dir = project();
    let files = discover_files(&[
        pattern(dir.path(), "src/nested/*.ts"),
        pattern(dir.path(), "src/{a,b}.ts"),
        pattern(dir.path(), "src/**/c.ts"),
    ])
    .unwrap();
    assert_eq!(
        relative(dir.path(), &files),
        vec!["src/nested/c.ts", "src/a.ts", "src/b.ts", "src/nested/c.ts"]
    );
}

#[test]
fn literal_path_names_one_file() {
    let dir = project();
    let literal = pattern(dir.path(), "src/a.ts");
    let files = discover_files(std::slice::from_ref(&literal)).unwrap();
    assert_eq!(files, vec![literal]);
}

#[test]
fn invalid_glob_is_reported() {
    let dir = project();
    let err = discover_files(&[pattern(dir.path(), "src/[.ts")]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidPattern);
    assert!(err.context_value("pattern").is_some());
}

#[test]
fn no_matches_is_an_error() {
    let dir = project();
    let err = discover_files(&[
        pattern(dir.path(), "src/**/*.tsx"),
        pattern(dir.path(), "missing/*.ts"),
    ])
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}
