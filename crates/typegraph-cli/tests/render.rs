use std::fs;

use typegraph::Renderer;
use typegraph_core::ErrorKind;

#[test]
fn missing_program_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = Renderer::new("typegraph-no-such-renderer", "png");
    let err = renderer
        .render("digraph \"G\" {\n}\n", &dir.path().join("out.png"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FileNotFound);
    assert_eq!(
        err.context_value("program"),
        Some("typegraph-no-such-renderer")
    );
}

#[cfg(unix)]
#[test]
fn stand_in_renderer_receives_arguments_and_stdin() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("fake-dot");
    fs::write(
        &script,
        "#!/bin/sh\n\
         echo \"format $1\"\n\
         [ \"$2\" = \"-o\" ] || exit 9\n\
         cat > \"$3\"\n\
         echo \"warning: fake\" >&2\n\
         exit 0\n",
    )
    .unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    let output = dir.path().join("out.svg");
    let dot = "digraph \"G\" {\n  \"A\" -> \"B\";\n}\n";
    let renderer = Renderer::new(script.display().to_string(), "svg");
    let outcome = renderer.render(dot, &output).unwrap();

    assert!(outcome.success(), "{outcome:?}");
    assert_eq!(outcome.stdout, "format -Tsvg\n");
    assert_eq!(outcome.stderr, "warning: fake\n");
    assert_eq!(fs::read_to_string(&output).unwrap(), dot);
}

#[cfg(unix)]
#[test]
fn non_zero_exit_is_reported_not_raised() {
    let dir = tempfile::tempdir().unwrap();
    // `sh` rejects the -T option and exits non-zero without reading stdin.
    let renderer = Renderer::new("sh", "png");
    let outcome = renderer
        .render("digraph \"G\" {\n}\n", &dir.path().join("out.png"))
        .unwrap();
    assert!(!outcome.success());
    assert!(outcome.exit_code.is_some());
    assert!(!outcome.stderr.is_empty());
}
