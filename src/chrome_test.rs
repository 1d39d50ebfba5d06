use super::*;

#[test]
fn builtin_is_a_complete_document_shell() {
    let chrome = Chrome::builtin();
    assert!(chrome.header.starts_with("<!DOCTYPE html>"));
    assert!(chrome.header.contains("charset=\"utf-8\""));
    assert!(chrome.header.trim_end().ends_with("<meta charset=\"utf-8\">"));
    assert!(!chrome.header.contains("</head>"));
    assert!(!chrome.header.contains("<body>"));
    assert!(chrome.footer.contains("</html>"));
}

#[test]
fn default_equals_builtin() {
    assert_eq!(Chrome::default(), Chrome::builtin());
}

#[test]
fn load_reads_both_fragments_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(HEADER_FILE), "<header>site</header>\n").unwrap();
    std::fs::write(dir.path().join(FOOTER_FILE), "<footer>bye</footer>\n").unwrap();

    let chrome = Chrome::load(dir.path()).unwrap();
    assert_eq!(chrome.header, "<header>site</header>\n");
    assert_eq!(chrome.footer, "<footer>bye</footer>\n");
}

#[test]
fn load_missing_footer_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(HEADER_FILE), "<header></header>").unwrap();

    let err = Chrome::load(dir.path()).unwrap_err();
    let ChromeError::Read { path, .. } = &err;
    assert_eq!(path, &dir.path().join(FOOTER_FILE));
    assert!(err.to_string().contains(FOOTER_FILE));
}

#[test]
fn load_missing_dir_fails_on_header() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");

    let ChromeError::Read { path, .. } = Chrome::load(&missing).unwrap_err();
    assert_eq!(path, missing.join(HEADER_FILE));
}

// =============================================================================
// resolve
// =============================================================================

#[test]
fn resolve_without_dir_is_builtin() {
    let (chrome, source) = Chrome::resolve(None).unwrap();
    assert_eq!(chrome, Chrome::builtin());
    assert_eq!(source, ChromeSource::Builtin);
    assert_eq!(source.as_str(), "builtin");
}

#[test]
fn resolve_with_dir_loads_fragments() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(HEADER_FILE), "<nav>").unwrap();
    std::fs::write(dir.path().join(FOOTER_FILE), "</nav>").unwrap();

    let (chrome, source) = Chrome::resolve(Some(dir.path())).unwrap();
    assert_eq!(chrome.header, "<nav>");
    assert_eq!(source, ChromeSource::IncludeDir);
    assert_eq!(source.as_str(), "include_dir");
}

#[test]
fn resolve_with_broken_dir_does_not_fall_back() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Chrome::resolve(Some(&dir.path().join("missing"))).is_err());
}
