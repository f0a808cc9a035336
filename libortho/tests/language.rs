// Language resolution and rule-file validation behavior.
//
// `is_supported_language` must stay a pure boolean query: missing files,
// wrong extensions and malformed content all answer `false`, never an
// error. Engine construction must agree with the query for every
// identifier.

use std::fs;
use std::path::{Path, PathBuf};

use libortho::{
    is_supported_language, supported_languages, Backend, ConfigError, Separator,
    TranscriptionEngine,
};

fn temp_rule_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("libortho_{}_{}", std::process::id(), name));
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn bundled_names() {
    assert!(is_supported_language("cree"));
    assert!(is_supported_language("inuktitut"));
    assert!(!is_supported_language("unexisting"));
    assert_eq!(supported_languages(), &["cree", "inuktitut"]);
}

#[test]
fn rule_file_paths() {
    let share = Path::new(env!("CARGO_MANIFEST_DIR")).join("share");

    let good = share.join("cree.g2p");
    assert!(is_supported_language(good.to_str().unwrap()));

    // same file without the extension is never supported
    let no_ext = share.join("cree");
    assert!(!is_supported_language(no_ext.to_str().unwrap()));

    let missing = share.join("unexisting.g2p");
    assert!(!is_supported_language(missing.to_str().unwrap()));
}

#[test]
fn malformed_rule_file() {
    // "b b b" breaks the two-field grammar and poisons the whole file
    let path = temp_rule_file("bad.g2p", "a a\nb b b\nc\n");
    let id = path.to_str().unwrap();

    assert!(!is_supported_language(id));
    assert!(matches!(
        TranscriptionEngine::new(id).unwrap_err(),
        ConfigError::MalformedRuleFile { .. }
    ));

    fs::remove_file(path).unwrap();
}

#[test]
fn wrong_extension_with_valid_content() {
    let path = temp_rule_file("rules.txt", "a ɑ\n");
    let id = path.to_str().unwrap();

    assert!(!is_supported_language(id));
    assert!(matches!(
        TranscriptionEngine::new(id).unwrap_err(),
        ConfigError::UnsupportedLanguage(_)
    ));

    fs::remove_file(path).unwrap();
}

#[test]
fn custom_rule_file_end_to_end() {
    let path = temp_rule_file("toy.g2p", "a ɑ\nb b\nsh ʃ\n");
    let id = path.to_str().unwrap().to_string();

    assert!(is_supported_language(&id));

    let backend = Backend::new(&id).unwrap();
    assert_eq!(backend.language(), id);
    assert_eq!(
        backend
            .phonemize(&["bash ab"], &Separator::default(), true)
            .unwrap(),
        vec!["bɑʃ ɑb"]
    );

    fs::remove_file(path).unwrap();
}

#[test]
fn construction_agrees_with_the_query() {
    let bad = temp_rule_file("parity.g2p", "x\n");
    let ids = [
        "cree".to_string(),
        "inuktitut".to_string(),
        "unexisting".to_string(),
        "share/cree".to_string(),
        bad.to_str().unwrap().to_string(),
    ];
    for id in &ids {
        assert_eq!(
            TranscriptionEngine::new(id).is_ok(),
            is_supported_language(id),
            "query and construction disagree on '{id}'"
        );
    }
    fs::remove_file(bad).unwrap();
}
