//! Guards against translation keys referenced in Rust sources that are
//! missing from the Fluent files, and against locales falling behind the
//! fallback.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the canonical FTL file per locale.
const FTL_FILENAME: &str = "lineage_stats_ui.ftl";

/// Root (relative to the crate) of the i18n assets.
const I18N_DIR: &str = "i18n";

const FALLBACK_LOCALE: &str = "en-US";

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Message IDs of a Fluent file. Any line of the form `<identifier> =` is
/// treated as a message; comments, terms and continuation lines are skipped.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

/// All `t!("...")` key literals under `src/`. Deliberately conservative:
/// only direct literal first arguments are recognised, which covers every
/// callsite in this crate.
fn referenced_keys(src_root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        let mut rest = content.as_str();
        while let Some(pos) = rest.find("t!(\"") {
            rest = &rest[pos + 4..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
                rest = &rest[end + 1..];
            }
        }
    }

    found
}

fn locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .into_iter()
        .flatten()
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.contains('-'))
        .collect();
    dirs.sort();
    dirs
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    let fallback_file = i18n_root.join(FALLBACK_LOCALE).join(FTL_FILENAME);
    let fallback_content = fs::read_to_string(&fallback_file)
        .unwrap_or_else(|err| panic!("failed to read fallback FTL {fallback_file:?}: {err}"));
    let fallback_keys = parse_ftl_keys(&fallback_content);
    assert!(
        !fallback_keys.is_empty(),
        "no message keys parsed from fallback FTL {fallback_file:?}"
    );

    // Every key referenced from Rust sources must exist in the fallback.
    let referenced = referenced_keys(&crate_root.join("src"));
    let missing_in_fallback: Vec<_> = referenced.difference(&fallback_keys).collect();
    assert!(
        missing_in_fallback.is_empty(),
        "translation keys referenced in sources but missing in {FALLBACK_LOCALE}: {missing_in_fallback:?}"
    );

    // Every locale must carry at least the fallback's keys.
    for locale in locale_dirs(&i18n_root) {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("locale {locale} missing {path:?}: {err}"));
        let keys = parse_ftl_keys(&content);

        let missing: Vec<_> = fallback_keys.difference(&keys).collect();
        assert!(
            missing.is_empty(),
            "locale {locale} is missing {} key(s): {missing:?}",
            missing.len()
        );
    }

    // Unused fallback keys are reported but tolerated.
    let unused: Vec<_> = fallback_keys.difference(&referenced).collect();
    if !unused.is_empty() {
        eprintln!("[i18n] {} fallback keys unused in Rust sources: {unused:?}", unused.len());
    }
}
