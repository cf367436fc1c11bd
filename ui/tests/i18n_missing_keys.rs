use std::collections::{BTreeSet, HashSet};

/// Translation completeness test.
/// Ensures every non‑fallback locale provides *at least* the keys present
/// in the fallback (pl-PL) `mozartway-ui.ftl`.
///
/// This is a lightweight parser:
/// - Ignores comment lines starting with `#`
/// - Treats any line of the form `key =` or `key=` as a message definition
/// - Skips blank / attribute / continuation lines
/// - Does not attempt to parse multi-line pattern bodies (only keys)
///
/// If you add a new locale:
/// 1. Create `ui/i18n/<locale>/mozartway-ui.ftl`
/// 2. Copy all keys from `pl-PL/mozartway-ui.ftl`
/// 3. Add a `Language` variant and register the file below
/// 4. Run `cargo test -p mozartway-ui` to confirm completeness.
#[test]
fn all_locales_have_all_fallback_keys() {
    // Embed the FTL sources at compile time.
    const PL_PL: &str = include_str!("../i18n/pl-PL/mozartway-ui.ftl");
    const EN_US: &str = include_str!("../i18n/en-US/mozartway-ui.ftl");

    let fallback_keys = extract_keys(PL_PL);

    // Ensure fallback itself has no duplicates and at least one key.
    assert!(
        !fallback_keys.is_empty(),
        "Fallback (pl-PL) contains no keys."
    );
    assert_no_dup_keys(PL_PL, "pl-PL");

    let locales: &[(&str, &str)] = &[
        ("en-US", EN_US),
        // Add new locales here.
    ];

    let mut failures = Vec::new();

    for (locale, src) in locales {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let mut missing: BTreeSet<String> = BTreeSet::new();
        let mut extra: BTreeSet<String> = BTreeSet::new();

        for k in &fallback_keys {
            if !keys.contains(k) {
                missing.insert(k.clone());
            }
        }
        for k in &keys {
            if !fallback_keys.contains(k) {
                extra.insert(k.clone());
            }
        }

        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
        // Keys only present in a translation are never shown: `fl!` is
        // checked against the fallback.
        if !extra.is_empty() {
            failures.push(format!(
                "Locale {locale} defines {} key(s) absent from pl-PL:\n  {}",
                extra.len(),
                extra.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: keep pl-PL and every translation in lockstep.",
            failures.join("\n\n")
        );
    }
}

#[test]
fn list_messages_have_matching_item_counts() {
    const PL_PL: &str = include_str!("../i18n/pl-PL/mozartway-ui.ftl");
    const EN_US: &str = include_str!("../i18n/en-US/mozartway-ui.ftl");

    for key in [
        "service-standard-features",
        "service-pro-features",
        "service-max-features",
        "case-autoelite-results",
        "case-greengarden-results",
        "case-sigma-results",
        "contact-form-service-options",
        "contact-form-budget-options",
    ] {
        let pl = list_items(PL_PL, key);
        let en = list_items(EN_US, key);
        assert!(!pl.is_empty(), "{key} has no items in pl-PL");
        assert_eq!(
            pl.len(),
            en.len(),
            "{key}: pl-PL has {} items, en-US has {}",
            pl.len(),
            en.len()
        );
    }
}

/// Indented continuation lines following `key =` (a multi-line message).
fn list_items<'a>(src: &'a str, key: &str) -> Vec<&'a str> {
    let header = format!("{key} =");
    let mut lines = src.lines().skip_while(|line| line.trim_end() != header);
    if lines.next().is_none() {
        return Vec::new();
    }
    lines
        .take_while(|line| line.starts_with(' '))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Extract message keys from a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    let mut keys = HashSet::new();

    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        // Skip attribute or continuation lines (start with '.' or indent).
        if line.starts_with('.') {
            continue;
        }
        // Basic pattern: key [space]* '='
        if let Some(eq_pos) = line.find('=') {
            let (left, _right) = line.split_at(eq_pos);
            let key = left.trim();
            if !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@')
            {
                keys.insert(key.to_string());
            }
        }
    }

    keys
}

/// Assert no duplicate key definitions in a single FTL file (rudimentary).
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for line in src.lines() {
        let raw = line;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim();
            if !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@')
            {
                if !seen.insert(key.to_string()) {
                    dups.insert(format!("{key}  (line: \"{raw}\")"));
                }
            }
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}
