//! URL-path driven locale resolution.
//!
//! The URL is the single source of truth: `/en` and `/en/...` are English,
//! every other path is Polish. [`LocaleResolver`] keeps the active language,
//! the `<html lang>` attribute and the history stack in agreement.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use dioxus::logger::tracing::debug;
use unic_langid::{langid, LanguageIdentifier};

use super::location::LocationHost;
use super::subscription::Subscription;

const EN_PREFIX: &str = "/en";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Pl,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Pl, Language::En];

    /// Short code used in the URL and the `lang` attribute.
    pub fn code(self) -> &'static str {
        match self {
            Language::Pl => "pl",
            Language::En => "en",
        }
    }

    /// Fluent bundle this language is served from.
    pub fn langid(self) -> LanguageIdentifier {
        match self {
            Language::Pl => langid!("pl-PL"),
            Language::En => langid!("en-US"),
        }
    }

    /// Label for the language toggle.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Language::Pl => "PL",
            Language::En => "EN",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pl" => Ok(Language::Pl),
            "en" => Ok(Language::En),
            other => Err(format!("unsupported language `{other}`")),
        }
    }
}

fn has_en_prefix(path: &str) -> bool {
    path == EN_PREFIX
        || path
            .strip_prefix(EN_PREFIX)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Language selected by `path`. Never fails: anything that is not an
/// English path is Polish.
pub fn language_from_path(path: &str) -> Language {
    if has_en_prefix(path) {
        Language::En
    } else {
        Language::Pl
    }
}

/// Path equivalent to `path` in `target`. Returns `path` unchanged (modulo an
/// empty path becoming `/`) when it is already in `target`.
pub fn path_for_language(path: &str, target: Language) -> String {
    let path = if path.is_empty() { "/" } else { path };
    if language_from_path(path) == target {
        return path.to_string();
    }
    match target {
        Language::En if path == "/" => EN_PREFIX.to_string(),
        Language::En => format!("{EN_PREFIX}{path}"),
        Language::Pl => {
            let rest = path.strip_prefix(EN_PREFIX).unwrap_or(path);
            if rest.is_empty() {
                "/".to_string()
            } else {
                rest.to_string()
            }
        }
    }
}

/// Owner of the process-wide language.
///
/// Mutated only by [`LocaleResolver::set_language`] and by the back/forward
/// listener registered in [`LocaleResolver::initialize`]; both notify the
/// `on_change` sink so reactive state (and the translation loader) follow.
pub struct LocaleResolver {
    host: Rc<dyn LocationHost>,
    language: Rc<Cell<Language>>,
    on_change: Rc<dyn Fn(Language)>,
    _history_listener: Subscription,
}

impl LocaleResolver {
    pub fn initialize(host: Rc<dyn LocationHost>, on_change: impl Fn(Language) + 'static) -> Self {
        let initial = language_from_path(&host.pathname());
        host.set_document_language(initial);

        let language = Rc::new(Cell::new(initial));
        let on_change: Rc<dyn Fn(Language)> = Rc::new(on_change);

        let listener = {
            let host_ref = Rc::downgrade(&host);
            let language = language.clone();
            let on_change = on_change.clone();
            host.on_history_navigation(Box::new(move || {
                let Some(host) = host_ref.upgrade() else {
                    return;
                };
                let resolved = language_from_path(&host.pathname());
                host.set_document_language(resolved);
                if language.replace(resolved) != resolved {
                    debug!("[i18n] history navigation switched language to {resolved}");
                    on_change(resolved);
                }
            }))
        };

        Self {
            host,
            language,
            on_change,
            _history_listener: listener,
        }
    }

    /// Language of the current URL path.
    pub fn current_language(&self) -> Language {
        language_from_path(&self.host.pathname())
    }

    /// Last resolved language (what translated content should use).
    pub fn language(&self) -> Language {
        self.language.get()
    }

    /// Switch to `target`, pushing the equivalent path. Returns whether a
    /// navigation happened; switching to the current language does nothing.
    pub fn set_language(&self, target: Language) -> bool {
        let path = self.host.pathname();
        if language_from_path(&path) == target {
            return false;
        }

        let next = path_for_language(&path, target);
        self.host.push_path(&next);
        self.host.set_document_language(target);
        self.language.set(target);
        (self.on_change)(target);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_prefix_is_segment_exact() {
        assert_eq!(language_from_path("/en"), Language::En);
        assert_eq!(language_from_path("/en/"), Language::En);
        assert_eq!(language_from_path("/en/contact"), Language::En);
        assert_eq!(language_from_path("/"), Language::Pl);
        assert_eq!(language_from_path("/english"), Language::Pl);
        assert_eq!(language_from_path("/services/en"), Language::Pl);
        assert_eq!(language_from_path(""), Language::Pl);
        assert_eq!(language_from_path("en"), Language::Pl);
    }

    #[test]
    fn root_maps_to_bare_en() {
        assert_eq!(path_for_language("/", Language::En), "/en");
        assert_eq!(path_for_language("", Language::En), "/en");
    }

    #[test]
    fn prefix_is_added_and_stripped() {
        assert_eq!(path_for_language("/services", Language::En), "/en/services");
        assert_eq!(path_for_language("/en/services", Language::Pl), "/services");
        assert_eq!(path_for_language("/en", Language::Pl), "/");
        assert_eq!(path_for_language("/en/", Language::Pl), "/");
    }

    #[test]
    fn same_language_keeps_path() {
        assert_eq!(path_for_language("/services", Language::Pl), "/services");
        assert_eq!(path_for_language("/en/x", Language::En), "/en/x");
    }

    #[test]
    fn parses_codes() {
        assert_eq!("EN".parse::<Language>(), Ok(Language::En));
        assert_eq!(" pl ".parse::<Language>(), Ok(Language::Pl));
        assert_eq!("de".parse::<Language>().ok(), None);
    }

    #[test]
    fn langids_match_bundles() {
        assert_eq!(Language::Pl.langid().to_string(), "pl-PL");
        assert_eq!(Language::En.langid().to_string(), "en-US");
    }
}
