//! Internationalization (i18n) support for `mozartway-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (bundle selection + asset loading)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   pl-PL/mozartway-ui.ftl   (fallback/reference)
//!   en-US/mozartway-ui.ftl
//! ```
//!
//! Unlike a desktop app we never ask the OS or `navigator.languages` which
//! language to show: the URL path decides (see [`crate::core::locale`]), and
//! the locale hook calls [`set_language`] whenever the resolved language
//! changes. Components then read strings through `t!`, which always routes
//! through the shared [`LOADER`].
//!
//! Usage in a component:
//! ```ignore
//! use crate::t;
//! let title = t!("hero-title");
//! ```
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;

use crate::core::locale::Language;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-services")
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/pl-PL/{DOMAIN}.ftl`
const DOMAIN: &str = "mozartway-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> =
    Lazy::new(|| FluentLanguageLoader::new(DOMAIN, Language::default().langid()));

static INIT: Once = Once::new();

/// Load the fallback (Polish) bundle. Idempotent.
pub fn init() {
    INIT.call_once(|| {
        if let Err(err) = set_language(Language::default()) {
            dioxus::logger::tracing::warn!(
                "[i18n] Failed loading fallback bundle ({err}); lookups will show message ids"
            );
        }
    });
}

/// Point every subsequent `t!` lookup at `language`.
pub fn set_language(language: Language) -> Result<(), i18n_embed::I18nEmbedError> {
    i18n_embed::select(&*LOADER, &Localizations, &[language.langid()]).map(|_| ())
}

/// A standalone loader for `language`, independent of the shared [`LOADER`].
pub fn loader_for(language: Language) -> Result<FluentLanguageLoader, i18n_embed::I18nEmbedError> {
    let loader = FluentLanguageLoader::new(DOMAIN, Language::default().langid());
    i18n_embed::select(&loader, &Localizations, &[language.langid()])?;
    Ok(loader)
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Long-form texts (package features, case-study results) are stored as
/// multi-line messages; split them into list items.
pub fn lines(message: &str) -> Vec<String> {
    message
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
