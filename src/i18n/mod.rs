// src/i18n/mod.rs
//! Message catalog: embedded JSON language files, resolved per caller locale.
pub mod error;

use crate::commands::sender::Caller;
use crate::core::error::{AppError, Result};
use crate::ui::color::ChatColor;
use once_cell::sync::Lazy;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

pub use error::TranslationError;

pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(RustEmbed)]
#[folder = "src/i18n/langs/"]
pub struct Langs;

/// Replaces positional `{0}`, `{1}`, ... placeholders in one left-to-right
/// pass. Parameter text is copied verbatim and never rescanned; tokens
/// without a matching parameter stay as written.
pub fn format_template(template: &str, params: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let param = after.find('}').and_then(|close| {
            let index = &after[..close];
            if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            index
                .parse::<usize>()
                .ok()
                .and_then(|i| params.get(i))
                .map(|param| (*param, close))
        });

        match param {
            Some((param, close)) => {
                out.push_str(param);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Resolves message keys to user-facing text and delivers it to callers.
///
/// Implementors only provide [`language`](Self::language) and
/// [`template`](Self::template); everything else is built on those.
pub trait MessageCatalog {
    fn language(&self) -> &str;

    fn template(&self, key: &str) -> Option<&str>;

    fn get(&self, key: &str) -> String {
        self.render(key, &[])
    }

    fn render(&self, key: &str, params: &[&str]) -> String {
        match self.template(key) {
            Some(template) => format_template(template, params),
            None => {
                log::debug!("Missing translation key '{}' ({})", key, self.language());
                format!("Missing: {}", key)
            }
        }
    }

    fn send(&self, sender: &dyn Caller, key: &str, params: &[&str]) {
        sender.send_message(&self.render(key, params));
    }

    fn send_in_color(&self, color: ChatColor, sender: &dyn Caller, key: &str, params: &[&str]) {
        sender.send_message(&format!("{}{}", color, self.render(key, params)));
    }

    fn join_list(&self, items: &[String]) -> String {
        if items.is_empty() {
            self.get("glowstone.list.empty")
        } else {
            items.join(&self.get("glowstone.list.separator"))
        }
    }

    fn permission_message(&self) -> String {
        self.get("glowstone.permission-denied")
    }
}

#[derive(Debug, Clone, Default)]
pub struct Bundle {
    language: String,
    entries: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl Bundle {
    pub fn load(lang: &str) -> Result<Self> {
        let lang = lang.to_lowercase();
        if !Self::available_languages().iter().any(|l| *l == lang) {
            return Err(AppError::Translation(TranslationError::InvalidLanguage(lang)));
        }

        let entries = Self::load_entries(&lang)?;
        let fallback = if lang == DEFAULT_LANGUAGE {
            HashMap::new()
        } else {
            Self::load_entries(DEFAULT_LANGUAGE)?
        };

        Ok(Self {
            language: lang,
            entries,
            fallback,
        })
    }

    fn load_entries(lang: &str) -> Result<HashMap<String, String>> {
        let filename = format!("{}.json", lang);
        let content = Langs::get(&filename).ok_or_else(|| {
            TranslationError::LoadError(format!("File not found: {}", filename))
        })?;

        let content_str = std::str::from_utf8(content.data.as_ref())
            .map_err(|e| TranslationError::LoadError(e.to_string()))?;

        let entries: HashMap<String, String> = serde_json::from_str(content_str)
            .map_err(|e| TranslationError::LoadError(format!("{}: {}", filename, e)))?;

        Ok(entries)
    }

    /// Cached bundle for a caller locale like `de_DE`. Unknown languages fall
    /// back to the configured default language.
    pub fn for_locale(locale: &str) -> Arc<Bundle> {
        let lang = locale
            .split(|c| c == '-' || c == '_')
            .next()
            .unwrap_or_default()
            .to_lowercase();

        if let Some(bundle) = cached(&lang) {
            return bundle;
        }

        match Self::load(&lang) {
            Ok(bundle) => store(bundle),
            Err(e) => {
                let default = default_language();
                if lang == default {
                    log::error!("Default language '{}' unavailable: {}", default, e);
                    return store(Self {
                        language: lang,
                        ..Self::default()
                    });
                }
                log::debug!("No bundle for locale '{}' ({}), using '{}'", locale, e, default);
                Self::for_locale(&default)
            }
        }
    }

    pub fn available_languages() -> Vec<String> {
        Langs::iter()
            .filter_map(|f| f.as_ref().strip_suffix(".json").map(str::to_lowercase))
            .collect()
    }

    pub fn has(&self, key: &str) -> bool {
        self.template(key).is_some()
    }
}

impl MessageCatalog for Bundle {
    fn language(&self) -> &str {
        &self.language
    }

    fn template(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .or_else(|| self.fallback.get(key))
            .map(String::as_str)
    }
}

static BUNDLES: Lazy<RwLock<HashMap<String, Arc<Bundle>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

static CURRENT_DEFAULT: Lazy<RwLock<String>> =
    Lazy::new(|| RwLock::new(DEFAULT_LANGUAGE.to_string()));

fn cached(lang: &str) -> Option<Arc<Bundle>> {
    BUNDLES
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .get(lang)
        .cloned()
}

fn store(bundle: Bundle) -> Arc<Bundle> {
    let bundle = Arc::new(bundle);
    BUNDLES
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .insert(bundle.language.clone(), Arc::clone(&bundle));
    bundle
}

/// Validates and installs the language used for unknown caller locales.
pub fn init(language: &str) -> Result<()> {
    let bundle = Bundle::load(language)?;
    let lang = bundle.language.clone();
    store(bundle);
    *CURRENT_DEFAULT
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner()) = lang;
    Ok(())
}

pub fn default_language() -> String {
    CURRENT_DEFAULT
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_positional_params() {
        assert_eq!(format_template("{0} = {1}", &["a", "b"]), "a = b");
        assert_eq!(format_template("/{0} help /{0}", &["gs"]), "/gs help /gs");
        assert_eq!(format_template("no params", &["x"]), "no params");
    }

    #[test]
    fn params_are_not_rescanned() {
        assert_eq!(format_template("{0} = {1}", &["motd.{1}", "hi"]), "motd.{1} = hi");
        assert_eq!(format_template("{1}{0}", &["{1}", "{0}"]), "{0}{1}");
    }

    #[test]
    fn unmatched_tokens_are_kept() {
        assert_eq!(format_template("{0} {2} {x} {", &["a", "b"]), "a {2} {x} {");
        assert_eq!(format_template("{}{0}", &["a"]), "{}a");
    }

    #[test]
    fn embedded_languages_are_listed() {
        let langs = Bundle::available_languages();
        assert!(langs.contains(&"en".to_string()));
        assert!(langs.contains(&"de".to_string()));
    }

    #[test]
    fn resolves_and_falls_back() {
        let de = Bundle::for_locale("de_DE");
        assert_eq!(de.language(), "de");
        assert!(de.has("glowstone.usage"));

        let unknown = Bundle::for_locale("xx");
        assert_ne!(unknown.language(), "xx");
        assert!(unknown.has("glowstone.usage"));
    }

    #[test]
    fn missing_key_is_marked() {
        let en = Bundle::for_locale("en");
        assert_eq!(en.get("glowstone.no-such-key"), "Missing: glowstone.no-such-key");
    }

    #[test]
    fn join_list_uses_separator() {
        let en = Bundle::for_locale("en");
        assert_eq!(
            en.join_list(&["world".into(), "world_nether".into()]),
            "world, world_nether"
        );
        assert_eq!(en.join_list(&[]), en.get("glowstone.list.empty"));
    }

    #[test]
    fn unknown_language_is_rejected() {
        assert!(matches!(
            Bundle::load("klingon"),
            Err(AppError::Translation(TranslationError::InvalidLanguage(_)))
        ));
    }
}
