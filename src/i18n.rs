use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value;

use crate::error::{Error, ErrorKind, Result};

/// Key-based string/object resolver over per-language JSON dictionaries
/// with a fallback-language chain. Lookups fail open: a missing key
/// resolves to the key itself instead of panicking.
#[derive(Debug)]
pub struct Catalog {
    language: String,
    fallback: String,
    resources: HashMap<String, Value>,
}

impl Catalog {
    pub fn new(language: &str, fallback: &str) -> Self {
        Catalog {
            language: language.to_owned(),
            fallback: fallback.to_owned(),
            resources: HashMap::new(),
        }
    }

    /// Reads `<dir>/<code>.json` for the active and the fallback language.
    pub fn load(dir: &Path, language: &str, fallback: &str) -> Result<Self> {
        let mut catalog = Catalog::new(language, fallback);
        for code in [language, fallback].iter().copied() {
            if catalog.resources.contains_key(code) {
                continue;
            }
            let path = dir.join(format!("{}.json", code));
            let file = File::open(&path).map_err(|err| {
                Error::new(
                    ErrorKind::DataLoad,
                    &format!("could not open locale {}: {}", path.display(), err),
                )
            })?;
            let value: Value = serde_json::from_reader(BufReader::new(file))?;
            catalog.insert_resource(code, value);
        }
        log::info!(
            "loaded locale dictionaries from {} (active '{}', fallback '{}')",
            dir.display(),
            language,
            fallback
        );
        Ok(catalog)
    }

    pub fn insert_resource(&mut self, code: &str, resource: Value) {
        self.resources.insert(code.to_owned(), resource);
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Switches the active language. Codes without a loaded dictionary are
    /// accepted; every lookup then resolves through the fallback chain.
    pub fn set_language(&mut self, code: &str) {
        if !self.resources.contains_key(code) {
            log::warn!("no dictionary loaded for language '{}'", code);
        }
        self.language = code.to_owned();
    }

    /// Resolves a dotted key against the active language, then the fallback.
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        self.lookup_in(&self.language, key)
            .or_else(|| self.lookup_in(&self.fallback, key))
    }

    fn lookup_in(&self, code: &str, key: &str) -> Option<&Value> {
        let mut node = self.resources.get(code)?;
        for segment in key.split('.') {
            node = match node {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(node)
    }

    /// Translated string for `key`, or the key itself when unresolved.
    pub fn t(&self, key: &str) -> String {
        match self.lookup(key).and_then(Value::as_str) {
            Some(text) => text.to_owned(),
            None => key.to_owned(),
        }
    }

    pub fn t_or(&self, key: &str, default: &str) -> String {
        match self.lookup(key).and_then(Value::as_str) {
            Some(text) => text.to_owned(),
            None => default.to_owned(),
        }
    }

    /// Structured lookup (`returnObjects` in the gateway contract).
    pub fn t_object(&self, key: &str) -> Option<&Value> {
        self.lookup(key).filter(|value| value.is_object())
    }

    /// Localized month name, 0-based index.
    pub fn month_name(&self, month0: u32) -> String {
        self.t_or(&format!("translation.months.{}", month0), "month")
    }
}
