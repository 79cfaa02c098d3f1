use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, ErrorKind, Result};

/// In-memory table of countries and their holidays. Read-only after load.
#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    countries: BTreeMap<String, CountryEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountryEntry {
    pub name: String,
    pub holidays: Vec<Holiday>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Holiday {
    /// Zero-padded "MM-DD" key. At most one holiday per country shares a date.
    pub date: String,
    #[serde(rename = "articleId")]
    pub article_id: String,
    #[serde(rename = "seoSlug")]
    pub seo_slug: String,
}

impl Holiday {
    /// Month parsed from `date`, 0-based. `None` for malformed dates.
    pub fn month0(&self) -> Option<u32> {
        let month: u32 = self.date.split('-').next()?.parse().ok()?;
        if (1..=12).contains(&month) {
            Some(month - 1)
        } else {
            None
        }
    }

    /// Zero-padded day part of `date`.
    pub fn day_str(&self) -> Option<&str> {
        self.date.splitn(2, '-').nth(1)
    }
}

impl Dataset {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|err| {
            Error::new(
                ErrorKind::DataLoad,
                &format!("could not open {}: {}", path.display(), err),
            )
        })?;
        let dataset: Dataset = serde_json::from_reader(BufReader::new(file))?;
        log::info!(
            "loaded holiday dataset from {} ({} countries)",
            path.display(),
            dataset.countries.len()
        );
        Ok(dataset)
    }

    pub fn country(&self, code: &str) -> Option<&CountryEntry> {
        self.countries.get(code)
    }

    /// Holidays of a country; empty for unknown codes, which is not an error.
    pub fn holidays(&self, code: &str) -> &[Holiday] {
        self.countries
            .get(code)
            .map(|entry| entry.holidays.as_slice())
            .unwrap_or(&[])
    }

    /// First holiday of `code` falling on the given day (month 0-based).
    pub fn holiday_on(&self, code: &str, month0: u32, day: u32) -> Option<&Holiday> {
        let key = format!("{:02}-{:02}", month0 + 1, day);
        self.holidays(code).iter().find(|h| h.date == key)
    }

    pub fn countries(&self) -> impl Iterator<Item = (&str, &CountryEntry)> {
        self.countries
            .iter()
            .map(|(code, entry)| (code.as_str(), entry))
    }
}
