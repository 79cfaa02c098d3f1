use crate::dataset::{Dataset, Holiday};
use crate::error::{Error, ErrorKind, Result};
use crate::i18n::Catalog;
use crate::slug;

/// A holiday matched from an article path together with its localized
/// content, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedArticle {
    pub country: String,
    pub holiday: Holiday,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
}

/// Resolves an `/articles/{country}/{slug}` path against the dataset and
/// the translation catalog.
///
/// Failure kinds are the three recoverable errors of the route layer:
/// `MalformedPath` for paths that do not split into the expected
/// segments, `ArticleNotFound` when no holiday of the country re-encodes
/// to the slug under the active language (an unknown country collapses
/// into the same case), and `ArticleContentMissing` when the matched
/// holiday has no translation entry with a title.
pub fn resolve(path: &str, dataset: &Dataset, catalog: &Catalog) -> Result<ResolvedArticle> {
    let segments: Vec<&str> = path.split('/').collect();
    if segments.len() < 4 || segments[1] != "articles" {
        return Err(Error::new(
            ErrorKind::MalformedPath,
            &format!("expected /articles/{{country}}/{{slug}}, got '{}'", path),
        ));
    }

    let country = segments[2];
    let slug_part = segments[3];

    let holidays = dataset.holidays(country);
    let holiday = slug::decode(holidays, slug_part, |month0| catalog.month_name(month0))
        .ok_or_else(|| {
            Error::new(
                ErrorKind::ArticleNotFound,
                &format!("no holiday of '{}' matches '{}'", country, slug_part),
            )
        })?;

    let key = format!("translation.articles.{}", holiday.article_id);
    let entry = catalog.t_object(&key).ok_or_else(|| {
        Error::new(
            ErrorKind::ArticleContentMissing,
            &format!("no translation entry for article '{}'", holiday.article_id),
        )
    })?;

    let title = match entry.get("title").and_then(|v| v.as_str()) {
        Some(title) => title.to_owned(),
        None => {
            return Err(Error::new(
                ErrorKind::ArticleContentMissing,
                &format!("article '{}' has no title", holiday.article_id),
            ))
        }
    };

    let content = entry
        .get("content")
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_owned();
    let image = entry
        .get("image")
        .and_then(|v| v.as_str())
        .map(|name| name.to_owned());

    Ok(ResolvedArticle {
        country: country.to_owned(),
        holiday: holiday.clone(),
        title,
        content,
        image,
    })
}
