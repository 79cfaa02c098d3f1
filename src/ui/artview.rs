use crate::article::ResolvedArticle;
use crate::i18n::Catalog;

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=400&width=600";

/// View model of a resolved holiday article.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleScreen {
    pub title: String,
    pub image: String,
    pub content: String,
    pub back_label: String,
}

pub fn article_screen(article: &ResolvedArticle, catalog: &Catalog) -> ArticleScreen {
    let image = match &article.image {
        Some(name) => format!("images/{}", name),
        None => PLACEHOLDER_IMAGE.to_owned(),
    };

    ArticleScreen {
        title: article.title.clone(),
        image,
        content: article.content.clone(),
        back_label: catalog.t_or("translation.backToCalendar", "Back to calendar"),
    }
}
