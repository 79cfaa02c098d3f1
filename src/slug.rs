use crate::dataset::Holiday;

/// Lower-cases and collapses internal whitespace runs into single hyphens.
pub fn kebab(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Builds the `"{day}-{kebab(month name)}-{seoSlug}"` path segment for a
/// holiday. The caller supplies the month name of the *active* language,
/// which makes the result language-dependent by design: a slug only
/// decodes under the language it was encoded in.
///
/// Returns `None` for holidays with a malformed `date`.
pub fn encode<F>(holiday: &Holiday, month_name: F) -> Option<String>
where
    F: Fn(u32) -> String,
{
    let month0 = holiday.month0()?;
    let day = holiday.day_str()?;
    Some(format!(
        "{}-{}-{}",
        day,
        kebab(&month_name(month0)),
        holiday.seo_slug
    ))
}

/// Recovers a holiday from a slug segment by re-encoding every holiday of
/// the country under the current language and comparing for exact
/// equality. First match wins; lists are tens of entries, so a linear
/// scan is fine.
pub fn decode<'a, F>(holidays: &'a [Holiday], slug_part: &str, month_name: F) -> Option<&'a Holiday>
where
    F: Fn(u32) -> String,
{
    holidays.iter().find(|holiday| {
        match encode(holiday, &month_name) {
            Some(expected) => expected == slug_part,
            None => {
                log::debug!("skipping holiday with malformed date '{}'", holiday.date);
                false
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holiday(date: &str, article_id: &str, seo_slug: &str) -> Holiday {
        Holiday {
            date: date.to_owned(),
            article_id: article_id.to_owned(),
            seo_slug: seo_slug.to_owned(),
        }
    }

    fn spanish(month0: u32) -> String {
        match month0 {
            7 => "agosto".to_owned(),
            _ => "month".to_owned(),
        }
    }

    fn english(month0: u32) -> String {
        match month0 {
            7 => "august".to_owned(),
            _ => "month".to_owned(),
        }
    }

    #[test]
    fn kebab_lowercases_and_hyphenates() {
        assert_eq!(kebab("Agosto"), "agosto");
        assert_eq!(kebab("mes de agosto"), "mes-de-agosto");
    }

    #[test]
    fn encodes_day_month_and_seo_slug() {
        let h = holiday("08-07", "battle_boyaca", "batalla-de-boyaca");
        assert_eq!(
            encode(&h, spanish).unwrap(),
            "07-agosto-batalla-de-boyaca"
        );
    }

    #[test]
    fn round_trips_under_the_same_language() {
        let holidays = vec![
            holiday("08-07", "battle_boyaca", "batalla-de-boyaca"),
            holiday("08-15", "assumption", "asuncion"),
        ];
        for h in &holidays {
            let slug = encode(h, spanish).unwrap();
            assert_eq!(decode(&holidays, &slug, spanish), Some(h));
        }
    }

    #[test]
    fn cross_language_slug_does_not_match() {
        let holidays = vec![holiday("08-07", "battle_boyaca", "battle-of-boyaca")];
        let slug = encode(&holidays[0], english).unwrap();
        assert_eq!(slug, "07-august-battle-of-boyaca");
        // Decoding under Spanish recomputes "07-agosto-..." and misses.
        assert_eq!(decode(&holidays, &slug, spanish), None);
    }

    #[test]
    fn first_match_wins_on_duplicate_dates() {
        let holidays = vec![
            holiday("08-07", "first", "same-slug"),
            holiday("08-07", "second", "same-slug"),
        ];
        let found = decode(&holidays, "07-agosto-same-slug", spanish).unwrap();
        assert_eq!(found.article_id, "first");
    }

    #[test]
    fn malformed_dates_are_skipped() {
        let holidays = vec![
            holiday("bogus", "broken", "x"),
            holiday("08-07", "battle_boyaca", "x"),
        ];
        assert!(encode(&holidays[0], spanish).is_none());
        let found = decode(&holidays, "07-agosto-x", spanish).unwrap();
        assert_eq!(found.article_id, "battle_boyaca");
    }
}
