//! End-to-end routing tests over the shipped sample data.

use std::path::Path;

use feriado::cmds::Cmd;
use feriado::config::Config;
use feriado::dataset::Dataset;
use feriado::i18n::Catalog;
use feriado::router::{ActiveView, Router, Screen};
use feriado::slug;

fn load_router(language: &str) -> Router {
    let data = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let dataset = Dataset::from_path(&data.join("holidays.json")).expect("dataset should load");
    let catalog =
        Catalog::load(&data.join("locales"), language, "en").expect("locales should load");
    let mut config = Config::default();
    config.language = language.to_owned();
    Router::new(&config, dataset, catalog)
}

#[test]
fn opens_the_canonical_spanish_article_path() {
    let mut router = load_router("es");
    router.start("/");
    let outcome = router.dispatch(Cmd::Open(
        "/articles/colombia/07-agosto-batalla-de-boyaca".to_owned(),
    ));
    match outcome.screen {
        Screen::Article(screen) => {
            assert_eq!(screen.title, "Batalla de Boyacá");
            assert_eq!(screen.image, "images/boyaca.jpg");
            assert_eq!(screen.back_label, "Volver al calendario");
            assert!(screen.content.contains("1819"));
        }
        other => panic!("expected article screen, got {:?}", other),
    }
    assert!(matches!(
        router.state().active_view,
        ActiveView::Article(_)
    ));
}

#[test]
fn english_path_under_spanish_session_recovers_to_calendar() {
    let mut router = load_router("es");
    router.start("/");
    let outcome = router.dispatch(Cmd::Open(
        "/articles/colombia/07-august-batalla-de-boyaca".to_owned(),
    ));
    assert!(matches!(outcome.screen, Screen::Calendar(_)));
    assert!(outcome.alert.is_some());
    assert_eq!(router.history().current(), "/");
}

#[test]
fn every_holiday_round_trips_through_its_article_path() {
    for language in ["es", "en"].iter().copied() {
        let mut router = load_router(language);
        router.start("/");

        let paths: Vec<(String, String)> = router
            .dataset()
            .countries()
            .flat_map(|(code, entry)| {
                let catalog = router.catalog();
                entry.holidays.iter().map(move |holiday| {
                    let slug_part =
                        slug::encode(holiday, |month0| catalog.month_name(month0)).unwrap();
                    (
                        format!("/articles/{}/{}", code, slug_part),
                        holiday.article_id.clone(),
                    )
                })
            })
            .collect();

        for (path, article_id) in paths {
            let outcome = router.dispatch(Cmd::Open(path.clone()));
            match (&outcome.screen, router.state().active_view.clone()) {
                (Screen::Article(_), ActiveView::Article(nav)) => {
                    assert_eq!(nav.article_id, article_id, "path {}", path)
                }
                other => panic!("path {} did not resolve: {:?}", path, other),
            }
        }
    }
}

#[test]
fn unknown_initial_path_redirects_to_root() {
    let mut router = load_router("es");
    let outcome = router.start("/definitely/not/a/route");
    assert!(matches!(outcome.screen, Screen::Calendar(_)));
    assert_eq!(router.history().current(), "/");
    assert_eq!(router.history().len(), 1);
}

#[test]
fn session_history_walk() {
    let mut router = load_router("es");
    router.start("/");
    router.dispatch(Cmd::Open(
        "/articles/colombia/25-diciembre-navidad".to_owned(),
    ));
    router.dispatch(Cmd::Open("/about.html".to_owned()));
    assert_eq!(router.history().len(), 3);

    let outcome = router.dispatch(Cmd::Back);
    assert!(matches!(outcome.screen, Screen::Article(_)));

    let outcome = router.dispatch(Cmd::Back);
    assert!(matches!(outcome.screen, Screen::Calendar(_)));
    assert_eq!(router.history().current(), "/");

    let outcome = router.dispatch(Cmd::Forward);
    assert!(matches!(outcome.screen, Screen::Article(_)));
    assert_eq!(
        router.history().current(),
        "/articles/colombia/25-diciembre-navidad"
    );
}

#[test]
fn country_switch_relabels_the_grid() {
    let mut router = load_router("en");
    router.start("/");
    let outcome = router.dispatch(Cmd::ChangeCountry("usa".to_owned()));
    assert!(matches!(outcome.screen, Screen::Calendar(_)));
    assert_eq!(router.state().country, "usa");

    // The US list has no holiday on 08-07.
    assert!(router.dataset().holiday_on("usa", 7, 7).is_none());
    assert!(router.dataset().holiday_on("usa", 6, 4).is_some());
}
