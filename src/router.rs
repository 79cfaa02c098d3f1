use chrono::{Datelike, Local};

use crate::article;
use crate::cmds::Cmd;
use crate::config::Config;
use crate::dataset::Dataset;
use crate::i18n::Catalog;
use crate::slug;
use crate::ui::artview::{self, ArticleScreen};
use crate::ui::calview::{self, CalendarScreen};

/// Path classification of the route surface. Everything that is neither
/// the calendar root, an article path nor a page file is `Unknown` and
/// gets redirected to the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Calendar,
    Article,
    StaticPage,
    Unknown,
}

impl Route {
    pub fn classify(path: &str) -> Route {
        if path == "/" || path == "/index.html" {
            Route::Calendar
        } else if path.starts_with("/articles/") {
            Route::Article
        } else if path.ends_with(".html") {
            Route::StaticPage
        } else {
            Route::Unknown
        }
    }
}

/// History payload attached on article navigation. Informational only:
/// on back/forward the path is re-resolved from scratch and this is
/// never read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub article_id: String,
    pub country: String,
    pub seo_slug: String,
    pub date: String,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub path: String,
    pub state: Option<NavState>,
}

/// Session-local history: a stack of entries plus a cursor. Pushing
/// truncates the forward tail, replacing swaps the current entry in
/// place.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
    index: usize,
}

impl History {
    pub fn new(path: &str) -> Self {
        History {
            entries: vec![HistoryEntry {
                path: path.to_owned(),
                state: None,
            }],
            index: 0,
        }
    }

    pub fn current(&self) -> &str {
        &self.entries[self.index].path
    }

    pub fn push(&mut self, path: &str, state: Option<NavState>) {
        self.entries.truncate(self.index + 1);
        self.entries.push(HistoryEntry {
            path: path.to_owned(),
            state,
        });
        self.index = self.entries.len() - 1;
    }

    pub fn replace(&mut self, path: &str) {
        self.entries[self.index] = HistoryEntry {
            path: path.to_owned(),
            state: None,
        };
    }

    pub fn back(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    pub fn forward(&mut self) -> bool {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActiveView {
    Calendar,
    Article(NavState),
    /// A page file outside SPA control; the dynamic view is cleared.
    External,
}

/// The mutable record of what the application currently displays.
/// Created once from config defaults and the current system month/year,
/// mutated only by the [`Router`], never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub language: String,
    pub country: String,
    pub displayed_month: u32,
    pub displayed_year: i32,
    pub active_view: ActiveView,
}

impl ViewState {
    pub fn with_defaults(language: &str, country: &str) -> Self {
        let today = Local::now();
        ViewState {
            language: language.to_owned(),
            country: country.to_owned(),
            displayed_month: today.month0(),
            displayed_year: today.year(),
            active_view: ActiveView::Calendar,
        }
    }
}

/// Blocking user notification, rendered by the presenter.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn error(message: &str) -> Self {
        Alert {
            title: "Error".to_owned(),
            message: message.to_owned(),
        }
    }

    pub fn notice(message: &str) -> Self {
        Alert {
            title: "Notice".to_owned(),
            message: message.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Calendar(CalendarScreen),
    Article(ArticleScreen),
    /// Externally-handled page: the dynamic view container is cleared.
    Cleared,
    /// Nothing to redraw (selector changes while no calendar is shown).
    Unchanged,
}

/// Result of one routing or command dispatch: exactly one screen
/// decision, optionally accompanied by a notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub screen: Screen,
    pub alert: Option<Alert>,
}

impl Outcome {
    fn unchanged() -> Self {
        Outcome {
            screen: Screen::Unchanged,
            alert: None,
        }
    }

    fn notice(message: &str) -> Self {
        Outcome {
            screen: Screen::Unchanged,
            alert: Some(Alert::notice(message)),
        }
    }
}

/// Single authority for the `(path) ⇄ (active view)` mapping. Owns the
/// view state and the session history; consumes commands synchronously.
pub struct Router {
    state: ViewState,
    history: History,
    dataset: Dataset,
    catalog: Catalog,
}

impl Router {
    pub fn new(config: &Config, dataset: Dataset, catalog: Catalog) -> Router {
        Router {
            state: ViewState::with_defaults(&config.language, &config.country),
            history: History::new("/"),
            dataset,
            catalog,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Initial load: the given path becomes the sole history entry, then
    /// routes are handled as for any later navigation.
    pub fn start(&mut self, path: &str) -> Outcome {
        self.history = History::new(path);
        self.handle_route()
    }

    /// Classifies the current history path and reconciles the view. Never
    /// fails: unrecognized paths and article failures recover by
    /// rewriting history to the root (replace, not push) and rendering
    /// the calendar.
    pub fn handle_route(&mut self) -> Outcome {
        let path = self.history.current().to_owned();
        match Route::classify(&path) {
            Route::Calendar => self.render_calendar(None),
            Route::Article => match article::resolve(&path, &self.dataset, &self.catalog) {
                Ok(resolved) => {
                    let nav = NavState {
                        article_id: resolved.holiday.article_id.clone(),
                        country: resolved.country.clone(),
                        seo_slug: resolved.holiday.seo_slug.clone(),
                        date: resolved.holiday.date.clone(),
                    };
                    self.state.active_view = ActiveView::Article(nav);
                    Outcome {
                        screen: Screen::Article(artview::article_screen(
                            &resolved,
                            &self.catalog,
                        )),
                        alert: None,
                    }
                }
                Err(err) => {
                    log::error!("article resolution failed for '{}': {}", path, err);
                    self.history.replace("/");
                    self.render_calendar(Some(Alert::error(&err.kind.as_str())))
                }
            },
            Route::StaticPage => {
                // Page files are separate physical pages; the dynamic
                // view gives up control and clears itself.
                self.state.active_view = ActiveView::External;
                Outcome {
                    screen: Screen::Cleared,
                    alert: None,
                }
            }
            Route::Unknown => {
                log::warn!("unrecognized path '{}', redirecting to /", path);
                self.history.replace("/");
                self.render_calendar(None)
            }
        }
    }

    /// Pushes a history entry and reconciles the view against it.
    pub fn navigate(&mut self, path: &str, state: Option<NavState>) -> Outcome {
        self.history.push(path, state);
        self.handle_route()
    }

    pub fn dispatch(&mut self, cmd: Cmd) -> Outcome {
        match cmd {
            Cmd::Open(path) => self.navigate(&path, None),
            Cmd::OpenDay(day) => self.open_day(day),
            Cmd::NextMonth => {
                if self.state.displayed_month == 11 {
                    self.state.displayed_month = 0;
                    self.state.displayed_year += 1;
                } else {
                    self.state.displayed_month += 1;
                }
                self.redraw_calendar()
            }
            Cmd::PrevMonth => {
                if self.state.displayed_month == 0 {
                    self.state.displayed_month = 11;
                    self.state.displayed_year -= 1;
                } else {
                    self.state.displayed_month -= 1;
                }
                self.redraw_calendar()
            }
            Cmd::Back => {
                if self.history.back() {
                    self.handle_route()
                } else {
                    Outcome::notice("already at the oldest history entry")
                }
            }
            Cmd::Forward => {
                if self.history.forward() {
                    self.handle_route()
                } else {
                    Outcome::notice("already at the newest history entry")
                }
            }
            Cmd::ChangeLanguage(code) => {
                self.catalog.set_language(&code);
                self.state.language = code;
                // Re-render the current view under the new language. An
                // article whose slug no longer decodes falls back to the
                // calendar through the usual recovery path.
                self.handle_route()
            }
            Cmd::ChangeCountry(code) => {
                if self.dataset.country(&code).is_none() {
                    return Outcome {
                        screen: Screen::Unchanged,
                        alert: Some(Alert::error(&format!("unknown country '{}'", code))),
                    };
                }
                self.state.country = code;
                self.redraw_calendar()
            }
            Cmd::Noop | Cmd::Help | Cmd::Exit => Outcome::unchanged(),
        }
    }

    /// Opens the article of the holiday shown on the given day of the
    /// displayed month, constructing the path through the slug codec.
    fn open_day(&mut self, day: u32) -> Outcome {
        if !matches!(self.state.active_view, ActiveView::Calendar) {
            return Outcome::notice("no calendar is displayed");
        }
        if day == 0 || day > calview::days_in_month(self.state.displayed_year, self.state.displayed_month)
        {
            return Outcome::notice(&format!("no day {} in the displayed month", day));
        }

        let (path, nav) = {
            let holiday = match self.dataset.holiday_on(
                &self.state.country,
                self.state.displayed_month,
                day,
            ) {
                Some(holiday) => holiday,
                None => return Outcome::notice(&format!("no holiday on day {}", day)),
            };
            let catalog = &self.catalog;
            let slug_part = match slug::encode(holiday, move |month0| catalog.month_name(month0)) {
                Some(slug_part) => slug_part,
                None => return Outcome::notice(&format!("no holiday on day {}", day)),
            };
            (
                format!("/articles/{}/{}", self.state.country, slug_part),
                NavState {
                    article_id: holiday.article_id.clone(),
                    country: self.state.country.clone(),
                    seo_slug: holiday.seo_slug.clone(),
                    date: holiday.date.clone(),
                },
            )
        };

        self.navigate(&path, Some(nav))
    }

    fn render_calendar(&mut self, alert: Option<Alert>) -> Outcome {
        self.state.active_view = ActiveView::Calendar;
        Outcome {
            screen: Screen::Calendar(calview::month_screen(
                &self.state,
                &self.dataset,
                &self.catalog,
            )),
            alert,
        }
    }

    /// Selector-style changes only repaint when the calendar is the
    /// active view; an open article stays put.
    fn redraw_calendar(&mut self) -> Outcome {
        if matches!(self.state.active_view, ActiveView::Calendar) {
            self.render_calendar(None)
        } else {
            Outcome::unchanged()
        }
    }
}
