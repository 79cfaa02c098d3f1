/// One user action, produced by the command parser and consumed
/// synchronously by the router. Mirrors the navigation surface of the
/// calendar: path navigation, history movement, month stepping and the
/// language/country selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    Noop,
    Open(String),
    OpenDay(u32),
    NextMonth,
    PrevMonth,
    Back,
    Forward,
    ChangeLanguage(String),
    ChangeCountry(String),
    Help,
    Exit,
}
