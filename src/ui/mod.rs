pub mod app;
pub mod artview;
pub mod calview;
pub mod command;

use itertools::Itertools;
use termion::{color, style};

use crate::router::{Alert, Outcome, Screen};

use artview::ArticleScreen;
use calview::CalendarScreen;

const CELL_WIDTH: usize = 4;

/// Draws one dispatch outcome: address line, screen, then any alert.
/// Purely mechanical; all routing and matching decisions were made by
/// the router that produced the outcome.
pub fn draw(path: &str, outcome: &Outcome) {
    match &outcome.screen {
        Screen::Calendar(screen) => {
            draw_address(path);
            draw_calendar(screen);
        }
        Screen::Article(screen) => {
            draw_address(path);
            draw_article(screen);
        }
        Screen::Cleared => {
            draw_address(path);
            println!("(this page is not handled here)");
        }
        Screen::Unchanged => {}
    }

    if let Some(alert) = &outcome.alert {
        draw_alert(alert);
    }
}

fn draw_address(path: &str) {
    println!(
        "{}{}▸ {}{}{}",
        style::Bold,
        color::Fg(color::Blue),
        path,
        color::Fg(color::Reset),
        style::Reset
    );
}

fn draw_calendar(screen: &CalendarScreen) {
    println!(
        "{}{}{}{}",
        style::Bold,
        color::Fg(color::Yellow),
        screen.header,
        style::Reset
    );

    let names = screen
        .day_names
        .iter()
        .map(|name| format!("{:>width$}", name, width = CELL_WIDTH))
        .join("");
    println!("{}", names);

    let blanks = std::iter::repeat(String::new()).take(screen.leading_blanks);
    let days = screen.cells.iter().map(|cell| {
        if cell.holiday.is_some() {
            format!(
                "{}{:>width$}{}",
                color::Fg(color::Red),
                cell.day,
                color::Fg(color::Reset),
                width = CELL_WIDTH
            )
        } else {
            format!("{:>width$}", cell.day, width = CELL_WIDTH)
        }
    });

    let cells = blanks
        .map(|blank| format!("{:>width$}", blank, width = CELL_WIDTH))
        .chain(days);
    let weeks = cells.chunks(7);
    for week in &weeks {
        println!("{}", week.collect::<String>());
    }

    for cell in screen.cells.iter() {
        if let Some(mark) = &cell.holiday {
            println!(
                "{:>2}  {}{}{}",
                cell.day,
                color::Fg(color::Red),
                mark.short_text,
                color::Fg(color::Reset)
            );
        }
    }
}

fn draw_article(screen: &ArticleScreen) {
    println!(
        "{}{}{}",
        style::Bold,
        screen.title,
        style::Reset
    );
    println!("[{}]", screen.image);
    println!();
    println!("{}", screen.content);
    println!();
    println!(
        "{}← {}{} (open /)",
        color::Fg(color::Blue),
        screen.back_label,
        color::Fg(color::Reset)
    );
}

pub fn draw_alert(alert: &Alert) {
    println!(
        "{}{}[{}]{} {}",
        style::Bold,
        color::Fg(color::Red),
        alert.title,
        style::Reset,
        alert.message
    );
}
