use std::io::{self, Write};

use crate::cmds::Cmd;
use crate::config::Config;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::events::{Dispatcher, Event};
use crate::i18n::Catalog;
use crate::router::{Alert, Router};

use super::command;

pub struct App {
    router: Router,
}

impl App {
    pub fn new(config: &Config, dataset: Dataset, catalog: Catalog) -> App {
        App {
            router: Router::new(config, dataset, catalog),
        }
    }

    /// Renders the view for the initial path once, without entering the
    /// interactive loop.
    pub fn render_once(&mut self, initial_path: &str) {
        let outcome = self.router.start(initial_path);
        super::draw(self.router.history().current(), &outcome);
    }

    pub fn run(&mut self, dispatcher: Dispatcher, initial_path: &str) -> Result<()> {
        self.render_once(initial_path);
        self.prompt()?;

        while let Ok(event) = dispatcher.next() {
            let line = match event {
                Event::Line(line) => line,
                Event::Eof => break,
            };

            match command::parse(&line) {
                Ok(Cmd::Exit) => break,
                Ok(Cmd::Help) => println!("{}", command::HELP_TEXT),
                Ok(Cmd::Noop) => {}
                Ok(cmd) => {
                    log::debug!("dispatching {:?}", cmd);
                    let outcome = self.router.dispatch(cmd);
                    super::draw(self.router.history().current(), &outcome);
                }
                Err(err) => super::draw_alert(&Alert::error(&err.to_string())),
            }

            self.prompt()?;
        }

        Ok(())
    }

    fn prompt(&self) -> Result<()> {
        print!("feriado> ");
        io::stdout().flush()?;
        Ok(())
    }
}
