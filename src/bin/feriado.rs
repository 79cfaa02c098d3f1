extern crate feriado as lib;

use flexi_logger::{FileSpec, Logger};
use lib::config;
use lib::dataset::Dataset;
use lib::events::Dispatcher;
use lib::i18n::Catalog;
use lib::router::Alert;
use lib::ui::app::App;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "feriado",
    about = "Feriado - a perpetual public-holiday calendar browser."
)]
pub struct Args {
    #[structopt(
        name = "PATH",
        help = "initial path to open, e.g. / or /articles/colombia/07-agosto-batalla-de-boyaca"
    )]
    pub path: Option<String>,

    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(
        long = "data-dir",
        help = "path to the directory holding holidays.json and locales/",
        parse(from_os_str)
    )]
    pub data_dir: Option<PathBuf>,

    #[structopt(
        short = "s",
        long = "show",
        help = "only render the initial view non-interactively"
    )]
    pub show: bool,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &'static str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    logger.start()?;

    let mut config = config::load_suitable_config(args.configfile.as_deref())?;
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }

    // Dataset and locale dictionaries load together before anything
    // renders; a failure here is terminal, there is no partial view.
    let loaded = Dataset::from_path(&config.holidays_file()).and_then(|dataset| {
        Catalog::load(
            &config.locales_dir(),
            &config.language,
            &config.fallback_language,
        )
        .map(|catalog| (dataset, catalog))
    });

    let (dataset, catalog) = match loaded {
        Ok(loaded) => loaded,
        Err(err) => {
            log::error!("{}", err);
            lib::ui::draw_alert(&Alert::error(
                "Could not load application data. Please try again later.",
            ));
            return Err(err.into());
        }
    };

    let mut app = App::new(&config, dataset, catalog);
    let initial_path = args.path.unwrap_or_else(|| "/".to_owned());

    if args.show {
        app.render_once(&initial_path);
        Ok(())
    } else {
        let dispatcher = Dispatcher::new();
        app.run(dispatcher, &initial_path)?;
        Ok(())
    }
}
