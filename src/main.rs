// std imports
use std::{
    io::{stdin, stdout},
    process,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use extkit::{App, cli, config, error::*, settings::Settings};

const EXTKIT_DEBUG_LOG: &str = "EXTKIT_DEBUG_LOG";
const EXTKIT_DEBUG_LOG_STYLE: &str = "EXTKIT_DEBUG_LOG_STYLE";

// ---

fn bootstrap(opt: &cli::BootstrapArgs) -> Result<Settings> {
    if std::env::var(EXTKIT_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(logger::Env::new().filter(EXTKIT_DEBUG_LOG).write_style(EXTKIT_DEBUG_LOG_STYLE))
            .format_timestamp_micros()
            .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }

    let (configs, no_default_configs) = opt.config_files();

    config::at(configs).no_default(no_default_configs).load()
}

fn run() -> Result<()> {
    let opt = cli::Opt::parse();
    let settings = bootstrap(&opt.bootstrap)?;
    log::debug!("settings: {:?}", settings);

    let app = App::new(settings);
    app.run(opt.command, &mut stdin().lock(), &mut stdout().lock())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
