mod configuration;

use anyhow::{anyhow, Result};
use configuration::Configuration;
use log::info;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config as LogConfig, Root};
use treap_collections::stress;

fn main() -> Result<()> {
    let matches = configuration::app().get_matches();
    let conf = Configuration::parse(&matches)?;

    let stdout = ConsoleAppender::builder().build();
    let log_config = LogConfig::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(conf.log_level))
        .map_err(|e| anyhow!("invalid log configuration: {}", e))?;
    log4rs::init_config(log_config).map_err(|e| anyhow!("failed to initialize logging: {}", e))?;

    let report = stress::run(&conf.stress)?;
    info!(
        "{} operations, {} keys left",
        report.operations(),
        report.final_len
    );
    Ok(())
}
