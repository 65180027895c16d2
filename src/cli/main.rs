mod config;
mod session;

use clap::Parser;
use config::CliArgs;
use session::Session;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

fn init_logging(args: &CliArgs) {
    let Some(path) = args.log_file.as_ref() else {
        return;
    };

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    match File::create(path) {
        Ok(log_file) => {
            let _ = WriteLogger::init(args.log_level, log_config, log_file);
        }
        Err(err) => eprintln!("could not open log file {}: {err}", path.display()),
    }
}

fn main() {
    let args = CliArgs::parse();
    init_logging(&args);
    log::info!("ttt_cli starting with {args:?}");

    println!("program begin");
    let mut session = Session::new(&args);
    session.start(args.script.as_deref());
    println!("program end");
}
