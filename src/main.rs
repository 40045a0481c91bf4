use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use convarc::core::config;
use convarc::tui;

#[derive(Parser)]
#[command(name = "convarc", about = "Terminal entry form for convective outlook archive queries")]
struct Args {
    /// Disable mouse capture
    #[arg(long)]
    no_mouse: bool,

    /// Write the debug log to this file instead of convarc.log
    #[arg(long)]
    log_file: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("convarc: {e}");
            std::process::exit(1);
        }
    };
    let config = config::resolve(&file_config, args.no_mouse, args.log_file.as_deref());

    // Initialize file logger - best effort, the form runs without it
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("convarc starting up (mouse: {})", config.enable_mouse);

    tui::run(config)
}
