use clap::Parser;
use tasklist::cli::commands::Cli;
use tasklist::io::config_io::load_config;
use tasklist::io::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    let overrides = cli.overrides(&config.log.level);
    config.apply_overrides(overrides);

    // Keep the guard alive so buffered log lines flush on exit
    let _guard = match init_logging(&config.log) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = tasklist::tui::run(&config) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
