use clap::Parser;
use railboard::cli::{
    handle_console, handle_list, handle_show, handle_stats, load_config, Cli, Commands,
};
use railboard::logging;

fn main() {
    logging::init();
    let cli = Cli::parse();

    let result = load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::List {
            search,
            filter,
            json,
        } => handle_list(&config, cli.no_color, search, filter, json),
        Commands::Stats { json } => handle_stats(&config, cli.no_color, json),
        Commands::Show {
            search,
            filter,
            tab,
        } => handle_show(&config, cli.no_color, search, filter, tab),
        Commands::Console => handle_console(&config, cli.no_color),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
