mod commands;
mod handlers;

pub use commands::{Cli, Commands};
pub use handlers::{handle_console, handle_list, handle_show, handle_stats, load_config};
