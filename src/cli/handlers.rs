use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use crate::app::{AppState, Tab};
use crate::config::DashboardConfig;
use crate::console::Console;
use crate::error::{RailboardError, Result};
use crate::render::{Palette, Renderer};
use crate::search::StatusFilter;

/// Load the config file if one was given, otherwise use defaults.
pub fn load_config(path: Option<&Path>) -> Result<DashboardConfig> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "Loading config");
            DashboardConfig::load(path)
        }
        None => Ok(DashboardConfig::default()),
    }
}

fn renderer(config: &DashboardConfig, no_color: bool) -> Renderer {
    Renderer::new(
        Palette::from_color_flag(config.use_color(no_color)),
        config.bar_width,
    )
}

/// Build session state from config plus command-line overrides.
fn initial_state(
    config: &DashboardConfig,
    search: Option<String>,
    filter: Option<String>,
    tab: Option<String>,
) -> Result<AppState> {
    let mut state = AppState::from_config(config);

    if let Some(filter) = filter {
        let filter: StatusFilter = filter.parse().map_err(RailboardError::InvalidFilter)?;
        state.set_filter(filter);
    }
    if let Some(tab) = tab {
        let tab: Tab = tab.parse().map_err(RailboardError::InvalidTab)?;
        state.select_tab(tab);
    }
    if let Some(search) = search {
        state.set_search(search);
    }

    Ok(state)
}

pub fn handle_list(
    config: &DashboardConfig,
    no_color: bool,
    search: Option<String>,
    filter: Option<String>,
    json: bool,
) -> Result<()> {
    let state = initial_state(config, search, filter, None)?;
    let trains = state.visible_trains();

    if json {
        println!("{}", serde_json::to_string_pretty(&trains)?);
    } else {
        print!("{}", renderer(config, no_color).render_train_list(&trains));
    }

    Ok(())
}

pub fn handle_stats(config: &DashboardConfig, no_color: bool, json: bool) -> Result<()> {
    let state = AppState::from_config(config);
    let stats = state.aggregates();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{}", renderer(config, no_color).render_stats(&stats));
    }

    Ok(())
}

pub fn handle_show(
    config: &DashboardConfig,
    no_color: bool,
    search: Option<String>,
    filter: Option<String>,
    tab: Option<String>,
) -> Result<()> {
    let state = initial_state(config, search, filter, tab)?;
    print!("{}", renderer(config, no_color).render_dashboard(&state));
    Ok(())
}

pub fn handle_console(config: &DashboardConfig, no_color: bool) -> Result<()> {
    let state = AppState::from_config(config);
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut console = Console::new(
        state,
        renderer(config, no_color),
        stdin.lock(),
        stdout.lock(),
    );

    // Only prompt a human; piped input gets plain output
    if atty::is(atty::Stream::Stdin) {
        console = console.with_prompt(config.prompt.clone());
    }

    console.run()?;
    io::stdout().flush()?;
    Ok(())
}
