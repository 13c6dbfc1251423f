// src/render/mod.rs
//! Text rendering of the dashboard.
//!
//! Every function returns a `String`; nothing here writes to the terminal.

use crate::app::{AppState, Tab};
use crate::entity::{DraftField, TrainDraft, TrainRecord, TrainStatus};
use crate::search::StatusFilter;
use crate::stats::{occupancy_percent, occupancy_ratio, Aggregates, OccupancyTier};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Display colours used for status badges and occupancy bars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Yellow,
    Red,
    Blue,
}

impl Color {
    fn ansi(&self) -> &'static str {
        match self {
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Red => "\x1b[31m",
            Color::Blue => "\x1b[34m",
        }
    }
}

pub fn status_color(status: TrainStatus) -> Color {
    match status {
        TrainStatus::OnTime => Color::Green,
        TrainStatus::Delayed => Color::Yellow,
        TrainStatus::Cancelled => Color::Red,
        TrainStatus::Boarding => Color::Blue,
    }
}

pub fn tier_color(tier: OccupancyTier) -> Color {
    match tier {
        OccupancyTier::High => Color::Red,
        OccupancyTier::Medium => Color::Yellow,
        OccupancyTier::Low => Color::Green,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    #[default]
    Plain,
    Ansi,
}

impl Palette {
    pub fn from_color_flag(color: bool) -> Self {
        if color {
            Palette::Ansi
        } else {
            Palette::Plain
        }
    }

    fn paint(&self, color: Color, text: &str) -> String {
        match self {
            Palette::Plain => text.to_string(),
            Palette::Ansi => format!("{}{}{}", color.ansi(), text, RESET),
        }
    }

    fn bold(&self, text: &str) -> String {
        match self {
            Palette::Plain => text.to_string(),
            Palette::Ansi => format!("{}{}{}", BOLD, text, RESET),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    palette: Palette,
    bar_width: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Palette::Plain, 20)
    }
}

impl Renderer {
    pub fn new(palette: Palette, bar_width: usize) -> Self {
        Self { palette, bar_width }
    }

    /// Full screen: header, tabs, toolbar, counters, train list and, when
    /// open, the add-train form.
    pub fn render_dashboard(&self, state: &AppState) -> String {
        let mut out = String::new();
        out.push_str(&self.palette.bold("Train Management"));
        out.push_str(" | System Control Center\n\n");
        out.push_str(&self.render_tabs(state.active_tab()));
        out.push('\n');
        out.push_str(&self.render_toolbar(state.search_text(), state.status_filter()));
        out.push('\n');
        out.push_str(&self.render_stats(&state.aggregates()));
        out.push('\n');
        out.push_str(&self.render_train_list(&state.visible_trains()));

        if state.is_form_open() {
            out.push('\n');
            out.push_str(&self.render_form(&state.form().draft));
        }

        out
    }

    pub fn render_tabs(&self, active: Tab) -> String {
        let labels: Vec<String> = Tab::ALL
            .iter()
            .map(|tab| selected(tab.label(), *tab == active))
            .collect();
        format!("{}\n", labels.join("  "))
    }

    pub fn render_toolbar(&self, search: &str, filter: StatusFilter) -> String {
        let search = if search.is_empty() {
            "(none)".to_string()
        } else {
            format!("\"{}\"", search)
        };
        let buttons: Vec<String> = StatusFilter::ALL
            .iter()
            .map(|f| selected(f.label(), *f == filter))
            .collect();
        format!("Search: {}   Filter: {}\n", search, buttons.join("  "))
    }

    pub fn render_stats(&self, stats: &Aggregates) -> String {
        format!(
            "Total Trains: {}   On Time: {}   Delayed: {}   Total Capacity: {}\n",
            stats.total,
            self.palette.paint(Color::Green, &stats.on_time.to_string()),
            self.palette.paint(Color::Yellow, &stats.delayed.to_string()),
            stats.total_capacity
        )
    }

    /// Cards for every train, or the empty state when there are none.
    pub fn render_train_list(&self, trains: &[&TrainRecord]) -> String {
        if trains.is_empty() {
            return self.render_empty_state();
        }
        trains
            .iter()
            .map(|train| self.render_train_card(train))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_train_card(&self, train: &TrainRecord) -> String {
        let badge = self
            .palette
            .paint(status_color(train.status), &format!("[{}]", train.status));
        let delay = train
            .visible_delay()
            .map(|d| format!(" {}", self.palette.paint(Color::Yellow, &format!("(+{}m)", d))))
            .unwrap_or_default();

        let mut card = format!(
            "{} ({})  {}\n",
            self.palette.bold(&train.name),
            train.number,
            badge
        );
        card.push_str(&format!("  Route:     {} → {}\n", train.from, train.to));
        card.push_str(&format!(
            "  Time:      {} - {}{}\n",
            train.departure, train.arrival, delay
        ));
        card.push_str(&format!("  Platform:  {}\n", train.platform));
        card.push_str(&format!(
            "  Occupancy: {}/{} ({}%)\n",
            train.occupied,
            train.capacity,
            occupancy_percent(train)
        ));
        card.push_str(&format!("  {}\n", self.occupancy_bar(occupancy_ratio(train))));
        card
    }

    pub fn render_empty_state(&self) -> String {
        "No trains found\nTry adjusting your search or filters\n".to_string()
    }

    /// Bar filled in proportion to `ratio`, clamped to the bar width and
    /// coloured by occupancy tier.
    pub fn occupancy_bar(&self, ratio: f64) -> String {
        let width = self.bar_width;
        let filled = if ratio.is_nan() {
            0
        } else {
            (ratio * width as f64).round().clamp(0.0, width as f64) as usize
        };
        let fill = self
            .palette
            .paint(tier_color(OccupancyTier::from_ratio(ratio)), &"#".repeat(filled));
        format!("[{}{}]", fill, "-".repeat(width - filled))
    }

    pub fn render_form(&self, draft: &TrainDraft) -> String {
        let mut out = format!("{}\n", self.palette.bold("Add New Train"));
        for field in DraftField::ALL {
            let marker = if field.is_required() { "*" } else { " " };
            out.push_str(&format!(
                "  {}{:<15} ({:<9}): {}\n",
                marker,
                field.label(),
                field.to_string(),
                draft.field_value(field)
            ));
        }
        out.push_str("  [Cancel]  [Add Train]\n");
        out
    }
}

fn selected(label: &str, active: bool) -> String {
    if active {
        format!("[{}]", label)
    } else {
        format!(" {} ", label)
    }
}
