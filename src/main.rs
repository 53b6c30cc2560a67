// Agenda Calendar host adapter
// Fetches the event collection once, applies the control flags as
// navigation calls and writes the rendered page

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use agenda_calendar::models::view_state::{ViewMode, ViewState};
use agenda_calendar::services::config::AppConfig;
use agenda_calendar::services::event_store::EventStore;
use agenda_calendar::ui::app::CalendarApp;
use agenda_calendar::ui::views::MONTH_NAMES;

#[derive(Parser)]
#[command(
    name = "agenda-calendar",
    version,
    about = "Renders the agenda calendar from the remote event store"
)]
struct Cli {
    /// View mode to render.
    #[arg(long, value_enum, default_value_t = ModeArg::Month)]
    mode: ModeArg,

    /// Calendar year (defaults to the current year).
    #[arg(short, long)]
    year: Option<i32>,

    /// Calendar month, 1-12 (defaults to the current month).
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
    month: Option<u32>,

    /// Date for the day view, YYYY-MM-DD (defaults to today).
    #[arg(short, long)]
    date: Option<String>,

    /// Semester half for the semester view.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=2))]
    semester: u8,

    /// Navigate this many months from the selected month (e.g. -1).
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    shift: i32,

    /// Path to the TOML config file (defaults to the platform config dir).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the page to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Month,
    Year,
    Semester,
    Day,
}

impl From<ModeArg> for ViewMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Month => ViewMode::Month,
            ModeArg::Year => ViewMode::Year,
            ModeArg::Semester => ViewMode::Semester,
            ModeArg::Day => ViewMode::Day,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref());
    log::info!("Using event store at {}", config.event_store_url);

    let store = EventStore::new(&config.event_store_url)?;
    let events = store.load_events().await;

    let mut app = CalendarApp::new(events);
    if let Some(year) = cli.year {
        app.set_year(year);
    }
    if let Some(month) = cli.month {
        app.set_month(month - 1);
    }
    if let Some(date) = cli.date.as_deref() {
        app.pick_date(date);
    }
    if cli.semester == 2 {
        app.toggle_semester();
    }
    app.set_mode(cli.mode.into());
    if cli.shift != 0 {
        app.step_month(cli.shift);
    }

    let page = render_page(&app, &config);
    match &cli.output {
        Some(path) => {
            fs::write(path, &page)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Calendar written to {}", path.display());
        }
        None => print!("{}", page),
    }

    Ok(())
}

/// Wrap the fragments in a minimal page shell. The control markup carries
/// the same ids and data hooks a browser host would wire back into the
/// navigation API.
fn render_page(app: &CalendarApp, config: &AppConfig) -> String {
    let output = app.render();

    let mut page = String::from(
        "<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Agenda de eventos</title>\n<link rel=\"stylesheet\" href=\"calendario.css\">\n\
         </head>\n<body>\n",
    );
    page.push_str(&format!(
        "<header class=\"controls\">{}</header>\n",
        render_controls(&app.state, config)
    ));
    page.push_str(&format!(
        "<main>\n<section id=\"calendario\">{}</section>\n<aside id=\"detalhes\">{}</aside>\n\
         <aside id=\"legenda\">{}</aside>\n</main>\n",
        output.calendar,
        output.details,
        app.legend()
    ));
    page.push_str("</body>\n</html>\n");
    page
}

fn render_controls(state: &ViewState, config: &AppConfig) -> String {
    let mut html = String::from(r#"<select id="viewMode">"#);
    for mode in [
        ViewMode::Month,
        ViewMode::Year,
        ViewMode::Semester,
        ViewMode::Day,
    ] {
        html.push_str(&format!(
            r#"<option value="{}"{}>{}</option>"#,
            mode.as_str(),
            if mode == state.mode { " selected" } else { "" },
            mode.label()
        ));
    }
    html.push_str("</select>");

    let window = config.year_window as i32;
    html.push_str(r#"<select id="yearSelect">"#);
    for year in (state.year - window)..=(state.year + window) {
        html.push_str(&format!(
            r#"<option value="{}"{}>{}</option>"#,
            year,
            if year == state.year { " selected" } else { "" },
            year
        ));
    }
    html.push_str("</select>");

    html.push_str(r#"<select id="monthSelect">"#);
    for (index, name) in MONTH_NAMES.iter().enumerate() {
        html.push_str(&format!(
            r#"<option value="{}"{}>{}</option>"#,
            index,
            if index as u32 == state.month { " selected" } else { "" },
            name
        ));
    }
    html.push_str("</select>");

    let picked = state.selected_date.as_deref().unwrap_or_default();
    html.push_str(&format!(
        r#"<input type="date" id="datePicker" value="{}">"#,
        picked
    ));

    html
}
