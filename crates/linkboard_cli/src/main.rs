//! Developer probe for the dashboard core.
//!
//! # Responsibility
//! - Drive `DashboardController` from the command line and print each view
//!   as plain text.
//! - Exercise config loading (`--fixture`, `LINKBOARD_*`) outside the UI.

use clap::{Parser, Subcommand, ValueEnum};
use linkboard_core::{
    ActiveTab, CategoryDimension, ChartType, ContactRepository, DashboardConfig,
    DashboardController, DashboardView, DistributionView, InMemoryContactRepository, Selection,
    SortKey, SortSpec, TableView, VelocityView, ViewSnapshot,
};
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "linkboard", version, about = "Contact-network dashboard probe")]
struct Cli {
    /// JSON fixture to load instead of the built-in records.
    #[arg(long, global = true)]
    fixture: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Headline statistics plus both charts.
    Summary,
    /// Country or persona distribution.
    Analytics {
        #[arg(long, value_enum, default_value_t = DimensionArg::Country)]
        dimension: DimensionArg,
        #[arg(long, value_enum, default_value_t = ChartArg::Pie)]
        chart: ChartArg,
    },
    /// Monthly connection velocity.
    Velocity {
        /// Defaults to the latest year in the data.
        #[arg(long)]
        year: Option<i32>,
        #[arg(long, default_value = "all")]
        persona: String,
    },
    /// Contact table.
    Connections {
        #[arg(long, default_value = "all")]
        persona: String,
        #[arg(long, default_value = "all")]
        country: String,
        #[arg(long, default_value = "")]
        search: String,
        /// Column id, e.g. `last_name` or `connection_date`.
        #[arg(long)]
        sort: Option<String>,
        #[arg(long)]
        desc: bool,
    },
    /// Work history of one contact.
    Experiences { contact_id: u32 },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DimensionArg {
    Country,
    Persona,
}

impl From<DimensionArg> for CategoryDimension {
    fn from(value: DimensionArg) -> Self {
        match value {
            DimensionArg::Country => CategoryDimension::Country,
            DimensionArg::Persona => CategoryDimension::Persona,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ChartArg {
    Pie,
    Bar,
}

impl From<ChartArg> for ChartType {
    fn from(value: ChartArg) -> Self {
        match value {
            ChartArg::Pie => ChartType::Pie,
            ChartArg::Bar => ChartType::Bar,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let mut config = DashboardConfig::from_env();
    if cli.fixture.is_some() {
        config.fixture_path = cli.fixture;
    }
    config.init_logging().map_err(|err| err.to_string())?;
    let repo = config.load_repository().map_err(|err| err.to_string())?;
    info!("event=cli_start module=cli status=ok");

    let mut controller = DashboardController::new(repo);
    match cli.command {
        Command::Summary => {
            if let ViewSnapshot::Dashboard(view) = controller.set_active_tab(ActiveTab::Dashboard) {
                print_dashboard(&view);
            }
        }
        Command::Analytics { dimension, chart } => {
            controller.set_active_tab(ActiveTab::Analytics);
            controller.set_chart_type(chart.into());
            if let ViewSnapshot::Analytics(view) = controller.set_dimension(dimension.into()) {
                print_distribution(&view);
            }
        }
        Command::Velocity { year, persona } => {
            controller.set_active_tab(ActiveTab::Velocity);
            if let Some(year) = year {
                controller.set_year(year).map_err(|err| err.to_string())?;
            }
            let snapshot = controller
                .set_persona_filter(Selection::from(persona.as_str()))
                .map_err(|err| err.to_string())?;
            if let ViewSnapshot::Velocity(view) = snapshot {
                print_velocity(&view);
            }
        }
        Command::Connections {
            persona,
            country,
            search,
            sort,
            desc,
        } => {
            controller.set_active_tab(ActiveTab::Connections);
            controller.set_sort(parse_sort(sort.as_deref(), desc)?);
            controller.set_search_text(search);
            controller
                .set_persona_filter(Selection::from(persona.as_str()))
                .map_err(|err| err.to_string())?;
            let snapshot = controller
                .set_country_filter(Selection::from(country.as_str()))
                .map_err(|err| err.to_string())?;
            if let ViewSnapshot::Connections(table) = snapshot {
                print_table(&table);
            }
        }
        Command::Experiences { contact_id } => print_experiences(&controller, contact_id)?,
    }
    Ok(())
}

fn parse_sort(raw: Option<&str>, descending: bool) -> Result<Option<SortSpec>, String> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let key = SortKey::parse(raw).ok_or_else(|| format!("unknown sort column `{raw}`"))?;
    Ok(Some(if descending {
        SortSpec::desc(key)
    } else {
        SortSpec::asc(key)
    }))
}

fn print_dashboard(view: &DashboardView) {
    let summary = &view.summary;
    println!("Total connections: {}", summary.total_connections);
    println!("Countries:         {}", summary.countries);
    println!("Personas:          {}", summary.personas);
    if let Some(latest) = summary.latest_connection {
        println!(
            "Latest month:      {} (last connection {latest})",
            summary.latest_month_connections
        );
    }
    println!();
    print_distribution(&view.distribution);
    println!();
    print_velocity(&view.velocity);
}

fn print_distribution(view: &DistributionView) {
    println!("{} ({} chart)", view.title, view.chart_type.as_str());
    for entry in &view.entries {
        println!("  {:<28} {:>3}  {:>5.1}%", entry.label, entry.count, entry.percentage);
    }
    println!("  total={} categories={}", view.total, view.category_count());
    if let Some(top) = &view.top_category {
        println!("  top: {} ({} connections)", top.label, top.count);
    }
}

fn print_velocity(view: &VelocityView) {
    println!("Monthly Connection Velocity {} persona={}", view.year, view.persona);
    for month in &view.months {
        println!("  {} {:>3} {}", month.month, month.count, "#".repeat(month.count));
    }
    println!(
        "  total={} avg/month={:.1} peak={}",
        view.stats.total, view.stats.average_per_month, view.stats.peak_month.month
    );
}

fn print_table(table: &TableView) {
    for contact in &table.rows {
        println!(
            "{:>3}  {:<20} {:<40} {:<26} {}",
            contact.id,
            contact.full_name(),
            contact.location_label(),
            contact.buyer_persona_type,
            contact.connection_date
        );
    }
    println!("{} of {} connection(s)", table.rows.len(), table.total_contacts);
}

fn print_experiences(
    controller: &DashboardController<InMemoryContactRepository>,
    contact_id: u32,
) -> Result<(), String> {
    let contact = controller
        .repo()
        .get_contact(contact_id)
        .ok_or_else(|| format!("contact {contact_id} not found"))?;
    println!("{} - {}", contact.full_name(), contact.current_role);
    for experience in controller.experiences_for(contact_id) {
        let end = experience
            .end_date
            .map(|date| date.to_string())
            .unwrap_or_else(|| "present".to_string());
        println!(
            "  {} at {} ({} - {end})",
            experience.position, experience.company_name, experience.start_date
        );
    }
    Ok(())
}
