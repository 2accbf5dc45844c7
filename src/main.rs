use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use campaign_planner::analytics::{CachedAnalyticsProvider, FileAnalyticsProvider, gather_analytics};
use campaign_planner::id::generate_seed;
use campaign_planner::progress::{summary, update_task_status};
use campaign_planner::templates::{TemplateSelector, get_template_details};
use campaign_planner::{CampaignPlan, CampaignRequest, Category, TaskStatus, TemplateKind};

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use config::{Config, OutputFormat};

fn setup_logging(level: Option<&str>, verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("campaign-planner")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("campaign-planner.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG wins over the config level; --verbose raises the default
    let default_level = if verbose { "debug" } else { level.unwrap_or("info") };
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(default_level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.target(env_logger::Target::Pipe(target)).init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        eprintln!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        Commands::Generate {
            channels,
            tier,
            days,
            category,
            seed,
            start,
            analytics,
            format,
            output,
            digest,
        } => {
            let request = CampaignRequest {
                channels: channels.clone(),
                reputation_tier: tier.unwrap_or(config.campaign.reputation_tier as i64),
                total_days: Some(days.unwrap_or(config.campaign.total_days as i64)),
                category: category.clone().or_else(|| config.campaign.category.clone()),
                start_date: *start,
                display_prefix: config.channels.display_prefix.clone(),
                max_channels: config.channels.max_channels,
            };
            let options = GenerateOptions {
                seed: seed.or(config.campaign.seed),
                analytics: analytics.clone().or_else(|| config.analytics.path.clone()),
                format: format.unwrap_or(config.output.format),
                output: output.clone(),
                digest: *digest,
            };
            handle_generate_command(request, options, config).await
        }
        Commands::Templates { kind, category, title } => {
            handle_templates_command(kind, category.as_deref(), title.as_deref(), config)
        }
        Commands::Mark { plan, task_id, status } => handle_mark_command(plan, task_id, status, config),
        Commands::Summary { plan } => handle_summary_command(plan),
    }
}

struct GenerateOptions {
    seed: Option<u64>,
    analytics: Option<PathBuf>,
    format: OutputFormat,
    output: Option<PathBuf>,
    digest: bool,
}

async fn handle_generate_command(request: CampaignRequest, options: GenerateOptions, config: &Config) -> Result<()> {
    let campaign = request.validate().context("Invalid campaign request")?;

    let seed = options.seed.unwrap_or_else(generate_seed);
    info!("Generating plan for {:?} with seed {}", campaign.channels, seed);

    let records = match &options.analytics {
        Some(path) => {
            info!("Loading analytics from {}", path.display());
            let provider = CachedAnalyticsProvider::new(
                FileAnalyticsProvider::new(path).with_prefix(campaign.display_prefix.clone()),
                config.analytics.cache_ttl(),
            );
            gather_analytics(&provider, &campaign.channels).await
        }
        None => Vec::new(),
    };

    let plan = CampaignPlan::generate(&campaign, records, seed);
    let rendered = render_plan(&plan, options.format, config.output.pretty)?;

    match &options.output {
        Some(path) => {
            fs::write(path, &rendered).context(format!("Failed to write plan to {}", path.display()))?;
            eprintln!("{} {} ({} tasks)", "Plan written:".green(), path.display(), plan.task_count());
        }
        None => println!("{}", rendered),
    }

    eprintln!("{} {}", "Seed:".cyan(), seed);
    if options.digest {
        eprintln!("{} {}", "Digest:".cyan(), plan.digest().context("Failed to compute digest")?);
    }
    Ok(())
}

fn render_plan(plan: &CampaignPlan, format: OutputFormat, pretty: bool) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(plan)?,
        OutputFormat::Json => serde_json::to_string(plan)?,
        OutputFormat::Yaml => serde_yaml::to_string(plan)?,
        OutputFormat::Table => render_table(plan),
    };
    Ok(rendered)
}

fn render_table(plan: &CampaignPlan) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {} days from {} (tier {}, seed {})\n",
        "Campaign:".bold(),
        plan.total_days,
        plan.start_date,
        plan.reputation_tier,
        plan.seed
    ));

    for phase in &plan.phases {
        out.push_str(&format!("\n{} {}\n", phase.title.bold(), format!("[{}]", phase.day_range_label).dimmed()));
        for task in &phase.tasks {
            let status = format!("{:<10}", task.status.as_str());
            let status = match task.status {
                TaskStatus::Pending => status.yellow(),
                TaskStatus::Completed => status.green(),
                TaskStatus::Skipped => status.dimmed(),
            };
            out.push_str(&format!(
                "  {}  {:<14} {:<11} {} {}\n",
                task.scheduled_at.format("%Y-%m-%d %H:%M UTC"),
                task.id,
                task.content_kind.as_str(),
                status,
                task.title
            ));
        }
    }
    out
}

fn handle_templates_command(kind: &str, category: Option<&str>, title: Option<&str>, config: &Config) -> Result<()> {
    let kind: TemplateKind = kind.parse().context("Unknown template kind")?;
    let category = match category.or(config.campaign.category.as_deref()) {
        Some(raw) => Category::parse_optional(raw).context("Unknown category")?,
        None => None,
    };
    let title = title.map(str::to_string).unwrap_or_else(|| kind.to_string());
    info!("Previewing {} template for category {:?}", kind, category);

    let selector = TemplateSelector::new(category);
    match selector.render(kind, &title, None) {
        Some(text) => println!("{}\n", text),
        None => println!(
            "{} no {} template for category {}",
            "Note:".yellow(),
            kind,
            category.map(|c| c.to_string()).unwrap_or_else(|| "none".to_string())
        ),
    }

    if let Some(details) = get_template_details(kind) {
        println!("{}", "Checklist:".bold());
        for item in &details.checklist {
            println!("  - {}", item);
        }
        println!("{}", "Steps:".bold());
        for (n, step) in details.step_by_step.iter().enumerate() {
            println!("  {}. {}", n + 1, step);
        }
        println!("{} {}", "Tip:".bold(), details.posting_tips);
    }
    Ok(())
}

fn load_plan(path: &Path) -> Result<CampaignPlan> {
    let content = fs::read_to_string(path).context(format!("Failed to read plan {}", path.display()))?;
    let plan = if is_yaml(path) {
        serde_yaml::from_str(&content).context("Failed to parse plan")?
    } else {
        serde_json::from_str(&content).context("Failed to parse plan")?
    };
    Ok(plan)
}

fn save_plan(path: &Path, plan: &CampaignPlan, pretty: bool) -> Result<()> {
    let format = if is_yaml(path) { OutputFormat::Yaml } else { OutputFormat::Json };
    let rendered = render_plan(plan, format, pretty)?;
    fs::write(path, rendered).context(format!("Failed to write plan {}", path.display()))
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml"))
}

fn handle_mark_command(path: &Path, task_id: &str, status: &str, config: &Config) -> Result<()> {
    let status: TaskStatus = status.parse().context("Unknown status")?;
    let mut plan = load_plan(path)?;

    let task = update_task_status(&mut plan.phases, task_id, status).context("Failed to update task")?;
    println!("{} {} is now {}", "Updated:".green(), task.id, task.status);

    save_plan(path, &plan, config.output.pretty)
}

fn handle_summary_command(path: &Path) -> Result<()> {
    let plan = load_plan(path)?;
    let progress = summary(&plan.phases);
    println!("{} {}", "Progress:".bold(), progress);
    println!("{:.0}% done", progress.done_ratio() * 100.0);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Setup logging once the level is known
    setup_logging(config.log_level.as_deref(), cli.is_verbose()).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
