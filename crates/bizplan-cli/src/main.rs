use anyhow::{Context, Result};
use bizplan_ai::PitchService;
use bizplan_core::config_manager::LoggingConfig;
use bizplan_core::metrics::member_monthly_cost;
use bizplan_core::{
    BizPlanConfig, BizPlanError, BusinessModelPage, CanvasSection, ConfigManager, Dashboard,
    ImplementationPlanPage, Phase, PitchField, PitchGeneratorPage, Priority, ProjectRoadmapPage,
    ResourcePlanningPage, TaskStatus,
};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use serde::Serialize;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::str::FromStr;
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bizplan")]
#[command(about = "BizPlan CLI - Pitch, canvas, task, roadmap and resource planning", long_about = None)]
#[command(version)]
struct Cli {
    /// Output format (json, pretty, table)
    #[arg(short, long, global = true, default_value = "pretty")]
    output: OutputFormat,

    /// Configuration file (defaults to ./.bizplan.toml, then ~/.bizplan/config.toml)
    #[arg(long, global = true, env = "BIZPLAN_CONFIG")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
    Table,
}

#[derive(Subcommand)]
enum Commands {
    /// List the planning tools
    Dashboard,

    /// Generate a project pitch
    Pitch {
        #[arg(long, default_value = "")]
        project_name: String,

        #[arg(long, default_value = "", help = suggestion_help(PitchField::Industry))]
        industry: String,

        #[arg(long, default_value = "")]
        problem: String,

        #[arg(long, default_value = "")]
        solution: String,

        /// Target audience
        #[arg(long, default_value = "")]
        target: String,

        #[arg(long, default_value = "", help = suggestion_help(PitchField::Budget))]
        budget: String,

        #[arg(long, default_value = "", help = suggestion_help(PitchField::Timeline))]
        timeline: String,

        /// Write the generated pitch to a markdown file
        #[arg(long, value_name = "FILE")]
        save: Option<PathBuf>,
    },

    /// Show the business model canvas
    Canvas {
        /// Fill a section, e.g. --set value-proposition="Faster onboarding"
        #[arg(long = "set", value_name = "SECTION=TEXT", value_parser = parse_canvas_edit)]
        edits: Vec<(CanvasSection, String)>,

        /// Section to mark as active
        #[arg(long)]
        select: Option<CanvasSection>,
    },

    /// Show implementation tasks and phase progress
    Tasks {
        /// Title of a task to add
        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        phase: Option<Phase>,

        #[arg(long)]
        priority: Option<Priority>,

        /// Estimated hours for the new task
        #[arg(long)]
        hours: Option<u32>,

        /// Change a task status, e.g. --status 3=in-progress
        #[arg(long = "status", value_name = "ID=STATUS", value_parser = parse_assignment::<TaskStatus>)]
        status_updates: Vec<(String, TaskStatus)>,
    },

    /// Show roadmap milestones
    Roadmap,

    /// Show team, resources and project cost
    Resources {
        /// Project duration in months (1-24)
        #[arg(long)]
        duration: Option<u32>,
    },
}

/// Help text listing the form's suggested choices for a field.
fn suggestion_help(field: PitchField) -> String {
    format!("Suggested: {}", field.suggestions().join(", "))
}

fn parse_assignment<V>(s: &str) -> Result<(String, V), BizPlanError>
where
    V: FromStr<Err = BizPlanError>,
{
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| BizPlanError::Parse(format!("expected KEY=VALUE, got `{}`", s)))?;
    Ok((key.trim().to_string(), value.trim().parse()?))
}

fn parse_canvas_edit(s: &str) -> Result<(CanvasSection, String), BizPlanError> {
    let (section, text) = s
        .split_once('=')
        .ok_or_else(|| BizPlanError::Parse(format!("expected SECTION=TEXT, got `{}`", s)))?;
    Ok((section.trim().parse()?, text.to_string()))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MemberCost {
    name: String,
    role: String,
    hourly_rate: f64,
    availability: u8,
    weekly_hours: f64,
    monthly_cost: f64,
    skills: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ConfigManager::load_from(path),
        None => ConfigManager::load(),
    }
    .context("Failed to load configuration")?;

    init_tracing(&config.config().logging, cli.verbose);
    info!(config_file = ?config.config_path(), "BizPlan starting");

    match execute_command(&cli, config.config()).await {
        Ok(output) => {
            print_output(&cli.output, &output)?;
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(logging: &LoggingConfig, verbose: bool) {
    let level = if verbose { "debug" } else { logging.level.as_str() };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "bizplan={level},bizplan_core={level},bizplan_ai={level}"
        ))
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    let result = match logging.format.as_str() {
        "json" => builder.json().try_init(),
        "compact" => builder.compact().try_init(),
        _ => builder.try_init(),
    };
    if let Err(e) = result {
        eprintln!("Failed to initialise logging: {}", e);
    }
}

async fn execute_command(cli: &Cli, config: &BizPlanConfig) -> Result<Value> {
    match &cli.command {
        Commands::Dashboard => execute_dashboard(),
        Commands::Pitch {
            project_name,
            industry,
            problem,
            solution,
            target,
            budget,
            timeline,
            save,
        } => {
            let mut page = PitchGeneratorPage::new();
            page.set_field(PitchField::ProjectName, project_name.as_str());
            page.set_field(PitchField::Industry, industry.as_str());
            page.set_field(PitchField::Problem, problem.as_str());
            page.set_field(PitchField::Solution, solution.as_str());
            page.set_field(PitchField::Target, target.as_str());
            page.set_field(PitchField::Budget, budget.as_str());
            page.set_field(PitchField::Timeline, timeline.as_str());
            execute_pitch(page, config, save.as_ref()).await
        }
        Commands::Canvas { edits, select } => execute_canvas(edits, *select),
        Commands::Tasks {
            title,
            description,
            phase,
            priority,
            hours,
            status_updates,
        } => {
            let mut page = ImplementationPlanPage::with_seed_data();
            let added = if let Some(title) = title {
                let draft = page.draft_mut();
                draft.title = title.clone();
                if let Some(description) = description {
                    draft.description = description.clone();
                }
                if let Some(phase) = phase {
                    draft.phase = *phase;
                }
                if let Some(priority) = priority {
                    draft.priority = *priority;
                }
                if let Some(hours) = hours {
                    draft.estimated_hours = *hours;
                }
                Some(page.add_task()?.clone())
            } else {
                None
            };
            execute_tasks(page, added, status_updates)
        }
        Commands::Roadmap => execute_roadmap(),
        Commands::Resources { duration } => execute_resources(config, *duration),
    }
}

fn execute_dashboard() -> Result<Value> {
    Ok(json!({ "tools": Dashboard.tools() }))
}

async fn execute_pitch(
    mut page: PitchGeneratorPage,
    config: &BizPlanConfig,
    save: Option<&PathBuf>,
) -> Result<Value> {
    let service =
        PitchService::from_config(&config.llm).context("Failed to create pitch service")?;
    let source = if service.is_online() {
        config.llm.model.as_str()
    } else {
        "sample template"
    };

    page.submit(&service).await?;

    let pitch = page.export_markdown().unwrap_or_default();
    if let Some(path) = save {
        std::fs::write(path, &pitch)
            .with_context(|| format!("Failed to write pitch to {}", path.display()))?;
        info!(path = %path.display(), "Pitch saved");
    }

    Ok(json!({
        "projectName": page.form().project_name,
        "source": source,
        "savedTo": save.map(|p| p.display().to_string()),
        "pitch": pitch,
    }))
}

fn execute_canvas(
    edits: &[(CanvasSection, String)],
    select: Option<CanvasSection>,
) -> Result<Value> {
    let mut page = BusinessModelPage::new();
    for (section, text) in edits {
        page.update_section(*section, text.as_str());
    }
    if let Some(section) = select {
        page.select(section);
    }

    let (filled, total) = page.completion();
    let sections: Vec<Value> = page
        .sections()
        .map(|(section, content)| {
            json!({
                "id": section.id(),
                "title": section.title(),
                "prompt": section.prompt(),
                "content": content,
            })
        })
        .collect();

    Ok(json!({
        "activeSection": page.active_section().id(),
        "filled": format!("{}/{}", filled, total),
        "sections": sections,
    }))
}

fn execute_tasks(
    mut page: ImplementationPlanPage,
    added: Option<bizplan_core::Task>,
    status_updates: &[(String, TaskStatus)],
) -> Result<Value> {
    let mut unknown = Vec::new();
    for (id, status) in status_updates {
        if !page.update_task_status(id, *status) {
            warn!(task_id = %id, "No task with this id");
            unknown.push(id.clone());
        }
    }

    Ok(json!({
        "added": added.map(|task| task.id),
        "unknownTaskIds": unknown,
        "totalEstimatedHours": page.total_estimated_hours(),
        "tasks": page.tasks(),
        "phases": page.phase_overview(),
    }))
}

fn execute_roadmap() -> Result<Value> {
    let page = ProjectRoadmapPage::with_seed_data();
    Ok(json!({
        "overview": page.overview(),
        "milestones": page.milestones(),
    }))
}

fn execute_resources(config: &BizPlanConfig, duration: Option<u32>) -> Result<Value> {
    let mut page = ResourcePlanningPage::with_seed_data()
        .with_weekly_hours_pool(config.planning.weekly_hours_pool);
    page.set_duration(duration.unwrap_or(config.planning.default_duration_months));

    let members: Vec<MemberCost> = page
        .members()
        .iter()
        .map(|member| MemberCost {
            name: member.name.clone(),
            role: member.role.clone(),
            hourly_rate: member.hourly_rate,
            availability: member.availability,
            weekly_hours: page.member_weekly_hours(member),
            monthly_cost: member_monthly_cost(member, page.weekly_hours_pool()),
            skills: member.skills.clone(),
        })
        .collect();

    Ok(json!({
        "summary": page.cost_summary(),
        "requiredResources": page.required_resources().count(),
        "members": members,
        "resources": page.resources(),
    }))
}

fn print_output(format: &OutputFormat, value: &Value) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        OutputFormat::Pretty => {
            print_pretty(value, 0);
        }
        OutputFormat::Table => {
            print_table(value);
        }
    }
    Ok(())
}

fn print_pretty(value: &Value, indent: usize) {
    let pad = "  ".repeat(indent);
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let key_colored = key.cyan().bold();
                match val {
                    Value::String(s) if s.contains('\n') => {
                        println!("{}{}:\n{}", pad, key_colored, s);
                    }
                    Value::String(s) => {
                        println!("{}{}: {}", pad, key_colored, s.green());
                    }
                    Value::Number(n) => {
                        println!("{}{}: {}", pad, key_colored, n.to_string().yellow());
                    }
                    Value::Bool(b) => {
                        let val_colored = if *b { "true".green() } else { "false".red() };
                        println!("{}{}: {}", pad, key_colored, val_colored);
                    }
                    Value::Null => {
                        println!("{}{}: {}", pad, key_colored, "-".dimmed());
                    }
                    Value::Array(items) if items.iter().all(|v| !v.is_object()) => {
                        println!("{}{}: {}", pad, key_colored, cell_text(val));
                    }
                    _ => {
                        println!("{}{}:", pad, key_colored);
                        print_pretty(val, indent + 1);
                    }
                }
            }
        }
        Value::Array(arr) => {
            for (i, item) in arr.iter().enumerate() {
                println!("{}{}{}:", pad, "Item ".cyan(), (i + 1).to_string().yellow());
                print_pretty(item, indent + 1);
            }
        }
        _ => {
            println!("{}{}", pad, value);
        }
    }
}

/// Scalars go into one key/value table; nested objects and record lists get
/// their own titled tables.
fn print_table(value: &Value) {
    let Value::Object(map) = value else {
        print_pretty(value, 0);
        return;
    };

    let mut scalars = Builder::default();
    let mut has_scalars = false;
    for (key, val) in map {
        if !is_nested(val) {
            scalars.push_record([key.clone(), cell_text(val)]);
            has_scalars = true;
        }
    }
    if has_scalars {
        let mut table = scalars.build();
        table.with(Style::rounded());
        println!("{}", table);
    }

    for (key, val) in map {
        match val {
            Value::Object(inner) => {
                let mut builder = Builder::default();
                for (k, v) in inner {
                    builder.push_record([k.clone(), cell_text(v)]);
                }
                print_titled(key, builder);
            }
            Value::Array(rows) if is_nested(val) => {
                let Some(Value::Object(first)) = rows.first() else {
                    continue;
                };
                let columns: Vec<String> = first.keys().cloned().collect();
                let mut builder = Builder::default();
                builder.push_record(columns.clone());
                for row in rows {
                    builder.push_record(
                        columns
                            .iter()
                            .map(|c| row.get(c).map(cell_text).unwrap_or_default()),
                    );
                }
                print_titled(key, builder);
            }
            _ => {}
        }
    }
}

fn print_titled(title: &str, builder: Builder) {
    let mut table = builder.build();
    table.with(Style::rounded());
    println!("\n{}\n{}", title.cyan().bold(), table);
}

fn is_nested(value: &Value) -> bool {
    match value {
        Value::Object(_) => true,
        Value::Array(items) => items.iter().any(Value::is_object),
        _ => false,
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Array(items) => items
            .iter()
            .map(cell_text)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn pitch_help_lists_suggested_choices() {
        use clap::CommandFactory;
        let command = Cli::command();
        let pitch = command
            .get_subcommands()
            .find(|c| c.get_name() == "pitch")
            .unwrap();
        let help_for = |id: &str| {
            pitch
                .get_arguments()
                .find(|a| a.get_id() == id)
                .and_then(|a| a.get_help())
                .map(|h| h.to_string())
                .unwrap_or_default()
        };

        assert_eq!(
            help_for("timeline"),
            "Suggested: 1-3 months, 3-6 months, 6-12 months, 1+ years"
        );
        assert!(help_for("budget").contains("$100K - $500K"));
        assert!(help_for("industry").ends_with("Entertainment, Other"));
    }

    #[test]
    fn status_assignments_parse() {
        let (id, status) = parse_assignment::<TaskStatus>("3=in-progress").unwrap();
        assert_eq!(id, "3");
        assert_eq!(status, TaskStatus::InProgress);
        assert!(parse_assignment::<TaskStatus>("3").is_err());
        assert!(parse_assignment::<TaskStatus>("3=sleeping").is_err());
    }

    #[test]
    fn canvas_edit_keeps_text_after_first_equals() {
        let (section, text) = parse_canvas_edit("revenue-streams=MRR = seats x price").unwrap();
        assert_eq!(section, CanvasSection::RevenueStreams);
        assert_eq!(text, "MRR = seats x price");
        assert!(parse_canvas_edit("moat=deep").is_err());
    }

    #[test]
    fn tasks_command_parses_typed_flags() {
        let cli = Cli::try_parse_from([
            "bizplan",
            "--output",
            "json",
            "tasks",
            "--title",
            "Load testing",
            "--phase",
            "testing",
            "--priority",
            "high",
            "--status",
            "3=completed",
        ])
        .unwrap();

        let Commands::Tasks {
            phase,
            priority,
            status_updates,
            ..
        } = cli.command
        else {
            panic!("expected tasks command");
        };
        assert_eq!(phase, Some(Phase::Testing));
        assert_eq!(priority, Some(Priority::High));
        assert_eq!(status_updates, vec![("3".to_string(), TaskStatus::Completed)]);
    }

    #[test]
    fn tasks_output_reports_new_task_and_unknown_ids() {
        let mut page = ImplementationPlanPage::with_seed_data();
        page.draft_mut().title = "Load testing".to_string();
        page.draft_mut().estimated_hours = 20;
        let added = page.add_task().unwrap().clone();

        let value = execute_tasks(
            page,
            Some(added.clone()),
            &[
                ("1".to_string(), TaskStatus::Todo),
                ("missing".to_string(), TaskStatus::Completed),
            ],
        )
        .unwrap();

        assert_eq!(value["added"], added.id);
        assert_eq!(value["unknownTaskIds"], json!(["missing"]));
        assert_eq!(value["totalEstimatedHours"], 320);
        assert_eq!(value["tasks"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn resources_use_configured_duration_when_flag_absent() {
        let mut config = BizPlanConfig::default();
        config.planning.default_duration_months = 3;
        let value = execute_resources(&config, None).unwrap();
        assert_eq!(value["summary"]["durationMonths"], 3);

        let value = execute_resources(&config, Some(40)).unwrap();
        assert_eq!(value["summary"]["durationMonths"], 24);
    }

    #[tokio::test]
    async fn pitch_without_key_uses_sample_template() {
        let config = BizPlanConfig::default();
        let mut page = PitchGeneratorPage::new();
        for field in PitchField::ALL {
            page.set_field(field, format!("{} text", field));
        }

        let value = execute_pitch(page, &config, None).await.unwrap();
        assert_eq!(value["source"], "sample template");
        assert!(value["pitch"]
            .as_str()
            .unwrap()
            .starts_with("# projectName text - Project Pitch"));
    }

    #[test]
    fn cell_text_flattens_lists() {
        assert_eq!(cell_text(&json!(["React", "Node.js"])), "React, Node.js");
        assert_eq!(cell_text(&json!(null)), "");
        assert_eq!(cell_text(&json!(42)), "42");
    }
}
