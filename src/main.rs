mod config;
mod output;

/// Version injected at compile time via ASANA_RS_VERSION env var (set by CI/CD),
/// or the crate version for local builds.
pub const VERSION: &str = match option_env!("ASANA_RS_VERSION") {
    Some(v) => v,
    None => env!("CARGO_PKG_VERSION"),
};

use anyhow::Result;
use asana::{format_api_error, pagination, Client, Credentials, HttpDispatcher, Params, ResourceId};
use clap::{Parser, Subcommand, ValueEnum};
use config::Config;
use output::{Column, OutputFormat};
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Command line client for Asana
#[derive(Parser, Debug)]
#[command(name = "asana", version = VERSION, about, long_about = None)]
struct Args {
    /// Access token (falls back to ASANA_ACCESS_TOKEN / ASANA_API_KEY)
    #[arg(long, global = true)]
    token: Option<String>,

    /// Workspace ID for workspace-scoped commands
    #[arg(short, long, global = true)]
    workspace: Option<String>,

    /// Output format (defaults to the configured one, then table)
    #[arg(short, long, value_enum, global = true)]
    output: Option<OutputFormat>,

    /// API base URL (for mock servers and proxies)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Log level for debugging
    #[arg(long, value_enum, global = true, default_value = "off")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List and inspect workspaces
    Workspaces {
        #[command(subcommand)]
        action: WorkspaceAction,
    },
    /// Manage projects
    Projects {
        #[command(subcommand)]
        action: ProjectAction,
    },
    /// Manage tasks
    Tasks {
        #[command(subcommand)]
        action: TaskAction,
    },
    /// Look up users
    Users {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Manage CLI configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum WorkspaceAction {
    /// List workspaces visible to you
    List,
}

#[derive(Subcommand, Debug)]
enum ProjectAction {
    /// List projects in the workspace
    List {
        /// Include archived projects
        #[arg(long)]
        archived: bool,
    },
    /// Show one project
    Show { id: String },
    /// Create a project in the workspace
    Create {
        /// Project name
        #[arg(long)]
        name: String,
        /// Project notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Update a project
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        /// Archive (true) or unarchive (false)
        #[arg(long)]
        archived: Option<bool>,
    },
    /// Delete a project
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
enum TaskAction {
    /// List tasks in a project
    List {
        /// Project ID to list tasks from
        #[arg(long)]
        project: String,
    },
    /// Show one task
    Show { id: String },
    /// Create a task in the workspace
    Create {
        /// Task name
        #[arg(long)]
        name: String,
        /// Task notes
        #[arg(long)]
        notes: Option<String>,
        /// Assignee user ID, or "me"
        #[arg(long)]
        assignee: Option<String>,
    },
    /// Mark a task completed
    Complete { id: String },
    /// Delete a task
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
enum UserAction {
    /// Show the authenticated user
    Me,
    /// List users in the workspace
    List,
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Set the default workspace ID
    SetWorkspace { id: String },
    /// Set the default output format
    SetOutput {
        #[arg(value_enum)]
        format: OutputFormat,
    },
    /// Print the current configuration
    Show,
}

fn setup_logging(level: LogLevel) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return None;
    };

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .expect("Failed to open log file");

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("asana started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Some(guard)
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("asana").join("asana.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".asana").join("asana.log");
    }
    PathBuf::from("asana.log")
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level);

    let config = Config::load();

    if let Err(err) = run(&args, config).await {
        tracing::error!("command failed: {:?}", err);
        eprintln!("Error: {}", format_api_error(&err));
        std::process::exit(1);
    }

    Ok(())
}

async fn run(args: &Args, config: Config) -> Result<()> {
    // Config commands work offline, before any credentials resolve.
    if let Command::Config { action } = &args.command {
        return run_config(action, config);
    }

    let client = build_client(args)?;
    let format = args.output.unwrap_or_else(|| {
        config
            .output
            .as_deref()
            .map(OutputFormat::from_config)
            .unwrap_or(OutputFormat::Table)
    });

    match &args.command {
        Command::Workspaces { action } => run_workspaces(&client, action, format).await,
        Command::Projects { action } => {
            run_projects(&client, action, args, &config, format).await
        }
        Command::Tasks { action } => run_tasks(&client, action, args, &config, format).await,
        Command::Users { action } => run_users(&client, action, args, &config, format).await,
        Command::Config { .. } => unreachable!("handled above"),
    }
}

fn build_client(args: &Args) -> Result<Client> {
    let credentials = match &args.token {
        Some(token) => Credentials::access_token(token)?,
        None => Credentials::from_env()?,
    };

    let dispatcher = match &args.base_url {
        Some(base_url) => HttpDispatcher::with_base_url(credentials, base_url)?,
        None => HttpDispatcher::new(credentials)?,
    };

    Ok(Client::new(dispatcher))
}

/// Workspace for scoped commands (flag > env > config), as a path segment.
fn require_workspace(args: &Args, config: &Config) -> Result<String> {
    let workspace = args
        .workspace
        .clone()
        .or_else(|| config.effective_workspace())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "No workspace configured. Pass --workspace or run 'asana config set-workspace <id>'"
            )
        })?;
    Ok(ResourceId::from(workspace).path_segment())
}

fn params_with_fields(fields: &str) -> Params {
    let mut params = Params::new();
    params.insert("opt_fields".to_string(), json!(fields));
    params
}

async fn run_workspaces(client: &Client, action: &WorkspaceAction, format: OutputFormat) -> Result<()> {
    match action {
        WorkspaceAction::List => {
            let params = params_with_fields("id,name,is_organization");
            let items = pagination::fetch_all(&client.dispatcher, "/workspaces", Some(&params)).await?;
            let columns = [
                Column { header: "ID", path: "id", width: 18 },
                Column { header: "NAME", path: "name", width: 32 },
                Column { header: "ORG", path: "is_organization", width: 5 },
            ];
            output::print_items(format, &items, &columns)
        }
    }
}

async fn run_projects(
    client: &Client,
    action: &ProjectAction,
    args: &Args,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let projects = client.projects();

    match action {
        ProjectAction::List { archived } => {
            let workspace = require_workspace(args, config)?;
            let mut params = params_with_fields("id,name,archived,due_date");
            params.insert("archived".to_string(), json!(archived));
            let path = format!("/workspaces/{}/projects", workspace);
            let items = pagination::fetch_all(&client.dispatcher, &path, Some(&params)).await?;
            let columns = [
                Column { header: "ID", path: "id", width: 18 },
                Column { header: "NAME", path: "name", width: 40 },
                Column { header: "DUE", path: "due_date", width: 10 },
                Column { header: "ARCHIVED", path: "archived", width: 8 },
            ];
            output::print_items(format, &items, &columns)
        }
        ProjectAction::Show { id } => {
            let project = projects.find_by_id(id.as_str(), None).await?;
            output::print_item(format, &project)
        }
        ProjectAction::Create { name, notes } => {
            let workspace = require_workspace(args, config)?;
            let mut data = serde_json::Map::new();
            data.insert("name".to_string(), json!(name));
            if let Some(notes) = notes {
                data.insert("notes".to_string(), json!(notes));
            }
            let created = projects
                .create_in_workspace(workspace.as_str(), &Value::Object(data))
                .await?;
            output::print_item(format, &created)
        }
        ProjectAction::Update { id, name, notes, archived } => {
            let mut data = serde_json::Map::new();
            if let Some(name) = name {
                data.insert("name".to_string(), json!(name));
            }
            if let Some(notes) = notes {
                data.insert("notes".to_string(), json!(notes));
            }
            if let Some(archived) = archived {
                data.insert("archived".to_string(), json!(archived));
            }
            if data.is_empty() {
                anyhow::bail!("Nothing to update. Pass --name, --notes or --archived");
            }
            let updated = projects.update(id.as_str(), &Value::Object(data)).await?;
            output::print_item(format, &updated)
        }
        ProjectAction::Delete { id } => {
            projects.delete(id.as_str()).await?;
            println!("Deleted project {}", id);
            Ok(())
        }
    }
}

async fn run_tasks(
    client: &Client,
    action: &TaskAction,
    args: &Args,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let tasks = client.tasks();

    match action {
        TaskAction::List { project } => {
            let params = params_with_fields("id,name,completed,assignee.name,due_on");
            let path = format!("/projects/{}/tasks", ResourceId::from(project.as_str()).path_segment());
            let items = pagination::fetch_all(&client.dispatcher, &path, Some(&params)).await?;
            let columns = [
                Column { header: "ID", path: "id", width: 18 },
                Column { header: "NAME", path: "name", width: 40 },
                Column { header: "ASSIGNEE", path: "assignee.name", width: 20 },
                Column { header: "DUE", path: "due_on", width: 10 },
                Column { header: "DONE", path: "completed", width: 5 },
            ];
            output::print_items(format, &items, &columns)
        }
        TaskAction::Show { id } => {
            let task = tasks.find_by_id(id.as_str(), None).await?;
            output::print_item(format, &task)
        }
        TaskAction::Create { name, notes, assignee } => {
            let workspace = require_workspace(args, config)?;
            let mut data = serde_json::Map::new();
            data.insert("workspace".to_string(), json!(workspace));
            data.insert("name".to_string(), json!(name));
            if let Some(notes) = notes {
                data.insert("notes".to_string(), json!(notes));
            }
            if let Some(assignee) = assignee {
                data.insert("assignee".to_string(), json!(assignee));
            }
            let created = tasks.create(&Value::Object(data)).await?;
            output::print_item(format, &created)
        }
        TaskAction::Complete { id } => {
            let updated = tasks
                .update(id.as_str(), &json!({ "completed": true }))
                .await?;
            output::print_item(format, &updated)
        }
        TaskAction::Delete { id } => {
            tasks.delete(id.as_str()).await?;
            println!("Deleted task {}", id);
            Ok(())
        }
    }
}

async fn run_users(
    client: &Client,
    action: &UserAction,
    args: &Args,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    match action {
        UserAction::Me => {
            let me = client.users().me(None).await?;
            output::print_item(format, &me)
        }
        UserAction::List => {
            let workspace = require_workspace(args, config)?;
            let params = params_with_fields("id,name,email");
            let path = format!("/workspaces/{}/users", workspace);
            let items = pagination::fetch_all(&client.dispatcher, &path, Some(&params)).await?;
            let columns = [
                Column { header: "ID", path: "id", width: 18 },
                Column { header: "NAME", path: "name", width: 28 },
                Column { header: "EMAIL", path: "email", width: 32 },
            ];
            output::print_items(format, &items, &columns)
        }
    }
}

fn run_config(action: &ConfigAction, mut config: Config) -> Result<()> {
    match action {
        ConfigAction::SetWorkspace { id } => {
            config.set_workspace(id)?;
            println!("Default workspace set to {}", id);
        }
        ConfigAction::SetOutput { format } => {
            let name = match format {
                OutputFormat::Table => "table",
                OutputFormat::Json => "json",
                OutputFormat::Yaml => "yaml",
            };
            config.set_output(name)?;
            println!("Default output format set to {}", name);
        }
        ConfigAction::Show => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }
    Ok(())
}
