/// Version injected at compile time via GCELINK_VERSION env var (set by CI/CD),
/// or "dev" for local builds.
pub const VERSION: &str = match option_env!("GCELINK_VERSION") {
    Some(v) => v,
    None => "dev",
};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gcelink::config::Config;
use gcelink::gcp::{self, Key, ResourceId, Version};
use gcelink::output::{self, OutputFormat};
use serde_json::Value;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Parse and render compute resource links
#[derive(Parser, Debug)]
#[command(name = "gcelink", version = VERSION, about, long_about = None)]
struct Args {
    /// Compute API version for rendered links
    #[arg(long, global = true, value_enum)]
    api: Option<Version>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    output: Option<OutputFormat>,

    /// Log level for debugging
    #[arg(long, global = true, value_enum, default_value = "off")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse resource URLs or paths (reads stdin lines when none are given)
    Parse { urls: Vec<String> },

    /// Render the self-link of a resource
    SelfLink {
        /// Project ID
        #[arg(short, long)]
        project: String,

        /// Resource collection, e.g. instances or urlMaps
        #[arg(short, long)]
        resource: Option<String>,

        /// Resource name; omit for the project itself
        #[arg(short, long, requires = "resource")]
        name: Option<String>,

        /// Region enclosing the resource
        #[arg(long, conflicts_with = "zone", requires = "name")]
        region: Option<String>,

        /// Zone enclosing the resource
        #[arg(long, requires = "name")]
        zone: Option<String>,
    },

    /// Re-render resource URLs against another API version
    Relink { urls: Vec<String> },

    /// Copy the fields SRC shares with DST (both JSON files) and print the result
    Copy { dst: PathBuf, src: PathBuf },

    /// Show or update the saved configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Persist the given --api and --output values as defaults
    Set,
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

fn setup_logging(level: LogLevel) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let tracing_level = level.to_tracing_level()?;

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to open log file {:?}: {}", log_path, e);
            return None;
        }
    };

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

    tracing::info!("gcelink logging at {:?} to {:?}", level, log_path);

    Some(guard)
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("gcelink").join("gcelink.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".gcelink").join("gcelink.log");
    }
    PathBuf::from("gcelink.log")
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level);

    let config = Config::load();
    let api = config.effective_api(args.api);
    let format = config.effective_output(args.output);

    tracing::debug!("Using API version {}, output {:?}", api, format);

    match args.command {
        Command::Parse { urls } => for_each_input(urls, |id| output::render_id(&id, format)),
        Command::Relink { urls } => for_each_input(urls, |id| Ok(id.self_link(api))),
        Command::SelfLink {
            project,
            resource,
            name,
            region,
            zone,
        } => {
            let id = build_id(project, resource, name, region, zone)?;
            println!("{}", id.self_link(api));
            Ok(ExitCode::SUCCESS)
        }
        Command::Copy { dst, src } => {
            let mut merged = read_json(&dst)?;
            let mut src = read_json(&src)?;
            // Only fields DST already has are copied.
            if let (Value::Object(dst_fields), Value::Object(src_fields)) = (&merged, &mut src) {
                src_fields.retain(|field, _| dst_fields.contains_key(field));
            }
            gcp::merge_json(&mut merged, &src);
            println!("{}", output::render_value(&merged, format)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Config { action } => {
            match action {
                ConfigAction::Show => {}
                ConfigAction::Set => {
                    let updated = Config {
                        default_api: api,
                        output: format,
                    };
                    updated.save().context("Failed to save configuration")?;
                    tracing::info!("Saved configuration: {:?}", updated);
                }
            }
            let effective = serde_json::to_value(Config {
                default_api: api,
                output: format,
            })?;
            println!("{}", output::render_value(&effective, format)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Parse every input (arguments, or stdin lines when there are none) and
/// print `render(id)` for each. Failures are reported on stderr and turn the
/// exit code to 1 without stopping the remaining inputs.
fn for_each_input<F>(urls: Vec<String>, render: F) -> Result<ExitCode>
where
    F: Fn(ResourceId) -> Result<String>,
{
    let inputs = if urls.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("Failed to read stdin")?
            .into_iter()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect()
    } else {
        urls
    };

    let mut failed = false;
    for input in inputs {
        match ResourceId::parse(&input) {
            Ok(id) => println!("{}", render(id)?),
            Err(e) => {
                tracing::warn!("{}", e);
                eprintln!("Error: {e}");
                failed = true;
            }
        }
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn build_id(
    project: String,
    resource: Option<String>,
    name: Option<String>,
    region: Option<String>,
    zone: Option<String>,
) -> Result<ResourceId> {
    if project.is_empty() {
        bail!("--project must not be empty");
    }

    let Some(name) = name else {
        return Ok(ResourceId::project_level(project));
    };
    let Some(resource) = resource.filter(|r| !r.is_empty()) else {
        bail!("--resource is required with --name");
    };

    let key = match (region, zone) {
        (Some(region), _) => Key::try_regional(name, region),
        (None, Some(zone)) => Key::try_zonal(name, zone),
        (None, None) => Key::try_global(name),
    }
    .context("Invalid resource key")?;

    Ok(ResourceId::new(project, resource, Some(key)))
}

fn read_json(path: &Path) -> Result<Value> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse JSON in {:?}", path))
}
