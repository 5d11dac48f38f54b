//! Public site modernizer CLI.
//!
//! Handles the pre-crawl and post-run gates of the design-system workflow:
//! - Crawl configuration validation (with optional strict guardrails)
//! - Run-plan preview rendering
//! - Output package checks

use clap::{Args, Parser, Subcommand};
use psm_common::{OutputFormat, DEFAULT_OUTPUT_DIR, SCHEMA_VERSION};
use psm_config::{load_config, validate_config, ValidateOptions};
use psm_core::envelope;
use psm_core::exit_codes::ExitCode;
use psm_core::logging::{generate_run_id, init_logging, LogConfig, LogFormat, LogLevel};
use psm_package::check_package;
use psm_report::{load_urls, write_plan, RunPlan};
use std::path::PathBuf;
use tracing::{debug, info};

/// Public site modernizer: brand-faithful design-system extraction gates
#[derive(Parser)]
#[command(name = "psm")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "human")]
    format: OutputFormat,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a crawl configuration before any crawling starts
    Validate(ValidateArgs),

    /// Check a generated design-system output package
    CheckPackage(CheckPackageArgs),

    /// Render a run-plan preview for human review
    Plan(PlanArgs),

    /// Print version information
    Version,
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// Path to the crawl configuration JSON
    config: PathBuf,

    /// Require every guardrail confirmation to be explicitly true
    #[arg(long)]
    strict_guardrails: bool,
}

#[derive(Args, Debug)]
struct CheckPackageArgs {
    /// Root directory of the output package
    #[arg(env = "PSM_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    root: PathBuf,
}

#[derive(Args, Debug)]
struct PlanArgs {
    /// Path to the crawl configuration JSON
    config: PathBuf,

    /// JSON list of URLs, or an object with `urls` or `pages`
    #[arg(long)]
    urls_json: Option<PathBuf>,

    /// Write markdown to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // JSON payloads on stdout pair with JSONL logs on stderr.
    let cli_format = cli.global.format.is_machine().then_some(LogFormat::Jsonl);
    let cli_level = LogLevel::from_verbosity(cli.global.verbose, cli.global.quiet);
    init_logging(&LogConfig::from_env(cli_level, cli_format));

    let run_id = generate_run_id();
    debug!(run_id = %run_id, format = %cli.global.format, "Starting psm");

    let exit_code = match cli.command {
        Commands::Validate(args) => run_validate(&cli.global, &run_id, &args),
        Commands::CheckPackage(args) => run_check_package(&cli.global, &run_id, &args),
        Commands::Plan(args) => run_plan(&cli.global, &run_id, &args),
        Commands::Version => {
            print_version(&cli.global, &run_id);
            ExitCode::Clean
        }
    };

    debug!(run_id = %run_id, exit_code = exit_code.code_name(), "Finished psm");
    std::process::exit(exit_code.as_i32());
}

// ============================================================================
// Command implementations
// ============================================================================

fn run_validate(global: &GlobalOpts, run_id: &str, args: &ValidateArgs) -> ExitCode {
    let config = match load_config(&args.config) {
        Ok(config) => config,
        Err(e) => return report_error(global, run_id, "validate", &e.into()),
    };

    let options = ValidateOptions {
        strict_guardrails: args.strict_guardrails,
    };
    let report = validate_config(&config, options);

    match global.format {
        OutputFormat::Json => print_json(&envelope::validation(
            run_id,
            &args.config,
            &config,
            &report,
            args.strict_guardrails,
        )),
        OutputFormat::Summary => println!("{}", report.summary_line()),
        OutputFormat::Human => {
            for line in report.human_lines() {
                println!("{line}");
            }
            println!("{}", report.summary_line());
        }
    }

    ExitCode::from_validation(&report)
}

fn run_check_package(global: &GlobalOpts, run_id: &str, args: &CheckPackageArgs) -> ExitCode {
    let report = match check_package(&args.root) {
        Ok(report) => report,
        Err(e) => return report_error(global, run_id, "check-package", &e.into()),
    };

    match global.format {
        OutputFormat::Json => print_json(&envelope::package(run_id, &report)),
        OutputFormat::Summary => println!("{}", report.summary_line()),
        OutputFormat::Human => {
            for line in report.human_lines() {
                println!("{line}");
            }
            println!("{}", report.summary_line());
        }
    }

    ExitCode::from_package(&report)
}

fn run_plan(global: &GlobalOpts, run_id: &str, args: &PlanArgs) -> ExitCode {
    let config = match load_config(&args.config) {
        Ok(config) => config,
        Err(e) => return report_error(global, run_id, "plan", &e.into()),
    };
    let urls = match args.urls_json.as_deref().map(load_urls).transpose() {
        Ok(urls) => urls.unwrap_or_default(),
        Err(e) => return report_error(global, run_id, "plan", &e.into()),
    };

    let plan = RunPlan::from_config(&config, &urls);
    let markdown = plan.render();

    if let Some(path) = &args.output {
        if let Err(e) = write_plan(path, &markdown) {
            return report_error(global, run_id, "plan", &e.into());
        }
    }
    info!(
        selected = plan.selected_urls.len(),
        workload = %plan.workload,
        "Run plan rendered"
    );

    match global.format {
        OutputFormat::Json => print_json(&envelope::plan(
            run_id,
            &plan,
            &markdown,
            args.output.as_deref(),
        )),
        OutputFormat::Summary => println!(
            "Run plan rendered ({} URL(s) selected, workload {})",
            plan.selected_urls.len(),
            plan.workload
        ),
        OutputFormat::Human => {
            if args.output.is_none() {
                print!("{markdown}");
            }
        }
    }

    ExitCode::Clean
}

fn print_version(global: &GlobalOpts, run_id: &str) {
    match global.format {
        OutputFormat::Json => print_json(&envelope::version(run_id)),
        _ => {
            println!("psm {}", env!("CARGO_PKG_VERSION"));
            println!("schema version: {}", SCHEMA_VERSION);
        }
    }
}

// ============================================================================
// Output helpers
// ============================================================================

/// Fatal command errors: the command could not produce its result.
fn report_error(
    global: &GlobalOpts,
    run_id: &str,
    command: &str,
    err: &psm_common::Error,
) -> ExitCode {
    debug!(code = err.code(), category = %err.category(), "Command failed");
    match global.format {
        OutputFormat::Json => print_json(&envelope::error(run_id, command, err)),
        _ => println!("ERROR: {err}"),
    }
    ExitCode::Failed
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => eprintln!("psm: failed to serialize output: {e}"),
    }
}
