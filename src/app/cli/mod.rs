//! CLI Adapter.

mod form;
mod logging;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::app::api::{self, FieldRule, PlanReport};
use crate::domain::{AppError, RawProfile};
use form::ProfileArgs;

#[derive(Parser)]
#[command(name = "dietplan")]
#[command(version)]
#[command(
    about = "Generate a personalized diet plan from a biometric and dietary profile",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Collect a profile and generate a diet plan
    #[clap(visible_alias = "p")]
    Plan {
        #[command(flatten)]
        profile: ProfileArgs,
        /// Use form defaults for missing fields instead of asking
        #[arg(long)]
        no_input: bool,
        /// Print a JSON report instead of the plan text
        #[arg(long)]
        json: bool,
    },
    /// Print the prompt for a profile without contacting the endpoint
    #[clap(visible_alias = "pr")]
    Prompt {
        #[command(flatten)]
        profile: ProfileArgs,
        /// Use form defaults for missing fields instead of asking
        #[arg(long)]
        no_input: bool,
    },
    /// List the accepted values for every profile field
    Options,
}

/// Entry point for the CLI.
pub fn run() {
    logging::init();
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Plan { profile, no_input, json } => run_plan(&profile, no_input, json),
        Commands::Prompt { profile, no_input } => run_prompt(&profile, no_input).map(|_| 0),
        Commands::Options => {
            run_options();
            Ok(0)
        }
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            report_error(&e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run_plan(args: &ProfileArgs, no_input: bool, json: bool) -> Result<i32, AppError> {
    // Credentials are checked before any field is asked for.
    let ctx = api::connect()?;
    let interactive = !no_input && !args.is_complete();

    loop {
        let Some(raw) = collect_profile(args, no_input)? else {
            return Ok(0);
        };

        match api::generate_plan(&ctx, &raw) {
            Ok(report) => print_report(&report, json)?,
            Err(err) if err.is_recoverable() => {
                report_error(&err);
                if !interactive {
                    return Ok(err.exit_code());
                }
            }
            Err(err) => return Err(err),
        }

        if !interactive || !form::confirm_another()? {
            return Ok(0);
        }
        debug!("Starting another submission");
    }
}

fn run_prompt(args: &ProfileArgs, no_input: bool) -> Result<(), AppError> {
    let Some(raw) = collect_profile(args, no_input)? else {
        return Ok(());
    };
    let prompt = api::render_prompt(&raw)?;
    print!("{}", prompt);
    Ok(())
}

fn run_options() {
    for summary in api::list_options() {
        let accepted = match summary.rule {
            FieldRule::Range { min, max, default } => {
                format!("{}-{} (default {})", min, max, default)
            }
            FieldRule::Choice { options } => options.join(" | "),
            FieldRule::FreeText => "free text (blank means None)".to_string(),
        };
        println!("{:<16}{}", summary.field.to_string(), accepted);
    }
}

fn collect_profile(args: &ProfileArgs, no_input: bool) -> Result<Option<RawProfile>, AppError> {
    if no_input || args.is_complete() {
        return Ok(Some(args.with_defaults()));
    }
    form::fill(args)
}

fn print_report(report: &PlanReport, json: bool) -> Result<(), AppError> {
    if json {
        let rendered = serde_json::to_string_pretty(report).map_err(std::io::Error::from)?;
        println!("{}", rendered);
        return Ok(());
    }

    println!("✅ Diet Plan Generated");
    println!();
    println!("{}", report.plan.text.trim_end());
    Ok(())
}

fn report_error(err: &AppError) {
    eprintln!("Error: {}", err);
    if let AppError::Generation(generation) = err {
        if let Some(detail) = &generation.detail {
            eprintln!("  {}", detail);
        }
    }
}
