//! docsmith CLI - compose report definitions into PDF, HTML, DOCX and XLSX.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use docsmith::{ConvertOptions, Converted, StepOutcome};

#[derive(Parser)]
#[command(name = "docsmith")]
#[command(version)]
#[command(about = "Render project/document definitions through a template and fan out to PDF, HTML, DOCX and XLSX", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a report from YAML definition files
    Render {
        #[command(flatten)]
        template: TemplateArgs,

        /// Project definition file in YAML format
        #[arg(long, value_name = "FILE", default_value = "project.yaml")]
        project: PathBuf,

        /// Document definition file in YAML format
        #[arg(long, value_name = "FILE", default_value = "document.yaml")]
        document: PathBuf,
    },

    /// Render a report from synthesized sample definitions
    Sample {
        #[command(flatten)]
        template: TemplateArgs,
    },
}

#[derive(Args)]
struct TemplateArgs {
    /// Name of the main template
    #[arg(long, value_name = "NAME")]
    template: String,

    /// Template folder location; repeatable, searched in order
    #[arg(long = "location", value_name = "DIR")]
    locations: Vec<PathBuf>,

    /// Directory the artifact and outputs are written to
    #[arg(long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Reference/style document for the DOCX conversion
    #[arg(long, value_name = "FILE", default_value = "custom-reference.docx")]
    reference_doc: PathBuf,
}

impl TemplateArgs {
    fn convert_options(&self) -> ConvertOptions {
        ConvertOptions::new()
            .with_output_dir(&self.output_dir)
            .with_reference_doc(&self.reference_doc)
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            template,
            project,
            document,
        } => cmd_render(&template, &project, &document),
        Commands::Sample { template } => cmd_sample(&template),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn cmd_render(args: &TemplateArgs, project: &Path, document: &Path) -> docsmith::Result<i32> {
    let options = args.convert_options();
    let converted = docsmith::run_render(
        &args.locations,
        &args.template,
        project,
        document,
        &options,
    )?;
    Ok(print_report(&converted))
}

fn cmd_sample(args: &TemplateArgs) -> docsmith::Result<i32> {
    let options = args.convert_options();
    let (preview, converted) = docsmith::run_sample(&args.locations, &args.template, &options)?;
    println!("{preview}");
    Ok(print_report(&converted))
}

/// Print the per-step summary; exit code 1 when every step failed.
fn print_report(converted: &Converted) -> i32 {
    println!(
        "Rendered artifact: {}",
        converted.artifact_path.display().to_string().cyan()
    );
    for outcome in &converted.report.outcomes {
        match outcome {
            StepOutcome::Succeeded { step, output } => {
                println!("{} {:5} {}", "ok".green().bold(), step.label(), output.display());
            }
            StepOutcome::Failed { step, reason } => {
                println!("{} {:5} {}", "FAIL".red().bold(), step.label(), reason);
            }
        }
    }
    let report = &converted.report;
    println!(
        "{} of {} conversion step(s) succeeded",
        report.succeeded(),
        report.outcomes.len()
    );
    if report.all_failed() {
        1
    } else {
        0
    }
}
