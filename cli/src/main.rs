mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "factura-diff")]
#[command(about = "Reconcile hospital billing exports: Quiron concepts vs Real invoicing")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Transform the Quiron export: map concepts to billing codes")]
    Transform {
        #[arg(long, value_name = "PATH", help = "Reference table CSV (Conceptos, Códigos)")]
        reference: String,
        #[arg(long, value_name = "PATH", help = "Monthly Quiron export CSV")]
        quiron: String,
        #[arg(long, value_name = "PATH", help = "Write transformed (historia, codigo) CSV here instead of stdout")]
        out: Option<String>,
        #[arg(long, value_name = "PATH", help = "Write the unmapped-concept report CSV here")]
        unmapped: Option<String>,
        #[arg(long, help = "Disable the trailing batch-code suffix heuristic")]
        no_suffix_strip: bool,
        #[arg(long, value_name = "REGEX", help = "Override the suffix heuristic pattern")]
        suffix_pattern: Option<String>,
    },
    #[command(about = "Full reconciliation: report pairs billed in Real but missing from Quiron")]
    Reconcile {
        #[arg(long, value_name = "PATH", help = "Reference table CSV (Conceptos, Códigos)")]
        reference: String,
        #[arg(long, value_name = "PATH", help = "Monthly Quiron export CSV")]
        quiron: String,
        #[arg(long, value_name = "PATH", help = "Real invoicing CSV, headerless, (historia, codigo) first")]
        real: String,
        #[arg(long, short, value_enum, default_value = "text", help = "Output format")]
        format: OutputFormat,
        #[arg(long, value_name = "PATH", help = "Also write the differences as CSV to this path")]
        out: Option<String>,
        #[arg(long, short, help = "Quiet mode: only show summary counts")]
        quiet: bool,
        #[arg(long, help = "Disable the trailing batch-code suffix heuristic")]
        no_suffix_strip: bool,
        #[arg(long, value_name = "REGEX", help = "Override the suffix heuristic pattern")]
        suffix_pattern: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Transform {
            reference,
            quiron,
            out,
            unmapped,
            no_suffix_strip,
            suffix_pattern,
        } => commands::transform::run(
            &reference,
            &quiron,
            out.as_deref(),
            unmapped.as_deref(),
            no_suffix_strip,
            suffix_pattern,
        ),
        Commands::Reconcile {
            reference,
            quiron,
            real,
            format,
            out,
            quiet,
            no_suffix_strip,
            suffix_pattern,
        } => commands::reconcile::run(
            &reference,
            &quiron,
            &real,
            format,
            out.as_deref(),
            quiet,
            no_suffix_strip,
            suffix_pattern,
        ),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
