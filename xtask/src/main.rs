use clap::{Parser, Subcommand};
use colored::*;
use std::process::{Command as ProcessCommand, ExitCode};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Format, test and check the workspace
    Tidy,
    /// Regenerate the annotated default configuration file
    Schema,
}

fn step(label: &str, args: &[&str]) -> bool {
    println!("{}", format!("==> {label}").cyan().bold());
    let status = ProcessCommand::new("cargo")
        .args(args)
        .status()
        .unwrap_or_else(|e| panic!("Failed to run cargo {}: {e}", args[0]));

    if !status.success() {
        println!("{}", format!("{label} failed").red().bold());
    }
    status.success()
}

fn tidy() -> ExitCode {
    let steps: &[(&str, &[&str])] = &[
        ("fmt", &["fmt", "--all"]),
        ("test", &["test", "--workspace"]),
        ("check", &["check", "--workspace", "--all-targets"]),
    ];

    for (label, args) in steps {
        if !step(label, args) {
            return ExitCode::FAILURE;
        }
    }

    println!("{}", "All checks passed".green().bold());
    ExitCode::SUCCESS
}

fn schema() -> ExitCode {
    if step(
        "write annotated config",
        &["run", "-p", "scrim", "--", "--defaults", "config", "--write"],
    ) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    match args.command {
        Command::Tidy => tidy(),
        Command::Schema => schema(),
    }
}
