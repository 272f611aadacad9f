use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use shadowguard_analysis::{ExclusionSet, ManualExclusions, Outcome, Resolver, ResolverOptions};
use shadowguard_core::config::{CliOverrides, ShadowguardConfig};
use shadowguard_core::errors::{ConfigError, ErrorCode, OutputError, PipelineError};
use shadowguard_core::tracing::init_tracing;

#[derive(Parser)]
#[command(name = "shadowguard")]
#[command(about = "Resolve duplicate class names between two source roots")]
#[command(long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan both roots and write the exclusion pattern file
    Generate(GenerateArgs),

    /// Report whether archive entries would be excluded
    Check(CheckArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Project directory; relative paths and shadowguard.toml resolve here
    #[arg(long, default_value = ".")]
    project_dir: PathBuf,

    /// Canonical source root
    #[arg(long)]
    main_root: Option<PathBuf>,

    /// Legacy source root
    #[arg(long)]
    clean_root: Option<PathBuf>,

    /// Policy string, e.g. `stereotype:fail` or `all+warn`
    #[arg(long)]
    mode: Option<String>,

    /// Pattern file to write
    #[arg(long)]
    output: Option<PathBuf>,

    /// Source file extension, without the dot
    #[arg(long)]
    extension: Option<String>,

    /// Kept duplicates listed in full before truncating the report
    #[arg(long)]
    report_max: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Args)]
struct CheckArgs {
    #[arg(long, default_value = ".")]
    project_dir: PathBuf,

    /// Generated pattern file to read
    #[arg(long)]
    output: Option<PathBuf>,

    /// Archive entries such as `com/example/Foo.class`
    #[arg(required = true)]
    entries: Vec<String>,
}

#[derive(Copy, Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(if cli.verbose { "debug" } else { "info" });

    let result = match cli.command {
        Commands::Generate(args) => generate(args),
        Commands::Check(args) => check(args),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", render_error(&err));
            ExitCode::from(2)
        }
    }
}

fn generate(args: GenerateArgs) -> Result<ExitCode> {
    let overrides = CliOverrides {
        main_root: args.main_root,
        clean_root: args.clean_root,
        extension: args.extension,
        mode: args.mode,
        output: args.output,
        report_max_entries: args.report_max,
    };
    let config = ShadowguardConfig::load(&args.project_dir, Some(&overrides))?;
    let options = ResolverOptions::from_config(&config, &args.project_dir);
    let resolution = Resolver::new(options).run()?;

    match args.format {
        OutputFormat::Text => println!(
            "duplicates={} excluded(auto)={} excluded(hard)={} kept={} output={}",
            resolution.duplicates.len(),
            resolution.partition.auto_excluded.len(),
            resolution.partition.hard_excluded.len(),
            resolution.partition.kept.len(),
            resolution.output.display()
        ),
        OutputFormat::Json => println!("{}", resolution.to_json()?),
    }

    let report = resolution
        .report
        .as_ref()
        .map(|r| r.text.as_str())
        .unwrap_or_default();
    match resolution.outcome {
        Outcome::Clean => Ok(ExitCode::SUCCESS),
        Outcome::Warn => {
            tracing::warn!("{}", report.trim_end());
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Fail => {
            eprint!("{report}");
            Ok(ExitCode::from(1))
        }
    }
}

fn check(args: CheckArgs) -> Result<ExitCode> {
    let overrides = CliOverrides {
        output: args.output,
        ..Default::default()
    };
    let config = ShadowguardConfig::load(&args.project_dir, Some(&overrides))?;
    let output = config.output.effective_path(&args.project_dir);
    let manual = ManualExclusions::new(config.exclusions.effective_manual());
    let set = ExclusionSet::load(&output, manual)?;

    for entry in &args.entries {
        let verdict = if set.is_excluded(entry) { "excluded" } else { "kept" };
        println!("{verdict} {entry}");
    }
    Ok(ExitCode::SUCCESS)
}

fn render_error(err: &anyhow::Error) -> String {
    if let Some(e) = err.downcast_ref::<PipelineError>() {
        e.tagged()
    } else if let Some(e) = err.downcast_ref::<ConfigError>() {
        e.tagged()
    } else if let Some(e) = err.downcast_ref::<OutputError>() {
        e.tagged()
    } else {
        format!("{err:#}")
    }
}
