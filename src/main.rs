use clap::{Parser, Subcommand};
use serial_press::{env, envfile, manifest, output, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "serial-press")]
#[command(version)]
#[command(about = "Static site build tool for serialized web novels")]
#[command(long_about = "\
Static site build tool for serialized web novels

Your filesystem is the data source. Markdown files with YAML front matter
become content collections; environment variables (merged with an optional
.env file) become site configuration; the build derives ordering, navigation
and aggregate views and emits a JSON site manifest for page generation.

Content structure:

  content/
  ├── novels/
  │   └── the-long-road.md         # title, author, startDate, tags, ...
  ├── chapters/
  │   └── the-long-road/
  │       ├── 1-1.md               # novel, volume, chapter, publishDate
  │       └── 1-2.md
  └── authors/
      └── jane.md                  # name, penName, avatar, links

Entries missing required front matter are dropped with a warning; the build
prefers fewer pages over a broken site. Configuration values that are
provided but malformed are errors — run 'serial-press check' to see the
full diagnostics, or 'serial-press gen-env' for a documented .env template.")]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Configuration file, merged under the process environment
    #[arg(long, default_value = ".env", global = true)]
    env_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the content directory and show the inventory
    Scan,
    /// Report content and configuration diagnostics
    Check {
        /// Exit non-zero when any error-severity finding is present
        #[arg(long)]
        strict: bool,
    },
    /// Build the site manifest: scan, derive, emit JSON
    Build,
    /// Print a stock .env with all settings documented
    GenEnv,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let store = scan::scan(&cli.source)?;
            output::print_scan_output(&store);
        }
        Command::Check { strict } => {
            println!("==> Checking {}", cli.source.display());
            let store = scan::scan(&cli.source)?;
            output::print_scan_output(&store);

            println!();
            let raw = envfile::merged_environment(envfile::read(&cli.env_file)?);
            let report = env::resolve_with_diagnostics(&raw);
            output::print_check_report(&report);

            if strict && report.has_errors() {
                std::process::exit(1);
            }
        }
        Command::Build => {
            let raw = envfile::merged_environment(envfile::read(&cli.env_file)?);
            let config = env::resolve(&raw)?;
            let store = scan::scan(&cli.source)?;
            let site = manifest::build_manifest(&config, &store)?;

            std::fs::create_dir_all(&cli.output)?;
            let destination = cli.output.join("site.json");
            let json = serde_json::to_string_pretty(&site)?;
            std::fs::write(&destination, json)?;
            output::print_build_output(&site, &destination);
        }
        Command::GenEnv => {
            print!("{}", env::stock_env_template());
        }
    }

    Ok(())
}
