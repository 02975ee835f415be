//! tmplkit CLI entrypoint
//! Parses command-line arguments, resolves configuration and renders.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tmplkit::{ConfigLayer, render_directory, resolve};
use tracing::{Level, debug};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tmplkit")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub render: RenderArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the template directory (default command)
    Render(RenderArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// Template directory (default: templates)
    #[arg(short = 't', long)]
    pub template_dir: Option<PathBuf>,

    /// Partials directory (default: templates.partials)
    #[arg(short = 'p', long)]
    pub partials_dir: Option<PathBuf>,

    /// Output directory (default: dist)
    #[arg(short = 'o', long = "out")]
    pub out_dir: Option<PathBuf>,

    /// Values file, YAML or JSON
    #[arg(short = 'c', long = "values")]
    pub values_file: Option<PathBuf>,

    /// Directory searched first for a relative values file (default: templates.values)
    #[arg(long)]
    pub values_dir: Option<PathBuf>,

    /// Explicit project config file
    #[arg(long)]
    pub config_file: Option<PathBuf>,

    /// Template file extension (default: .hbs)
    #[arg(short = 'x', long = "ext")]
    pub extname: Option<String>,

    /// Entry name to skip while walking; wrap in slashes for a regex (repeatable)
    #[arg(short = 'i', long = "ignore")]
    pub ignore: Vec<String>,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// CLI flags as the highest-precedence config layer. Unset flags stay
    /// unset so lower layers show through.
    fn into_layer(self) -> ConfigLayer {
        ConfigLayer {
            template_dir: self.template_dir,
            partials_dir: self.partials_dir,
            values_dir: self.values_dir,
            values_file: self.values_file,
            out_dir: self.out_dir,
            extname: self.extname,
            config_file: self.config_file,
            ignore: (!self.ignore.is_empty()).then_some(self.ignore),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let args = match cli.command {
        Some(Commands::Render(args)) => args,
        None => cli.render,
    };

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    debug!(cwd = %cwd.display(), "Starting tmplkit");

    let config = resolve(args.into_layer(), &cwd)
        .await
        .context("Failed to resolve configuration")?;
    render_directory(&config)
        .await
        .context("Failed to render templates")?;

    println!("✔ tmplkit completed.");
    Ok(())
}
