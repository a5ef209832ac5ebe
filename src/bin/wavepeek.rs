use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use wavepeek::ThumbnailJob;

#[derive(Parser, Debug)]
#[command(name = "wavepeek", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one waveform thumbnail.
    Render(RenderArgs),
    /// Render every job in a JSON job list.
    Batch(BatchArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input audio file.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output image path (format selected by extension).
    #[arg(long)]
    out: PathBuf,

    /// Output width in pixels.
    #[arg(long)]
    width: u32,

    /// Output height in pixels.
    #[arg(long)]
    height: u32,

    /// Cap frames inspected per column at 500 (faster, less accurate).
    #[arg(long, default_value_t = false)]
    cheat: bool,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// JSON array of thumbnail jobs.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Batch(args) => cmd_batch(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let job = ThumbnailJob {
        input: args.in_path,
        output: args.out,
        width: args.width,
        height: args.height,
        cheat: args.cheat,
    };
    render_job(&job)
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read job list '{}'", args.in_path.display()))?;
    let jobs: Vec<ThumbnailJob> = serde_json::from_str(&text)
        .with_context(|| format!("parse job list '{}'", args.in_path.display()))?;

    for job in &jobs {
        render_job(job)?;
    }
    eprintln!("rendered {} thumbnails", jobs.len());
    Ok(())
}

fn render_job(job: &ThumbnailJob) -> anyhow::Result<()> {
    wavepeek::render_thumbnail(job)
        .with_context(|| format!("render '{}'", job.input.display()))?;
    eprintln!("wrote {}", job.output.display());
    Ok(())
}
