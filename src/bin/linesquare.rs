use std::{io::BufReader, path::PathBuf, sync::mpsc, time::Duration};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "linesquare", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame of a tap script as a PNG.
    Frame(FrameArgs),
    /// Render every frame of a tap script as a numbered PNG sequence.
    Frames(FramesArgs),
    /// Render a tap script as an MP4 video (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Run the widget live: each line on stdin is a tap, `q` or EOF quits.
    Live(LiveArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input tap script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Input tap script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Directory receiving `frame_00000.png`, `frame_00001.png`, ...
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input tap script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,

    /// Overwrite output if it already exists.
    #[arg(long, default_value_t = false)]
    overwrite: bool,
}

#[derive(Parser, Debug)]
struct LiveArgs {
    /// PNG rewritten after every redraw.
    #[arg(long)]
    out: PathBuf,

    #[arg(long, default_value_t = 360)]
    width: u32,

    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Clock delay in milliseconds.
    #[arg(long, default_value_t = linesquare::consts::TICK_MS)]
    tick_ms: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Render(args) => cmd_render(args),
        Command::Live(args) => cmd_live(args),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let script = linesquare::TapScript::from_path(&args.script)?;
    let frame = linesquare::render_frame_at(&script, linesquare::FrameIndex(args.frame))?;
    linesquare::write_png(&args.out, &frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let script = linesquare::TapScript::from_path(&args.script)?;
    let mut sink = linesquare::PngSequenceSink::new(&args.out_dir);
    let stats = linesquare::play(&script, &mut sink)?;
    eprintln!(
        "wrote {} frames to {} (rows_finished={})",
        stats.frames,
        args.out_dir.display(),
        stats.rows_finished
    );
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    if !linesquare::is_ffmpeg_on_path() {
        anyhow::bail!("ffmpeg was not found on PATH");
    }
    let script = linesquare::TapScript::from_path(&args.script)?;
    let mut sink = linesquare::FfmpegSink::new(&args.out, args.overwrite);
    let stats = linesquare::play(&script, &mut sink)
        .with_context(|| format!("render '{}'", args.out.display()))?;
    eprintln!(
        "wrote {} (frames={}, taps_ignored={})",
        args.out.display(),
        stats.frames,
        stats.taps_ignored
    );
    Ok(())
}

fn cmd_live(args: LiveArgs) -> anyhow::Result<()> {
    let canvas = linesquare::Canvas::new(args.width, args.height)?;
    let (tx, rx) = mpsc::channel();
    let mut scene = linesquare::Scene::create_live_with_delay(
        canvas,
        Duration::from_millis(u64::from(args.tick_ms)),
        tx.clone(),
    )?;
    linesquare::spawn_line_taps(BufReader::new(std::io::stdin()), tx);

    let mut backend = linesquare::CpuBackend::new();
    let out = args.out;
    tracing::info!(out = %out.display(), "live; press enter to tap, q to quit");
    let stats = linesquare::run_event_loop(&mut scene, &rx, |scene| {
        let frame = linesquare::render_frame(scene, &mut backend)?;
        linesquare::write_png(&out, &frame)
    });
    eprintln!(
        "taps={} rows_finished={} frames={} dropped={}",
        stats.taps, stats.rows_finished, stats.frames, stats.dropped_frames
    );
    Ok(())
}
