use std::{
    io::{BufWriter, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scrollscrub", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the derived timeline as JSON.
    Segments(CommonArgs),
    /// Evaluate a single scroll offset.
    Frame(FrameArgs),
    /// Evaluate offsets from 0 to the end of the timeline, one JSON line each.
    Sweep(SweepArgs),
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Engine configuration JSON. Missing fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Device class selecting the scrub speed.
    #[arg(long, value_enum, default_value_t = DeviceChoice::Mobile)]
    device: DeviceChoice,

    /// Duration of the first clip in seconds.
    #[arg(long, default_value_t = scrollscrub::PROVISIONAL_DURATION_S)]
    first: f64,

    /// Duration of the second clip in seconds.
    #[arg(long, default_value_t = scrollscrub::PROVISIONAL_DURATION_S)]
    second: f64,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 800.0)]
    viewport_height: f64,

    /// Evaluate as if activation had not completed.
    #[arg(long)]
    inactive: bool,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Scroll offset in pixels.
    #[arg(long, allow_negative_numbers = true)]
    offset: f64,

    /// Print CSS-like style writes instead of JSON.
    #[arg(long)]
    css: bool,
}

#[derive(Args, Debug)]
struct SweepArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Distance between sampled offsets in pixels.
    #[arg(long, default_value_t = 100.0)]
    step: f64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DeviceChoice {
    Mobile,
    Desktop,
}

impl From<DeviceChoice> for scrollscrub::DeviceClass {
    fn from(value: DeviceChoice) -> Self {
        match value {
            DeviceChoice::Mobile => Self::Mobile,
            DeviceChoice::Desktop => Self::Desktop,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Segments(args) => cmd_segments(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Sweep(args) => cmd_sweep(args),
    }
}

struct Setup {
    evaluator: scrollscrub::Evaluator,
    timeline: scrollscrub::Timeline,
    durations: scrollscrub::TrackDurations,
    viewport_height: f64,
    active: bool,
}

impl Setup {
    fn context(&self, offset: f64) -> scrollscrub::FrameContext {
        scrollscrub::FrameContext {
            scroll_offset: offset,
            viewport_height: self.viewport_height,
            activated: self.active,
            seek_verified: self.active,
            durations: self.durations,
        }
    }

    fn evaluate(&self, offset: f64) -> scrollscrub::FrameOutput {
        self.evaluator
            .evaluate_with(&self.timeline, &self.context(offset))
    }
}

fn setup(args: &CommonArgs) -> anyhow::Result<Setup> {
    let config = match &args.config {
        Some(path) => scrollscrub::ScrubConfig::from_json_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => scrollscrub::ScrubConfig::default(),
    };
    let evaluator = scrollscrub::Evaluator::new(config, args.device.into())
        .with_context(|| "build evaluator")?;

    let mut durations = scrollscrub::TrackDurations::default();
    for (track, secs) in [
        (scrollscrub::Track::First, args.first),
        (scrollscrub::Track::Second, args.second),
    ] {
        if !durations.update(track, secs) && secs != durations.get(track) {
            anyhow::bail!("duration of {track:?} must be finite and positive, got {secs}");
        }
    }
    if !args.viewport_height.is_finite() || args.viewport_height < 0.0 {
        anyhow::bail!(
            "viewport height must be finite and non-negative, got {}",
            args.viewport_height
        );
    }

    let timeline = evaluator.timeline(durations, args.viewport_height);
    tracing::debug!(
        segments = timeline.segments.len(),
        total = timeline.total,
        "timeline derived"
    );
    Ok(Setup {
        evaluator,
        timeline,
        durations,
        viewport_height: args.viewport_height,
        active: !args.inactive,
    })
}

fn cmd_segments(args: CommonArgs) -> anyhow::Result<()> {
    let s = setup(&args)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &s.timeline).with_context(|| "write timeline JSON")?;
    writeln!(out)?;
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let s = setup(&args.common)?;
    let frame = s.evaluate(args.offset);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.css {
        let batch = scrollscrub::StyleBatch::from_visual(&frame.visual);
        for w in batch.writes() {
            writeln!(out, "{w}")?;
        }
    } else {
        serde_json::to_writer_pretty(&mut out, &frame).with_context(|| "write frame JSON")?;
        writeln!(out)?;
    }
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    if !args.step.is_finite() || args.step < 1.0 {
        anyhow::bail!("--step must be at least 1 pixel, got {}", args.step);
    }
    let s = setup(&args.common)?;
    let end = s.timeline.total;
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut n = 0u64;
    loop {
        let offset = (n as f64 * args.step).min(end);
        let frame = s.evaluate(offset);
        serde_json::to_writer(&mut out, &frame).with_context(|| "write frame JSON")?;
        writeln!(out)?;
        if offset >= end {
            break;
        }
        n += 1;
    }
    out.flush().with_context(|| "flush stdout")?;
    Ok(())
}
