use std::{path::PathBuf, time::Duration};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use rawscope::{
    Capacity, Clock as _, CpuSurface, FrameIndex, ManualTicks, ParameterModel, Simulator,
    SimulatorConfig, SystemClock, TickOutcome, TracingSink, VolumeCalculator,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rawscope", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the uncompressed data volume for a parameter set.
    Calc(CalcArgs),
    /// Render a single preview frame as a PNG.
    Frame(FrameArgs),
    /// Run the preview in real time and log measured fps.
    Play(PlayArgs),
}

/// Parameter overrides shared by every subcommand. Out-of-range values are clamped.
#[derive(Args, Debug)]
struct ParamArgs {
    /// Config JSON supplying capacity, end policy and default parameters.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    width: Option<i64>,

    #[arg(long)]
    height: Option<i64>,

    #[arg(long)]
    fps: Option<i64>,

    /// Duration in seconds.
    #[arg(long)]
    duration: Option<i64>,

    /// Bits per channel (1..=8).
    #[arg(long)]
    bits: Option<i64>,

    /// `mono` or `color`.
    #[arg(long)]
    color_mode: Option<String>,

    /// Animation variant key, e.g. `bouncing` or `color-wash`.
    #[arg(long)]
    variant: Option<String>,

    /// `bit`, `byte`, `kb`, `mb`, `gb` or `auto`.
    #[arg(long)]
    unit: Option<String>,
}

#[derive(Parser, Debug)]
struct CalcArgs {
    #[command(flatten)]
    params: ParamArgs,

    /// Alert threshold: `large`, `dvd`, or a byte count.
    #[arg(long)]
    capacity: Option<Capacity>,

    /// Emit JSON instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    params: ParamArgs,

    /// Frame index (0-based).
    #[arg(long, default_value_t = 0)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    #[command(flatten)]
    params: ParamArgs,

    /// Wall-clock seconds to run before pausing.
    #[arg(long, default_value_t = 3.0)]
    seconds: f64,

    /// Stop once the configured duration has elapsed.
    #[arg(long, default_value_t = false)]
    stop_after_duration: bool,
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
        Command::Calc(args) => cmd_calc(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Play(args) => cmd_play(args),
    }
}

impl ParamArgs {
    /// Loads the config (or defaults) and folds the flag overrides into its `defaults` block.
    fn resolve(&self) -> anyhow::Result<SimulatorConfig> {
        let mut cfg = match &self.config {
            Some(path) => SimulatorConfig::from_path(path)?,
            None => SimulatorConfig::default(),
        };
        let d = &mut cfg.defaults;
        d.width = self.width.unwrap_or(d.width);
        d.height = self.height.unwrap_or(d.height);
        d.fps = self.fps.unwrap_or(d.fps);
        d.duration = self.duration.unwrap_or(d.duration);
        d.bits = self.bits.unwrap_or(d.bits);
        if let Some(v) = &self.color_mode {
            d.color_mode = v.clone();
        }
        if let Some(v) = &self.variant {
            d.animation = v.clone();
        }
        if let Some(v) = &self.unit {
            d.unit = v.clone();
        }
        Ok(cfg)
    }

    fn model(&self) -> anyhow::Result<(SimulatorConfig, ParameterModel)> {
        let cfg = self.resolve()?;
        let (model, clamped) = ParameterModel::from_raw_with_report(&cfg.defaults)?;
        for c in &clamped {
            tracing::warn!(
                field = c.field,
                requested = c.requested,
                applied = c.applied,
                "value out of range, clamped"
            );
        }
        Ok((cfg, model))
    }
}

fn cmd_calc(args: CalcArgs) -> anyhow::Result<()> {
    let (cfg, model) = args.params.model()?;
    let capacity = args.capacity.unwrap_or(cfg.capacity);
    let result = VolumeCalculator::new(capacity).compute(&model);

    if args.json {
        let [frame_line, total_line] = result.breakdown();
        let out = serde_json::json!({
            "parameters": model,
            "capacity_bytes": capacity.bytes(),
            "frame_pixels": result.frame_pixels.to_string(),
            "frame_bits": result.frame_bits.to_string(),
            "frame_bytes": result.frame_bytes.to_string(),
            "total_frames": result.total_frames.to_string(),
            "total_bits": result.total_bits.to_string(),
            "total_bytes": result.total_bytes.to_string(),
            "frame": result.displayed_frame_value,
            "total": result.displayed_total_value,
            "breakdown": [frame_line, total_line],
            "alert": result.alert_triggered,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let [frame_line, total_line] = result.breakdown();
    println!("frame: {}", result.displayed_frame_value);
    println!("total: {}", result.displayed_total_value);
    println!("{frame_line}");
    println!("{total_line}");
    if result.alert_triggered {
        println!(
            "alert: {} bytes exceeds capacity of {} bytes",
            result.total_bytes,
            capacity.bytes()
        );
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (_, model) = args.params.model()?;
    let mut surface = CpuSurface::new(model.canvas())?;
    rawscope::render_into(&mut surface, &model, FrameIndex(args.frame))?;
    let frame = surface.frame();

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let mut cfg = args.params.resolve()?;
    if args.stop_after_duration {
        cfg.end_policy = rawscope::EndPolicy::StopAfterDuration;
    }
    let model = ParameterModel::from_raw(&cfg.defaults)?;
    let poll = Duration::from_secs_f64(model.frame_interval_ms() / 4000.0);
    let budget_ms = args.seconds.max(0.0) * 1000.0;

    let clock = SystemClock::new();
    let ticks = ManualTicks::new();
    let mut sim = Simulator::new(
        cfg,
        CpuSurface::new(model.canvas())?,
        ticks.clone(),
        clock,
        TracingSink,
    )?;

    sim.play();
    while ticks.fire().is_some() {
        if clock.now_ms() >= budget_ms {
            sim.pause();
            break;
        }
        std::thread::sleep(poll);
        if sim.tick_now()? == TickOutcome::Finished {
            break;
        }
    }

    let state = sim.schedule_state();
    eprintln!(
        "rendered {} frames{}",
        state.frame_index.0,
        state
            .measured_fps
            .map(|fps| format!(", last measured {fps} fps"))
            .unwrap_or_default()
    );
    Ok(())
}
