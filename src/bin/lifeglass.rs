use std::path::PathBuf;

use anyhow::{Context as _, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use lifeglass::{
    CanvasSpec, DEFAULT_DEVICE_ID, ProcessRng, ProgressData, SceneOptions, Variant, YearStyle,
    device_presets, find_device, goal_progress, life_progress, render_to_file, year_progress,
};

#[derive(Parser, Debug)]
#[command(name = "lifeglass", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a wallpaper PNG.
    Render(RenderArgs),
    /// List supported device presets.
    Devices,
    /// Print the computed progress data as JSON.
    Probe(ProbeArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantArg {
    Life,
    Year,
    Goal,
}

impl From<VariantArg> for Variant {
    fn from(value: VariantArg) -> Self {
        match value {
            VariantArg::Life => Variant::Life,
            VariantArg::Year => Variant::Year,
            VariantArg::Goal => Variant::Goal,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum YearStyleArg {
    Grid,
    Hourglass,
}

impl From<YearStyleArg> for YearStyle {
    fn from(value: YearStyleArg) -> Self {
        match value {
            YearStyleArg::Grid => YearStyle::Grid,
            YearStyleArg::Hourglass => YearStyle::Hourglass,
        }
    }
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Wallpaper variant.
    #[arg(long, value_enum, default_value = "life")]
    variant: VariantArg,

    /// Birth date for the life variant (YYYY-MM-DD).
    #[arg(long, default_value = "2000-01-01")]
    birth_date: NaiveDate,

    /// Target date for the goal variant (YYYY-MM-DD).
    #[arg(long, default_value = "2025-12-31")]
    goal_date: NaiveDate,

    /// Device preset id (see `lifeglass devices`).
    #[arg(long, default_value = DEFAULT_DEVICE_ID)]
    device: String,

    /// Override canvas width (pixels).
    #[arg(long)]
    width: Option<u32>,

    /// Override canvas height (pixels).
    #[arg(long)]
    height: Option<u32>,

    /// Override reserved clock band (pixels).
    #[arg(long)]
    offset_top: Option<u32>,

    /// Year presentation.
    #[arg(long, value_enum, default_value = "hourglass")]
    year_style: YearStyleArg,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ProbeArgs {
    /// Wallpaper variant.
    #[arg(long, value_enum, default_value = "life")]
    variant: VariantArg,

    /// Birth date for the life variant (YYYY-MM-DD).
    #[arg(long, default_value = "2000-01-01")]
    birth_date: NaiveDate,

    /// Target date for the goal variant (YYYY-MM-DD).
    #[arg(long, default_value = "2025-12-31")]
    goal_date: NaiveDate,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Devices => cmd_devices(),
        Command::Probe(args) => cmd_probe(args),
    }
}

fn progress_for(
    variant: Variant,
    birth_date: NaiveDate,
    goal_date: NaiveDate,
    today: NaiveDate,
) -> ProgressData {
    match variant {
        Variant::Life => life_progress(birth_date, today),
        Variant::Year => year_progress(today),
        Variant::Goal => goal_progress(goal_date, today),
    }
}

fn canvas_for(args: &RenderArgs) -> anyhow::Result<CanvasSpec> {
    let Some(device) = find_device(&args.device) else {
        bail!(
            "unknown device '{}'; run `lifeglass devices` for the preset list",
            args.device
        );
    };
    let spec = device.canvas();
    Ok(CanvasSpec::new(
        args.width.unwrap_or(spec.width),
        args.height.unwrap_or(spec.height),
        args.offset_top.unwrap_or(spec.offset_top),
    )?)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let today = Local::now().date_naive();
    let variant = Variant::from(args.variant);
    let progress = progress_for(variant, args.birth_date, args.goal_date, today);
    let canvas = canvas_for(&args)?;
    let opts = SceneOptions {
        year_style: args.year_style.into(),
    };

    let mut rng = ProcessRng::default();
    render_to_file(&args.out, variant, &progress, canvas, opts, &mut rng)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_devices() -> anyhow::Result<()> {
    for spec in device_presets() {
        println!(
            "{:<18} {:>4}x{:<4} offset {:>3}  {}",
            spec.id, spec.width, spec.height, spec.offset_top, spec.name
        );
    }
    Ok(())
}

fn cmd_probe(args: ProbeArgs) -> anyhow::Result<()> {
    let today = Local::now().date_naive();
    let progress = progress_for(args.variant.into(), args.birth_date, args.goal_date, today);
    let json = serde_json::to_string_pretty(&progress).context("serialize progress data")?;
    println!("{json}");
    Ok(())
}
