use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use rayon::prelude::*;

use petalcraft::{
    CpuBackend, CpuBackendOpts, DEFAULT_DPI, GenerationParameters, ImageSink, PRESET_NAMES,
    PngSink, RenderBackend, batch_seeds, compose, preset,
};

#[derive(Parser, Debug)]
#[command(name = "petalcraft", version, about = "Seeded generative poster renderer")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one poster as a PNG and print the seed used.
    Render(RenderArgs),
    /// Render several posters with fresh seeds in parallel.
    Batch(BatchArgs),
    /// Print the composed vector image as JSON without rasterizing.
    Dump(ParamArgs),
    /// List preset names.
    Presets,
}

#[derive(Args, Debug)]
struct ParamArgs {
    /// Start from a named preset.
    #[arg(long, conflicts_with = "params")]
    preset: Option<String>,

    /// Parameters JSON file (missing fields take their defaults).
    #[arg(long)]
    params: Option<PathBuf>,

    /// Seed; omitted means a fresh one is drawn and printed.
    #[arg(long)]
    seed: Option<u64>,

    /// Override the title text.
    #[arg(long)]
    title: Option<String>,

    /// Override the subtitle text.
    #[arg(long)]
    subtitle: Option<String>,
}

#[derive(Args, Debug)]
struct RasterArgs {
    /// Export resolution in dots per inch.
    #[arg(long, default_value_t = DEFAULT_DPI)]
    dpi: u32,

    /// Extra font directory (repeatable).
    #[arg(long = "font-dir")]
    font_dirs: Vec<PathBuf>,

    /// Do not draw the title and subtitle.
    #[arg(long)]
    no_text: bool,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    params: ParamArgs,

    #[command(flatten)]
    raster: RasterArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct BatchArgs {
    #[command(flatten)]
    params: ParamArgs,

    #[command(flatten)]
    raster: RasterArgs,

    /// Number of posters.
    #[arg(long, default_value_t = 4)]
    count: usize,

    /// Output directory; files are named `<prefix>-<seed>.png`.
    #[arg(long)]
    out_dir: PathBuf,

    /// File name prefix.
    #[arg(long, default_value = "poster")]
    prefix: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Batch(args) => cmd_batch(args),
        Command::Dump(args) => cmd_dump(args),
        Command::Presets => cmd_presets(),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_params(args: &ParamArgs) -> anyhow::Result<GenerationParameters> {
    let mut params = match (&args.preset, &args.params) {
        (Some(name), _) => preset(name).with_context(|| {
            format!("unknown preset '{name}' (expected one of {PRESET_NAMES:?})")
        })?,
        (None, Some(path)) => GenerationParameters::from_path(path)
            .with_context(|| format!("load parameters '{}'", path.display()))?,
        (None, None) => GenerationParameters::default(),
    };
    if let Some(title) = &args.title {
        params.title = title.clone();
    }
    if let Some(subtitle) = &args.subtitle {
        params.subtitle = subtitle.clone();
    }
    if args.seed.is_some() {
        params.seed = args.seed;
    }
    params.validate()?;
    Ok(params)
}

fn backend_for(raster: &RasterArgs) -> CpuBackend {
    CpuBackend::new(CpuBackendOpts {
        dpi: raster.dpi,
        font_dirs: raster.font_dirs.clone(),
        skip_text: raster.no_text,
    })
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let params = load_params(&args.params)?;
    let mut backend = backend_for(&args.raster);

    let composition = compose(&params)?;
    let frame = backend.render(&composition.image)?;

    let mut sink = PngSink::file(&args.out);
    sink.write(&frame, composition.seed)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    println!("seed {}", composition.seed);
    Ok(())
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let base = load_params(&args.params)?;

    let seeds = batch_seeds(base.seed, args.count);

    let mut root_backend = backend_for(&args.raster);
    if !args.raster.no_text {
        let faces = root_backend.preload_fonts();
        tracing::debug!(faces, "fonts shared across workers");
    }
    let sink = PngSink::dir(&args.out_dir, &args.prefix);

    let written: Vec<PathBuf> = seeds
        .par_iter()
        .map_init(
            || root_backend.fork(),
            |backend, &seed| -> anyhow::Result<PathBuf> {
                let composition = compose(&base.clone().with_seed(Some(seed)))?;
                let frame = backend.render(&composition.image)?;
                let mut sink = sink.clone();
                sink.write(&frame, seed)?;
                Ok(sink.path_for(seed))
            },
        )
        .collect::<anyhow::Result<_>>()?;

    let mut out = std::io::stdout().lock();
    for (seed, path) in seeds.iter().zip(&written) {
        writeln!(out, "{seed}\t{}", path.display())?;
    }
    Ok(())
}

fn cmd_dump(args: ParamArgs) -> anyhow::Result<()> {
    let params = load_params(&args)?;
    let composition = compose(&params)?;
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &composition).context("serialize composition")?;
    writeln!(out)?;
    Ok(())
}

fn cmd_presets() -> anyhow::Result<()> {
    for name in PRESET_NAMES {
        println!("{name}");
    }
    Ok(())
}
