use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use mehdiffer::assets::manifest::default_asset_root;
use mehdiffer::session::sink::write_png;
use mehdiffer::{
    AssetManifest, BackendKind, FrameSink, InputScript, NullSink, PngSequenceSink,
    PreparedAssets, RenderSettings, Session, create_backend,
};

#[derive(Parser, Debug)]
#[command(name = "mehdiffer", version, about = "Headless MEHDIFFER portal")]
struct Cli {
    /// Without a subcommand the built-in demo script runs headlessly.
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run an input script, optionally writing PNG frames.
    Run(RunArgs),
    /// Render the single frame at a given time as a PNG.
    Frame(FrameArgs),
    /// Print the built-in demo script as JSON.
    DumpScript,
}

#[derive(Parser, Debug)]
struct AssetArgs {
    /// Asset directory (default: $MEHDIFFER_ASSETS, else the executable's directory).
    #[arg(long)]
    assets: Option<PathBuf>,

    /// JSON manifest overriding asset file names.
    #[arg(long)]
    manifest: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Input script JSON (default: built-in demo).
    #[arg(long)]
    script: Option<PathBuf>,

    #[command(flatten)]
    assets: AssetArgs,

    /// Directory for `frame_NNNNNN.png` output.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Write every Nth frame.
    #[arg(long, default_value_t = 1)]
    every: u32,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Time in seconds since session start.
    #[arg(long)]
    at: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Input script JSON (default: built-in demo).
    #[arg(long)]
    script: Option<PathBuf>,

    #[command(flatten)]
    assets: AssetArgs,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        None => cmd_run(RunArgs {
            script: None,
            assets: AssetArgs {
                assets: None,
                manifest: None,
            },
            out: None,
            every: 1,
        }),
        Some(Command::Run(args)) => cmd_run(args),
        Some(Command::Frame(args)) => cmd_frame(args),
        Some(Command::DumpScript) => cmd_dump_script(),
    }
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let mut session = open_session(args.script.as_deref(), &args.assets)?;

    let mut png;
    let mut null = NullSink;
    let sink: &mut dyn FrameSink = match &args.out {
        Some(dir) => {
            png = PngSequenceSink::new(dir);
            &mut png
        }
        None => &mut null,
    };

    let report = session.run(sink, args.every).context("run portal session")?;
    let summary = serde_json::to_string_pretty(&report).context("serialize session report")?;
    println!("{summary}");
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut session = open_session(args.script.as_deref(), &args.assets)?;
    let frame = session
        .render_at(args.at)
        .with_context(|| format!("render frame at {}s", args.at))?;
    write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_dump_script() -> anyhow::Result<()> {
    println!("{}", InputScript::demo().to_json_pretty()?);
    Ok(())
}

fn open_session(script: Option<&Path>, assets: &AssetArgs) -> anyhow::Result<Session> {
    let script = match script {
        Some(path) => InputScript::from_path(path)?,
        None => InputScript::demo(),
    };
    let root = assets.assets.clone().unwrap_or_else(default_asset_root);
    let manifest = match &assets.manifest {
        Some(path) => AssetManifest::from_path(path)?,
        None => AssetManifest::default(),
    };
    let prepared = PreparedAssets::load(&root, &manifest);
    let backend = create_backend(BackendKind::Cpu, &RenderSettings::default())?;
    Ok(Session::new(script, prepared, backend)?)
}
