use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "barrel-forge", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the resolved geometry as JSON.
    Resolve(ConfigArgs),
    /// Print the tasting notes for the configured char level.
    Notes(ConfigArgs),
    /// List every parameter with its range and current value.
    Params(ConfigArgs),
    /// Write the barrel as an SVG document.
    Svg(SvgArgs),
    /// Write the barrel as a PNG image.
    Png(PngArgs),
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Barrel config JSON. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Parameter override, e.g. `--set staves=18 --set label="ВИНО 1987"`.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    overrides: Vec<barrel_forge::Override>,

    /// Keep values outside the slider ranges instead of clamping them.
    #[arg(long)]
    no_clamp: bool,
}

#[derive(Args, Debug)]
struct SvgArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct PngArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Pixels per canvas unit.
    #[arg(long, default_value_t = 2.0)]
    scale: f32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    match cli.cmd {
        Command::Resolve(args) => cmd_resolve(args),
        Command::Notes(args) => cmd_notes(args),
        Command::Params(args) => cmd_params(args),
        Command::Svg(args) => cmd_svg(args),
        Command::Png(args) => cmd_png(args),
    }
}

fn load_config(args: &ConfigArgs) -> anyhow::Result<barrel_forge::BarrelConfig> {
    let base = match &args.config {
        Some(path) => barrel_forge::BarrelConfig::load(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => barrel_forge::BarrelConfig::default(),
    };
    let cfg = args
        .overrides
        .iter()
        .fold(base, |cfg, ov| cfg.with_override(ov));
    let cfg = if args.no_clamp { cfg } else { cfg.sanitized() };
    cfg.validate()?;
    Ok(cfg)
}

fn cmd_resolve(args: ConfigArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args)?;
    let geometry = barrel_forge::resolve(&cfg);
    println!("{}", serde_json::to_string_pretty(&geometry)?);
    Ok(())
}

fn cmd_notes(args: ConfigArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args)?;
    for note in barrel_forge::flavor_notes(cfg.char_level) {
        println!("{note}");
    }
    Ok(())
}

fn cmd_params(args: ConfigArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args)?;
    for param in barrel_forge::Param::ALL {
        let spec = param.spec();
        println!(
            "{:<16} {:<20} [{}..{} step {}] {}",
            spec.key,
            spec.label,
            spec.min,
            spec.max,
            spec.step,
            param.format(cfg.get(param))
        );
    }
    println!(
        "{:<16} {:<20} {}/{}",
        "label",
        "Маркировка",
        cfg.label_len(),
        barrel_forge::LABEL_MAX_CHARS
    );
    Ok(())
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let scene = barrel_forge::build_scene(&barrel_forge::resolve(&cfg));
    let svg = barrel_forge::render_svg(&scene)?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, svg)
        .with_context(|| format!("write svg '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_png(args: PngArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let scene = barrel_forge::build_scene(&barrel_forge::resolve(&cfg));
    barrel_forge::write_png(&scene, args.scale, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
