use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use hexglow::{
    AnimationContext, AnimationKind, AnsiPreview, CpuPainter, PixelMap, PlaybackConfig,
};

#[derive(Parser, Debug)]
#[command(name = "hexglow", version)]
struct Cli {
    /// Playback config JSON; defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log more (repeat for trace output).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play an animation in the terminal.
    Preview(PreviewArgs),
    /// Render one frame of an animation as a PNG.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Animation to play.
    #[arg(long, value_enum)]
    animation: AnimationChoice,

    /// Cross-fade into this animation after the first one has played.
    #[arg(long, value_enum)]
    then: Option<AnimationChoice>,

    /// How many times to play each animation.
    #[arg(long, default_value_t = 1)]
    loops: u32,

    /// Print plain words without color escapes.
    #[arg(long)]
    no_color: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Animation to render.
    #[arg(long, value_enum)]
    animation: AnimationChoice,

    /// Frame index (0-based).
    #[arg(long, default_value_t = 0)]
    index: usize,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Integer upscale factor.
    #[arg(long, default_value_t = 1)]
    scale: u32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AnimationChoice {
    Wedges,
    Ellipse,
    Waves,
    Spectrum,
    Random,
}

impl From<AnimationChoice> for AnimationKind {
    fn from(choice: AnimationChoice) -> Self {
        match choice {
            AnimationChoice::Wedges => AnimationKind::Wedges,
            AnimationChoice::Ellipse => AnimationKind::Ellipse,
            AnimationChoice::Waves => AnimationKind::Waves,
            AnimationChoice::Spectrum => AnimationKind::Spectrum,
            AnimationChoice::Random => AnimationKind::Random,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = match &cli.config {
        Some(path) => PlaybackConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => PlaybackConfig::default()
            .with_env_overrides()
            .validated()
            .context("validate default config")?,
    };

    match cli.cmd {
        Command::Preview(args) => cmd_preview(&cfg, args),
        Command::Frame(args) => cmd_frame(&cfg, args),
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

fn render(kind: AnimationKind, cfg: &PlaybackConfig) -> anyhow::Result<AnimationContext> {
    let mut ctx = AnimationContext::new();
    kind.render_into(&mut ctx, &mut CpuPainter::new(), cfg)
        .with_context(|| format!("render {kind:?}"))?;
    Ok(ctx)
}

fn cmd_preview(cfg: &PlaybackConfig, args: PreviewArgs) -> anyhow::Result<()> {
    let map = PixelMap::standard().context("load pixel map")?;
    let mut opts = cfg.preview;
    if args.no_color {
        opts.color = false;
    }
    let mut preview = AnsiPreview::new(std::io::stdout().lock(), opts);
    let frame_time = cfg.frame_duration();

    let mut current = render(args.animation.into(), cfg)?;
    play(&mut current, args.loops, &mut preview, &map, frame_time)?;

    let Some(next) = args.then else {
        return Ok(());
    };
    let mut incoming = render(next.into(), cfg)?;

    let mut transition = AnimationContext::new();
    hexglow::interpolate_contexts(&current, &incoming, &mut transition, cfg.transition_frames)
        .context("build transition")?;
    current.clear();
    for frame in transition.frames() {
        preview.print_frame(frame, &map)?;
        std::thread::sleep(frame_time);
    }
    transition.clear();

    play(&mut incoming, args.loops, &mut preview, &map, frame_time)
}

/// Ping-pong through `ctx` `loops` times, starting from its cursor.
fn play<W: std::io::Write>(
    ctx: &mut AnimationContext,
    loops: u32,
    preview: &mut AnsiPreview<W>,
    map: &PixelMap,
    frame_time: std::time::Duration,
) -> anyhow::Result<()> {
    let steps = ctx.len().saturating_sub(1).max(1) * loops as usize;
    if let Some(frame) = ctx.current() {
        preview.print_frame(frame, map)?;
        std::thread::sleep(frame_time);
    }
    for _ in 0..steps {
        let Some(frame) = ctx.advance() else {
            break;
        };
        preview.print_frame(frame, map)?;
        std::thread::sleep(frame_time);
    }
    Ok(())
}

fn cmd_frame(cfg: &PlaybackConfig, args: FrameArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.scale >= 1, "--scale must be >= 1");
    let ctx = render(args.animation.into(), cfg)?;
    let frame = ctx.get(args.index).with_context(|| {
        format!(
            "frame {} out of range, animation has {} frames",
            args.index,
            ctx.len()
        )
    })?;

    let img = image::RgbaImage::from_raw(
        frame.width() as u32,
        frame.height() as u32,
        frame.to_rgba8(),
    )
    .context("frame buffer does not match its size")?;
    let img = image::imageops::resize(
        &img,
        img.width() * args.scale,
        img.height() * args.scale,
        image::imageops::FilterType::Nearest,
    );

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    img.save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
