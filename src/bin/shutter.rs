use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "shutter", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the resolved intro and menu schedules.
    Plan(PlanArgs),
    /// Run a deterministic frame loop and print every page event.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Page config JSON.
    #[arg(long)]
    config: PathBuf,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Page config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Frames per second of the simulated loop.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Scroll offset applied at t=0 (held until the intro completes).
    #[arg(long)]
    scroll_to: Option<f64>,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 900.0)]
    viewport_height: f64,

    /// Open the overlay menu at this time, in seconds.
    #[arg(long)]
    open_menu_at: Option<f64>,

    /// Simulated length in seconds.
    #[arg(long, default_value_t = 12.0)]
    seconds: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn read_config(path: &Path) -> anyhow::Result<shutter::PageConfig> {
    let config = shutter::PageConfig::from_path(path)
        .with_context(|| format!("load page config '{}'", path.display()))?;
    config.validate().context("validate page config")?;
    Ok(config)
}

fn mount(
    config: &shutter::PageConfig,
) -> anyhow::Result<(shutter::SceneGraph, shutter::PageSession)> {
    let mut scene = shutter::SceneGraph::new();
    let layout = shutter::PageLayout::mount(&mut scene, config);
    let session =
        shutter::PageSession::mount(&mut scene, config, layout).context("mount page session")?;
    Ok((scene, session))
}

fn print_schedule(title: &str, scene: &shutter::SceneGraph, entries: &[shutter::ScheduleEntry]) {
    println!("{title}:");
    for e in entries {
        let target = e
            .target
            .and_then(|n| scene.name(n))
            .unwrap_or("(hold)");
        let label = e.label.as_deref().unwrap_or("");
        println!("  {:>6.3} -> {:>6.3}  {target:<16} {label}", e.start, e.end);
    }
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let config = read_config(&args.config)?;
    let (scene, session) = mount(&config)?;

    print_schedule("intro", &scene, &session.intro().schedule());
    if let Some(menu) = session.menu() {
        print_schedule("menu", &scene, &menu.schedule());
    }
    println!(
        "reveals: {} elements in {} sections",
        session.reveal().len(),
        config.sections.len()
    );
    println!("parallax: {} layers", session.parallax().len());
    println!("gallery: {} images", session.gallery().images().len());
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.fps > 0, "--fps must be > 0");
    anyhow::ensure!(
        args.seconds.is_finite() && args.seconds >= 0.0,
        "--seconds must be finite and >= 0"
    );

    let config = read_config(&args.config)?;
    let (mut scene, mut session) = mount(&config)?;
    session.start().context("start intro")?;

    if let Some(top) = args.scroll_to {
        let viewport = shutter::Viewport::new(top, args.viewport_height)
            .context("build viewport from --scroll-to")?;
        for event in session.scroll(viewport) {
            print_event(0.0, &event);
        }
    }

    let dt = 1.0 / f64::from(args.fps);
    let frames = (args.seconds * f64::from(args.fps)).ceil() as u64;
    let mut menu_pending = args.open_menu_at;
    for frame in 1..=frames {
        let t = frame as f64 * dt;
        if let Some(at) = menu_pending
            && t >= at
        {
            menu_pending = None;
            if session.open_menu() {
                println!("{t:>7.3}  menu open requested");
            } else {
                println!("{t:>7.3}  menu open ignored");
            }
        }
        for event in session.tick(dt, &mut scene).context("tick page session")? {
            print_event(t, &event);
        }
    }

    println!(
        "end: stage={:?} counter={} locked={}",
        session.intro().stage(),
        session.intro().counter(),
        session.lock().is_locked()
    );
    session.teardown();
    Ok(())
}

fn print_event(t: f64, event: &shutter::PageEvent) {
    match event {
        shutter::PageEvent::IntroStage(stage) => println!("{t:>7.3}  intro {stage:?}"),
        shutter::PageEvent::MenuState(state) => println!("{t:>7.3}  menu {state:?}"),
        shutter::PageEvent::NavbarScrolled(scrolled) => {
            println!("{t:>7.3}  navbar scrolled={scrolled}")
        }
        shutter::PageEvent::Reveal { section, change } => {
            println!("{t:>7.3}  reveal {section} {:?}", change.state)
        }
    }
}
