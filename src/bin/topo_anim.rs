//! 单拓扑动画
//!
//! 默认在离散事件仿真器上以仿真时间运行到会话结束（可写出回放 JSON）；
//! `--realtime` 时按真实时间在终端里逐帧绘制（ratatui + crossterm）。

use clap::Parser;
use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use topo_anim::anim::{run_realtime, AnimWorld, Controller, PressStart, SelectTopology};
use topo_anim::config::AnimConfig;
use topo_anim::scene::TerminalSurface;
use topo_anim::sim::{MonotonicClock, SimTime, Simulator};
use topo_anim::topo::Topology;
use topo_anim::viz::VizLogger;
use tracing::{debug, error, info};

#[derive(Debug, Parser)]
#[command(name = "topo-anim", about = "数据包在经典网络拓扑上的往返动画")]
struct Args {
    /// bus / mesh / ring / star / tree
    #[arg(long, default_value = "bus")]
    topology: Topology,

    /// JSON 配置文件（缺省字段取默认值）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 覆盖每 tick 插值增量
    #[arg(long)]
    speed: Option<f64>,

    /// 覆盖 tick 周期（毫秒）
    #[arg(long)]
    tick_ms: Option<u64>,

    /// 输出回放 JSON
    #[arg(long)]
    viz_json: Option<PathBuf>,

    /// 回放 JSON 中每隔多少帧记录一帧
    #[arg(long, default_value_t = 1)]
    frame_stride: u64,

    /// 最长运行时间（毫秒）；缺省运行到会话结束
    #[arg(long)]
    until_ms: Option<u64>,

    /// 按真实时间在终端绘制
    #[arg(long)]
    realtime: bool,

    #[arg(long, default_value_t = 80)]
    width: u16,

    #[arg(long, default_value_t = 30)]
    height: u16,

    /// 直接画在当前屏幕上，不切换到备用屏幕
    #[arg(long)]
    no_alt_screen: bool,
}

fn load_config(args: &Args) -> Result<AnimConfig, topo_anim::config::ConfigError> {
    let mut cfg = match &args.config {
        Some(path) => AnimConfig::load(path)?,
        None => AnimConfig::default(),
    };
    if let Some(speed) = args.speed {
        cfg.timing.speed = speed;
    }
    if let Some(tick_ms) = args.tick_ms {
        cfg.timing.tick_ms = tick_ms;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn run_simulated(args: &Args, cfg: AnimConfig) -> ExitCode {
    let mut sim = Simulator::default();
    let mut world = AnimWorld::new(cfg);
    if args.viz_json.is_some() {
        world.viz = Some(VizLogger::with_frame_stride(args.frame_stride));
    }

    sim.schedule(SimTime::ZERO, PressStart);
    sim.schedule(
        SimTime::ZERO,
        SelectTopology {
            topology: args.topology,
        },
    );

    let events = match args.until_ms {
        Some(ms) => sim.run_until(SimTime::from_millis(ms), &mut world),
        None => sim.run(&mut world),
    };
    debug!(events, "事件队列已处理");

    let session = world.controller.session();
    println!(
        "done @ {:.3}s topology={} ticks={} legs={} dwells={} complete={}",
        sim.now().as_secs_f64(),
        args.topology,
        world.stats.ticks,
        world.stats.legs,
        world.stats.dwells,
        session.is_complete()
    );

    if let Some(path) = &args.viz_json {
        if let Some(v) = world.viz.take() {
            let written = v
                .to_json()
                .map_err(io::Error::from)
                .and_then(|json| fs::write(path, json));
            if let Err(e) = written {
                error!(path = %path.display(), error = %e, "写回放文件失败");
                return ExitCode::FAILURE;
            }
            eprintln!("wrote viz events to {}", path.display());
        }
    }
    ExitCode::SUCCESS
}

fn run_terminal(args: &Args, cfg: AnimConfig) -> ExitCode {
    let tick_period = cfg.timing.tick_period();
    let mut ctl = Controller::new(cfg);
    ctl.press_start();
    ctl.select(args.topology);

    let clock = MonotonicClock::start();
    let until = args.until_ms.map(SimTime::from_millis);

    let result = TerminalSurface::new(CrosstermBackend::new(io::stdout()), args.width, args.height)
        .and_then(|mut surface| {
            enter_screen(&mut surface, args.no_alt_screen)?;
            let stats = run_realtime(&mut ctl, &mut surface, &clock, tick_period, until);
            leave_screen(&mut surface, args.no_alt_screen)?;
            stats
        });

    match result {
        Ok(stats) => {
            info!(ticks = stats.ticks, dwells = stats.dwells, "动画结束");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "终端输出失败");
            ExitCode::FAILURE
        }
    }
}

fn enter_screen(
    surface: &mut TerminalSurface<CrosstermBackend<io::Stdout>>,
    no_alt_screen: bool,
) -> io::Result<()> {
    let out = surface.backend_mut();
    if !no_alt_screen {
        execute!(out, EnterAlternateScreen, cursor::Hide)?;
    }
    execute!(out, Clear(ClearType::All))
}

fn leave_screen(
    surface: &mut TerminalSurface<CrosstermBackend<io::Stdout>>,
    no_alt_screen: bool,
) -> io::Result<()> {
    if no_alt_screen {
        return Ok(());
    }
    execute!(surface.backend_mut(), LeaveAlternateScreen, cursor::Show)
}

fn main() -> ExitCode {
    // 初始化 tracing（写 stderr，不干扰终端画面）
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();
    let cfg = match load_config(&args) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.realtime {
        run_terminal(&args, cfg)
    } else {
        run_simulated(&args, cfg)
    }
}
