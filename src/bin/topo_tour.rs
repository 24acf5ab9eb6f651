//! 拓扑巡演
//!
//! 模拟一次完整的课堂演示：按下开始键，然后依次选择五种拓扑。
//! 默认每种拓扑都跑到会话结束再切换；`--interrupt-ms` 时到点就切换，
//! 不管当前会话处于行进还是驻留。

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use topo_anim::anim::{AnimWorld, PressStart, SelectTopology};
use topo_anim::config::AnimConfig;
use topo_anim::sim::{SimTime, Simulator};
use topo_anim::topo::Topology;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "topo-tour", about = "依次演示五种拓扑的数据包动画")]
struct Args {
    /// JSON 配置文件
    #[arg(long)]
    config: Option<PathBuf>,

    /// 每种拓扑最多运行多少毫秒后切换（缺省：运行到结束）
    #[arg(long)]
    interrupt_ms: Option<u64>,

    /// 只演示这些拓扑（逗号分隔）
    #[arg(long, value_delimiter = ',')]
    only: Vec<Topology>,
}

fn main() -> ExitCode {
    // 初始化 tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();
    let cfg = match &args.config {
        Some(path) => AnimConfig::load(path),
        None => Ok(AnimConfig::default()),
    };
    let cfg = match cfg {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let tour: Vec<Topology> = if args.only.is_empty() {
        Topology::ALL.to_vec()
    } else {
        args.only.clone()
    };

    let mut sim = Simulator::default();
    let mut world = AnimWorld::new(cfg);
    sim.schedule(SimTime::ZERO, PressStart);

    for topology in tour {
        let started_at = sim.now();
        sim.schedule(started_at, SelectTopology { topology });
        let events = match args.interrupt_ms {
            Some(ms) => sim.run_until(started_at + SimTime::from_millis(ms), &mut world),
            None => sim.run(&mut world),
        };

        let session = world.controller.session();
        info!(topology = %topology, phase = ?session.phase(), events, "切换");
        println!(
            "topology={} elapsed={:.3}s ticks={} legs={} dwells={} reversals={} complete={}",
            topology,
            SimTime(sim.now().0 - started_at.0).as_secs_f64(),
            world.stats.ticks,
            world.stats.legs,
            world.stats.dwells,
            world.stats.reversals,
            session.is_complete()
        );
    }

    ExitCode::SUCCESS
}
