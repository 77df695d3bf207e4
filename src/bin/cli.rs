//! FlowMark 命令行工具
//!
//! 构建流网络（内置场景或 JSON 文件），从源点执行标记并输出结果

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use flowmark::cli::{PrintMode, Printer};
use flowmark::scenario::{self, ScenarioSpec};
use flowmark::{trace_path, MarkingConfig, MarkingEngine, NodeId, TraversalOrder};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "flowmark-cli")]
#[command(about = "FlowMark 残余图标记工具")]
#[command(version = flowmark::VERSION)]
struct Args {
    /// 内置场景: first, second, third, all
    #[arg(short, long, default_value = "all")]
    scenario: String,

    /// 从 JSON 文件读取场景（优先于 --scenario）
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// 标记引擎配置文件（JSON）
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 覆盖场景中的源点
    #[arg(long)]
    source: Option<i64>,

    /// 标记后回溯到该节点的增广路径
    #[arg(long)]
    sink: Option<i64>,

    /// 遍历顺序: dfs, bfs（覆盖配置文件）
    #[arg(short, long)]
    order: Option<TraversalOrder>,

    /// 输出格式: table, plain, json
    #[arg(long, default_value = "table")]
    format: PrintMode,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "flowmark=debug" } else { "flowmark=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = match &args.config {
        Some(path) => MarkingConfig::load(path)
            .with_context(|| format!("无法读取配置文件 {:?}", path))?,
        None => MarkingConfig::default(),
    };
    if let Some(order) = args.order {
        config.order = order;
    }

    let scenarios = match &args.file {
        Some(path) => vec![ScenarioSpec::load(path)
            .with_context(|| format!("无法读取场景文件 {:?}", path))?],
        None if args.scenario.eq_ignore_ascii_case("all") => scenario::all_builtin(),
        None => vec![scenario::builtin(&args.scenario)?],
    };

    let engine = MarkingEngine::new(config);
    let printer = Printer::new(args.format);

    for spec in &scenarios {
        run_scenario(&engine, &printer, spec, &args)
            .with_context(|| format!("场景 {} 执行失败", spec.name))?;
    }

    Ok(())
}

fn run_scenario(
    engine: &MarkingEngine,
    printer: &Printer,
    spec: &ScenarioSpec,
    args: &Args,
) -> anyhow::Result<()> {
    let banner = printer.mode() != PrintMode::Json;
    if banner {
        println!("{}", format!("-- {} --", spec.name.to_uppercase()).bold());
    }

    let mut network = spec.build()?;
    let source = NodeId::new(args.source.unwrap_or(spec.source));

    if banner {
        println!("{}", printer.print_snapshot(&network.snapshot())?);
        println!("{}", "~ Marking graph ~".cyan());
    }

    let report = engine.mark_from(&mut network, source)?;
    println!("{}", printer.print_report(&report)?);
    println!("{}", printer.print_nodes(&network.node_records())?);

    if let Some(sink) = args.sink {
        match trace_path(&network, sink) {
            Ok(path) => {
                print!("{}", printer.print_path(&path)?);
                if let Some(b) = path.bottleneck(&network) {
                    println!("bottleneck: {}", b);
                }
            }
            Err(e) => println!("{}", format!("无增广路径: {}", e).yellow()),
        }
    }

    if banner {
        println!("{}\n", format!("-- END OF {} --", spec.name.to_uppercase()).bold());
    }
    Ok(())
}
