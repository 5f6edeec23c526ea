// ==========================================
// 三明治摊位 - 命令行入口
// ==========================================
// 子命令:
//   run   (默认) 录入销量 → 剩余量 → 备货预测
//   init  写表头与初始库存
//   show  查看某张表最后几行
// ==========================================

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use love_sandwiches::app::{initialize_ledger, parse_headings, show_table, SessionRunner};
use love_sandwiches::config::AppConfig;
use love_sandwiches::ledger::{open_ledger, LedgerBackend};
use love_sandwiches::logging::{self, LogFormat};
use love_sandwiches::{LedgerTable, WELCOME_BANNER};

#[derive(Debug, Parser)]
#[command(name = "love-sandwiches", version, about = "Sandwich stall sales entry and stock forecasting")]
struct Cli {
    /// JSON 配置文件
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 账本位置（SQLite 文件或 CSV 目录）
    #[arg(long, global = true)]
    ledger: Option<PathBuf>,

    /// 账本后端: sqlite | csv
    #[arg(long, global = true)]
    backend: Option<LedgerBackend>,

    /// 以 JSON 输出日志
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Enter today's sales, record surplus and forecast tomorrow's stock
    Run,

    /// Write table headers (and optionally an initial stock row) to a fresh ledger
    Init {
        /// Six comma separated item names
        #[arg(long)]
        headings: String,

        /// Six comma separated initial stock figures
        #[arg(long)]
        stock: Option<String>,
    },

    /// Print the last rows of a table
    Show {
        /// sales | surplus | stock
        table: LedgerTable,

        #[arg(long, default_value_t = 5)]
        last: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> anyhow::Result<()> {
    let mut config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(path) = cli.ledger {
        config.ledger_path = Some(path);
    }
    if let Some(backend) = cli.backend {
        config.backend = backend;
    }

    let format = if cli.json_logs { LogFormat::Json } else { LogFormat::Text };
    logging::init(&config.log_level, format);
    tracing::debug!(?config, "configuration loaded");

    let path = config.resolved_ledger_path();
    let mut ledger = open_ledger(config.backend, &path)
        .with_context(|| format!("failed to open ledger at {}", path.display()))?;

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            println!("{}", WELCOME_BANNER);
            let mut input = io::stdin().lock();
            let mut output = io::stdout().lock();

            let report = SessionRunner::from_config(ledger.as_mut(), &config)
                .run(&mut input, &mut output)
                .context("run aborted")?;
            tracing::debug!(report = %serde_json::to_string(&report)?, "session report");
        }
        Command::Init { headings, stock } => {
            let headings = parse_headings(&headings)?;
            let summary = initialize_ledger(ledger.as_mut(), &headings, stock.as_deref())?;
            println!(
                "Ledger ready at {} (headers written: {}, initial stock: {})",
                path.display(),
                summary.headers_written.len(),
                if summary.stock_seeded { "yes" } else { "no" }
            );
        }
        Command::Show { table, last } => {
            let mut output = io::stdout().lock();
            show_table(ledger.as_ref(), table, last, &mut output)?;
        }
    }

    Ok(())
}
