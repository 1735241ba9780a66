//! 포트폴리오 예측 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 60/40 바스켓의 2년 예측
//! folio forecast -t VTI:0.6 -t BND:0.4 -v 25000 -f 2023-01-01 -g 2027-01-01
//!
//! # 차트 직렬화 형태로 출력
//! folio forecast -t SPY:1.0 -v 10000 -f 2024-01-01 -g 2026-06-01 --charts
//!
//! # 최신 종가 기준 묵시적 보유 수량
//! folio positions -t VTI:0.6 -t BND:0.4 -v 25000
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::error;

use folio_core::{AppConfig, init_logging};

mod commands;

use commands::forecast::{parse_allocation, parse_date, ForecastArgs};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio forecast CLI - 포트폴리오 가치 예측 도구", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 경로
    #[arg(short, long, default_value = "config/default.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 과거 가치 곡선과 몬테카를로 미래 예측 실행
    Forecast {
        /// 배분 (형식: TICKER:WEIGHT, 반복 지정)
        #[arg(short, long = "ticker", required = true)]
        tickers: Vec<String>,

        /// 포트폴리오 총 가치 (달러)
        #[arg(short, long)]
        value: f64,

        /// 과거 조회 시작일 (YYYY-MM-DD)
        #[arg(short = 'f', long)]
        from: String,

        /// 미래 목표일 (YYYY-MM-DD)
        #[arg(short = 'g', long)]
        target: String,

        /// 차트 직렬화 형태로 출력
        #[arg(long, default_value = "false")]
        charts: bool,
    },

    /// 최신 종가 기준 묵시적 보유 수량 조회
    Positions {
        /// 배분 (형식: TICKER:WEIGHT, 반복 지정)
        #[arg(short, long = "ticker", required = true)]
        tickers: Vec<String>,

        /// 포트폴리오 총 가치 (달러)
        #[arg(short, long)]
        value: f64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?;

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let result = match cli.command {
        Commands::Forecast {
            tickers,
            value,
            from,
            target,
            charts,
        } => {
            let allocations = tickers
                .iter()
                .map(|s| parse_allocation(s))
                .collect::<anyhow::Result<Vec<_>>>()?;
            let args = ForecastArgs {
                allocations,
                total_value: value,
                start_date: parse_date(&from)?,
                target_date: parse_date(&target)?,
                charts,
            };
            commands::forecast::run(&config, args).await
        }
        Commands::Positions { tickers, value } => {
            let allocations = tickers
                .iter()
                .map(|s| parse_allocation(s))
                .collect::<anyhow::Result<Vec<_>>>()?;
            commands::positions::run(&config, &allocations, value).await
        }
    };

    if let Err(e) = &result {
        error!("Command failed: {:#}", e);
    }
    result
}
