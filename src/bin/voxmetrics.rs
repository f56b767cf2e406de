//! voxmetrics - Voxfor Key-Exchange Metrics server and CLI

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::net::IpAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use voxfor_kex_metrics::bench::{self, ecdh, pqc_sim, rsa2048};
use voxfor_kex_metrics::server::{self, ServerConfig, DEFAULT_PORT};
use voxfor_kex_metrics::Error;

#[derive(Parser)]
#[command(name = "voxmetrics")]
#[command(about = "Voxfor Key-Exchange Benchmark Dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the dashboard and metrics endpoints
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        bind: IpAddr,

        /// Port to listen on
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Directory served under /static
        #[arg(long, default_value = "static")]
        static_dir: PathBuf,

        /// Landing page served at /
        #[arg(long, default_value = "static/index.html")]
        index: PathBuf,
    },

    /// Run one benchmark and print its record as JSON
    Run {
        /// Which benchmark
        #[arg(value_enum)]
        algorithm: Algorithm,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Show version information
    Version,
}

#[derive(Clone, Copy, ValueEnum)]
enum Algorithm {
    Pqc,
    PqcHybrid,
    Rsa,
    Ecdh,
    All,
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, Error> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

fn run_benchmark(algorithm: Algorithm, pretty: bool) -> Result<String, Error> {
    match algorithm {
        Algorithm::Pqc => to_json(&pqc_sim::run()?, pretty),
        Algorithm::PqcHybrid => to_json(&pqc_sim::run_hybrid()?, pretty),
        Algorithm::Rsa => to_json(&rsa2048::run()?, pretty),
        Algorithm::Ecdh => to_json(&ecdh::run()?, pretty),
        Algorithm::All => to_json(&bench::run_all()?, pretty),
    }
}

fn serve(config: ServerConfig) -> Result<(), Error> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(server::serve(config))
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { bind, port, static_dir, index } => {
            println!("{}", "Voxfor key-exchange metrics".green().bold());
            println!("   Dashboard: http://{}:{}/", bind, port);
            serve(ServerConfig {
                bind_addr: bind,
                port,
                static_dir,
                index_file: index,
            })
        }

        Commands::Run { algorithm, pretty } => {
            run_benchmark(algorithm, pretty).map(|json| println!("{}", json))
        }

        Commands::Version => {
            println!("voxmetrics v{}", voxfor_kex_metrics::VERSION);
            println!("Voxfor Key-Exchange Metrics");
            println!("\nBenchmarks:");
            println!("  • CRYSTALS-Kyber: simulated KEM (post-quantum sizes)");
            println!("  • RSA-2048: OAEP-SHA256 encryption");
            println!("  • X25519: elliptic-curve Diffie-Hellman");
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
