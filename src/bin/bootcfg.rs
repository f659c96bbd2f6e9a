// CLASSIFICATION: COMMUNITY
// Filename: bootcfg.rs v0.2
// Author: Lukas Bower
// Date Modified: 2027-09-02

//! Inspect early-boot configuration from the shell.

use std::path::{Path, PathBuf};

use anyhow::Context;
use bootcfg::parser::{parse_cmdline, BootconfigPairs};
use bootcfg::{BootConfig, BootEnv, BootPaths, HostEnv};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(about = "Boot configuration lookup")]
struct Cli {
    /// TOML file overriding source paths
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Resolve a bare key (e.g. `serialno`) across all sources
    Get {
        key: String,
        /// Print the source that answered
        #[arg(long)]
        source: bool,
    },
    /// Print the device-tree parameter directory
    DtDir,
    /// Dump the tokenized kernel command line
    Cmdline {
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Dump the parsed bootconfig
    Bootconfig {
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn read_source(env: &HostEnv, path: &Path) -> anyhow::Result<String> {
    env.read_file_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let paths = match &cli.config {
        Some(path) => BootPaths::from_toml_file(path)?,
        None => BootPaths::default(),
    };
    let cfg = BootConfig::with_paths(HostEnv::from_paths(&paths), paths);

    match cli.cmd {
        Cmd::Get { key, source } => match cfg.resolve(&key) {
            Some(r) if source => println!("{}\t{}", r.source, r.value),
            Some(r) => println!("{}", r.value),
            None => {
                eprintln!("bootcfg: {key} not found");
                std::process::exit(1);
            }
        },
        Cmd::DtDir => println!("{}", cfg.android_dt_dir()),
        Cmd::Cmdline { file } => {
            let path = file.unwrap_or_else(|| cfg.paths().cmdline.clone());
            let text = read_source(cfg.env(), &path)?;
            for pair in parse_cmdline(text.strip_suffix('\n').unwrap_or(&text)) {
                println!("{pair}");
            }
        }
        Cmd::Bootconfig { file } => {
            let path = file.unwrap_or_else(|| cfg.paths().bootconfig.clone());
            let text = read_source(cfg.env(), &path)?;
            for pair in BootconfigPairs::new(&text) {
                println!("{pair}");
            }
        }
    }
    Ok(())
}
