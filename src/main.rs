#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

use anyhow::Result;
use clap::Parser;

mod assets;
mod cli;
mod codec;
mod config;
mod constants;
mod ctx;
mod endpoint;
mod errors;
mod navigation;
mod remote;
mod session;
mod settings;
mod site;
mod subcommands;

#[tokio::main]
async fn main() -> Result<()> {
    cli::Cli::parse().run().await
}
