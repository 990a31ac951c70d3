#![cfg_attr(test, allow(unused_crate_dependencies))]

use clap::crate_version;
use tokio::runtime;

mod args;
mod commands;
mod logging;

fn main() -> anyhow::Result<()> {
    let args = args::parse();
    logging::init(&args);

    let config = args.config()?;
    let registry = args.class_registry()?;

    let runtime = runtime::Builder::new_current_thread().build()?;

    let output = runtime.block_on(async {
        tracing::debug!("headless {}", crate_version!());

        commands::run(&args.command, config, &registry).await
    })?;

    println!("{output}");

    Ok(())
}
