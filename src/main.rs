use anyhow::Result;
use clap::Parser;
use log::info;

use facescan::config::Opts;
use facescan::{FaceCascade, cli};

fn main() -> Result<()> {
    env_logger::init();

    let opts = Opts::parse();

    // 分类器缺失是致命错误，其余错误只打断单次操作
    let cascade = FaceCascade::load(&opts.cascade)?;
    info!("cascade loaded from {}", opts.cascade.display());

    cli::run(&opts, cascade)
}
