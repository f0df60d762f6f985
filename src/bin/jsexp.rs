use anyhow::Result;
use clap::Parser;

use jsexp::cli::args::CliArgs;
use jsexp::cli::driver;

fn main() -> Result<()> {
    // Initialize tracing if JSEXP_LOG or RUST_LOG is set (zero cost otherwise).
    jsexp::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let output = driver::run(&args)?;
    println!("{output}");
    Ok(())
}
