use anyhow::Context;
use log::debug;
use std::io::{self, BufWriter};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());
    let executed =
        maxpq::command::run(stdin.lock(), &mut output).context("failed to run command stream")?;
    debug!("done: {} commands", executed);
    Ok(())
}
