//! `record-bench` times positioned, buffered, and memory-mapped record I/O.

pub(crate) mod args;
pub(crate) mod verbose;

use std::process;

use anyhow::Result;
use args::Args;
use clap::Parser;
use record_bench::{Benchmark, ExitCode, Output};
use verbose::Verbose;

fn main() -> process::ExitCode {
    match run() {
        Ok(()) => ExitCode::Success.into(),
        Err(err) => {
            // clap renders help and version on stdout and usage errors on
            // stderr itself.
            if let Some(clap_err) = err.downcast_ref::<clap::Error>() {
                let _print = clap_err.print();
                return ExitCode::from(clap_err).into();
            }

            eprintln!("record-bench: {err:#}");
            ExitCode::from(&err).into()
        }
    }
}

fn run() -> Result<()> {
    let args = Args::try_parse()?;
    let benchmark = Benchmark::new(args.to_config())?;

    if args.verbose {
        Verbose::default().log(benchmark.config())?;
    }

    let mut output = Output::new(args.output.as_deref())?;
    benchmark.run(&mut output)
}
