mod options;

use std::process;

use env_logger::{Env, Target};
use jobargs::{ArgConfig, GlobalJobParameters, InvalidArgument, Tokenizer};

use options::ProgramArguments;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .format_timestamp(None)
        .format_target(false)
        .init();

    if let Err(e) = run(&options::parse_args()) {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn run(args: &ProgramArguments) -> Result<(), InvalidArgument> {
    if args.dump_tokens {
        for param in Tokenizer::new(&args.job_args) {
            eprintln!("{param:?}");
        }
    }

    let config = ArgConfig::parse(&args.job_args)?;
    println!("{config}");
    for (key, value) in config.to_map() {
        println!("{key}={value}");
    }
    Ok(())
}
