use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct ProgramArguments {
    /// Output parameters as they are tokenized
    #[arg(short, long, default_value = "false")]
    pub dump_tokens: bool,

    /// Job arguments, e.g. `-- --input a.csv --execution-mode batch`
    #[arg(last = true)]
    pub job_args: Vec<String>,
}

pub fn parse_args() -> ProgramArguments {
    ProgramArguments::parse()
}
