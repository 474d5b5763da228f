use std::path::PathBuf;

use clap::Parser;

use kepgen::cli;
use kepgen::logger;

#[derive(Parser, Debug)]
#[command(
    name = "kepgen",
    about = "Generator of consolidated polling tags for KepServerEX6 + IoT Gateway"
)]
struct Args {
    /// Step7 (Symbols.asc) or TIA Portal (PLCTags.sdf) symbol table filename (input).
    #[arg(short, long)]
    symbols: Option<PathBuf>,

    /// WinCCflexible (Tags.csv) HMI Tags table filename (input).
    #[arg(short, long)]
    tags: Option<PathBuf>,

    /// WinCCflexible (Alarms.csv) alarms table filename (input).
    #[arg(short, long)]
    alarms: Option<PathBuf>,

    /// PLC Tags filename (output).
    #[arg(short, long, default_value = "plc.csv")]
    plc_out: PathBuf,

    /// IoT Gateway Tags filename (output).
    #[arg(short, long, default_value = "iot.csv")]
    iot_out: PathBuf,

    /// Connection description.
    #[arg(short, long, default_value = "SiemensTCPIP.PLC")]
    connection: String,

    /// Block size in [bytes].
    #[arg(short, long, default_value_t = 8)]
    block_size: usize,

    /// Frequency of polling in [ms].
    #[arg(short = 'f', long, default_value_t = 100)]
    poll_freq: u32,

    /// Turn on verbose logging.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

pub fn main() -> Result<(), String> {
    let args = Args::parse();

    logger::configure(args.verbose)?;

    cli::convert(cli::Options {
        symbols: args.symbols,
        tags: args.tags,
        alarms: args.alarms,
        plc_out: args.plc_out,
        iot_out: args.iot_out,
        connection: args.connection,
        block_size: args.block_size,
        poll_freq: args.poll_freq,
    })
}
