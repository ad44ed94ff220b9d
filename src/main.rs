//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use huffzip::compression::compress::compress;
use huffzip::compression::decompress::decompress;
use huffzip::error::HuffError;
use huffzip::tools::cli::{hzopts_init, Mode};

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

fn main() -> Result<(), HuffError> {
    // Available log levels are Error, Warn, Info, Debug, Trace; the -v flag
    // lowers the cap after init.
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .unwrap();

    let options = hzopts_init();

    //----- Figure out what we need to do and go do it
    let result = match options.op_mode() {
        Mode::Zip => compress(&options),
        Mode::Unzip => decompress(&options),
    };

    match &result {
        Ok(()) => info!("Done.\n"),
        Err(err) => error!("{}", err),
    }
    result
}
