//! Command line interface for huffzip.

use std::fmt::{Display, Formatter};

use clap::{ArgGroup, Parser};

/// Zip or Unzip, picked by the required -c / -d flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Command line options.
#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "huffzip, a Huffman coding file compressor.",
    long_about = "\
huffzip compresses a single file with a Huffman prefix code built from the
byte frequencies of the whole input, and restores it losslessly. The
compressed container carries the original file name and the coding tree, so
decompression needs nothing but the container itself.",
    group(ArgGroup::new("mode").required(true).args(&["compress", "decompress"]))
)]
pub struct HzOpts {
    /// Compress INPUT
    #[clap(short = 'c', long = "compress")]
    pub compress: bool,

    /// Decompress INPUT
    #[clap(short = 'd', long = "decompress")]
    pub decompress: bool,

    /// Read/write buffer size in bytes
    #[clap(
        short = 'b',
        long = "buffer-size",
        value_name = "BYTES",
        default_value_t = 4096
    )]
    pub buffer_size: usize,

    /// Verbosity. 0 is silent, 3 shows stage info, 5 is chatty
    #[clap(short = 'v', long = "verbose", value_name = "LEVEL", default_value_t = 3)]
    pub verbose: u8,

    /// File to process
    #[clap(value_name = "INPUT")]
    pub input: String,

    /// Where to write the result; derived from INPUT when omitted
    #[clap(value_name = "OUTPUT")]
    pub output: Option<String>,
}

impl HzOpts {
    pub fn op_mode(&self) -> Mode {
        if self.decompress {
            Mode::Unzip
        } else {
            Mode::Zip
        }
    }
}

/// Parse the command line and set the log level from the verbosity flag.
pub fn hzopts_init() -> HzOpts {
    let opts = HzOpts::parse();
    match opts.verbose {
        0 => log::set_max_level(log::LevelFilter::Off),
        1 => log::set_max_level(log::LevelFilter::Error),
        2 => log::set_max_level(log::LevelFilter::Warn),
        3 => log::set_max_level(log::LevelFilter::Info),
        4 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    };
    opts
}
