//! Command-line arguments.

use anchor_discriminator::{Discriminator, DEFAULT_NAMESPACE};
use clap::Parser;

/// anchor-disc: Anchor discriminator calculator
#[derive(Parser, Debug)]
#[command(name = "anchor-disc")]
#[command(about = "Compute the 8-byte Anchor discriminator of a namespaced name")]
#[command(version = anchor_discriminator::VERSION)]
pub struct Args {
    /// Instruction or account name
    pub name: String,

    /// Namespace (default: global)
    #[arg(long, default_value = DEFAULT_NAMESPACE)]
    pub ns: String,

    /// Print a JSON object instead of text lines
    #[arg(long)]
    pub json: bool,

    /// Fail with exit status 1 unless the result equals this literal,
    /// e.g. "[0xaf, 0xaf, 0x6d, 0x1f, 0x0d, 0x98, 0x9b, 0xed]"
    #[arg(long, value_name = "LITERAL")]
    pub expect: Option<Discriminator>,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
