use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use affine_core::VERSION;

/// Affine - recover an affine cipher key from the encryption of "ABC" and decrypt a secret
#[derive(Parser)]
#[command(name = "affine")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Arguments used when no subcommand is given (same as `solve`)
    #[command(flatten)]
    pub solve: SolveArgs,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Output format selectable with `--format` or the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Plain,
    Pretty,
}

/// Arguments for the `solve` command
#[derive(Args)]
pub struct SolveArgs {
    /// Encrypted secret to decrypt
    #[arg(long, env = "AFFINE_SECRET")]
    pub secret: Option<String>,

    /// Ciphertext produced by encrypting "ABC"
    #[arg(long, env = "AFFINE_SAMPLE")]
    pub sample: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `encrypt` command
#[derive(Args)]
pub struct EncryptArgs {
    /// Multiplier (must be coprime to 26)
    #[arg(short, long)]
    pub a: u32,

    /// Shift
    #[arg(short, long)]
    pub b: u32,

    /// Text to encrypt
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for the `inverse` command
#[derive(Args)]
pub struct InverseArgs {
    /// Value to invert
    #[arg(value_name = "A")]
    pub value: u32,

    /// Modulus
    #[arg(short, long, default_value_t = 26)]
    pub modulus: u32,
}

/// Arguments for the `config` command
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Print the config file location
    Path,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recover the key from the encryption of "ABC" and decrypt the secret
    Solve(SolveArgs),

    /// Encrypt text with a known key
    Encrypt(EncryptArgs),

    /// Compute a modular inverse
    Inverse(InverseArgs),

    /// Inspect or create the config file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
