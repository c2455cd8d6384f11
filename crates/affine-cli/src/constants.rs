//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, also used by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Config file could not be read, parsed or written.
    pub const CONFIG: i32 = 3;

    /// Invalid user input (short sample, bad symbol, missing values).
    pub const INVALID_INPUT: i32 = 4;

    /// The multiplier has no inverse, so nothing can be decrypted.
    pub const NOT_INVERTIBLE: i32 = 5;
}

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "AFFINE_CONFIG";

/// Directory name under the XDG config home.
pub const APP_DIR: &str = "affine";
