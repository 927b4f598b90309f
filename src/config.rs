use clap::Parser;
use std::path::PathBuf;

/// Registry keys (under `HKEY_LOCAL_MACHINE`) the installer writes `BinPath` to.
pub const REGISTRY_KEYS: [&str; 2] = [
    r"SOFTWARE\ImageMagick\Current",
    r"SOFTWARE\WOW6432Node\ImageMagick\Current",
];
pub const REGISTRY_VALUE: &str = "BinPath";

pub const HOME_ENV_VAR: &str = "MAGICK_HOME";

pub const PROGRAM_FILES_ENV_VAR: &str = "ProgramFiles";
pub const PROGRAM_FILES_FALLBACK: &str = r"C:\Program Files";
pub const INSTALL_DIR_PREFIX: &str = "ImageMagick-7";

/// Default install locations of past releases, tried after the program-files scan.
pub const LEGACY_PATHS: [&str; 4] = [
    r"C:\Program Files\ImageMagick-7.1.1-Q16-HDRI",
    r"C:\Program Files\ImageMagick-7.1.0-Q16-HDRI",
    r"C:\Program Files\ImageMagick-7.0.11-Q16-HDRI",
    r"C:\ImageMagick",
];

pub const INCLUDE_DIR: &str = "include";
pub const HEADER_SUBPATH: [&str; 2] = ["MagickWand", "MagickWand.h"];
pub const LIB_DIR: &str = "lib";

// MSVC import library names; override `LocatorConfig::library_names` for other toolchains.
pub const LIBRARY_NAMES: [&str; 3] = [
    "CORE_RL_MagickCore_.lib",
    "CORE_RL_MagickWand_.lib",
    "CORE_RL_wand_.lib",
];

#[derive(Parser, Debug, Default)]
#[command(
    name = "magick-root",
    version,
    about = "Print the root directory of the installed ImageMagick development files"
)]
pub struct Cli {
    /// Print a JSON report instead of the bare path
    #[arg(long)]
    pub json: bool,
    /// Only validate the given directory and print it when it is a usable install
    #[arg(long, value_name = "DIR")]
    pub check: Option<PathBuf>,
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Everything the locator consults, with defaults matching a stock Windows install.
#[derive(Debug, Clone)]
pub struct LocatorConfig {
    pub registry_keys: Vec<String>,
    pub registry_value: String,
    pub home_env_var: String,
    pub program_files_env_var: String,
    pub program_files_fallback: PathBuf,
    pub install_dir_prefix: String,
    pub legacy_paths: Vec<PathBuf>,
    pub include_dir: String,
    pub header_subpath: Vec<String>,
    pub lib_dir: String,
    pub library_names: Vec<String>,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        LocatorConfig {
            registry_keys: REGISTRY_KEYS.iter().map(|k| k.to_string()).collect(),
            registry_value: REGISTRY_VALUE.to_string(),
            home_env_var: HOME_ENV_VAR.to_string(),
            program_files_env_var: PROGRAM_FILES_ENV_VAR.to_string(),
            program_files_fallback: PathBuf::from(PROGRAM_FILES_FALLBACK),
            install_dir_prefix: INSTALL_DIR_PREFIX.to_string(),
            legacy_paths: LEGACY_PATHS.iter().map(PathBuf::from).collect(),
            include_dir: INCLUDE_DIR.to_string(),
            header_subpath: HEADER_SUBPATH.iter().map(|s| s.to_string()).collect(),
            lib_dir: LIB_DIR.to_string(),
            library_names: LIBRARY_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl LocatorConfig {
    /// Log filter used when `RUST_LOG` is unset.
    pub fn default_log_filter(verbose: bool) -> &'static str {
        if verbose { "debug" } else { "warn" }
    }
}
