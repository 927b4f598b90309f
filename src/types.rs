use serde::Serialize;
use std::path::PathBuf;

/// Which lookup produced a root. Variants are listed in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Registry,
    Environment,
    ProgramFiles,
    LegacyPath,
    /// Directory given explicitly with `--check`.
    Explicit,
}

/// The parts of a validated root that a build needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Installation {
    pub include_dir: PathBuf,
    pub lib_dir: PathBuf,
    /// Subset of the configured library names present in `lib_dir`, in configured order.
    pub libraries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Located {
    pub root: PathBuf,
    pub strategy: Strategy,
    #[serde(flatten)]
    pub installation: Installation,
}
