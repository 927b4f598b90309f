//! Finds the ImageMagick development install on a Windows host so native
//! builds can point their include and library search paths at it.

pub mod config;
pub mod dependencies;
pub mod error;
pub mod host;
pub mod locate;
pub mod types;
pub mod validate;

pub use config::{Cli, LocatorConfig};
pub use dependencies::InstallationGuide;
pub use error::LocateError;
pub use host::{Host, SystemHost};
pub use locate::{root_from_bin_path, Locator};
pub use types::{Installation, Located, Strategy};
pub use validate::{inspect, validate};
