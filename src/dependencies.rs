use std::io::{self, Write};

use crate::config::HOME_ENV_VAR;

pub const CHOCOLATEY_COMMAND: &str =
    "choco install imagemagick.app -PackageParameters InstallDevelopmentHeaders=true";
pub const DOWNLOAD_URL: &str = "https://imagemagick.org/script/download.php#windows";

#[derive(Debug, Clone)]
pub struct DependencyInfo {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone)]
pub struct InstallationGuide {
    pub dependency: DependencyInfo,
    pub platform: &'static str,
    pub package_command: &'static str,
    pub download_url: &'static str,
    pub installer_options: Vec<&'static str>,
    pub override_command: String,
    pub help_reference: &'static str,
}

impl InstallationGuide {
    /// How to get ImageMagick with its C headers and import libraries onto a Windows host.
    pub fn imagemagick_windows() -> Self {
        InstallationGuide {
            dependency: DependencyInfo {
                name: "ImageMagick",
                description: "ImageMagick with development headers",
            },
            platform: "Windows",
            package_command: CHOCOLATEY_COMMAND,
            download_url: DOWNLOAD_URL,
            installer_options: vec!["[x] Install development headers and libraries for C and C++"],
            override_command: format!(r#"setx {} "C:\Path\To\ImageMagick""#, HOME_ENV_VAR),
            help_reference: "docs/TROUBLESHOOTING.md",
        }
    }

    /// Writes the remediation block shown when no installation could be found.
    pub fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{} installation not found.", self.dependency.name)?;
        writeln!(out)?;
        writeln!(out, "Please install {}:", self.dependency.description)?;
        writeln!(out)?;
        writeln!(out, "  Using Chocolatey (Recommended):")?;
        writeln!(out, "    {}", self.package_command)?;
        writeln!(out)?;
        writeln!(out, "  Or download from:")?;
        writeln!(out, "    {}", self.download_url)?;
        writeln!(out)?;
        if !self.installer_options.is_empty() {
            writeln!(out, "  During installation, ensure you select:")?;
            for option in &self.installer_options {
                writeln!(out, "    {}", option)?;
            }
            writeln!(out)?;
        }
        writeln!(
            out,
            "  If {} is installed in a custom location, set {}:",
            self.dependency.name, HOME_ENV_VAR
        )?;
        writeln!(out, "    {}", self.override_command)?;
        writeln!(out)?;
        writeln!(out, "For more help, see: {}", self.help_reference)?;
        Ok(())
    }
}
