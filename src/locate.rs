use std::cmp::Ordering;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::LocatorConfig;
use crate::error::LocateError;
use crate::host::Host;
use crate::types::{Located, Strategy};
use crate::validate::inspect;

/// Runs the lookup strategies in order: registry, environment variable, filesystem scan.
pub struct Locator<'a, H: Host> {
    host: &'a H,
    config: &'a LocatorConfig,
}

impl<'a, H: Host> Locator<'a, H> {
    pub fn new(host: &'a H, config: &'a LocatorConfig) -> Self {
        Locator { host, config }
    }

    /// First validated root wins. `trace` receives the per-candidate diagnostics.
    pub fn locate(&self, trace: &mut dyn Write) -> Result<Located, LocateError> {
        if let Some(found) = self.from_registry(trace) {
            return Ok(found);
        }
        if let Some(found) = self.from_environment(trace) {
            return Ok(found);
        }
        if let Some(found) = self.from_program_files(trace) {
            return Ok(found);
        }
        if let Some(found) = self.from_legacy_paths(trace) {
            return Ok(found);
        }
        Err(LocateError::NotFound)
    }

    fn from_registry(&self, trace: &mut dyn Write) -> Option<Located> {
        for key in &self.config.registry_keys {
            let Some(bin_path) = self.host.registry_value(key, &self.config.registry_value) else {
                log::debug!("no {} under HKLM\\{}", self.config.registry_value, key);
                continue;
            };
            let root = root_from_bin_path(&bin_path);
            log::debug!("registry {} -> {}", bin_path, root.display());
            if let Some(found) = self.attempt(root, Strategy::Registry, trace) {
                return Some(found);
            }
        }
        None
    }

    fn from_environment(&self, trace: &mut dyn Write) -> Option<Located> {
        let var = &self.config.home_env_var;
        let root = PathBuf::from(self.host.env_var(var)?);
        let _ = writeln!(trace, "Checking {}: {}", var, root.display());
        let found = self.attempt(root.clone(), Strategy::Environment, trace);
        if found.is_none() {
            let _ = writeln!(trace, "{} validation failed for: {}", var, root.display());
        }
        found
    }

    fn from_program_files(&self, trace: &mut dyn Write) -> Option<Located> {
        let program_files = self
            .host
            .env_var(&self.config.program_files_env_var)
            .map(PathBuf::from)
            .unwrap_or_else(|| self.config.program_files_fallback.clone());

        for candidate in scan_install_dir(&program_files, &self.config.install_dir_prefix) {
            if let Some(found) = self.attempt(candidate, Strategy::ProgramFiles, trace) {
                return Some(found);
            }
        }
        None
    }

    fn from_legacy_paths(&self, trace: &mut dyn Write) -> Option<Located> {
        self.config
            .legacy_paths
            .iter()
            .find_map(|path| self.attempt(path.clone(), Strategy::LegacyPath, trace))
    }

    fn attempt(&self, root: PathBuf, strategy: Strategy, trace: &mut dyn Write) -> Option<Located> {
        let installation = inspect(&root, self.config, trace)?;
        log::info!("found ImageMagick via {:?} at {}", strategy, root.display());
        Some(Located {
            root,
            strategy,
            installation,
        })
    }
}

/// Entries of `dir` whose name starts with `prefix`, highest version first.
///
/// An unreadable or missing directory yields nothing.
pub fn scan_install_dir(dir: &Path, prefix: &str) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("skipping scan of {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.starts_with(prefix))
        .collect();
    names.sort_unstable_by(|a, b| version_cmp(b, a));
    names.into_iter().map(|name| dir.join(name)).collect()
}

/// Orders names with runs of digits compared as numbers, so `7.10.0` sorts after `7.9.0`.
fn version_cmp(a: &str, b: &str) -> Ordering {
    let (mut a, mut b) = (a, b);
    loop {
        match (a.chars().next(), b.chars().next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let (num_a, rest_a) = split_digits(a);
                let (num_b, rest_b) = split_digits(b);
                let trimmed_a = num_a.trim_start_matches('0');
                let trimmed_b = num_b.trim_start_matches('0');
                let ord = trimmed_a
                    .len()
                    .cmp(&trimmed_b.len())
                    .then_with(|| trimmed_a.cmp(trimmed_b))
                    .then_with(|| num_a.len().cmp(&num_b.len()));
                if ord != Ordering::Equal {
                    return ord;
                }
                a = rest_a;
                b = rest_b;
            }
            (Some(x), Some(y)) => {
                if x != y {
                    return x.cmp(&y);
                }
                a = &a[x.len_utf8()..];
                b = &b[y.len_utf8()..];
            }
        }
    }
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

/// Parent of a `BinPath` value, with Windows separators honoured on every host.
pub fn root_from_bin_path(bin_path: &str) -> PathBuf {
    let is_sep = |c: char| c == '\\' || c == '/';
    let trimmed = bin_path.trim_end_matches(is_sep);

    let Some(split) = trimmed.rfind(is_sep) else {
        // "C:" or a bare name: nothing above it but the drive itself
        return PathBuf::from(drive_prefix(trimmed));
    };

    let head = trimmed[..split].trim_end_matches(is_sep);
    if head.is_empty() || head.ends_with(':') {
        // keep the root separator: C:\bin -> C:\
        return PathBuf::from(&trimmed[..=split]);
    }
    PathBuf::from(head)
}

fn drive_prefix(s: &str) -> &str {
    match s.find(':') {
        Some(i) => &s[..=i],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bin_path_parent() {
        assert_eq!(root_from_bin_path(r"C:\IM\bin"), PathBuf::from(r"C:\IM"));
        assert_eq!(root_from_bin_path(r"C:\IM\bin\"), PathBuf::from(r"C:\IM"));
        assert_eq!(
            root_from_bin_path(r"C:\Program Files\ImageMagick-7.1.1-Q16-HDRI\"),
            PathBuf::from(r"C:\Program Files")
        );
        assert_eq!(root_from_bin_path("D:/magick/bin"), PathBuf::from("D:/magick"));
    }

    #[test]
    fn bin_path_at_drive_root() {
        assert_eq!(root_from_bin_path(r"C:\bin"), PathBuf::from(r"C:\"));
        assert_eq!(root_from_bin_path("C:"), PathBuf::from("C:"));
        assert_eq!(root_from_bin_path("bin"), PathBuf::from(""));
    }

    #[test]
    fn scan_filters_prefix_and_orders_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "ImageMagick-7.1.0-Q16-HDRI",
            "ImageMagick-6.9.12-Q16",
            "ImageMagick-7.1.1-Q16-HDRI",
            "Git",
        ] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        let found = scan_install_dir(dir.path(), "ImageMagick-7");
        assert_eq!(
            found,
            vec![
                dir.path().join("ImageMagick-7.1.1-Q16-HDRI"),
                dir.path().join("ImageMagick-7.1.0-Q16-HDRI"),
            ]
        );
    }

    #[test]
    fn scan_compares_version_numbers_numerically() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "ImageMagick-7.9.0-Q16",
            "ImageMagick-7.10.0-Q16",
            "ImageMagick-7.1.0-Q16",
        ] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        let found = scan_install_dir(dir.path(), "ImageMagick-7");
        assert_eq!(
            found,
            vec![
                dir.path().join("ImageMagick-7.10.0-Q16"),
                dir.path().join("ImageMagick-7.9.0-Q16"),
                dir.path().join("ImageMagick-7.1.0-Q16"),
            ]
        );
    }

    #[test]
    fn version_cmp_orders_mixed_names() {
        assert_eq!(version_cmp("7.1.1-Q16", "7.1.1-Q16"), Ordering::Equal);
        assert_eq!(version_cmp("7.1.1-Q16", "7.1.1-Q16-HDRI"), Ordering::Less);
        assert_eq!(version_cmp("7.0.11", "7.0.9"), Ordering::Greater);
        assert_eq!(version_cmp("7.1.1-Q8", "7.1.1-Q16"), Ordering::Less);
    }

    #[test]
    fn scan_of_missing_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan_install_dir(&dir.path().join("nope"), "ImageMagick-7").is_empty());
    }
}
