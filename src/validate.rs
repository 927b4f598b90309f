use std::fs;
use std::io::Write;
use std::path::Path;

use crate::config::LocatorConfig;
use crate::types::Installation;

/// Returns true when `path` holds the MagickWand header and at least one core library.
///
/// Every rejection is explained on `trace`.
pub fn validate(path: &Path, config: &LocatorConfig, trace: &mut dyn Write) -> bool {
    inspect(path, config, trace).is_some()
}

/// Like [`validate`], but hands back the directories and libraries that were found.
pub fn inspect(path: &Path, config: &LocatorConfig, trace: &mut dyn Write) -> Option<Installation> {
    if !path.is_dir() {
        note(trace, format_args!("  Not a directory: {}", path.display()));
        return None;
    }

    let include_dir = path.join(&config.include_dir);
    let header = config
        .header_subpath
        .iter()
        .fold(include_dir.clone(), |acc, part| acc.join(part));
    if !header.exists() {
        note(trace, format_args!("  Header not found: {}", header.display()));
        if include_dir.exists() {
            note(
                trace,
                format_args!(
                    "  Contents of {}: {}",
                    include_dir.display(),
                    list_dir(&include_dir)
                ),
            );
        }
        return None;
    }

    let lib_dir = path.join(&config.lib_dir);
    if !lib_dir.is_dir() {
        note(trace, format_args!("  Lib directory not found: {}", lib_dir.display()));
        return None;
    }

    let libraries: Vec<String> = config
        .library_names
        .iter()
        .filter(|name| lib_dir.join(name).exists())
        .cloned()
        .collect();

    if libraries.is_empty() {
        note(trace, format_args!("  No required libs found in {}", lib_dir.display()));
        let contents = if lib_dir.exists() {
            list_dir(&lib_dir)
        } else {
            "N/A".to_string()
        };
        note(trace, format_args!("  Contents: {}", contents));
        return None;
    }

    Some(Installation {
        include_dir,
        lib_dir,
        libraries,
    })
}

// Trace output is best effort; a closed stderr must not change the verdict.
fn note(trace: &mut dyn Write, line: std::fmt::Arguments<'_>) {
    let _ = writeln!(trace, "{}", line);
}

fn list_dir(dir: &Path) -> String {
    match fs::read_dir(dir) {
        Ok(entries) => {
            let mut names: Vec<String> = entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect();
            names.sort();
            format!("[{}]", names.join(", "))
        }
        Err(e) => format!("<unreadable: {}>", e),
    }
}
