use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;

use magick_root::{
    inspect, Cli, InstallationGuide, LocateError, Located, Locator, LocatorConfig, Strategy,
    SystemHost,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(LocatorConfig::default_log_filter(cli.verbose)),
    )
    .init();

    let config = LocatorConfig::default();
    let mut stderr = io::stderr().lock();

    match run(&cli, &config, &mut stderr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(e, &mut stderr),
    }
}

/// Explains a failed run on `out`. Total resolution failure gets the install guide.
fn report(err: LocateError, out: &mut dyn Write) -> ExitCode {
    let _ = match err {
        LocateError::NotFound => InstallationGuide::imagemagick_windows().render(out),
        e => writeln!(out, "ERROR: {}", e),
    };
    ExitCode::FAILURE
}

fn run(cli: &Cli, config: &LocatorConfig, trace: &mut dyn Write) -> Result<(), LocateError> {
    let located = match &cli.check {
        Some(dir) => {
            let dir = std::path::absolute(dir)?;
            let installation =
                inspect(&dir, config, trace).ok_or_else(|| LocateError::Invalid(dir.clone()))?;
            Located {
                root: dir,
                strategy: Strategy::Explicit,
                installation,
            }
        }
        None => {
            let host = SystemHost::new()?;
            Locator::new(&host, config).locate(trace)?
        }
    };

    emit(&located, cli.json)
}

// The caller consumes stdout verbatim, so no trailing newline.
fn emit(located: &Located, json: bool) -> Result<(), LocateError> {
    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer(&mut stdout, located)?;
    } else {
        write!(stdout, "{}", located.root.display())?;
    }
    stdout.flush()?;
    Ok(())
}
