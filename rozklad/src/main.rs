use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use rozklad::cli::{App, Args, Console, EXIT_FAILURE, Invocation};
use rozklad::logging::{self, LogConfig};
use rozklad::site::{SiteClient, SiteConfig};
use rozklad::timetable::Timetable;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    let invocation = Invocation::from_args(&args);

    let argv0 = std::env::args().next().unwrap_or_else(|| "rozklad".to_string());
    let executable = Path::new(&argv0)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| argv0.clone());

    let log_config = LogConfig {
        debug: invocation.debug,
        ansi: !args.no_color && io::stderr().is_terminal(),
        file: Some(
            args.log_file
                .clone()
                .unwrap_or_else(|| PathBuf::from(format!("{argv0}.log"))),
        ),
    };
    if let Err(e) = logging::init(&log_config) {
        eprintln!("Failed to initialise logging: {e}");
    }

    let site_config = SiteConfig::new()
        .with_base_url(&args.base_url)
        .with_timeout(args.timeout);
    let site = match SiteClient::new(site_config) {
        Ok(site) => site,
        Err(e) => {
            error!("Failed to create HTTP client: {e}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    let console = Console::stdout(!args.no_color && io::stdout().is_terminal());
    let mut app = App::new(executable, Timetable::new(site), console);

    ExitCode::from(app.execute(&invocation).await)
}
