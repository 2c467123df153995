use std::process::ExitCode;

use tracing::info;

use crate::infrastructure::bootstrap::{init_tracing, load_config, run_clean, serve};

/// Entry point of the page server
pub fn run() -> std::io::Result<()> {
    init_tracing();

    let config = load_config()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;

    actix_web::rt::System::new().block_on(serve(config.server))
}

/// Entry point of the clean command; nonzero exit on any failure
pub fn run_clean_command() -> ExitCode {
    init_tracing();

    match run_clean() {
        Ok(report) => {
            info!(
                rows = report.row_count,
                repaired_cells = report.repaired_cells,
                elapsed_ms = report.processing_time_ms,
                "Done, clean file at {}",
                report.output_path.display()
            );
            ExitCode::SUCCESS
        }
        // Already logged by `run_clean`
        Err(_) => ExitCode::FAILURE,
    }
}
