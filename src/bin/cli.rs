// src/bin/cli.rs
use dnd_scrape::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let summary = cli::run()?;
    eprintln!(
        "Wrote {} records to {} file(s), {} skipped.",
        summary.records_written,
        summary.files_written.len(),
        summary.skipped
    );
    for path in &summary.files_written {
        println!("{}", path.display());
    }
    Ok(())
}
