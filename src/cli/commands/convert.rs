//! Convert command implementation
//!
//! Runs one CSV-to-XML conversion: parse the archive, report statistics,
//! and write the XML document. A parse halted by a malformed record still
//! writes the partial document and is reported as such.

use colored::Colorize;
use tracing::{debug, info};

use crate::app::services::xml_writer::XmlWriter;
use crate::cli::args::ConvertArgs;
use crate::config::ConversionConfig;
use crate::{CableCsvParser, Result};

/// Run the convert command
pub fn run_convert(args: ConvertArgs) -> Result<()> {
    let config = ConversionConfig::new(args.input, args.output, args.overwrite);
    config.validate()?;
    debug!("Conversion configuration: {:?}", config);

    let parser = CableCsvParser::new();
    let result = parser.parse_file(&config.input_path)?;

    if args.stats_json {
        println!("{}", serde_json::to_string_pretty(&result.stats)?);
    } else {
        print_summary(&result.stats);
    }

    // Partial documents are still serialized; an empty one surfaces the
    // nothing-to-serialize error from the writer.
    XmlWriter::new().write_file(&result.document, config.output())?;

    info!(
        "Conversion finished: {} -> {}",
        config.input_path.display(),
        config.output().display()
    );
    if !args.stats_json {
        println!(
            "{} {} cable(s) written to {}",
            "ok:".green().bold(),
            result.document.len(),
            config.output().display()
        );
    }

    Ok(())
}

fn print_summary(stats: &crate::ParseStats) {
    println!(
        "Parsed {} cable(s) from {} record(s) ({:.1}% of records)",
        stats.cables_parsed,
        stats.records_seen,
        stats.success_rate()
    );

    for warning in &stats.warnings {
        println!("{} {}", "warning:".yellow().bold(), warning);
    }

    if let Some(failure) = &stats.failure {
        println!("{} {}", "error:".red().bold(), failure);
    }
}
