use cable_processor::cli::{args::Args, commands};
use clap::Parser;
use std::process;
use tracing_subscriber::filter::LevelFilter;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    init_logging(args.verbose);

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    match commands::run(command) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Route tracing output to stderr so stdout stays clean for reports
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Cable Processor - Diplomatic Cable Archive Converter");
    println!("====================================================");
    println!();
    println!("Convert archives of diplomatic cable messages from delimited CSV");
    println!("records into structured XML documents.");
    println!();
    println!("USAGE:");
    println!("    cable-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    convert     Convert a cable archive from CSV to XML (main command)");
    println!("    validate    Validate CSV files for consistent record shape");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -v, --verbose    Increase log verbosity");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Convert an archive, writing cables.xml next to it:");
    println!("    cable-processor convert cables.csv");
    println!();
    println!("    # Convert to an explicit destination, replacing an existing file:");
    println!("    cable-processor convert cables.csv -o output/cables.xml --overwrite");
    println!();
    println!("    # Validate a drop folder and sort files by outcome:");
    println!("    cable-processor validate ./dropped --success-dir ./success \\");
    println!("                             --failure-dir ./failure");
    println!();
    println!("For detailed help on any command, use:");
    println!("    cable-processor <COMMAND> --help");
}
