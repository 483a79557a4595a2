//! Sheetload CLI - Convert collection sheets to resource records
//!
//! # Main Commands
//!
//! ```bash
//! sheetload convert sheet.csv                # Resource records as JSON on stdout
//! sheetload convert sheet.csv -o out.json    # ... or into a file
//! sheetload types                            # Declared import types
//! ```
//!
//! # Debug Commands
//!
//! ```bash
//! sheetload parse sheet.csv     # Named fields of every collection row
//! sheetload columns             # Positional column schema
//! ```

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use sheetload::logs::{log_error, log_info, log_success, LOG_BROADCASTER};
use sheetload::{
    lookup, parse_row, parse_sheet_file, BasicResourceConverter, Column, ConvertOptions,
    JsonFileSink, JsonWriterSink, BASIC_RESOURCE_TYPE,
};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sheetload")]
#[command(about = "Convert collection sheet CSVs to ArchivesSpace resource records", long_about = None)]
struct Cli {
    /// Suppress progress output on stderr
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a collection sheet to resource records
    Convert {
        /// Input CSV file
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Import type
        #[arg(short = 't', long = "type", default_value = BASIC_RESOURCE_TYPE)]
        import_type: String,

        /// Repository used in import references
        #[arg(long)]
        repository_id: Option<u32>,

        /// Rights statement start date, YYYY-MM-DD (default: today)
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// CSV delimiter (auto-detect if not specified)
        #[arg(short, long)]
        delimiter: Option<char>,
    },

    /// Parse a collection sheet and output the named fields of each row
    Parse {
        /// Input CSV file
        input: PathBuf,

        /// CSV delimiter (auto-detect if not specified)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List declared import types
    Types,

    /// Show the column schema
    Columns,
}

fn main() {
    let cli = Cli::parse();
    LOG_BROADCASTER.set_quiet(cli.quiet);

    let result = match cli.command {
        Commands::Convert {
            input,
            output,
            import_type,
            repository_id,
            start_date,
            delimiter,
        } => {
            let mut options = ConvertOptions::from_env();
            if let Some(id) = repository_id {
                options.repository_id = id;
            }
            if start_date.is_some() {
                options.rights_start_date = start_date;
            }
            if delimiter.is_some() {
                options.delimiter = delimiter;
            }
            cmd_convert(&input, &import_type, options, output.as_deref())
        }

        Commands::Parse {
            input,
            delimiter,
            output,
        } => cmd_parse(&input, delimiter, output.as_deref()),

        Commands::Types => cmd_types(),

        Commands::Columns => cmd_columns(),
    };

    if let Err(e) = result {
        log_error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

fn cmd_convert(
    input: &Path,
    import_type: &str,
    options: ConvertOptions,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut converter = lookup(import_type, input, options)?;
    converter.run()?;

    match output {
        Some(path) => {
            let mut sink = JsonFileSink::new(path);
            let written = converter.write(&mut sink)?;
            log_success(format!("💾 {} records written to: {}", written, sink.output_path().display()));
        }
        None => {
            let mut sink = JsonWriterSink::new(io::stdout().lock());
            converter.write(&mut sink)?;
            sink.finish()?;
        }
    }

    log_info("✨ Done!");
    Ok(())
}

fn cmd_parse(
    input: &Path,
    delimiter: Option<char>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    log_info(format!("📄 Parsing sheet: {}", input.display()));

    let result = parse_sheet_file(input, delimiter)?;
    log_info(format!("Encoding: {}", result.encoding));
    log_info(format!("Delimiter: '{}'", result.delimiter));

    let rows: Vec<_> = result
        .rows
        .iter()
        .filter_map(|raw| parse_row(raw).ok())
        .collect();
    log_success(format!("{} collection rows out of {}", rows.len(), result.rows.len()));

    let json = serde_json::to_string_pretty(&rows)?;
    write_output(&json, output)
}

fn cmd_types() -> Result<(), Box<dyn std::error::Error>> {
    let types = BasicResourceConverter::import_types();
    println!("{}", serde_json::to_string_pretty(&types)?);
    eprintln!("{}", BasicResourceConverter::profile());
    Ok(())
}

fn cmd_columns() -> Result<(), Box<dyn std::error::Error>> {
    for (i, column) in Column::ALL.iter().enumerate() {
        println!("[{:2}] {}", i + 1, column.name());
    }
    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            log_success(format!("💾 Output written to: {}", p.display()));
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
