//! Implements the command line behavior.

use std::path::{Path, PathBuf};

use kepgen_dsl::export;
use kepgen_mapper::pipeline::Conversion;
use time::OffsetDateTime;

use crate::{source, stages};

/// Resolved command line options for one run.
pub struct Options {
    pub symbols: Option<PathBuf>,
    pub tags: Option<PathBuf>,
    pub alarms: Option<PathBuf>,
    pub plc_out: PathBuf,
    pub iot_out: PathBuf,
    pub connection: String,
    pub block_size: usize,
    pub poll_freq: u32,
}

/// Runs one complete conversion.
///
/// Degrades per input: a missing optional input contributes nothing, but
/// a named file that cannot be read is an error.
pub fn convert(options: Options) -> Result<(), String> {
    print_banner();

    let symbols_path = discover(options.symbols, "Symbols.asc", "Step7 symbols export file");
    let tags_path = discover(options.tags, "Tags.csv", "WinCCflexible Tags export file");
    let alarms_path = discover(options.alarms, "Alarms.csv", "WinCCflexible alarms export file");

    let timestamp = OffsetDateTime::now_utc().unix_timestamp();
    let mut conversion = Conversion::new();

    // The controller symbol table is decoded before the HMI tag table so
    // that controller symbols win first-match lookups.
    if let Some(path) = &symbols_path {
        let lines = source::read_lines(path).map_err(|e| e.to_string())?;
        stages::decode_symbols(&mut conversion, path, &lines);
    }
    if let Some(path) = &tags_path {
        let lines = source::read_lines_utf16(path).map_err(|e| e.to_string())?;
        stages::decode_symbols(&mut conversion, path, &lines);
    }

    conversion.consolidate(options.block_size);

    println!(
        "Generating Kepware import files: {}, {} ...",
        options.plc_out.display(),
        options.iot_out.display()
    );
    source::write_lines(&conversion.plc_lines(options.poll_freq), &options.plc_out)
        .map_err(|e| e.to_string())?;
    source::write_lines(
        &conversion.iot_lines(&options.connection, options.poll_freq),
        &options.iot_out,
    )
    .map_err(|e| e.to_string())?;

    if let Some(path) = &alarms_path {
        println!("Generating alarms description file: alarms.json ...");
        let lines = source::read_lines_utf16(path).map_err(|e| e.to_string())?;
        let alarm_lines = stages::decode_alarms(&lines);
        let source_info = lines.first().cloned().unwrap_or_default();
        let registry = conversion.resolve_alarms(
            &alarm_lines,
            &options.connection,
            &path.display().to_string(),
            &source_info,
            timestamp,
        );
        let json = export::to_pretty_json(&registry).map_err(|e| e.to_string())?;
        source::write_text(&json, Path::new("alarms.json")).map_err(|e| e.to_string())?;
    }

    println!("Generating tags description file: tags.json ...");
    let registry = conversion.bind_symbols(&options.connection, timestamp);
    let json = export::to_pretty_json(&registry).map_err(|e| e.to_string())?;
    source::write_text(&json, Path::new("tags.json")).map_err(|e| e.to_string())?;

    Ok(())
}

/// Falls back to the conventional export filename in the working
/// directory when no path was given on the command line.
fn discover(explicit: Option<PathBuf>, default_name: &str, description: &str) -> Option<PathBuf> {
    if explicit.is_some() {
        return explicit;
    }

    let fallback = PathBuf::from(default_name);
    if fallback.is_file() {
        println!("Found {default_name} file - {description}");
        return Some(fallback);
    }
    None
}

fn print_banner() {
    println!("=============================================================================================");
    println!("==                         Siemens PLC Tags generator / DTP                                ==");
    println!("==    Generator of Tags in form of csv configuration files for KepServerEX6 + IoTGateway   ==");
    println!("=============================================================================================");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discover_when_explicit_path_then_kept_even_if_missing() {
        let path = PathBuf::from("custom/Symbols.asc");
        let result = discover(Some(path.clone()), "Symbols.asc", "x");
        assert_eq!(result, Some(path));
    }

    #[test]
    fn discover_when_no_path_and_no_default_then_none() {
        let result = discover(None, "no-such-default-file.asc", "x");
        assert_eq!(result, None);
    }
}
