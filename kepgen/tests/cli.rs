use assert_cmd::cargo;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::{fs, path::Path, process::Command};
use tempfile::TempDir;

/// Writes a UTF-16LE file with a byte-order mark, the way the HMI
/// engineering tools export tag and alarm tables.
fn write_utf16le(path: &Path, text: &str) {
    let mut bytes = vec![0xFF, 0xFE];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    fs::write(path, bytes).unwrap();
}

/// A tab-delimited HMI tag line with the descriptor, size and comment at
/// their fixed field positions.
fn flex_tag_line(name: &str, descriptor: &str, size: &str, comment: &str) -> String {
    let mut fields = vec![""; 20];
    fields[0] = name;
    fields[2] = descriptor;
    fields[5] = size;
    fields[19] = comment;
    fields.join("\t")
}

/// A tab-delimited alarm line with number, trigger tag and trigger bit
/// at their fixed field positions.
fn flex_alarm_line(number: &str, tag: &str, bit: &str, text: &str) -> String {
    let mut fields = vec![""; 18];
    fields[1] = number;
    fields[3] = tag;
    fields[4] = bit;
    fields[11] = text;
    fields.join("\t")
}

fn kepgen() -> Command {
    Command::new(cargo::cargo_bin!("kepgen"))
}

#[test]
fn convert_when_no_inputs_then_empty_outputs_written() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;

    kepgen()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("tags.json"));

    let plc = fs::read_to_string(dir.path().join("plc.csv"))?;
    assert!(plc.starts_with("Tag Name,Address,"));
    assert_eq!(plc.lines().count(), 1);

    let tags = fs::read_to_string(dir.path().join("tags.json"))?;
    assert!(tags.contains("\"ConnectionName\": \"SiemensTCPIP.PLC\""));
    assert!(tags.contains("\"Tags\": []"));

    Ok(())
}

#[test]
fn convert_when_symbol_table_then_import_rows() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let asc = format!(
        "126,{:<24}IB      4       BYTE      Pump state\n127,{:<24}IB      5       BYTE      Valve state\n",
        "PUMP_RUN", "VALVE_OPEN"
    );
    fs::write(dir.path().join("syms.asc"), asc)?;

    kepgen()
        .current_dir(dir.path())
        .args(["-s", "syms.asc", "-c", "SiemensTCPIP.Line1"])
        .assert()
        .success();

    let plc = fs::read_to_string(dir.path().join("plc.csv"))?;
    assert!(plc.contains("\"tabIB_4\",\"IB4[2]\",Byte Array,1,RO,100,,,,,,,,,,\"\","));

    let iot = fs::read_to_string(dir.path().join("iot.csv"))?;
    assert!(iot.contains("\"SiemensTCPIP.Line1.tabIB_4\",100,Byte Array,0.000000,0,1,1"));

    let tags = fs::read_to_string(dir.path().join("tags.json"))?;
    assert!(tags.contains("\"SymbolName\": \"PUMP_RUN\""));
    assert!(tags.contains("\"TagName\": \"tabIB_4\""));

    Ok(())
}

#[test]
fn convert_when_conventional_filenames_then_discovered() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    fs::write(
        dir.path().join("Symbols.asc"),
        format!("1,{:<24}MB      0       BYTE\n", "FLAGS"),
    )?;

    kepgen()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found Symbols.asc file"));

    let plc = fs::read_to_string(dir.path().join("plc.csv"))?;
    assert!(plc.contains("\"tabMB_0\",\"MB0[1]\""));

    Ok(())
}

#[test]
fn convert_when_hmi_tags_utf16_then_data_block_packed() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let csv = flex_tag_line("Alarm_word", "DB 17 DBW 1472", "2", "Alarm bits");
    write_utf16le(&dir.path().join("hmi.csv"), &csv);

    kepgen()
        .current_dir(dir.path())
        .args(["-t", "hmi.csv"])
        .assert()
        .success();

    let plc = fs::read_to_string(dir.path().join("plc.csv"))?;
    assert!(plc.contains("\"tabDB17_1472\",\"DB17.DBB1472[2]\""));

    Ok(())
}

#[test]
fn convert_when_alarm_table_then_alarm_registry() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    write_utf16le(
        &dir.path().join("Tags.csv"),
        &flex_tag_line("Alarm_word", "DB 17 DBW 1472", "2", ""),
    );
    let alarms = format!(
        "# WinCC flexible alarms export\n{}\n",
        flex_alarm_line("12", "\"Alarm_word\"", "10", "\"Motor overload\"")
    );
    write_utf16le(&dir.path().join("Alarms.csv"), &alarms);

    kepgen()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("alarms.json"));

    let json = fs::read_to_string(dir.path().join("alarms.json"))?;
    assert!(json.contains("\"Number\": 12"));
    assert!(json.contains("\"TagName\": \"tabDB17_1472\""));
    assert!(json.contains("\"Index\": 1"));
    assert!(json.contains("\"BitNr\": 2"));
    assert!(json.contains("\"Motor overload\""));
    assert!(json.contains("\"SourceFilename\": \"Alarms.csv\""));
    assert!(json.contains("WinCC flexible alarms export"));

    Ok(())
}

#[test]
fn convert_when_named_input_missing_then_err() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;

    kepgen()
        .current_dir(dir.path())
        .args(["-s", "no/such/file.asc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read file"));

    Ok(())
}

#[test]
fn convert_when_too_verbose_then_err() -> Result<(), Box<dyn std::error::Error>> {
    kepgen()
        .args(["-v", "-v", "-v", "-v", "-v"])
        .assert()
        .failure();

    Ok(())
}

#[test]
fn convert_runs_are_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    fs::write(
        dir.path().join("Symbols.asc"),
        format!("1,{:<24}IW      10      WORD\n", "SPEED"),
    )?;

    kepgen().current_dir(dir.path()).assert().success();
    let first = fs::read_to_string(dir.path().join("plc.csv"))?;

    kepgen().current_dir(dir.path()).assert().success();
    let second = fs::read_to_string(dir.path().join("plc.csv"))?;

    assert_eq!(first, second);
    Ok(())
}
