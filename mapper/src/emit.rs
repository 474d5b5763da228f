//! Output-line generation for the server and gateway import files.

use kepgen_dsl::tag::ConsolidatedTag;

/// Header row of the PLC tag import file.
pub const PLC_HEADER: &str = "Tag Name,Address,Data Type,Respect Data Type,Client Access,Scan Rate,Scaling,Raw Low,Raw High,Scaled Low,Scaled High,Scaled Data Type,Clamp Low,Clamp High,Eng Units,Description,Negate Value";

/// Header row of the IoT gateway item file.
pub const IOT_HEADER: &str =
    "Server Tag,Scan Rate,Data Type,Deadband,Send Every Scan,Enabled,Use Scan Rate,";

/// One PLC import row for a consolidated tag.
pub fn plc_line(tag: &ConsolidatedTag, poll_freq: u32) -> String {
    format!(
        "\"{}\",\"{}\",Byte Array,1,RO,{},,,,,,,,,,\"\",",
        tag.tag_name(),
        tag.address_expression(),
        poll_freq
    )
}

/// The complete PLC import file: header plus one row per tag.
pub fn plc_lines(tags: &[ConsolidatedTag], poll_freq: u32) -> Vec<String> {
    let mut lines = Vec::with_capacity(tags.len() + 1);
    lines.push(PLC_HEADER.to_string());
    lines.extend(tags.iter().map(|tag| plc_line(tag, poll_freq)));
    lines
}

/// The complete gateway item file: comment banner, header, one row per
/// tag referencing `<connection>.<tag name>`.
pub fn iot_lines(tags: &[ConsolidatedTag], connection: &str, poll_freq: u32) -> Vec<String> {
    let mut lines = vec![
        ";".to_string(),
        "; IOTItem".to_string(),
        ";".to_string(),
        IOT_HEADER.to_string(),
    ];
    for tag in tags {
        lines.push(format!(
            "\"{}.{}\",{},Byte Array,0.000000,0,1,1",
            connection,
            tag.tag_name(),
            poll_freq
        ));
    }
    lines
}
