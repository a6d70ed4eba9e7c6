// Unit tests for the nordvpn output parsing helpers

use nordi_core::vpn::parser::{split_key, split_lines, split_value, trim_carriage_returns, DELIM};

#[test]
fn test_trim_trailing_carriage_returns() {
    assert_eq!(trim_carriage_returns("NordVPN Version 3.16.0\r\r"), "NordVPN Version 3.16.0");
    assert_eq!(trim_carriage_returns("no padding"), "no padding");
}

#[test]
fn test_trim_keeps_text_after_spinner_frames() {
    // the binary's progress spinner overwrites its line with \r; only
    // what follows the last one is real output
    assert_eq!(trim_carriage_returns("\r-\r\\\r|\rdone"), "done");
    assert_eq!(trim_carriage_returns("\rdone\r\r"), "done");
}

#[test]
fn test_trim_all_carriage_returns() {
    assert_eq!(trim_carriage_returns("\r\r\r"), "");
}

#[test]
fn test_split_lines_counts_only_terminated_lines() {
    let lines = split_lines("first\nsecond\nunterminated", 7);
    assert_eq!(lines, vec!["first", "second"]);
}

#[test]
fn test_split_lines_caps_at_max() {
    let lines = split_lines("a\nb\nc\nd\n", 2);
    assert_eq!(lines, vec!["a", "b"]);
}

#[test]
fn test_split_lines_degenerate_single_line() {
    // a bare version string has no newline at all
    let lines = split_lines("NordVPN Version 3.16.0", 1);
    assert_eq!(lines, vec!["NordVPN Version 3.16.0"]);
}

#[test]
fn test_split_lines_trims_carriage_return_padding() {
    let lines = split_lines("\r\rStatus: Connected\nIP: 1.2.3.4\n", 7);
    assert_eq!(lines, vec!["Status: Connected", "IP: 1.2.3.4"]);
}

#[test]
fn test_split_value_after_first_delimiter() {
    assert_eq!(split_value("Hostname: ab999.nordvpn.com", DELIM), "ab999.nordvpn.com");
    assert_eq!(split_value("Note: key: value", DELIM), "key: value");
}

#[test]
fn test_split_value_missing_delimiter_is_empty() {
    assert_eq!(split_value("You are not logged in.", DELIM), "");
}

#[test]
fn test_split_key_before_first_delimiter() {
    assert_eq!(split_key("ab999.nordvpn.com", "."), "ab999");
    assert_eq!(split_key("Hostname: ab999", DELIM), "Hostname");
}
