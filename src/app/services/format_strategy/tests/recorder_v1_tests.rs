//! Tests for the CANrecorder 20241013XXX pipeline

use super::*;
use crate::app::services::format_strategy::RecorderV1;
use crate::error::ErrorKind;

const HEADER: &str = "Index,System Time,Time Stamp,Channel,Direction,ID,Type,Format,DLC,Data";

fn capture() -> String {
    [
        HEADER,
        "0,10:15:00.001,1A,ch1,Rx,0x18FF50E5,Data,ExtendFrame,DL=8,x| 11 22 33 44 55 66 77 88|",
        "1,10:15:00.002,2B,ch2,Rx,0x0CF00400,Data,ExtendFrame,DL=3,x| AA BB CC|",
        "2,10:15:00.003,zz,ch1,Rx,0x18FEF100,Data,ExtendFrame,DL=2,x| 01 02|",
        "3,10:15:00.004,3C,ch1,Rx,0x18FEF200,Data,ExtendFrame,DL=0,x| |",
    ]
    .join("\n")
        + "\n"
}

fn strategy() -> FormatStrategy {
    FormatStrategy::RecorderV1(RecorderV1)
}

#[test]
fn test_converts_all_rows_automatic() {
    let fixture = Fixture::new("capture.csv", &capture());

    let (result, _) = convert_collecting(strategy(), &fixture.input, ChannelSelector::Automatic);

    assert_eq!(result.output_path(), Some(&fixture.output("capture.svy")));
    let rows = output_rows(&output_text(&result));
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r.len() == 13));
    assert_eq!(
        rows[0].join(","),
        "2600,18FF50E5,True,0,8,11,22,33,44,55,66,77,88"
    );
    assert_eq!(rows[1].join(","), "4300,0CF00400,True,0,3,AA,BB,CC,,,,,");
}

#[test]
fn test_bad_timestamp_row_passes_through() {
    let fixture = Fixture::new("capture.csv", &capture());

    let (result, _) = convert_collecting(strategy(), &fixture.input, ChannelSelector::Automatic);

    let rows = output_rows(&output_text(&result));
    assert_eq!(rows[2][0], "zz");
    assert_eq!(rows[2][1], "18FEF100");
    assert_eq!(rows[3][0], "6000");
}

#[test]
fn test_empty_payload_fills_empty_bytes() {
    let fixture = Fixture::new("capture.csv", &capture());

    let (result, _) = convert_collecting(strategy(), &fixture.input, ChannelSelector::Automatic);

    let rows = output_rows(&output_text(&result));
    assert_eq!(rows[3][4], "0");
    assert!(rows[3][5..].iter().all(String::is_empty));
}

#[test]
fn test_payload_shorter_than_wrapper_leaves_bytes_empty() {
    let contents = format!(
        "{}\n0,t,1A,ch2,Rx,0x123,Data,StandardFrame,DL=0,x||\n",
        HEADER
    );
    let fixture = Fixture::new("short.csv", &contents);

    let (result, _) = convert_collecting(strategy(), &fixture.input, ChannelSelector::Automatic);

    let rows = output_rows(&output_text(&result));
    assert_eq!(rows[0].join(","), "2600,123,True,0,0,,,,,,,,");
}

#[test]
fn test_channel_filter_and_suffix() {
    let fixture = Fixture::new("capture.csv", &capture());

    let (result, _) = convert_collecting(strategy(), &fixture.input, ChannelSelector::Channel1);

    assert_eq!(
        result.output_path(),
        Some(&fixture.output("capture_ch1.svy"))
    );
    let rows = output_rows(&output_text(&result));
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0][1], "18FF50E5");
    assert_eq!(rows[1][1], "18FEF100");
    assert_eq!(rows[2][1], "18FEF200");
    assert!(!fixture.output("capture.svy").exists());
}

#[test]
fn test_channel_without_rows_writes_header_only() {
    let fixture = Fixture::new("capture.csv", &capture());

    let (result, _) = convert_collecting(strategy(), &fixture.input, ChannelSelector::Channel3);

    assert!(result.is_success());
    assert_eq!(output_text(&result), format!("{}\n", CANONICAL_HEADER));
}

#[test]
fn test_progress_sequence() {
    let fixture = Fixture::new("capture.csv", &capture());

    let (result, seen) = convert_collecting(strategy(), &fixture.input, ChannelSelector::Automatic);

    assert!(result.is_success());
    assert_eq!(seen, vec![17, 33, 50, 67, 83, 100]);
    assert_progress_complete(&seen);
}

#[test]
fn test_rerun_is_byte_identical() {
    let fixture = Fixture::new("capture.csv", &capture());

    let channel = ChannelSelector::Channel2;
    let first = output_text(&strategy().convert_quietly(&fixture.input, channel));
    let second = output_text(&strategy().convert_quietly(&fixture.input, channel));

    assert_eq!(first, second);
}

#[test]
fn test_missing_file_fails_without_output() {
    let fixture = Fixture::new("other.csv", HEADER);
    let missing = fixture.output("absent.csv");

    let (result, seen) = convert_collecting(strategy(), &missing, ChannelSelector::Automatic);

    match result {
        ConversionResult::Failure { kind, message } => {
            assert_eq!(kind, ErrorKind::Load);
            assert!(message.contains("absent.csv"));
        }
        other => panic!("expected failure, got {:?}", other),
    }
    assert!(seen.is_empty());
    assert!(!fixture.output("absent.svy").exists());
}

#[test]
fn test_ragged_rows_fail_to_load() {
    let contents = format!("{}\n0,t,1A,ch1\n", HEADER);
    let fixture = Fixture::new("ragged.csv", &contents);

    let result = strategy().convert_quietly(&fixture.input, ChannelSelector::Automatic);

    assert!(matches!(
        result,
        ConversionResult::Failure {
            kind: ErrorKind::Load,
            ..
        }
    ));
    assert!(!fixture.output("ragged.svy").exists());
}

#[test]
fn test_unwritable_destination_is_write_failure() {
    let fixture = Fixture::new("capture.csv", &capture());
    std::fs::create_dir(fixture.output("capture.svy")).unwrap();

    let (result, seen) = convert_collecting(strategy(), &fixture.input, ChannelSelector::Automatic);

    assert!(matches!(
        result,
        ConversionResult::Failure {
            kind: ErrorKind::Write,
            ..
        }
    ));
    assert_eq!(seen, vec![17, 33, 50, 67, 83]);
}
