//! Tests for strategy selection

use super::*;
use crate::app::models::SourceFormat;
use crate::app::services::format_strategy::{AnalystII, REGISTRY, RecorderV1, RecorderV2};

#[test]
fn test_registry_labels() {
    let labels: Vec<&str> = REGISTRY.iter().map(|(label, _)| *label).collect();
    assert_eq!(
        labels,
        [
            "CANrecorder 20241013XXX",
            "CANrecorder 20250305XXX",
            "CANalyst-II 31F0001EXXX"
        ]
    );
}

#[test]
fn test_from_label_is_exact() {
    assert_eq!(
        FormatStrategy::from_label("CANrecorder 20250305XXX"),
        Some(FormatStrategy::RecorderV2(RecorderV2))
    );
    assert_eq!(FormatStrategy::from_label("canrecorder 20250305xxx"), None);
    assert_eq!(FormatStrategy::from_label(""), None);
}

#[test]
fn test_registry_matches_formats() {
    for (label, strategy) in REGISTRY {
        assert_eq!(strategy.format().label(), label);
        assert_eq!(FormatStrategy::for_format(strategy.format()), strategy);
    }
}

#[test]
fn test_stage_counts() {
    assert_eq!(FormatStrategy::RecorderV1(RecorderV1).stage_count(), 6);
    assert_eq!(FormatStrategy::RecorderV2(RecorderV2).stage_count(), 6);
    assert_eq!(FormatStrategy::AnalystII(AnalystII).stage_count(), 5);
}

#[test]
fn test_effective_channel() {
    let recorder = FormatStrategy::from(SourceFormat::RecorderV1);
    let analyst = FormatStrategy::from(SourceFormat::AnalystII);

    assert_eq!(
        recorder.effective_channel(ChannelSelector::Channel3),
        ChannelSelector::Channel3
    );
    assert_eq!(
        analyst.effective_channel(ChannelSelector::Channel3),
        ChannelSelector::Automatic
    );
}
