//! Tests for panel rendering

use super::*;
use crate::data::{SeriesPair, interpret_body};
use crate::notification::NotificationCenter;
use crate::test_utils::test_helpers::{loaded_panel, sample_pair};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

const TEST_WIDTH: u16 = 100;
const TEST_HEIGHT: u16 = 30;

fn render_to_string(panel: &mut FilterablePanel, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            render_panel(panel, f, area);
        })
        .unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_empty_panel_shows_empty_state_message() {
    let center = NotificationCenter::default();
    let mut panel = FilterablePanel::new(&center.context()).unwrap();

    let output = render_to_string(&mut panel, TEST_WIDTH, TEST_HEIGHT);
    assert!(output.contains(EMPTY_STATE_MESSAGE));
    assert!(!output.contains("Dataset 1"));
}

#[test]
fn test_loaded_panel_shows_chart() {
    let center = NotificationCenter::default();
    let mut panel = loaded_panel(&center, sample_pair());

    let output = render_to_string(&mut panel, TEST_WIDTH, TEST_HEIGHT);
    assert!(output.contains("Dataset 1"));
    assert!(output.contains("Dataset 2"));
    assert!(output.contains("January"));
    assert!(!output.contains("No data available"));
}

#[test]
fn test_filtered_out_panel_shows_empty_state() {
    let center = NotificationCenter::default();
    let mut panel = loaded_panel(&center, sample_pair());
    panel.set_lower_bound("abc");
    panel.set_upper_bound("100");

    let output = render_to_string(&mut panel, TEST_WIDTH, TEST_HEIGHT);
    assert!(output.contains(EMPTY_STATE_MESSAGE));
}

#[test]
fn test_controls_are_rendered() {
    let center = NotificationCenter::default();
    let mut panel = FilterablePanel::new(&center.context()).unwrap();

    let output = render_to_string(&mut panel, TEST_WIDTH, TEST_HEIGHT);
    assert!(output.contains("Min Value (Filter Lower Bound)"));
    assert!(output.contains("Max Value (Filter Upper Bound)"));
    assert!(output.contains("Reset Filters"));
}

#[test]
fn test_bound_text_is_rendered() {
    let center = NotificationCenter::default();
    let mut panel = loaded_panel(&center, sample_pair());
    panel.set_lower_bound("20");
    panel.set_upper_bound("50");

    let output = render_to_string(&mut panel, TEST_WIDTH, TEST_HEIGHT);
    assert!(output.contains("20"));
    assert!(output.contains("50"));
}

#[test]
fn test_narrow_terminal_wraps_empty_state() {
    let center = NotificationCenter::default();
    let mut panel = FilterablePanel::new(&center.context()).unwrap();

    let output = render_to_string(&mut panel, 40, 20);
    assert!(output.contains("No data available"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let center = NotificationCenter::default();
    let mut panel = loaded_panel(&center, sample_pair());

    let _ = render_to_string(&mut panel, 10, 4);
}

#[test]
fn test_legend_uses_dataset_colors() {
    let spec = ChartSpec::from_pair(&sample_pair());
    let line = legend_line(&spec);

    let colors: Vec<_> = line
        .spans
        .iter()
        .filter(|s| s.content.contains('■'))
        .map(|s| s.style.fg)
        .collect();
    assert_eq!(
        colors,
        vec![Some(Color::Rgb(255, 99, 132)), Some(Color::Rgb(54, 162, 235))]
    );
}

#[test]
fn test_huge_values_render_without_overflow() {
    let center = NotificationCenter::default();
    let mut panel = loaded_panel(&center, SeriesPair::new(vec![1e18, 5.0], vec![3.0, 1e300]));

    let output = render_to_string(&mut panel, TEST_WIDTH, TEST_HEIGHT);
    assert!(output.contains("Dataset 1"));
    assert!(output.contains("January"));
}

#[test]
fn test_huge_value_from_payload_renders() {
    let pair =
        interpret_body(r#"{"status":"ok","data":{"datasetOne":[1e300],"datasetTwo":[]}}"#)
            .unwrap();
    let center = NotificationCenter::default();
    let mut panel = loaded_panel(&center, pair);

    let output = render_to_string(&mut panel, TEST_WIDTH, TEST_HEIGHT);
    assert!(output.contains("Dataset 1"));
}

#[test]
fn test_non_positive_values_render() {
    let center = NotificationCenter::default();
    let mut panel = loaded_panel(&center, SeriesPair::new(vec![-5.0, 0.0], vec![-1.0]));

    let output = render_to_string(&mut panel, TEST_WIDTH, TEST_HEIGHT);
    assert!(output.contains("Dataset 2"));
}
