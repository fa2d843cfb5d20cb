//! Panel rendering
//!
//! Input row on top, then either the bar chart or the empty-state message.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::chart::{ChartSpec, bar_height};
use super::panel_state::{EMPTY_STATE_MESSAGE, FilterablePanel, PanelFocus};
use crate::widgets::popup::centered_rect;

const CONTROLS_HEIGHT: u16 = 3;
const INPUT_WIDTH: u16 = 34;
const RESET_BUTTON_WIDTH: u16 = 19;
const RESET_LABEL: &str = "Reset Filters";

const BAR_WIDTH: u16 = 5;
const GROUP_GAP: u16 = 2;

fn border_color(focused: bool) -> Color {
    if focused { Color::Cyan } else { Color::DarkGray }
}

/// Render the whole panel into `area`
pub fn render_panel(panel: &mut FilterablePanel, frame: &mut Frame, area: Rect) {
    let layout =
        Layout::vertical([Constraint::Length(CONTROLS_HEIGHT), Constraint::Min(3)]).split(area);

    render_controls(panel, frame, layout[0]);

    if panel.is_data_empty() {
        render_empty_state(frame, layout[1]);
    } else {
        render_chart(&panel.chart_spec(), frame, layout[1]);
    }
}

fn render_controls(panel: &mut FilterablePanel, frame: &mut Frame, area: Rect) {
    let layout = Layout::horizontal([
        Constraint::Length(INPUT_WIDTH),
        Constraint::Length(INPUT_WIDTH),
        Constraint::Length(RESET_BUTTON_WIDTH),
        Constraint::Min(0),
    ])
    .split(area);

    let lower_focused = panel.focus == PanelFocus::LowerBound;
    let upper_focused = panel.focus == PanelFocus::UpperBound;

    for (input, focused, input_area) in [
        (&mut panel.lower, lower_focused, layout[0]),
        (&mut panel.upper, upper_focused, layout[1]),
    ] {
        let title = format!(" {} ", input.title());
        input.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(border_color(focused))),
        );
        // Hide the cursor block on the unfocused field
        input.textarea.set_cursor_style(if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        });
        frame.render_widget(&input.textarea, input_area);
    }

    render_reset_button(panel.focus == PanelFocus::ResetButton, frame, layout[2]);
}

fn render_reset_button(focused: bool, frame: &mut Frame, area: Rect) {
    let style = if focused {
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Blue)
    };

    let button = Paragraph::new(RESET_LABEL)
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color(focused))),
        );

    frame.render_widget(button, area);
}

fn render_empty_state(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let text_width = EMPTY_STATE_MESSAGE.width() as u16;
    let lines = text_width.div_ceil(inner.width).max(1);
    let text_area = centered_rect(inner, inner.width, lines);

    let message = Paragraph::new(EMPTY_STATE_MESSAGE)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Gray));

    frame.render_widget(message, text_area);
}

fn legend_line(spec: &ChartSpec) -> Line<'_> {
    let mut spans = vec![Span::raw(" ")];
    for dataset in &spec.datasets {
        spans.push(Span::styled("■ ", Style::default().fg(dataset.background_color)));
        spans.push(Span::raw(dataset.label.as_str()));
        spans.push(Span::raw("   "));
    }
    Line::from(spans)
}

fn render_chart(spec: &ChartSpec, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 {
        return;
    }

    let layout = Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).split(inner);
    frame.render_widget(Paragraph::new(legend_line(spec)), layout[0]);

    let chart_area = Rect {
        width: layout[1].width.min(spec.width),
        height: layout[1].height.min(spec.height),
        ..layout[1]
    };

    let max_value = spec.max_value();

    // Bars must outlive the groups that borrow them
    let bars: Vec<Vec<Bar>> = (0..spec.labels.len())
        .map(|i| {
            spec.group_values(i)
                .into_iter()
                .map(|(dataset, value)| {
                    Bar::default()
                        .value(bar_height(value, max_value))
                        .text_value(value.to_string())
                        .style(Style::default().fg(dataset.background_color))
                        .value_style(
                            Style::default()
                                .fg(Color::Black)
                                .bg(dataset.background_color),
                        )
                })
                .collect()
        })
        .collect();

    let mut chart = BarChart::default()
        .bar_width(BAR_WIDTH)
        .bar_gap(0)
        .group_gap(GROUP_GAP)
        .label_style(Style::default().fg(Color::Gray));

    for (label, group_bars) in spec.labels.iter().zip(&bars) {
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(label.as_str()))
                .bars(group_bars),
        );
    }

    frame.render_widget(chart, chart_area);
}

#[cfg(test)]
#[path = "panel_render_tests.rs"]
mod panel_render_tests;
