use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area anchored to the top-right corner of `frame_area`, `margin` cells in
pub fn popup_top_right(frame_area: Rect, width: u16, height: u16, margin: u16) -> Rect {
    let available_width = frame_area.width.saturating_sub(margin * 2);
    let available_height = frame_area.height.saturating_sub(margin);

    let popup_width = width.min(available_width);
    let popup_height = height.min(available_height);

    Rect {
        x: frame_area.x + frame_area.width.saturating_sub(popup_width + margin),
        y: frame_area.y + margin.min(frame_area.height),
        width: popup_width,
        height: popup_height,
    }
}

/// Area of `width` x `height` centered inside `area`, clamped to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
