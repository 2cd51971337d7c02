use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub body: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Active screen
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        body: chunks[0],
        status_bar: chunks[1],
    }
}

pub struct ChatLayout {
    pub sidebar: Option<Rect>,
    pub header: Rect,
    pub messages: Rect,
    pub input_box: Rect,
    pub footer: Rect,
}

pub fn chat_layout(area: Rect, sidebar_open: bool) -> ChatLayout {
    // Narrow terminals drop the sidebar regardless of the toggle.
    let show_sidebar = sidebar_open && area.width >= 70;
    let (sidebar, main) = if show_sidebar {
        let h_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .spacing(1)
            .constraints([Constraint::Length(30), Constraint::Min(30)])
            .split(area);
        (Some(h_chunks[0]), h_chunks[1])
    } else {
        (None, area)
    };

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Messages
            Constraint::Length(3), // Input box
            Constraint::Length(1), // Disclaimer
        ])
        .split(main);

    ChatLayout {
        sidebar,
        header: v_chunks[0],
        messages: v_chunks[1],
        input_box: v_chunks[2],
        footer: v_chunks[3],
    }
}

/// Rect of `width` x `height` centered in `area`, clamped to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

/// Split `area` into `n` equal columns.
pub fn columns(area: Rect, n: usize) -> Vec<Rect> {
    let n = n.max(1) as u32;
    Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints((0..n).map(|_| Constraint::Ratio(1, n)))
        .split(area)
        .to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_hidden_on_narrow_terminal() {
        let wide = chat_layout(Rect::new(0, 0, 120, 40), true);
        assert!(wide.sidebar.is_some());
        let narrow = chat_layout(Rect::new(0, 0, 60, 40), true);
        assert!(narrow.sidebar.is_none());
        let closed = chat_layout(Rect::new(0, 0, 120, 40), false);
        assert!(closed.sidebar.is_none());
        assert_eq!(closed.header.width, 120);
    }

    #[test]
    fn test_centered_clamps() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered(area, 10, 4), Rect::new(5, 3, 10, 4));
        assert_eq!(centered(area, 50, 50), area);
    }
}
