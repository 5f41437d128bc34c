use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::app::App;
use super::theme::Theme;
use crate::shared::links::{CONTACT_TITLE, TITLE, WELCOME};
use crate::shared::{Notification, NotificationKind};

pub struct AppLayout {
    pub header: Rect,
    pub shortcuts: Rect,
    pub links: Rect,
    pub status_bar: Rect,
}

pub fn get_layout_chunks(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    // Keep the list narrow on wide terminals, like a phone-width card column
    let body = chunks[2];
    let width = body.width.min(60);
    let links = Rect::new(body.x + (body.width - width) / 2, body.y, width, body.height);

    AppLayout {
        header: chunks[0],
        shortcuts: chunks[1],
        links,
        status_bar: chunks[3],
    }
}

pub fn ui(f: &mut Frame, app: &mut App) {
    let theme = Theme::new(app.is_dark());
    let area = f.area();
    let layout = get_layout_chunks(area);

    f.render_widget(
        Block::default().style(Style::default().bg(theme.background).fg(theme.foreground)),
        area,
    );

    // Header
    let header = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(WELCOME, Style::default().fg(theme.muted))),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(header, layout.header);

    // Shortcut row
    let shortcuts: Vec<Span> = app
        .config
        .shortcuts
        .iter()
        .map(|s| Span::styled(format!(" {} ", s.icon.glyph()), Style::default().fg(theme.accent)))
        .collect();
    f.render_widget(Paragraph::new(Line::from(shortcuts)).alignment(Alignment::Center), layout.shortcuts);

    // Link list
    let items: Vec<ListItem> = app
        .config
        .links
        .iter()
        .map(|link| ListItem::new(Line::from(format!("  {}  {}", link.icon.glyph(), link.label))))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(if app.contact_open {
                    theme.border
                } else {
                    theme.border_active
                })),
        )
        .highlight_style(
            Style::default()
                .bg(theme.selection_bg)
                .fg(theme.selection_fg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("›");
    f.render_stateful_widget(list, layout.links, &mut app.link_state);

    // Status bar
    let status = Line::from(vec![
        Span::raw(format!(" Theme: {} ", app.theme.preference().label())),
        Span::styled(
            " ↑↓ select  ⏎ open  c contact  t theme  x dismiss  q quit ",
            Style::default().fg(theme.muted),
        ),
    ]);
    f.render_widget(
        Paragraph::new(status).style(Style::default().bg(theme.status_bar_bg).fg(theme.status_bar_fg)),
        layout.status_bar,
    );

    if app.contact_open {
        render_contact(f, app, &theme);
    }

    // Toast goes last so it sits above the dialog
    let notification = app.notifications.snapshot();
    render_toast(f, area, &notification, &theme);
}

fn render_contact(f: &mut Frame, app: &mut App, theme: &Theme) {
    let area = centered_rect(70, 70, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" ♡ {} ", CONTACT_TITLE))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_active))
        .style(Style::default().bg(theme.background).fg(theme.foreground));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let contact = &app.config.contact;
    let entries = contact.copy_entries().count() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(entries + 1),
            Constraint::Min(0),
        ])
        .split(inner);

    let address = Paragraph::new(vec![
        Line::from(Span::styled("អាសយដ្ឋាន៖", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(contact.address.as_str(), Style::default().fg(theme.muted))),
    ])
    .wrap(Wrap { trim: true });
    f.render_widget(address, chunks[0]);

    let items: Vec<ListItem> = contact
        .phones
        .iter()
        .map(|p| ListItem::new(format!("☎ {}", p.display)))
        .chain(contact.emails.iter().map(|e| ListItem::new(format!("✉ {}", e.display))))
        .collect();
    let list = List::new(items)
        .highlight_style(Style::default().bg(theme.selection_bg).fg(theme.selection_fg))
        .highlight_symbol("⧉ ");
    f.render_stateful_widget(list, chunks[1], &mut app.contact_state);

    let mut hours = vec![Line::from(Span::styled(
        "ម៉ោងធ្វើការ៖",
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
    ))];
    hours.extend(contact.hours.iter().map(|h| Line::from(h.as_str())));
    hours.push(Line::from(""));
    hours.push(Line::from(Span::styled("⏎/y copy  esc close", Style::default().fg(theme.muted))));
    f.render_widget(Paragraph::new(hours), chunks[2]);
}

/// Banner at the top center, sized to the message.
pub fn toast_rect(area: Rect, message: &str) -> Rect {
    // icon + spaces + message + close marker + borders
    let width = u16::try_from(message.width())
        .unwrap_or(u16::MAX)
        .saturating_add(10)
        .min(area.width);
    let height = 3.min(area.height);
    Rect::new(area.x + (area.width - width) / 2, area.y + 1.min(area.height - height), width, height)
}

pub fn render_toast(f: &mut Frame, area: Rect, notification: &Notification, theme: &Theme) {
    if !notification.visible {
        return;
    }

    let rect = toast_rect(area, &notification.message);
    let color = theme.kind_color(notification.kind);
    let icon = match notification.kind {
        NotificationKind::Success => "✔",
        NotificationKind::Error => "✘",
        NotificationKind::Info => "ℹ",
    };

    f.render_widget(Clear, rect);
    let line = Line::from(vec![
        Span::styled(format!("{} ", icon), Style::default().fg(color)),
        Span::styled(notification.message.as_str(), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled("  x", Style::default().fg(theme.muted)),
    ]);
    let toast = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(theme.selection_bg).fg(theme.selection_fg)),
    );
    f.render_widget(toast, rect);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
