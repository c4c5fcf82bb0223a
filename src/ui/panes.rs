//! Stateless render functions for the browser panes

use crate::demos::Demo;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Render the catalog pane: one row per demonstration, selection highlighted
pub fn render_catalog_pane(
    frame: &mut Frame,
    area: Rect,
    catalog: &[Demo],
    selected: usize,
    replayed: &[bool],
    is_focused: bool,
) {
    let block = Block::default()
        .title(" Catalog ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .padding(Padding::new(1, 0, 0, 0));

    let items: Vec<ListItem> = catalog
        .iter()
        .enumerate()
        .map(|(i, demo)| {
            let marker = if replayed.get(i).copied().unwrap_or(false) {
                Span::styled("● ", Style::default().fg(DEFAULT_THEME.success))
            } else {
                Span::styled("○ ", Style::default().fg(DEFAULT_THEME.comment))
            };
            let name = Span::styled(
                format!("{:<16}", demo.name),
                Style::default().fg(DEFAULT_THEME.primary),
            );
            let title = Span::styled(demo.title, Style::default().fg(DEFAULT_THEME.fg));

            let mut style = Style::default();
            if i == selected {
                style = style.bg(DEFAULT_THEME.selected_bg);
            }
            ListItem::new(Line::from(vec![marker, name, title])).style(style)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

/// Render the transcript pane, showing only the revealed prefix of the run
pub fn render_transcript_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    lines: Option<&[String]>,
    revealed: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(format!(" Transcript — {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let Some(lines) = lines else {
        let paragraph = Paragraph::new("(not replayed yet — press Enter)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let shown = revealed.min(lines.len());
    let all_items: Vec<ListItem> = lines[..shown]
        .iter()
        .map(|line| {
            let style = if line.starts_with("=== ") {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            ListItem::new(line.as_str()).style(style)
        })
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}

/// Render the status bar at the bottom of the screen
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_message: &str,
    revealed: usize,
    total: usize,
) {
    let progress = if total > 0 {
        format!(" {}/{} lines ", revealed.min(total), total)
    } else {
        String::from(" -/- ")
    };

    let line = Line::from(vec![
        Span::styled(progress, Style::default().fg(DEFAULT_THEME.secondary)),
        Span::styled("│ ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(status_message, Style::default().fg(DEFAULT_THEME.fg)),
        Span::styled(
            "  [Enter] replay  [Space] step  [a] all  [r] reset  [Tab] focus  [q] quit",
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
