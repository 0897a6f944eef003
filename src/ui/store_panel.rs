use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::items::types::Item;

/// Draws the store stock. Unaffordable entries are dimmed. While the
/// store has focus, number keys buy instead of consuming items.
pub fn draw_store(frame: &mut Frame, area: Rect, catalog: &[Item], coins: u32, focused: bool) {
    let items: Vec<ListItem> = catalog
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let affordable = coins >= item.cost;
            let style = if affordable {
                Style::default()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}. ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{} ", item.name), style),
                Span::styled(
                    format!("({})", item.effect.describe()),
                    style.fg(if affordable {
                        Color::Green
                    } else {
                        Color::DarkGray
                    }),
                ),
                Span::styled(format!(" - {} coins", item.cost), style),
            ]))
        })
        .collect();

    let title = if focused { "Store [buying]" } else { "Store" };
    let border_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );
    frame.render_widget(list, area);
}
