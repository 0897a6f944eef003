use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::core::game_state::CharacterSnapshot;
use crate::items::types::Item;

/// Picks a bar color for a health ratio.
pub fn hp_color(current: u32, max: u32) -> Color {
    let ratio = if max == 0 {
        0.0
    } else {
        current as f64 / max as f64
    };
    if ratio > 0.6 {
        Color::Green
    } else if ratio > 0.3 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Draws the player header: class, health, mana, power, coins.
pub fn draw_player_panel(frame: &mut Frame, area: Rect, player: &CharacterSnapshot) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} the {}", player.name, player.archetype.display_name()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw("HP    "),
            Span::styled(
                format!("{}/{}", player.current_hp, player.max_hp),
                Style::default().fg(hp_color(player.current_hp, player.max_hp)),
            ),
        ]),
    ];
    if player.max_mana > 0 {
        lines.push(Line::from(vec![
            Span::raw("Mana  "),
            Span::styled(
                format!("{}/{}", player.mana, player.max_mana),
                Style::default().fg(Color::Blue),
            ),
        ]));
    }
    lines.push(Line::from(format!("Power {}", player.power)));
    lines.push(Line::from(vec![
        Span::raw("Coins "),
        Span::styled(
            player.coins.to_string(),
            Style::default().fg(Color::Yellow),
        ),
    ]));

    let panel = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Character"))
        .alignment(Alignment::Left);
    frame.render_widget(panel, area);
}

/// Draws the owned items, numbered by the key that consumes them.
pub fn draw_inventory(frame: &mut Frame, area: Rect, inventory: &[Item]) {
    let items: Vec<ListItem> = if inventory.is_empty() {
        vec![ListItem::new(Span::styled(
            "(empty)",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        inventory
            .iter()
            .enumerate()
            .map(|(i, item)| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{}. ", i + 1),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(item.name.clone()),
                    Span::styled(
                        format!(" ({})", item.effect.describe()),
                        Style::default().fg(Color::Green),
                    ),
                ]))
            })
            .collect()
    };

    let list =
        List::new(items).block(Block::default().borders(Borders::ALL).title("Inventory"));
    frame.render_widget(list, area);
}
