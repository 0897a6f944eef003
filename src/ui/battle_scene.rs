use std::collections::VecDeque;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::core::game_state::{CharacterSnapshot, LogEntry, Outcome};
use crate::ui::stats_panel::hp_color;

/// Draws the current enemy card: name, health gauge, and how many more
/// wait in the pool.
pub fn draw_enemy_card(
    frame: &mut Frame,
    area: Rect,
    enemy: Option<&CharacterSnapshot>,
    remaining: usize,
) {
    let block = Block::default().borders(Borders::ALL).title("Enemy");
    match enemy {
        Some(enemy) => {
            let inner = block.inner(area);
            frame.render_widget(block, area);

            let title = Paragraph::new(Line::from(vec![
                Span::styled(
                    enemy.name.clone(),
                    Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  ({} more in the pool)", remaining),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            let title_area = Rect { height: 1, ..inner };
            frame.render_widget(title, title_area);

            let ratio = if enemy.max_hp == 0 {
                0.0
            } else {
                f64::from(enemy.current_hp) / f64::from(enemy.max_hp)
            };
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(hp_color(enemy.current_hp, enemy.max_hp)))
                .ratio(ratio)
                .label(format!("{}/{}", enemy.current_hp, enemy.max_hp));
            let gauge_area = Rect {
                y: inner.y + 1,
                height: 1,
                ..inner
            };
            frame.render_widget(gauge, gauge_area);
        }
        None => {
            let text = Paragraph::new("No enemy in sight...")
                .style(Style::default().fg(Color::DarkGray))
                .block(block)
                .alignment(Alignment::Center);
            frame.render_widget(text, area);
        }
    }
}

/// Draws the scrolling battle log, most recent entries last.
pub fn draw_battle_log(frame: &mut Frame, area: Rect, log: &VecDeque<LogEntry>) {
    let visible = area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = log
        .iter()
        .rev()
        .take(visible)
        .rev()
        .map(|entry| {
            let style = if entry.is_crit {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if entry.is_player_action {
                Style::default()
            } else {
                Style::default().fg(Color::Red)
            };
            Line::from(Span::styled(entry.message.clone(), style))
        })
        .collect();

    let log_widget =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Battle Log"));
    frame.render_widget(log_widget, area);
}

/// Draws the terminal outcome banner.
pub fn draw_outcome_banner(frame: &mut Frame, area: Rect, outcome: Outcome) {
    let (text, color) = match outcome {
        Outcome::Victory => ("VICTORY - press any key", Color::Green),
        Outcome::Defeat => ("DEFEAT - press any key", Color::Red),
        Outcome::Fled => ("FLED - press any key", Color::Yellow),
    };
    let banner = Paragraph::new(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().borders(Borders::ALL))
    .alignment(Alignment::Center);
    frame.render_widget(banner, area);
}
