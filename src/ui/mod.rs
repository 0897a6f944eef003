//! Terminal presentation layer. Reads state snapshots and the battle
//! log; never mutates game state.

#![allow(unused_imports)]

pub mod battle_scene;
pub mod stats_panel;
pub mod store_panel;

pub use battle_scene::*;
pub use stats_panel::*;
pub use store_panel::*;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::game_state::GameState;

/// Draws the whole screen from a read-only projection of the state.
pub fn draw_ui(frame: &mut Frame, state: &GameState, store_focused: bool) {
    let snapshot = state.snapshot();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(3)])
        .split(frame.size());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(outer[0]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Min(4),
            Constraint::Length(state.catalog.len() as u16 + 2),
        ])
        .split(columns[0]);

    draw_player_panel(frame, left[0], &snapshot.player);
    draw_inventory(frame, left[1], &snapshot.inventory);
    draw_store(
        frame,
        left[2],
        &state.catalog,
        snapshot.player.coins,
        store_focused,
    );

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(4)])
        .split(columns[1]);

    match snapshot.outcome {
        Some(outcome) => draw_outcome_banner(frame, right[0], outcome),
        None => draw_enemy_card(
            frame,
            right[0],
            snapshot.current_enemy.as_ref(),
            snapshot.enemies_remaining,
        ),
    }
    draw_battle_log(frame, right[1], &state.battle_log);

    draw_footer(frame, outer[1], store_focused);
}

fn draw_footer(frame: &mut Frame, area: ratatui::layout::Rect, store_focused: bool) {
    let hints = if store_focused {
        "[1-9] buy | [b/Esc] leave store | [q] quit"
    } else {
        "[a] attack | [p] pass | [1-9] use item | [b] store | [f] flee | [q] quit"
    };
    let footer = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(Color::DarkGray),
    )))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
