use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{backend::CrosstermBackend, Terminal};

use skirmish::character::{Archetype, Character, PlayerClass};
use skirmish::core::game_state::{GameState, Intent};
use skirmish::core::turn::{spawn_enemy_if_needed, take_turn, TurnError};
use skirmish::items::types::default_catalog;
use skirmish::ui;

const USAGE: &str = "Skirmish - Terminal Turn-Based Combat RPG

Usage: skirmish [options]

Options:
  --name NAME        Hero name (default: Hero)
  --class CLASS      warrior | wizard | medic (default: warrior)
  --enemies LIST     Comma-separated pool, e.g. goblin,shadow,zombie
  --seed N           Seed the RNG for a reproducible session
  --version, -v      Print version
  --help, -h         Print this help";

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let mut name = "Hero".to_string();
    let mut class = PlayerClass::Warrior;
    let mut pool: Option<Vec<Character>> = None;
    let mut seed: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!("{USAGE}");
                return Ok(());
            }
            "--version" | "-v" => {
                println!("skirmish {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--name" => {
                name = expect_value(&args, &mut i, "--name");
            }
            "--class" => {
                let value = expect_value(&args, &mut i, "--class");
                class = parse_class(&value).unwrap_or_else(|err| bail(&err));
            }
            "--enemies" => {
                let value = expect_value(&args, &mut i, "--enemies");
                pool = Some(parse_enemies(&value).unwrap_or_else(|err| bail(&err)));
            }
            "--seed" => {
                let value = expect_value(&args, &mut i, "--seed");
                seed = Some(
                    value
                        .parse()
                        .unwrap_or_else(|_| bail(&format!("invalid seed: {value}"))),
                );
            }
            other => bail(&format!("unknown option: {other}\n\n{USAGE}")),
        }
        i += 1;
    }

    let state = match pool {
        Some(pool) => GameState::new(name, class, pool, default_catalog()),
        None => GameState::default_encounter(name, class),
    };

    match seed {
        Some(seed) => run_session(state, StdRng::seed_from_u64(seed)),
        None => run_session(state, rand::thread_rng()),
    }
}

fn expect_value(args: &[String], i: &mut usize, flag: &str) -> String {
    *i += 1;
    match args.get(*i) {
        Some(value) => value.clone(),
        None => bail(&format!("{flag} needs a value")),
    }
}

fn bail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn parse_class(value: &str) -> Result<PlayerClass, String> {
    match value.to_lowercase().as_str() {
        "warrior" => Ok(PlayerClass::Warrior),
        "wizard" => Ok(PlayerClass::Wizard),
        "medic" => Ok(PlayerClass::Medic),
        other => Err(format!("unknown class: {other} (warrior | wizard | medic)")),
    }
}

fn parse_enemies(value: &str) -> Result<Vec<Character>, String> {
    let mut pool = Vec::new();
    let mut goblins = 0;
    for token in value.split(',') {
        let archetype = match token.trim().to_lowercase().as_str() {
            "goblin" => Archetype::Goblin,
            "shadow" => Archetype::Shadow,
            "zombie" => Archetype::Zombie,
            other => return Err(format!("unknown enemy: {other} (goblin | shadow | zombie)")),
        };
        // Keep duplicate names tellable apart in the log
        let name = if archetype == Archetype::Goblin {
            goblins += 1;
            if goblins > 1 {
                format!("Goblin {goblins}")
            } else {
                "Goblin".to_string()
            }
        } else {
            archetype.display_name().to_string()
        };
        pool.push(Character::new(name, archetype));
    }
    if pool.is_empty() {
        return Err("--enemies needs at least one enemy".to_string());
    }
    Ok(pool)
}

/// Runs one interactive session: draw, wait for a key, map it to an
/// intent, resolve the turn. The core only ever sees typed intents;
/// unrecognized keys simply re-prompt.
fn run_session<R: Rng>(mut state: GameState, mut rng: R) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    spawn_enemy_if_needed(&mut state, &mut rng);
    let mut store_focused = false;

    loop {
        terminal.draw(|frame| ui::draw_ui(frame, &state, store_focused))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if state.is_over() {
            // Outcome banner is up; any key leaves
            break;
        }

        let mut intent = None;
        match key.code {
            KeyCode::Char('q') => break,
            KeyCode::Esc => {
                if store_focused {
                    store_focused = false;
                } else {
                    break;
                }
            }
            KeyCode::Char('b') => store_focused = !store_focused,
            KeyCode::Char('a') if !store_focused => intent = Some(Intent::Attack),
            KeyCode::Char('p') if !store_focused => intent = Some(Intent::Pass),
            KeyCode::Char('f') if !store_focused => intent = Some(Intent::Flee),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                intent = Some(if store_focused {
                    Intent::Buy(index)
                } else {
                    Intent::UseItem(index)
                });
            }
            _ => {}
        }

        if let Some(intent) = intent {
            match take_turn(&mut state, intent, &mut rng) {
                Ok(_) => {}
                Err(TurnError::Store(err)) => {
                    state.add_log_entry(err.to_string(), false, true);
                }
                Err(TurnError::BattleOver) => {}
            }
            spawn_enemy_if_needed(&mut state, &mut rng);
        }
    }

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
