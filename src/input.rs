use std::collections::HashMap;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use log::debug;

use crate::game::{Game, RotateDirection};

/// Logical commands the frontend feeds into the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Rotate(RotateDirection),
    Thrust,
    Slowdown,
    Shoot,
    OpenShop,
    ShopUp,
    ShopDown,
    ShopConfirm,
    CloseShop,
    Quit,
}

/// Key bindings. Arrow keys drive the ship, or the shop cursor while the
/// shop is open.
pub fn command_for_key(code: KeyCode, shop_open: bool) -> Option<Command> {
    if shop_open {
        return match code {
            KeyCode::Up => Some(Command::ShopUp),
            KeyCode::Down => Some(Command::ShopDown),
            KeyCode::Enter => Some(Command::ShopConfirm),
            KeyCode::Esc => Some(Command::CloseShop),
            KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        };
    }
    match code {
        KeyCode::Left => Some(Command::Rotate(RotateDirection::Left)),
        KeyCode::Right => Some(Command::Rotate(RotateDirection::Right)),
        KeyCode::Up => Some(Command::Thrust),
        KeyCode::Down => Some(Command::Slowdown),
        KeyCode::Char(' ') => Some(Command::Shoot),
        KeyCode::Char('s') => Some(Command::OpenShop),
        KeyCode::Char('q') => Some(Command::Quit),
        _ => None,
    }
}

pub fn command_for_event(event: &Event, shop_open: bool) -> Option<Command> {
    match event {
        Event::Key(KeyEvent { code, kind: KeyEventKind::Press, .. }) => command_for_key(*code, shop_open),
        _ => None,
    }
}

/// Applies a command to the game. Returns `false` when the player asked to quit.
pub fn dispatch(game: &mut Game, command: Command) -> bool {
    debug!("Command: {:?}", command);
    match command {
        Command::Rotate(direction) => game.rotate(direction),
        Command::Thrust => game.thrust(),
        Command::Slowdown => game.slowdown(),
        Command::Shoot => game.shoot(),
        Command::OpenShop => game.open_shop(),
        Command::ShopUp => game.shop_select_previous(),
        Command::ShopDown => game.shop_select_next(),
        Command::ShopConfirm => {
            game.confirm_shop();
        }
        Command::CloseShop => game.close_shop(),
        Command::Quit => return false,
    }
    true
}

// --- SimulatedInput for headless runs ---
pub struct SimulatedInput {
    events: HashMap<u64, Vec<Event>>,
    current_frame: u64,
}

impl SimulatedInput {
    pub fn new(events: HashMap<u64, Vec<Event>>) -> Self {
        SimulatedInput { events, current_frame: 0 }
    }

    pub fn from_keys(keys: &[(u64, KeyCode)]) -> Self {
        let mut events: HashMap<u64, Vec<Event>> = HashMap::new();
        for &(frame, code) in keys {
            events.entry(frame).or_default().push(Event::Key(code.into()));
        }
        SimulatedInput::new(events)
    }

    /// Scripted session: fly, turn, fire bursts and visit the shop once.
    pub fn demo() -> Self {
        let mut keys = Vec::new();
        for frame in 1..30 {
            keys.push((frame, KeyCode::Up));
        }
        for frame in (30..600).step_by(6) {
            keys.push((frame, KeyCode::Right));
            keys.push((frame, KeyCode::Char(' ')));
        }
        keys.push((240, KeyCode::Char('s')));
        keys.push((241, KeyCode::Down));
        keys.push((242, KeyCode::Enter));
        SimulatedInput::from_keys(&keys)
    }

    pub fn poll(&mut self, frame_count: u64) -> bool {
        self.current_frame = frame_count;
        self.events.get(&frame_count).is_some_and(|queued| !queued.is_empty())
    }

    pub fn read(&mut self) -> Option<Event> {
        let queued = self.events.get_mut(&self.current_frame)?;
        if queued.is_empty() {
            return None;
        }
        Some(queued.remove(0))
    }
}
