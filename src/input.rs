use crate::snake::Direction::{self, *};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    TogglePause,
    ToggleTheme,
    Restart,
    Quit,
}

pub fn command_for(ev: &KeyEvent) -> Option<Command> {
    if is_ctrl_c(ev) {
        return Some(Command::Quit);
    }

    let cmd = match ev.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Command::Turn(Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Command::Turn(Right),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Command::Turn(Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Command::Turn(Down),
        KeyCode::Esc | KeyCode::Char('p') | KeyCode::Char('P') => Command::TogglePause,
        KeyCode::Char('t') | KeyCode::Char('T') => Command::ToggleTheme,
        KeyCode::Char('r') | KeyCode::Char('R') => Command::Restart,
        KeyCode::Char('q') | KeyCode::Char('Q') => Command::Quit,
        _ => return None,
    };

    Some(cmd)
}

pub fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

/// Terminals report a held key as a stream of presses. Only the first press of a
/// direction key gets through until a different direction key shows up.
#[derive(Default)]
pub struct RepeatFilter {
    last: Option<KeyCode>,
}

impl RepeatFilter {
    pub fn new() -> Self {
        RepeatFilter::default()
    }

    pub fn accept(&mut self, ev: &KeyEvent) -> Option<Command> {
        let cmd = command_for(ev)?;

        if let Command::Turn(_) = cmd {
            if self.last == Some(ev.code) {
                return None;
            }
            self.last = Some(ev.code);
        }

        Some(cmd)
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_wasd_map_to_directions() {
        let table = [
            (KeyCode::Left, Left),
            (KeyCode::Right, Right),
            (KeyCode::Up, Up),
            (KeyCode::Down, Down),
            (KeyCode::Char('a'), Left),
            (KeyCode::Char('d'), Right),
            (KeyCode::Char('w'), Up),
            (KeyCode::Char('S'), Down),
        ];
        for &(code, dir) in table.iter() {
            assert_eq!(command_for(&key(code)), Some(Command::Turn(dir)));
        }
    }

    #[test]
    fn host_commands_ignore_case() {
        for &(lower, upper, cmd) in [
            ('p', 'P', Command::TogglePause),
            ('t', 'T', Command::ToggleTheme),
            ('r', 'R', Command::Restart),
            ('q', 'Q', Command::Quit),
        ].iter() {
            assert_eq!(command_for(&key(KeyCode::Char(lower))), Some(cmd));
            assert_eq!(command_for(&key(KeyCode::Char(upper))), Some(cmd));
        }
    }

    #[test]
    fn unknown_keys_are_dropped() {
        assert_eq!(command_for(&key(KeyCode::Char('x'))), None);
        assert_eq!(command_for(&key(KeyCode::Tab)), None);
        assert_eq!(command_for(&key(KeyCode::F(5))), None);
    }

    #[test]
    fn ctrl_c_quits() {
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for(&ev), Some(Command::Quit));
        assert_eq!(command_for(&key(KeyCode::Char('c'))), None);
    }

    #[test]
    fn held_key_turns_once() {
        let mut filter = RepeatFilter::new();
        assert_eq!(filter.accept(&key(KeyCode::Up)), Some(Command::Turn(Up)));
        assert_eq!(filter.accept(&key(KeyCode::Up)), None);
        assert_eq!(filter.accept(&key(KeyCode::Up)), None);

        assert_eq!(filter.accept(&key(KeyCode::Left)), Some(Command::Turn(Left)));
        assert_eq!(filter.accept(&key(KeyCode::Up)), Some(Command::Turn(Up)));
    }

    #[test]
    fn commands_are_never_suppressed() {
        let mut filter = RepeatFilter::new();
        filter.accept(&key(KeyCode::Down));
        assert_eq!(filter.accept(&key(KeyCode::Esc)), Some(Command::TogglePause));
        assert_eq!(filter.accept(&key(KeyCode::Esc)), Some(Command::TogglePause));
        assert_eq!(filter.accept(&key(KeyCode::Down)), None);

        filter.reset();
        assert_eq!(filter.accept(&key(KeyCode::Down)), Some(Command::Turn(Down)));
    }
}
