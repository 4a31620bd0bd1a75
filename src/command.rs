use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key press translated into something the game understands
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Space,
    Restart,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) | (_, KeyCode::Esc) => Some(Command::Quit),
            (m, code) if normal_modifiers.contains(m) => match code {
                KeyCode::Char('w' | 'W') | KeyCode::Up => Some(Command::Up),
                KeyCode::Char('s' | 'S') | KeyCode::Down => Some(Command::Down),
                KeyCode::Char('a' | 'A') | KeyCode::Left => Some(Command::Left),
                KeyCode::Char('d' | 'D') | KeyCode::Right => Some(Command::Right),
                KeyCode::Char(' ') => Some(Command::Space),
                KeyCode::Char('r' | 'R') => Some(Command::Restart),
                _ => None,
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Esc, KeyModifiers::NONE, Some(Command::Quit))]
    #[case(KeyCode::Char('c'), KeyModifiers::CONTROL, Some(Command::Quit))]
    #[case(KeyCode::Char('c'), KeyModifiers::NONE, None)]
    #[case(KeyCode::Up, KeyModifiers::NONE, Some(Command::Up))]
    #[case(KeyCode::Char('w'), KeyModifiers::NONE, Some(Command::Up))]
    #[case(KeyCode::Char('W'), KeyModifiers::SHIFT, Some(Command::Up))]
    #[case(KeyCode::Down, KeyModifiers::NONE, Some(Command::Down))]
    #[case(KeyCode::Char('s'), KeyModifiers::NONE, Some(Command::Down))]
    #[case(KeyCode::Left, KeyModifiers::NONE, Some(Command::Left))]
    #[case(KeyCode::Char('a'), KeyModifiers::NONE, Some(Command::Left))]
    #[case(KeyCode::Right, KeyModifiers::NONE, Some(Command::Right))]
    #[case(KeyCode::Char('d'), KeyModifiers::NONE, Some(Command::Right))]
    #[case(KeyCode::Char(' '), KeyModifiers::NONE, Some(Command::Space))]
    #[case(KeyCode::Char('r'), KeyModifiers::NONE, Some(Command::Restart))]
    #[case(KeyCode::Char('R'), KeyModifiers::SHIFT, Some(Command::Restart))]
    #[case(KeyCode::Char('r'), KeyModifiers::CONTROL, None)]
    #[case(KeyCode::Char('h'), KeyModifiers::NONE, None)]
    #[case(KeyCode::Enter, KeyModifiers::NONE, None)]
    fn test_from_key_event(
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
        #[case] cmd: Option<Command>,
    ) {
        assert_eq!(
            Command::from_key_event(KeyEvent::new(code, modifiers)),
            cmd
        );
    }
}
