//! Keyboard mapping
//!
//! Keys are identified by `KeyboardEvent.key` strings so the same table
//! serves the browser listener and scripted native runs.

use crate::sim::{Command, Direction};

/// Map a key name to a command, `None` for keys the game ignores
pub fn command_for_key(key: &str) -> Option<Command> {
    let command = match key {
        "w" | "W" | "ArrowUp" => Command::Move(Direction::Up),
        "a" | "A" | "ArrowLeft" => Command::Move(Direction::Left),
        "s" | "S" | "ArrowDown" => Command::Move(Direction::Down),
        "d" | "D" | "ArrowRight" => Command::Move(Direction::Right),
        " " => Command::Fire,
        "Escape" => Command::Stop,
        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasd_and_space() {
        assert_eq!(command_for_key("w"), Some(Command::Move(Direction::Up)));
        assert_eq!(command_for_key("a"), Some(Command::Move(Direction::Left)));
        assert_eq!(command_for_key("s"), Some(Command::Move(Direction::Down)));
        assert_eq!(command_for_key("d"), Some(Command::Move(Direction::Right)));
        assert_eq!(command_for_key(" "), Some(Command::Fire));
    }

    #[test]
    fn test_arrows_and_escape() {
        assert_eq!(command_for_key("ArrowLeft"), Some(Command::Move(Direction::Left)));
        assert_eq!(command_for_key("ArrowDown"), Some(Command::Move(Direction::Down)));
        assert_eq!(command_for_key("Escape"), Some(Command::Stop));
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        assert_eq!(command_for_key("q"), None);
        assert_eq!(command_for_key("Enter"), None);
        assert_eq!(command_for_key(""), None);
    }
}
