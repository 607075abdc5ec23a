use bitflags::bitflags;
use sweeper_core::{Action, Mode};

bitflags! {
    /// Mirrors the `MouseEvent.buttons` bitmask.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub(crate) struct MouseButtons: u16 {
        const LEFT    = 1;
        const RIGHT   = 1 << 1;
        const MIDDLE  = 1 << 2;
        const BACK    = 1 << 3;
        const FORWARD = 1 << 4;
    }
}

/// The secondary button always flags, anything else follows the current mode.
pub(crate) fn action_for(buttons: MouseButtons, mode: Mode) -> Action {
    if buttons.contains(MouseButtons::RIGHT) {
        Action::Flag
    } else {
        mode.action()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_button_flags_in_any_mode() {
        assert_eq!(action_for(MouseButtons::RIGHT, Mode::Open), Action::Flag);
        assert_eq!(action_for(MouseButtons::RIGHT, Mode::Flag), Action::Flag);
        assert_eq!(
            action_for(MouseButtons::LEFT | MouseButtons::RIGHT, Mode::Open),
            Action::Flag
        );
    }

    #[test]
    fn primary_button_follows_mode() {
        assert_eq!(action_for(MouseButtons::LEFT, Mode::Open), Action::Open);
        assert_eq!(action_for(MouseButtons::LEFT, Mode::Flag), Action::Flag);
    }

    #[test]
    fn other_buttons_fall_back_to_mode() {
        assert_eq!(action_for(MouseButtons::MIDDLE, Mode::Open), Action::Open);
        assert_eq!(action_for(MouseButtons::empty(), Mode::Open), Action::Open);
        assert_eq!(
            action_for(MouseButtons::from_bits_truncate(1 << 9), Mode::Flag),
            Action::Flag
        );
    }
}
