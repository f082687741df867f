//! Plain-text rendering of the user list.

use std::fmt::Write;

use crate::ui::users::{UserEffect, UserListState};

/// Render the list with its inputs and flags.
pub fn render_state(state: &UserListState) -> String {
    let mut out = String::new();

    if state.is_filtered() {
        let _ = writeln!(out, "Users matching '{}':", state.search_query);
    } else {
        let _ = writeln!(out, "Users:");
    }

    if state.users.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for (position, user) in state.users.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:>2}. {} <{}> #{}",
            position + 1,
            user.name,
            user.email,
            user.id
        );
    }

    let _ = writeln!(
        out,
        "Name: {:?}{}",
        state.name,
        if state.name_error {
            "  ! Name cannot be empty"
        } else {
            ""
        }
    );
    let _ = write!(
        out,
        "Email: {:?}{}",
        state.email,
        if state.email_error {
            "  ! Invalid email"
        } else {
            ""
        }
    );
    if state.is_loading {
        let _ = write!(out, "\n(loading...)");
    }
    out
}

/// Render a snackbar, pointing at `undo` when it carries the undo action.
pub fn render_effect(effect: &UserEffect) -> String {
    match effect.action_label() {
        Some(label) if effect.is_undo_action() => {
            format!("» {}  [{}: type 'undo']", effect.text(), label)
        }
        Some(label) => format!("» {}  [{}]", effect.text(), label),
        None => format!("» {}", effect.text()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;

    #[test]
    fn empty_state_renders_placeholder() {
        let text = render_state(&UserListState::default());
        assert!(text.starts_with("Users:\n  (none)"));
        assert!(!text.contains("loading"));
    }

    #[test]
    fn renders_positions_and_errors() {
        let state = UserListState {
            users: vec![User::new(9, "Ann", "ann@x.com")],
            name_error: true,
            search_query: "an".into(),
            ..Default::default()
        };
        let text = render_state(&state);
        assert!(text.contains("Users matching 'an':"));
        assert!(text.contains(" 1. Ann <ann@x.com> #9"));
        assert!(text.contains("Name cannot be empty"));
        assert!(!text.contains("Invalid email"));
    }

    #[test]
    fn undo_effect_mentions_command() {
        let effect = UserEffect::with_action("User deleted", "Undo");
        assert_eq!(render_effect(&effect), "» User deleted  [Undo: type 'undo']");
        assert_eq!(render_effect(&UserEffect::message("Users loaded")), "» Users loaded");
    }
}
