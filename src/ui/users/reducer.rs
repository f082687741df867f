//! Reducer for user list state transitions.

use crate::ui::mvi::Reducer;

use super::mutation::UserListMutation;
use super::state::UserListState;

/// Pure transitions over [`UserListState`].
pub struct UserListReducer;

impl Reducer for UserListReducer {
    type State = UserListState;
    type Message = UserListMutation;

    fn reduce(state: Self::State, message: Self::Message) -> Self::State {
        match message {
            UserListMutation::LoadStarted => UserListState {
                is_loading: true,
                ..state
            },

            UserListMutation::LoadFinished { users } => UserListState {
                is_loading: false,
                users,
                ..state
            },

            UserListMutation::LoadFailed => UserListState {
                is_loading: false,
                ..state
            },

            UserListMutation::ValidationFailed {
                name_error,
                email_error,
            } => UserListState {
                name_error,
                email_error,
                ..state
            },

            UserListMutation::ValidationPassed => UserListState {
                name_error: false,
                email_error: false,
                ..state
            },

            UserListMutation::UserAdded { users } => UserListState {
                is_loading: false,
                users,
                name: String::new(),
                email: String::new(),
                ..state
            },

            UserListMutation::Remembered { user } => UserListState {
                recently_deleted: Some(user),
                ..state
            },

            UserListMutation::Forgotten => UserListState {
                recently_deleted: None,
                ..state
            },

            UserListMutation::SearchQueryChanged { query } => UserListState {
                search_query: query,
                ..state
            },

            UserListMutation::UsersReplaced { users } => UserListState { users, ..state },

            UserListMutation::NameChanged { name } => UserListState {
                name,
                name_error: false,
                ..state
            },

            UserListMutation::EmailChanged { email } => UserListState {
                email,
                email_error: false,
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;

    fn ann() -> User {
        User::new(3, "Ann", "ann@x.com")
    }

    #[test]
    fn load_started_only_sets_loading() {
        let state = UserListState {
            users: vec![ann()],
            ..Default::default()
        };
        let new_state = UserListReducer::reduce(state.clone(), UserListMutation::LoadStarted);
        assert!(new_state.is_loading);
        assert_eq!(new_state.users, state.users);
    }

    #[test]
    fn load_finished_replaces_users_and_stops_loading() {
        let state = UserListState {
            is_loading: true,
            ..Default::default()
        };
        let new_state =
            UserListReducer::reduce(state, UserListMutation::LoadFinished { users: vec![ann()] });
        assert!(!new_state.is_loading);
        assert_eq!(new_state.users, vec![ann()]);
    }

    #[test]
    fn load_failed_keeps_users() {
        let state = UserListState {
            is_loading: true,
            users: vec![ann()],
            ..Default::default()
        };
        let new_state = UserListReducer::reduce(state, UserListMutation::LoadFailed);
        assert!(!new_state.is_loading);
        assert_eq!(new_state.users, vec![ann()]);
    }

    #[test]
    fn validation_failed_sets_flags_without_touching_inputs() {
        let state = UserListState {
            name: "typed".into(),
            ..Default::default()
        };
        let new_state = UserListReducer::reduce(
            state,
            UserListMutation::ValidationFailed {
                name_error: false,
                email_error: true,
            },
        );
        assert!(!new_state.name_error);
        assert!(new_state.email_error);
        assert_eq!(new_state.name, "typed");
    }

    #[test]
    fn validation_passed_clears_flags() {
        let state = UserListState {
            name_error: true,
            email_error: true,
            ..Default::default()
        };
        let new_state = UserListReducer::reduce(state, UserListMutation::ValidationPassed);
        assert!(!new_state.has_input_errors());
    }

    #[test]
    fn user_added_resets_inputs() {
        let state = UserListState {
            is_loading: true,
            name: "Ann".into(),
            email: "ann@x.com".into(),
            search_query: "a".into(),
            ..Default::default()
        };
        let new_state =
            UserListReducer::reduce(state, UserListMutation::UserAdded { users: vec![ann()] });
        assert!(!new_state.is_loading);
        assert!(new_state.name.is_empty());
        assert!(new_state.email.is_empty());
        assert_eq!(new_state.users, vec![ann()]);
        assert_eq!(new_state.search_query, "a");
    }

    #[test]
    fn remembered_overwrites_previous_user() {
        let bob = User::new(4, "Bob", "bob@x.com");
        let state = UserListReducer::reduce(
            UserListState::default(),
            UserListMutation::Remembered { user: ann() },
        );
        let state = UserListReducer::reduce(state, UserListMutation::Remembered { user: bob.clone() });
        assert_eq!(state.recently_deleted, Some(bob));

        let state = UserListReducer::reduce(state, UserListMutation::Forgotten);
        assert!(!state.can_undo());
    }

    #[test]
    fn name_change_clears_only_name_error() {
        let state = UserListState {
            name_error: true,
            email_error: true,
            ..Default::default()
        };
        let new_state = UserListReducer::reduce(
            state,
            UserListMutation::NameChanged {
                name: "Ann".into(),
            },
        );
        assert_eq!(new_state.name, "Ann");
        assert!(!new_state.name_error);
        assert!(new_state.email_error);
    }

    #[test]
    fn email_change_clears_only_email_error() {
        let state = UserListState {
            name_error: true,
            email_error: true,
            ..Default::default()
        };
        let new_state = UserListReducer::reduce(
            state,
            UserListMutation::EmailChanged {
                email: "ann@x.com".into(),
            },
        );
        assert_eq!(new_state.email, "ann@x.com");
        assert!(new_state.name_error);
        assert!(!new_state.email_error);
    }

    #[test]
    fn users_replaced_leaves_loading_alone() {
        let state = UserListState {
            is_loading: true,
            ..Default::default()
        };
        let new_state =
            UserListReducer::reduce(state, UserListMutation::UsersReplaced { users: vec![ann()] });
        assert!(new_state.is_loading);
        assert_eq!(new_state.users, vec![ann()]);
    }
}
