use rand::Rng;
use serde::{Deserialize, Serialize};

/// Upper bound (inclusive) for randomly generated user ids.
pub const MAX_USER_ID: u32 = 1000;

/// A single user record.
///
/// Records are immutable once built. Equality compares all fields, which is
/// what the repository uses to find an entry to remove.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: u32, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Build a user with an id drawn from `0..=MAX_USER_ID`.
    ///
    /// Ids are not guaranteed to be unique.
    pub fn with_random_id(name: impl Into<String>, email: impl Into<String>) -> Self {
        let id = rand::thread_rng().gen_range(0..=MAX_USER_ID);
        Self::new(id, name, email)
    }

    /// Case-insensitive substring match against name or email.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.email.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_id_stays_in_range() {
        for _ in 0..200 {
            let user = User::with_random_id("Ann", "ann@x.com");
            assert!(user.id <= MAX_USER_ID);
        }
    }

    #[test]
    fn equality_includes_id() {
        let a = User::new(1, "Ann", "ann@x.com");
        let b = User::new(2, "Ann", "ann@x.com");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn query_matches_name_or_email_ignoring_case() {
        let user = User::new(7, "Ann Lee", "ann@Example.com");
        assert!(user.matches_query("ann"));
        assert!(user.matches_query("LEE"));
        assert!(user.matches_query("example"));
        assert!(!user.matches_query("bob"));
    }
}
