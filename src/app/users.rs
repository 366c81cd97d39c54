use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{PoisonError, RwLock};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    account: String,
    password: String,
    email: String,
}

impl User {
    pub fn new(
        account: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            account: account.into(),
            password: password.into(),
            email: email.into(),
        }
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn check_password(&self, password: &str) -> bool {
        self.password == password
    }
}

pub trait UserStore: Send + Sync {
    fn find_by_account(&self, account: &str) -> Option<User>;

    fn save(&self, user: User);

    /// Stores `user` unless the account already exists. Returns false, and
    /// leaves the existing user untouched, when the account is taken.
    fn insert_new(&self, user: User) -> bool;
}

#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the single demo account `gugu` / `password`.
    pub fn seeded() -> Self {
        let store = Self::new();
        store.save(User::new("gugu", "password", "gugu@example.com"));
        store
    }
}

impl UserStore for InMemoryUserStore {
    fn find_by_account(&self, account: &str) -> Option<User> {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(account)
            .cloned()
    }

    fn save(&self, user: User) {
        self.users
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(user.account.clone(), user);
    }

    fn insert_new(&self, user: User) -> bool {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        match users.entry(user.account.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(user);
                true
            }
        }
    }
}
