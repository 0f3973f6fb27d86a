use std::io::Write;

use crate::error::Result;
use crate::greeting::{greeting_word, GreetingKind};

pub const DEFAULT_USER_ID: i32 = 1001;

/// Signature of a function greeting a user on the given output.
pub type GreetFn = fn(&User, &mut dyn Write) -> Result<()>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
    id: i32,
    greeting: GreetingKind,
}

impl User {
    /// Builds a user owning a copy of `name`, failing if it cannot be reserved.
    pub fn try_new(name: &str, id: i32, greeting: GreetingKind) -> Result<User> {
        let mut owned = String::new();
        owned.try_reserve_exact(name.len())?;
        owned.push_str(name);

        Ok(User {
            name: owned,
            id,
            greeting,
        })
    }

    pub fn with_defaults(name: &str) -> Result<User> {
        User::try_new(name, DEFAULT_USER_ID, GreetingKind::Hello)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn greeting(&self) -> GreetingKind {
        self.greeting
    }
}

pub fn greet_user(user: &User, output: &mut dyn Write) -> Result<()> {
    writeln!(
        output,
        "{}, {}! Your ID is {}.",
        greeting_word(user.greeting().tag()),
        user.name(),
        user.id()
    )?;
    Ok(())
}
