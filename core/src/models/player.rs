use scoreboard_common::error::ModelResult;
use scoreboard_common::validate;

#[derive(Debug, Clone)]
pub struct Player {
    username: String,
}

impl Player {
    pub fn new(username: impl Into<String>) -> ModelResult<Self> {
        let username: String = username.into();
        validate::username(&username)?;
        Ok(Self { username })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Renames the player. The old name is kept when the new one is invalid.
    pub fn set_username(&mut self, username: impl Into<String>) -> ModelResult<()> {
        let username: String = username.into();
        validate::username(&username)?;
        self.username = username;
        Ok(())
    }
}
