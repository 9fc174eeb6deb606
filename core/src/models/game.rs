use scoreboard_common::error::{Field, ModelResult};
use scoreboard_common::field::SingleShot;
use scoreboard_common::validate;

#[derive(Debug, Clone)]
pub struct Game {
    title: SingleShot<String>,
}

impl Game {
    pub fn new(title: impl Into<String>) -> ModelResult<Self> {
        let mut game = Self {
            title: SingleShot::new(),
        };
        game.set_title(title)?;
        Ok(game)
    }

    pub fn title(&self) -> &str {
        self.title.get().map(String::as_str).unwrap_or_default()
    }

    /// Assigns the title.
    ///
    /// The value is validated first, so an empty title reports a validation
    /// error even on a game that already has one. Any valid write after
    /// construction fails with `ImmutableField`.
    pub fn set_title(&mut self, title: impl Into<String>) -> ModelResult<()> {
        let title: String = title.into();
        validate::title(&title)?;
        self.title.set(Field::Title, title)
    }
}
