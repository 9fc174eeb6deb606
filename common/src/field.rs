use crate::error::{Field, ModelError, ModelResult};

/// An attribute that may be assigned exactly once.
///
/// Starts out `Unset`; the first successful [`SingleShot::set`] moves it to
/// `Set` and every later attempt fails with [`ModelError::ImmutableField`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SingleShot<T> {
    #[default]
    Unset,
    Set(T),
}

impl<T> SingleShot<T> {
    pub fn new() -> Self {
        Self::Unset
    }

    pub fn set(&mut self, field: Field, value: T) -> ModelResult<()> {
        match self {
            Self::Set(_) => Err(ModelError::ImmutableField(field)),
            Self::Unset => {
                *self = Self::Set(value);
                Ok(())
            }
        }
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Unset => None,
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_first_assignment_only() {
        let mut title: SingleShot<String> = SingleShot::new();
        assert!(!title.is_set());
        assert_eq!(title.get(), None);

        title.set(Field::Title, "Chess".into()).unwrap();
        assert_eq!(title.get().map(String::as_str), Some("Chess"));

        let err = title.set(Field::Title, "Go".into()).unwrap_err();
        assert_eq!(err, ModelError::ImmutableField(Field::Title));
        assert_eq!(title.get().map(String::as_str), Some("Chess"), "value must survive a rejected write");
    }
}
