use crate::application::app_error::AppError;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Numeric primary key of an entity `T`, assigned by the database.
pub struct Id<T> {
    pub value: i64,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    pub fn new(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Id").field(&self.value).finish()
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Id::new(value)
    }
}

impl<T> TryFrom<String> for Id<T> {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Id::try_from(value.as_str())
    }
}

impl<T> TryFrom<&str> for Id<T> {
    type Error = AppError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value
            .trim()
            .parse::<i64>()
            .map_err(|e| AppError::InvalidId(format!("Invalid id `{}`: {}", value, e)))?;
        Ok(Id::new(value))
    }
}

#[cfg(test)]
mod tests {
    use crate::application::app_error::AppError;
    use crate::domain::entities::id::Id;

    struct TestEntity;

    #[test]
    fn test_id_new() {
        let id: Id<TestEntity> = Id::new(7);
        assert_eq!(id.value, 7)
    }

    #[test]
    fn test_id_try_from_numeric_string() {
        let id: Id<TestEntity> = "42".to_owned().try_into().unwrap();
        assert_eq!(id.value, 42);
    }

    #[test]
    fn test_id_try_from_non_numeric_string() {
        let result: Result<Id<TestEntity>, _> = "abc".to_owned().try_into();
        assert!(matches!(result, Err(AppError::InvalidId(_))));
    }

    #[test]
    fn test_id_try_from_empty_string() {
        let result: Result<Id<TestEntity>, _> = Id::try_from("");
        assert!(result.is_err());
    }

    #[test]
    fn test_id_is_copy_without_entity_bounds() {
        let id: Id<TestEntity> = Id::new(1);
        let copied = id;
        assert_eq!(id, copied);
        assert_eq!(copied.to_string(), "1");
    }
}
