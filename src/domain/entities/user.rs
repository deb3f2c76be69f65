//! User entity.

use crate::domain::calendar_date::CalendarDate;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub birth_date: CalendarDate,
}

/// Input data for creating a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub birth_date: CalendarDate,
}

impl NewUser {
    /// Attaches the store-assigned id.
    pub fn with_id(self, id: i64) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            birth_date: self.birth_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_with_id() {
        let new_user = NewUser {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            birth_date: CalendarDate::parse("1815-12-10").unwrap(),
        };

        let user = new_user.with_id(7);
        assert_eq!(user.id, 7);
        assert_eq!(user.name, "Ada");
        assert_eq!(user.birth_date.format(), "1815-12-10");
    }
}
