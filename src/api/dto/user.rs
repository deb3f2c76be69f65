//! DTOs for user endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::calendar_date::CalendarDate;
use crate::domain::entities::{NewUser, User};

/// Body of `POST /users`. A `user_id` sent by the client is ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 255))]
    pub user_name: String,

    #[validate(email, length(max = 255))]
    pub user_email: String,

    pub user_bdate: CalendarDate,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        NewUser {
            name: req.user_name,
            email: req.user_email,
            birth_date: req.user_bdate,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user_id: i64,
    pub user_name: String,
    pub user_email: String,
    pub user_bdate: CalendarDate,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            user_name: user.name,
            user_email: user.email,
            user_bdate: user.birth_date,
        }
    }
}
