use crate::error::ApiError;
use crate::models::entities::user::{NewUser, User};
use crate::schema::users;
use diesel::prelude::*;

pub struct UserRepository;

impl UserRepository {
    pub fn create(conn: &mut SqliteConnection, new_user: NewUser) -> Result<User, ApiError> {
        diesel::insert_into(users::table)
            .values(&new_user)
            .get_result::<User>(conn)
            .map_err(Into::into)
    }

    pub fn find_by_id(conn: &mut SqliteConnection, user_id: i32) -> Result<Option<User>, ApiError> {
        users::table
            .find(user_id)
            .first::<User>(conn)
            .optional()
            .map_err(Into::into)
    }

    pub fn find_by_email(
        conn: &mut SqliteConnection,
        user_email: &str,
    ) -> Result<Option<User>, ApiError> {
        users::table
            .filter(users::email.eq(user_email))
            .first::<User>(conn)
            .optional()
            .map_err(Into::into)
    }

    pub fn find_by_mobile(
        conn: &mut SqliteConnection,
        mobile_no: &str,
    ) -> Result<Option<User>, ApiError> {
        users::table
            .filter(users::mobile_no.eq(mobile_no))
            .first::<User>(conn)
            .optional()
            .map_err(Into::into)
    }
}
