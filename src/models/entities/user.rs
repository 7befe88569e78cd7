use chrono::NaiveDateTime;
use diesel::{Identifiable, Insertable, Queryable};
use serde::Serialize;

#[derive(Debug, Clone, Queryable, Identifiable, Serialize)]
#[diesel(table_name = crate::schema::users)]
pub struct User {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub mobile_no: String,
    pub bvn: String,
    pub nin: String,
    pub dob: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub mobile_no: &'a str,
    pub bvn: &'a str,
    pub nin: &'a str,
    pub dob: &'a str,
    pub password_hash: &'a str,
}
