use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

// Rows are serialized verbatim as API responses, so the row structs carry
// Serialize and ToSchema directly.

#[derive(Queryable, Selectable, Debug, Clone, Serialize, ToSchema)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Opaque session token this user is bound to
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub session_id: Uuid,
}

#[derive(Queryable, Selectable, Debug, Clone, Serialize, ToSchema)]
#[diesel(table_name = crate::schema::meals)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Meal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub is_on_diet: bool,
    /// Meal time as epoch milliseconds, as supplied by the client
    pub date: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::meals)]
pub struct NewMeal<'a> {
    pub user_id: Uuid,
    pub name: &'a str,
    pub description: &'a str,
    pub is_on_diet: bool,
    pub date: i64,
}
