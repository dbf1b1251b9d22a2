use crate::db::DbPool;
use crate::models::User;
use crate::schema::users;
use diesel::prelude::*;
use uuid::Uuid;

pub async fn get_user_by_session(pool: &DbPool, session_id: Uuid) -> Option<User> {
    let mut conn = pool.get().ok()?;

    users::table
        .filter(users::session_id.eq(session_id))
        .select(User::as_select())
        .first(&mut conn)
        .ok()
}
