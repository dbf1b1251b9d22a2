mod cookie;
mod db;
mod extractor;
mod middleware;

pub use cookie::{session_cookie, session_token, SESSION_COOKIE};
pub use extractor::SessionUser;
pub use middleware::resolve_session;
