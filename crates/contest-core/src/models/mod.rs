// ABOUTME: Data contracts shared by the session core, token store, and auth gateway
// ABOUTME: Re-exports User, Role, UserId, Credentials, and AuthSession

mod credentials;
mod user;

pub use credentials::{AuthSession, Credentials};
pub use user::{Role, RoleParseError, User, UserId};
