pub use super::auth_token::Entity as AuthToken;
pub use super::booking::Entity as Booking;
pub use super::hotel::Entity as Hotel;
pub use super::room::Entity as Room;
pub use super::user::Entity as User;
