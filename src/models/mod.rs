//! Data models for РыбаКоп

mod achievement;
mod catch;
mod city;
mod friend;
mod message;
mod post;
mod user;

pub use achievement::Achievement;
pub use catch::Catch;
pub use city::City;
pub use friend::Friend;
pub use message::{Message, MessageType};
pub use post::Post;
pub use user::User;
