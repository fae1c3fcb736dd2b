//! Typed gateway endpoints, grouped by the service behind the gateway.

mod assistant;
mod catalog;
mod community;
mod uploads;
mod users;

pub use assistant::ReplyStream;
