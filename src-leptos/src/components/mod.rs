//! Reusable UI components

mod agent_card;
mod alert;
mod assistant;
mod button;
mod comments;
mod footer;
mod header;
mod media_carousel;
mod modal;
mod progress_bar;

pub use agent_card::AgentCard;
pub use alert::{ErrorAlert, MessageBanner};
pub use assistant::Assistant;
pub use button::{Button, ButtonVariant};
pub use comments::CommentSection;
pub use footer::Footer;
pub use header::Header;
pub use media_carousel::MediaCarousel;
pub use modal::{Modal, ModalType};
pub use progress_bar::ProgressBar;
