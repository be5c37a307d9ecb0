pub mod codec;
pub mod generator;
pub mod mailer;
pub mod roster;
pub mod store;

pub use crate::domain::model::{Assignment, Blacklist, OutboundEmail, Pairing, Participant};
pub use crate::domain::ports::{Mailer, Storage};
pub use crate::utils::error::Result;
