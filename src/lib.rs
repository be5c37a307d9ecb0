pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, Cli, Command};
pub use core::codec::XorCodec;
pub use core::mailer::{DispatchSummary, Dispatcher, HttpMailer};
pub use core::store::PairingStore;
pub use domain::model::{Assignment, Blacklist, OutboundEmail, Pairing, Participant};
pub use domain::ports::{Mailer, Storage};
pub use utils::error::{Result, SantaError};
