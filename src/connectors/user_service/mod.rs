mod client;
mod connector;
pub mod init;
pub mod mock;
mod types;

pub use client::UserServiceClient;
pub use connector::UserServiceConnector;
pub use init::init;
pub use types::UserProfile;

#[cfg(test)]
mod tests;
