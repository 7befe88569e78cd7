pub mod credentials;
pub mod monnify;

pub use credentials::MonnifyCredentials;
pub use monnify::MonnifyClient;
