pub mod api;
pub mod credentials;

pub use credentials::CredentialPool;
