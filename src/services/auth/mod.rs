pub mod authenticator;
pub mod factory;
pub mod static_credentials;

pub use authenticator::{AuthError, Authenticator};
pub use factory::build_authenticator;
pub use static_credentials::{CredentialsError, StaticCredentials};
