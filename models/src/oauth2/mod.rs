pub mod grant;
pub mod token;

pub use grant::{GrantType, OAuth2ResponseType};
pub use token::{OAuth2Token, TokenResponse};
