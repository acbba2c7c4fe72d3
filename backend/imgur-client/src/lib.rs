pub mod config;
pub mod credentials;
pub mod endpoints;
pub mod error;
pub mod oauth2;
pub mod processor;
pub mod transport;

mod imgur_client;
#[cfg(test)]
mod tests;

pub use imgur_client::ImgurClient;

pub const IMGUR_API_HOST: &str = "api.imgur.com";
pub const IMGUR_API_BASE_URL: &str = const_format::concatcp!("https://", IMGUR_API_HOST, "/3/");
pub const IMGUR_OAUTH2_BASE_URL: &str =
    const_format::concatcp!("https://", IMGUR_API_HOST, "/oauth2/");
