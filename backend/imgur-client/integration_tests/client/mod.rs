mod cancellation;
mod endpoints;
mod oauth2;
mod transport;
