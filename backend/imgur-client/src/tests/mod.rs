// Unit tests for imgur-client, grouped by module.

mod helpers;
mod oauth2;
mod processor;
mod token_store;
