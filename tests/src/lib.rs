mod configuration;
mod request;
