pub mod rest;
pub mod types;

pub use rest::WebhookEndpoints;
pub use types::{
    CreateWebhookEndpointInput, CreateWebhookEndpointResponse, PortalAccessUrl, WebhookEndpoint,
    WebhookEvent, WebhookSecret,
};
