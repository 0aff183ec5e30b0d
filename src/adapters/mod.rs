// Adapters layer: concrete implementations of the domain ports (http, form, console host).

pub mod form;
pub mod host;
pub mod http;
