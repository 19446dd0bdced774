mod digest;
mod get;
mod list;
mod mine;
mod pending;
mod random;
mod search;
mod service;

pub use service::ContentQueryService;
