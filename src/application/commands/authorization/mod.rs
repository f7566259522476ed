mod context;
mod exchange;
mod prepare;
mod redirect;
mod resolve;
mod service;

pub use exchange::ConsumeCodeCommand;
pub use prepare::PrepareAuthorizationQuery;
pub use redirect::{Callback, RedirectEncoder, ResponseMode};
pub use resolve::ResolveAuthorizationCommand;
pub use service::AuthorizationService;
