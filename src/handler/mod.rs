mod healthz;
mod invoke;
mod metrics;
mod statusz;

pub use {healthz::handler as healthz};
pub use {invoke::handler as invoke};
pub use {metrics::handler as metrics};
pub use {statusz::handler as statusz};
