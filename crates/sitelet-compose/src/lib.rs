//! Tenant resolution and page composition.
//!
//! The two request-scoped algorithms of the public site renderer:
//!
//! - [`TenantResolver`] maps an inbound host string to exactly one active
//!   [`Site`](sitelet_model::Site), via an ordered chain of named matching
//!   strategies (custom domain, custom domain with `www.`, reserved-suffix
//!   subdomain, literal slug).
//! - [`compose_page`] selects the page for a request path and assembles the
//!   full document body: header with nav, the page's rendered block
//!   sequence, an optional product grid, and the footer.
//!
//! Both are side-effect free with respect to the store (reads only) and
//! deterministic for a given data snapshot, which makes the per-host
//! resolution cache a plain read-through TTL map.

mod composer;
mod host_cache;
mod nav;
mod resolver;

pub use composer::{ComposedPage, compose_page, select_home_page};
pub use nav::{NavEntry, nav_entries};
pub use resolver::{EXCLUDED_HOSTS, ResolveError, ResolverConfig, TenantResolver, normalize_host};
