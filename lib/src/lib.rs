pub use header::{FetchHeader, HeaderOptions, Replacements, RequestHeaderService, SearchHeader};
pub mod header;
pub use params::Params;
pub mod params;
pub use request::{Headers, RequestContext};
pub mod request;
