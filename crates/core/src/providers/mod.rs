pub mod traits;

// Remote catalog implementations
pub mod http;
