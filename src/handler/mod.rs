//! Request handler module
//!
//! Routes requests to the single offset lookup route.

pub mod foodstats;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
