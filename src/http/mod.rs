//! HTTP protocol layer module
//!
//! Response builders, decoupled from the lookup logic.

pub mod response;

pub use response::{
    build_404_response, build_405_response, build_empty_object_response,
    build_file_error_response, build_json_response,
};
