//! Inspection service implementations.

mod http;

pub use http::HttpInspectionService;
