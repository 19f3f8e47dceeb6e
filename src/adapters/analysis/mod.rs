//! Analysis service adapters.
//!
//! - `HttpAnalysisService` - multipart upload over reqwest
//! - `MockAnalysisService` - scripted, in-process (testing/development)

mod http_analysis_service;
mod mock_analysis_service;

pub use http_analysis_service::HttpAnalysisService;
pub use mock_analysis_service::{MockAnalysisService, MockResponse, ECHO_MESSAGE};
