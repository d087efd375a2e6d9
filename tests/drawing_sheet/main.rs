//! Drawing sheet end-to-end suite
//!
//! Drives the public drawflags API the way a host does across one drawing's
//! lifecycle: form submit, pre-create, pre-update and the refresh decision.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test drawing_sheet
//! ```

// Test modules
mod test_utils;

mod document_flow;
mod fanout_properties;
mod normalizer_scenarios;
mod submit_flow;
