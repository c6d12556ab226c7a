//! Serial number vetting core.
//!
//! Two pure components do the actual work: [`filter`] reduces raw OCR
//! lines to serial number candidates, [`flagger`] judges each candidate
//! against its batch's majority statistics. [`audit`] orchestrates them
//! behind the [`TextSource`](snvet_common::source::TextSource) boundary;
//! [`fs`] is the dump-file adapter for that boundary.

pub mod audit;
pub mod filter;
pub mod flagger;
pub mod fs;
