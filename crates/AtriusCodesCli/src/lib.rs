//! Command-line front end for `atrius-fhir-codes`.
//!
//! The logic lives in [`cli`] so it can be driven from tests with an
//! in-memory writer; `src/bin/fhir-codes.rs` only parses arguments and sets up
//! logging.

pub mod cli;
