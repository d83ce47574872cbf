//! Applicant store — persisted applicants with their Big Five scores, and the
//! endpoints that register and analyze them.

pub mod handlers;
pub mod store;
