//! The classification core: Big Five score vectors, the fixed fit-category
//! rule table, the job catalog, and the recommendation assembler — plus the
//! questionnaire scorer and batch ranking the recruiter workflow uses.

pub mod catalog;
pub mod classifier;
pub mod handlers;
pub mod questionnaire;
pub mod ranking;
pub mod recommend;
pub mod rules;
pub mod scores;
