// Veracity: fake-news text classification over CSV corpora
//
// This is the library root. Each module corresponds to one stage of the
// classification pipeline: load → split → vectorize → fit → report.

pub mod config;
pub mod data;
pub mod features;
pub mod model;
pub mod pipeline;
pub mod report;
