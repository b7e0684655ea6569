pub mod consistency;
pub mod dataset;
pub mod lines;
pub mod load;
pub mod matchup;
pub mod query;
pub mod report;
pub mod stats;
pub mod teams;
pub mod tips;
