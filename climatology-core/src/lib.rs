pub mod aggregate;
pub mod climatology;
pub mod dataset;
pub mod observation;
pub mod scenario;
pub mod units;

pub mod errors;
