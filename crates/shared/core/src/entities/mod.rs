mod candidate;
mod observation;
mod reduction;
mod statistics;

pub use candidate::{CandidateSequence, CandidateSet};
pub use observation::ObservationVector;
pub use reduction::{ReduceMode, Reduction};
pub use statistics::StatisticsBundle;
