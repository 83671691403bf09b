use stalk_core::{CandidateSet, ObservationVector};

/// Port for anything that turns observations into a grouped candidate set
pub trait CandidateSource: Send + Sync {
    /// Every full series consistent with the observations, grouped by shape.
    ///
    /// An empty set is a valid answer ("no consistent pattern").
    fn enumerate(&self, observations: &ObservationVector) -> CandidateSet;

    /// Names of the shapes this source can produce, in catalog order
    fn shape_names(&self) -> Vec<String>;
}
