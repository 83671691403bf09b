//! Stalk Pattern Catalog
//!
//! The fixed set of generative shapes a price window can follow. Each shape
//! is plain data: ordered phases, each with a length range and a multiplier
//! range applied to the base price.
//!
//! ## Shapes
//!
//! ```text
//! fluctuating  rise | dip | rise | dip | rise
//! large-spike  decline | rise surge PEAK surge fade | slump
//! decreasing   decline ..............................
//! small-spike  decline | rise rise surge surge surge | decline
//! steady       drift ................................
//! ```

mod catalog;
mod error;
mod phase;
mod shape;

pub use catalog::{
    BasePriceRange, DECREASING, FLUCTUATING, LARGE_SPIKE, MAX_BASE_PRICES, PatternCatalog,
    SMALL_SPIKE, STEADY,
};
pub use error::{CatalogError, CatalogResult};
pub use phase::{MultiplierRange, PhaseSpec, Slope};
pub use shape::{ShapeLayout, ShapeSpec};
