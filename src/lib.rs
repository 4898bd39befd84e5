pub mod config;
pub mod error;
pub mod math;
pub mod multi_outline;
pub mod operations;
pub mod outline;
pub mod region;
pub mod source;

pub use error::{MultiOutlineError, Result};
pub use multi_outline::{DropCause, DroppedCandidate, MergeReport, MultiOutline};
pub use outline::{MultiRange, RawOutline};
pub use region::{PlanarRegion, RegionOps};
