mod build_region;

pub use build_region::BuildRegion;
