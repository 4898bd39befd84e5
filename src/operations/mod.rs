pub mod assemble;
pub mod boolean;
pub mod cluster;
pub mod creation;
