mod union;

pub use union::Union;
