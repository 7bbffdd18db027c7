mod fixture;
mod match_item;

pub use fixture::*;
pub use match_item::*;
