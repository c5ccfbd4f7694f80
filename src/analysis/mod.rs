pub mod aggregate;
pub mod compare;
pub mod filter;
pub mod predicate;
pub mod rankings;
pub mod search;
