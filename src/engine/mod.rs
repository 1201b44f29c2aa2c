pub mod book;
pub mod dutch;
pub mod hedge;
pub mod resolver;

pub use book::{Book, Outcome, Selection};
pub use hedge::{compute_hedge, BackLayInput, BonusMode, HedgeResult};
pub use resolver::{resolve_stakes, StakeResolutionRequest};
