// Operations
mod operations;
pub use operations::*;

// Models
mod members;
pub use members::*;

mod teams;
pub use teams::*;

mod stats;
pub use stats::*;

// Search
mod predicates;
pub use predicates::*;

mod paging;
pub use paging::*;

mod search;
pub use search::*;
