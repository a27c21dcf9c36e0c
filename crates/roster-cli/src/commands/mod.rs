mod members;
pub use members::*;

mod teams;
pub use teams::*;

mod search;
pub use search::*;

mod stats;
pub use stats::*;

mod bulk;
pub use bulk::*;
