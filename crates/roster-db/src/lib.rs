pub mod connection;
pub use connection::Connection;

pub mod results;
pub mod schema;

pub mod members;
pub mod teams;
pub mod search;
pub mod stats;
pub mod bulk;
