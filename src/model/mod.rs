pub mod connection;
pub mod node;

pub use connection::*;
pub use node::*;
