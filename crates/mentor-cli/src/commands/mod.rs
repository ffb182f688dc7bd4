pub mod dispatch;
pub mod insight;
pub mod layout;
pub mod node;
pub mod outline;
pub mod progress;
pub mod schema;
pub mod shared;
pub mod tree;
