pub mod actor;
pub mod environment;

pub use actor::{Actor, CollisionMesh};
pub use environment::{Environment, StaticEnvironment};
