// Multi-factor job matching: five independent scorers, weighted aggregation,
// explanation, and a ranking engine over the whole job snapshot.
// Scorers are pure functions; lookup tables are process-wide constants.

pub mod aggregate;
pub mod engine;
pub mod experience;
pub mod explain;
pub mod handlers;
pub mod location;
pub mod role;
pub mod salary;
pub mod skills;
