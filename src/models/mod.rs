pub mod column;
pub mod comment;
pub mod details;
pub mod metrics;
pub mod sprint;
pub mod task;
pub mod team;

pub use column::*;
pub use comment::*;
pub use details::*;
pub use metrics::*;
pub use sprint::*;
pub use task::*;
pub use team::*;
