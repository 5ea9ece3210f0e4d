pub mod ids;
pub mod letter;
pub mod time;

pub use ids::*;
pub use letter::*;
pub use time::*;
