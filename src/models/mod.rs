mod question;
mod summary;

pub use question::{NUM_OPTIONS, Question};
pub use summary::{SessionPhase, Summary};
