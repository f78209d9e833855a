pub mod gate;

pub use gate::{require_admin, require_teacher, CurrentRole};
