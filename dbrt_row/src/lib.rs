pub mod users;
pub mod time;

pub use time::convert_timestamp_to_system_time;
pub use users::{UserNameRow, UsersRow};
