pub mod init;

pub use dbrt_core as c_core;
pub use dbrt_err as err;
pub use dbrt_bundle as bundle;
pub use dbrt_row as row;

pub mod logger {
    pub use log::debug as log_debug;
    pub use log::info as log_info;
    pub use log::warn as log_warn;
    pub use log::error as log_error;
}
