mod utils;
pub mod kind;
pub mod refine;

use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::panic::Location;
use std::thread::ThreadId;

pub use kind::SqlErrorKind;
pub use refine::refine;

/// sql error value carried through generated data access code.
/// one struct tagged by kind, the cause chain owns the original error.
pub struct SqlError {
    kind : SqlErrorKind,
    reason : String,
    state : Option<String>,
    vendor_code : i32,
    source : Option<Box<SqlError>>,
    func_name : String,
    file : &'static str,
    line : i64,
    thread_id : ThreadId,
}

impl SqlError {
    fn build(kind : SqlErrorKind, reason : String, state : Option<String>, vendor_code : i32,
             func_name : String, loc : &'static Location<'static>) -> SqlError {
        SqlError {
            kind,
            reason,
            state,
            vendor_code,
            source : None,
            func_name,
            file : loc.file(),
            line : loc.line() as i64,
            thread_id : std::thread::current().id(),
        }
    }

    #[track_caller]
    pub fn full(kind : SqlErrorKind, reason : String, state : Option<String>, vendor_code : i32) -> SqlError {
        Self::build(kind, reason, state, vendor_code,
            utils::get_source_func_name(2), Location::caller())
    }

    #[track_caller]
    pub fn with_state(kind : SqlErrorKind, reason : String, state : String) -> SqlError {
        Self::build(kind, reason, Some(state), 0,
            utils::get_source_func_name(2), Location::caller())
    }

    #[track_caller]
    pub fn with_reason(kind : SqlErrorKind, reason : String) -> SqlError {
        let state = kind.default_state().map(|s| s.to_string());
        Self::build(kind, reason, state, 0,
            utils::get_source_func_name(2), Location::caller())
    }

    #[deprecated(note = "use with_reason, a reason should always be supplied")]
    #[track_caller]
    pub fn new(kind : SqlErrorKind) -> SqlError {
        let state = kind.default_state().map(|s| s.to_string());
        Self::build(kind, kind.message().to_string(), state, 0,
            utils::get_source_func_name(2), Location::caller())
    }

    /// attach the error this one was produced from. the value is moved, not copied.
    pub fn caused_by(mut self, source : SqlError) -> SqlError {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> SqlErrorKind {self.kind}
    pub fn reason(&self) -> &str {self.reason.as_str()}
    pub fn state(&self) -> Option<&str> {self.state.as_deref()}
    pub fn vendor_code(&self) -> i32 {self.vendor_code}
    pub fn cause(&self) -> Option<&SqlError> {self.source.as_deref()}

    pub fn get_file(&self) -> &'static str {self.file}
    pub fn get_line(&self) -> i64 {self.line}
    pub fn get_func(&self) -> String {self.func_name.clone()}

    pub fn to_result<T, E>(self) -> Result<T, E> where Self: Into<E> {
        Err(self.into())
    }
}

impl Display for SqlError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[kind:{}][state:{}][vendor:{}] - {}",
               self.kind.name(),
               self.state.as_deref().unwrap_or("-"),
               self.vendor_code,
               self.reason)
    }
}

impl Debug for SqlError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} : {}\n \
        file={}:{}\n \
        func={}", self.thread_id, self, self.file, self.line, self.func_name)?;

        if let Some(src) = &self.source {
            write!(f, "\n caused by: {}", src)?;
        }

        std::fmt::Result::Ok(())
    }
}

impl Error for SqlError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.source {
            Some(s) => Some(s.as_ref()),
            None => None,
        }
    }
}
