/// taxonomy of sql error kinds used by generated data access code.
/// callers must branch on the kind, not on the SQLSTATE string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SqlErrorKind {
    Generic,
    IntegrityConstraintViolation,
    Deadlock,
    Timeout,
    NotSingleRow,
    NoRowFound,
}

impl SqlErrorKind {
    /// placeholder reason used when the caller supplies none.
    pub fn message(&self) -> &'static str {
        match self {
            SqlErrorKind::Generic => "Sql exception has occured.",
            SqlErrorKind::IntegrityConstraintViolation => "Integrity constraint exception has occured.",
            SqlErrorKind::Deadlock => "Deadlock exception has occured.",
            SqlErrorKind::Timeout => "Timeout exception has occured.",
            SqlErrorKind::NotSingleRow => "Not single row exception has occured.",
            SqlErrorKind::NoRowFound => "No row found exception has occured.",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SqlErrorKind::Generic => "SqlErrorKind::Generic",
            SqlErrorKind::IntegrityConstraintViolation => "SqlErrorKind::IntegrityConstraintViolation",
            SqlErrorKind::Deadlock => "SqlErrorKind::Deadlock",
            SqlErrorKind::Timeout => "SqlErrorKind::Timeout",
            SqlErrorKind::NotSingleRow => "SqlErrorKind::NotSingleRow",
            SqlErrorKind::NoRowFound => "SqlErrorKind::NoRowFound",
        }
    }

    /// SQLSTATE applied when no state is supplied by the caller.
    /// only NoRowFound carries one. do not branch on it.
    pub fn default_state(&self) -> Option<&'static str> {
        match self {
            SqlErrorKind::NoRowFound => Some("00100"),
            _ => None,
        }
    }
}
