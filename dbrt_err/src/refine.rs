use crate::{SqlError, SqlErrorKind};

/// SQLSTATE class prefix shared by every integrity constraint violation.
pub const STATE_INTEGRITY_PREFIX : &str = "23";
pub const STATE_DEADLOCK : &str = "40001";
pub const STATE_TIMEOUT : &str = "HYT00";

const REASON_INTEGRITY : &str = "データベース制約違反により変更が失敗しました。";
const REASON_DEADLOCK : &str = "データベースデッドロックにより変更が失敗しました。";
const REASON_TIMEOUT : &str = "データベースタイムアウトにより変更が失敗しました。";

/// convert a generic sql error into the taxonomy by inspecting its SQLSTATE.
/// the integrity family is a prefix test, deadlock and timeout are exact matches,
/// everything else is returned unchanged. already refined input is returned as is,
/// so running this twice never nests the cause chain. never fails.
pub fn refine(e : SqlError) -> SqlError {
    if e.kind() != SqlErrorKind::Generic {
        return e;
    }

    let state = match e.state() {
        Some(s) => s.to_string(),
        None => return e,
    };

    let (kind, prefix) = if state.starts_with(STATE_INTEGRITY_PREFIX) {
        (SqlErrorKind::IntegrityConstraintViolation, REASON_INTEGRITY)
    } else if state == STATE_DEADLOCK {
        (SqlErrorKind::Deadlock, REASON_DEADLOCK)
    } else if state == STATE_TIMEOUT {
        (SqlErrorKind::Timeout, REASON_TIMEOUT)
    } else {
        return e;
    };

    let reason = format!("{}{}", prefix, e);
    let vendor_code = e.vendor_code();

    SqlError::full(kind, reason, Some(state), vendor_code).caused_by(e)
}
