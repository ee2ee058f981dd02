//! Teaching-journal formatting.
//!
//! The "지도 일지" button copies a short Korean log line describing the
//! lesson in progress; a teacher pastes it into whatever record they keep.
//! Formatting is a pure function over the controller's problem snapshot so
//! it can be tested with a fixed timestamp.

use chrono::{DateTime, Datelike, Local, Timelike};
use sansu_core::{Operation, Problem};

/// Renders one journal entry, e.g.
///
/// ```text
/// [2026년 8월 6일 오후 02:30]
/// 지도 내용: 두 자리 수 덧셈(28 + 34) 학습을 진행했습니다.
/// ```
pub fn format_entry(op: Operation, problem: &Problem, when: DateTime<Local>) -> String {
    let (is_pm, hour) = when.hour12();
    let meridiem = if is_pm { "오후" } else { "오전" };

    format!(
        "[{}년 {}월 {}일 {} {:02}:{:02}]\n지도 내용: 두 자리 수 {}({} {} {}) 학습을 진행했습니다.",
        when.year(),
        when.month(),
        when.day(),
        meridiem,
        hour,
        when.minute(),
        op.label(),
        problem.num1,
        op.symbol(),
        problem.num2,
    )
}
