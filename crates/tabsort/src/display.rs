//! Cell presentation.

use std::borrow::Cow;

use crate::value::Value;

/// Text shown in place of a null cell.
pub const NULL_PLACEHOLDER: &str = "——";

/// Formats a cell value for display.
///
/// Null and missing values show as [`NULL_PLACEHOLDER`]; everything else
/// shows its canonical string form. This only affects what is rendered;
/// searching and sorting always see the raw value.
///
/// ```
/// use tabsort::{display, Number, Value};
///
/// assert_eq!(display::display(&Value::None), "——");
/// assert_eq!(display::display(&Value::Number(Number::I64(30))), "30");
/// ```
pub fn display<'a>(value: &Value<'a>) -> Cow<'a, str> {
    value.to_text().unwrap_or(Cow::Borrowed(NULL_PLACEHOLDER))
}
