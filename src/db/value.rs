//! Trait abstraction for database values.
//!
//! Result tables hold text. This module defines how a driver value becomes
//! that text, so the materializer stays backend-agnostic.

use std::fmt::Debug;

use mysql::Value;

/// Trait for driver values that can be captured as table cells.
pub trait DatabaseValue: Debug {
    /// Textual representation used for table cells. NULL renders as "".
    fn to_text(&self) -> String;

    /// Get type name for debugging/error messages.
    fn type_name(&self) -> &'static str;
}

impl DatabaseValue for Value {
    fn to_text(&self) -> String {
        match self {
            Value::NULL => String::new(),
            Value::Bytes(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            Value::Int(i) => i.to_string(),
            Value::UInt(u) => u.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Double(d) => d.to_string(),
            Value::Date(year, month, day, hour, minute, second, micros) => {
                let mut text = format!("{:04}-{:02}-{:02}", year, month, day);
                if (*hour, *minute, *second, *micros) != (0, 0, 0, 0) {
                    text.push_str(&format!(" {:02}:{:02}:{:02}", hour, minute, second));
                    if *micros > 0 {
                        text.push_str(&format!(".{:06}", micros));
                    }
                }
                text
            }
            Value::Time(negative, days, hours, minutes, seconds, micros) => {
                let sign = if *negative { "-" } else { "" };
                let hours = u64::from(*days) * 24 + u64::from(*hours);
                let mut text = format!("{}{:02}:{:02}:{:02}", sign, hours, minutes, seconds);
                if *micros > 0 {
                    text.push_str(&format!(".{:06}", micros));
                }
                text
            }
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Value::NULL => "null",
            Value::Bytes(_) => "bytes",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Float(_) => "float",
            Value::Double(_) => "double",
            Value::Date(..) => "date",
            Value::Time(..) => "time",
        }
    }
}
