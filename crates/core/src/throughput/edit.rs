use super::engine::authoritative_target;
use super::types::{FieldEdit, ThroughputConfiguration};

/// Value substituted for input that does not start with a number.
pub const ZERO_THROUGHPUT: u64 = 0;

/// Parses raw text from a throughput input.
///
/// Reads the leading run of digits after optional whitespace and an optional
/// `+`, ignoring anything that follows (`"12abc"` is 12). Input with no leading
/// digits, or a negative number, yields [`ZERO_THROUGHPUT`]. Values that do not
/// fit saturate at `u64::MAX`. Typing is never blocked, so this never fails.
pub fn parse_throughput_input(raw: &str) -> u64 {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let digits = unsigned
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| u64::from(b - b'0'));

    let mut parsed = None;
    for digit in digits {
        let current = parsed.unwrap_or(0u64);
        parsed = Some(current.saturating_mul(10).saturating_add(digit));
    }
    parsed.unwrap_or(ZERO_THROUGHPUT)
}

/// Resolves an edit without applying it.
///
/// The parsed value goes to the authoritative field, which is not necessarily
/// the one the user is looking at.
pub fn on_field_edit(config: &ThroughputConfiguration, raw: &str) -> FieldEdit {
    FieldEdit {
        target: authoritative_target(config),
        value: parse_throughput_input(raw),
    }
}

impl ThroughputConfiguration {
    /// Parses `raw` and writes it to the authoritative field.
    pub fn apply_edit(&mut self, raw: &str) -> FieldEdit {
        let edit = on_field_edit(self, raw);
        self.set_value(edit.target, edit.value);
        edit
    }
}
