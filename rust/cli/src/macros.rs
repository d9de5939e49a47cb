//! Output and record-parsing shortcuts shared by the command handlers.

/// Writes a line, returning [`exit_code::ERROR`](crate::exit_code::ERROR) from the caller when the stream is gone.
///
/// # Examples
///
/// ```ignore
/// write_or_exit!(err, "Error: {}", message);
/// ```
#[macro_export]
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}

/// Parses one JSONL record; a bad line bumps `$skipped`, prints a warning and moves to the next line.
///
/// # Examples
///
/// ```ignore
/// let record: RoundRecord = parse_json_or_continue!(line, err, format!("line {}", n), skipped);
/// ```
#[macro_export]
macro_rules! parse_json_or_continue {
    ($line:expr, $err:expr, $context:expr, $skipped:expr) => {
        match serde_json::from_str($line) {
            Ok(r) => r,
            Err(e) => {
                $skipped += 1;
                $crate::ui::display_warning($err, &format!("Skipped {}: {}", $context, e))?;
                continue;
            }
        }
    };
}
