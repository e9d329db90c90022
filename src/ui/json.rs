use std::io::{self, Write};

/// Write a single NDJSON line (one JSON object per line).
pub fn write_line(out: &mut impl Write, json: &str) -> io::Result<()> {
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Write an already serialized event to stdout.
pub fn emit(json: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_line(&mut out, json)
}

/// Serialize and write an ad-hoc event to stdout.
pub fn emit_value(event: serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(&event).unwrap_or_else(|_| "{}".to_string());
    emit(&line)
}
