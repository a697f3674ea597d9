use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::Context as _;
use serde::Serialize;

/// Prints `value` as pretty JSON to `path`, or to stdout when no path is given.
pub fn write_json<T>(value: &T, path: Option<&Path>) -> anyhow::Result<()>
where
    T: Serialize,
{
    let Some(path) = path else {
        return write_pretty(io::stdout().lock(), value).context("Failed to print JSON result");
    };
    let file = File::create(path)
        .with_context(|| format!("Failed to create result file {}", path.display()))?;
    write_pretty(BufWriter::new(file), value)
        .with_context(|| format!("Failed to write result file {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote JSON result");
    Ok(())
}

/// Serializes `value` as pretty JSON followed by a newline, then flushes.
pub fn write_pretty<W, T>(mut writer: W, value: &T) -> io::Result<()>
where
    W: Write,
    T: Serialize,
{
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_write_pretty_ends_with_newline() {
        let mut buf = vec![];
        write_pretty(&mut buf, &serde_json::json!({ "median": 10.0 })).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "{\n  \"median\": 10.0\n}\n");
    }

    #[test]
    fn test_write_json_to_file() {
        let path = std::env::temp_dir().join(format!(
            "statmaster_write_json_{}.json",
            std::process::id()
        ));
        write_json(&[1, 2, 3], Some(&path)).unwrap();
        let back: Vec<u32> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(back, [1, 2, 3]);
    }

    #[test]
    fn test_write_json_reports_path() {
        let path = Path::new("/nonexistent-statmaster-dir/result.json");
        let err = write_json(&1, Some(path)).unwrap_err();
        assert!(err.to_string().contains("result.json"));
    }
}
