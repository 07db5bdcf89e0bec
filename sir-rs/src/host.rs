//! The host interaction protocol: one JSON document in, files (or stdout)
//! out. The host UI re-invokes the model from scratch on every control
//! change, so each `Environment` covers exactly one interaction and no
//! state survives between them.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use serde_json::Value;

use crate::error::SirError;

pub struct Environment {
    input: serde_json::Map<String, Value>,
    output: Value,
}

impl Environment {
    pub fn from_json(data: Value) -> Self {
        let input = data
            .get("input")
            .and_then(|v| v.as_object())
            .cloned()
            .unwrap_or_default();
        let output = data.get("output").cloned().unwrap_or(Value::Null);
        Self { input, output }
    }

    pub fn from_stdin() -> Result<Self, SirError> {
        let mut raw = String::new();
        io::stdin().read_to_string(&mut raw)?;
        if raw.trim().is_empty() {
            return Err(SirError::Parameter("no input on stdin".to_string()));
        }
        let data: Value = serde_json::from_str(&raw)?;
        Ok(Self::from_json(data))
    }

    /// The slider value; `None` means the host sent no position and the
    /// control default applies.
    pub fn r0(&self) -> Option<f64> {
        self.input.get("r0").and_then(Value::as_f64)
    }

    pub fn input(&self) -> &serde_json::Map<String, Value> {
        &self.input
    }

    pub fn output_dir(&self) -> Option<PathBuf> {
        let output = &self.output;

        // Flat output
        if output.get("spec").and_then(|v| v.as_str()) == Some("filesystem") {
            return output
                .get("dir")
                .and_then(|v| v.as_str())
                .map(PathBuf::from);
        }

        // Profiled output — resolve the default profile
        if let Some(profiles) = output.get("profile").and_then(|v| v.as_object()) {
            let selected = profiles.get("default").or_else(|| profiles.values().next());
            if let Some(profile) = selected
                && profile.get("spec").and_then(|v| v.as_str()) == Some("filesystem")
                && let Some(dir) = profile.get("dir").and_then(|v| v.as_str())
            {
                return Some(PathBuf::from(dir));
            }
        }

        None
    }

    pub fn write(&self, filename: &str, data: &[u8]) -> Result<(), SirError> {
        if let Some(dir) = self.output_dir() {
            fs::create_dir_all(&dir)?;
            fs::write(dir.join(filename), data)?;
        } else {
            io::stdout().write_all(data)?;
        }
        Ok(())
    }

    pub fn write_csv(
        &self,
        filename: &str,
        headers: &[&str],
        rows: &[Vec<String>],
    ) -> Result<(), SirError> {
        if let Some(dir) = self.output_dir() {
            fs::create_dir_all(&dir)?;
            let file = fs::File::create(dir.join(filename))?;
            write_records(csv::Writer::from_writer(file), headers, rows)
        } else {
            write_records(csv::Writer::from_writer(io::stdout()), headers, rows)
        }
    }
}

fn write_records<W: Write>(
    mut writer: csv::Writer<W>,
    headers: &[&str],
    rows: &[Vec<String>],
) -> Result<(), SirError> {
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_basic() {
        let data = json!({
            "input": {
                "r0": 4.2
            },
            "output": {
                "spec": "filesystem",
                "dir": "/tmp/output"
            }
        });
        let env = Environment::from_json(data);
        assert_eq!(env.r0(), Some(4.2));
        assert_eq!(env.input().get("r0").unwrap().as_f64().unwrap(), 4.2);
        assert_eq!(env.output_dir(), Some(PathBuf::from("/tmp/output")));
    }

    #[test]
    fn test_missing_r0() {
        let env = Environment::from_json(json!({ "input": {} }));
        assert_eq!(env.r0(), None);
    }

    #[test]
    fn test_output_dir_profiled() {
        let data = json!({
            "input": {},
            "output": {
                "profile": {
                    "default": {
                        "spec": "filesystem",
                        "dir": "/tmp/profiled"
                    }
                }
            }
        });
        let env = Environment::from_json(data);
        assert_eq!(env.output_dir(), Some(PathBuf::from("/tmp/profiled")));
    }

    #[test]
    fn test_output_dir_none() {
        let data = json!({
            "input": {},
            "output": {
                "spec": "stdout"
            }
        });
        let env = Environment::from_json(data);
        assert_eq!(env.output_dir(), None);
    }

    #[test]
    fn test_defaults() {
        let env = Environment::from_json(json!({}));
        assert!(env.input().is_empty());
        assert_eq!(env.r0(), None);
        assert_eq!(env.output_dir(), None);
    }

    #[test]
    fn test_write_csv_to_dir() {
        let dir = tempfile::tempdir().unwrap();
        let data = json!({
            "input": { "r0": 3.5 },
            "output": {
                "spec": "filesystem",
                "dir": dir.path().to_str().unwrap()
            }
        });
        let env = Environment::from_json(data);
        env.write_csv(
            "curves.csv",
            &["day", "infected"],
            &[
                vec!["0".to_string(), "1.0".to_string()],
                vec!["1".to_string(), "1.5".to_string()],
            ],
        )
        .unwrap();
        let written = fs::read_to_string(dir.path().join("curves.csv")).unwrap();
        assert_eq!(written, "day,infected\n0,1.0\n1,1.5\n");
    }
}
