//! Pointer-event scripts
//!
//! A script is a JSON array of [`PointerEvent`]s, the recorded form of one
//! or more pointer-down / move / up interactions. Replaying one through the
//! painter reproduces the session it captured.

use std::path::Path;

use painting::PointerEvent;

use crate::error::AppError;

/// Read a pointer-event script from a JSON file.
pub fn load_script(path: impl AsRef<Path>) -> Result<Vec<PointerEvent>, AppError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_script() {
        let path = std::env::temp_dir().join(format!(
            "giornata-script-{}.json",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"[
                {"kind": "down", "x": 5.0, "y": 5.0},
                {"kind": "move", "x": 6.0, "y": 6.0},
                {"kind": "up"}
            ]"#,
        )
        .unwrap();

        let script = load_script(&path).unwrap();
        assert_eq!(script.len(), 3);
        assert_eq!(script[0], PointerEvent::Down { x: 5.0, y: 5.0 });
        assert_eq!(script[2], PointerEvent::Up);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_malformed_script_is_an_error() {
        let path = std::env::temp_dir().join(format!(
            "giornata-script-bad-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"kind": "sideways"}"#).unwrap();

        assert!(load_script(&path).is_err());

        std::fs::remove_file(&path).ok();
    }
}
