pub mod count;
pub mod profiles;
pub mod validate;

use std::io::Read;
use std::path::Path;

use ww_gate::GateConfig;

/// Read the response text from `file`, or stdin when no file is given.
fn read_input(file: Option<&Path>) -> Result<String, String> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| format!("cannot read stdin: {e}"))?;
            text
        }
    };
    tracing::debug!(
        source = %file.map_or("stdin".into(), |p| p.display().to_string()),
        bytes = text.len(),
        "read response"
    );
    Ok(text)
}

/// Load the override file if one was given.
fn load_config(path: Option<&Path>) -> Result<GateConfig, String> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading gate config");
            GateConfig::load(path).map_err(|e| e.to_string())
        }
        None => Ok(GateConfig::default()),
    }
}
