//! Final document writer: the serializer boundary.

use std::io;
use std::path::Path;

use serde::Serialize;

use crate::model::SymbolModel;

/// Root document: the module's base filename alongside the four top-level
/// groupings.
#[derive(Serialize)]
struct Summary<'a> {
    name: &'a str,
    #[serde(flatten)]
    model: &'a SymbolModel,
}

/// Render the completed model as a YAML document.
pub fn to_yaml(
    model: &SymbolModel,
    module_name: &str,
) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(&Summary {
        name: module_name,
        model,
    })
}

/// Write the document to stdout, or to `output` (creating parent
/// directories first) when a path is given.
pub fn write_model(
    model: &SymbolModel,
    module_name: &str,
    output: Option<&Path>,
) -> io::Result<()> {
    let text = to_yaml(model, module_name).map_err(io::Error::other)?;
    match output {
        None => print!("{text}"),
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, text)?;
        },
    }
    Ok(())
}
