use crate::cli::opt;
use schemars::{JsonSchema, schema_for};
use std::path::Path;

pub(crate) fn exec(schema: opt::Schema) -> Result<(), anyhow::Error> {
    let opt::Schema { output_folder } = schema;

    if !Path::new(&output_folder).exists() {
        std::fs::create_dir_all(&output_folder)?;
    }

    generate_and_store_schema::<dbdcare_config::seed::VersionConfig>(
        "DBD Care Seed",
        &Path::new(&output_folder).join("seed.json"),
    )?;

    println!("Generated schemas in {output_folder}");
    Ok(())
}

fn rename_schema(schema: serde_json::Value, title: &str) -> serde_json::Value {
    if let serde_json::Value::Object(mut object) = schema {
        object.insert("title".to_string(), serde_json::Value::String(title.to_string()));
        serde_json::Value::Object(object)
    } else {
        schema
    }
}

fn generate_and_store_schema<T: JsonSchema>(title: &str, output_path: &Path) -> Result<(), anyhow::Error> {
    let schema = serde_json::to_value(schema_for!(T))?;
    let schema = rename_schema(schema, title);
    std::fs::write(output_path, serde_json::to_string_pretty(&schema)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_seed_schema() {
        let dir = TempDir::new().unwrap();
        let output_folder = dir.path().join("schemas").to_str().unwrap().to_owned();
        exec(opt::Schema {
            output_folder: output_folder.clone(),
        })
        .unwrap();

        let content = std::fs::read_to_string(Path::new(&output_folder).join("seed.json")).unwrap();
        let schema: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(schema["title"], "DBD Care Seed");
    }
}
