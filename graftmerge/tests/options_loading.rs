//! Integration tests for loading `MergeOptions` from files and environment
//! variables.
use anyhow::{Result, anyhow, ensure};
use graftmerge::{Graph, MergeComposer, MergeOptions};
use rstest::rstest;
use serde_json::json;
use test_helpers::jail::{load_options_with, with_jail};

#[rstest]
fn defaults_apply_without_sources() -> Result<()> {
    let options = load_options_with("graft", |_| Ok(()))??;
    ensure!(options == MergeOptions::default(), "unexpected {options:?}");
    Ok(())
}

#[rstest]
#[case::snake_case("merge_arrays = true")]
#[case::camel_case("mergeArrays = true")]
fn file_enables_array_merging(#[case] contents: &'static str) -> Result<()> {
    let options = load_options_with("graft", |j| {
        j.create_file("graft.toml", contents)?;
        Ok(())
    })??;
    ensure!(options.merge_arrays, "file should enable merge_arrays");
    Ok(())
}

#[rstest]
fn environment_overrides_file() -> Result<()> {
    let options = load_options_with("GRAFT_", |j| {
        j.create_file("graft.toml", "merge_arrays = true")?;
        j.set_env("GRAFT_MERGE_ARRAYS", "false");
        Ok(())
    })??;
    ensure!(!options.merge_arrays, "environment should win over the file");
    Ok(())
}

#[rstest]
fn malformed_values_are_reported() -> Result<()> {
    let outcome = load_options_with("graft", |j| {
        j.set_env("GRAFT_MERGE_ARRAYS", "sometimes");
        Ok(())
    })?;
    let err = match outcome {
        Ok(options) => return Err(anyhow!("expected a load failure, got {options:?}")),
        Err(err) => err,
    };
    ensure!(
        err.to_string().contains("Failed to load merge options"),
        "unexpected error message: {err}"
    );
    Ok(())
}

#[rstest]
fn loaded_options_drive_composition() -> Result<()> {
    let options = with_jail(|j| {
        j.set_env("LAYERS_MERGE_ARRAYS", "true");
        MergeOptions::load("layers").map_err(|err| figment::Error::from(err.to_string()))
    })?;

    let mut graph = Graph::new();
    let mut composer = MergeComposer::new();
    composer.push_defaults(graph.import_json(json!({"plugins": ["core"]})));
    composer.push_environment(graph.import_json(json!({"plugins": ["extra"]})));
    let merged = composer.compose(&mut graph, options);

    let exported = graph
        .export_json(&merged)
        .map_err(|err| anyhow!(err.to_string()))?;
    ensure!(
        exported == json!({"plugins": ["core", "extra"]}),
        "unexpected composition {exported}"
    );
    Ok(())
}
