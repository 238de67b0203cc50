use std::fs;

use anyhow::Context;
use crtgen_common::{config::Config, session::Group, success};
use crtgen_core::generator;
use tracing::warn;

use super::load_hierarchy;

pub fn generate(cfg: &Config) -> anyhow::Result<()> {
    let root: Group = load_hierarchy(cfg)?;

    if root.host_count() == 0 {
        warn!("No hosts found in {}", cfg.input.display());
    }
    for name in empty_groups(&root) {
        warn!("Group '{name}' has no hosts");
    }

    let xml: String = generator::generate(&root).context("failed to build session document")?;

    let path: String = cfg.output.display().to_string();
    fs::write(&cfg.output, xml).with_context(|| format!("failed to write {path}"))?;

    let hosts: usize = root.host_count();
    let unit: &str = if hosts == 1 { "session" } else { "sessions" };
    success!(
        "{hosts} {unit} in {} groups written to {path}",
        root.group_count()
    );
    Ok(())
}

/// Names of branches, at any depth, that hold no children.
fn empty_groups(group: &Group) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for child in group.children() {
        if let Group::Branch(branch) = child {
            if branch.children.is_empty() {
                names.push(&branch.name);
            } else {
                names.extend(empty_groups(child));
            }
        }
    }
    names
}
