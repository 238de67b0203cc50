use crtgen_common::{config::Config, session::Group};

use super::load_hierarchy;
use crate::terminal::{format, print};

pub fn show(cfg: &Config) -> anyhow::Result<()> {
    let root: Group = load_hierarchy(cfg)?;

    if root.children().is_empty() {
        print::no_results();
        return Ok(());
    }

    for line in format::hierarchy_lines(&root) {
        print::print(&line);
    }
    print::summary(root.host_count(), root.group_count(), cfg.quiet);
    Ok(())
}
