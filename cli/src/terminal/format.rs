use colored::*;
use crtgen_common::session::{Branch, Group, Leaf};

use crate::terminal::colors;

/// Renders the children of `root` as a box-drawn tree, one string per line.
pub fn hierarchy_lines(root: &Group) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    push_children(root, "", &mut lines);
    lines
}

fn push_children(group: &Group, prefix: &str, lines: &mut Vec<String>) {
    let children: &[Group] = group.children();
    for (i, child) in children.iter().enumerate() {
        let last: bool = i + 1 == children.len();
        let branch: ColoredString = if !last {
            "├─".color(colors::SEPARATOR)
        } else {
            "└─".color(colors::SEPARATOR)
        };
        let label: String = match child {
            Group::Leaf(leaf) => leaf_label(leaf),
            Group::Branch(branch) => branch_label(branch, child.host_count()),
        };
        lines.push(format!("{prefix}{branch} {label}"));

        let indent: &str = if last { "   " } else { "│  " };
        let child_prefix: String = format!("{prefix}{}", indent.color(colors::SEPARATOR));
        push_children(child, &child_prefix, lines);
    }
}

/// `10.0.0.1 (deploy, port 22)`, or `10.0.0.1 (port 22)` without a username.
pub fn leaf_label(leaf: &Leaf) -> String {
    let port: ColoredString = leaf.port.to_string().color(colors::PORT);
    let details: String = if leaf.username.is_empty() {
        format!("port {port}")
    } else {
        let user: ColoredString = leaf.username.as_str().color(colors::USERNAME);
        format!("{user}, port {port}")
    };
    format!(
        "{} {}{details}{}",
        leaf.host.as_str().color(colors::PRIMARY),
        "(".color(colors::SEPARATOR),
        ")".color(colors::SEPARATOR)
    )
}

/// `web [3 hosts]`
pub fn branch_label(branch: &Branch, hosts: usize) -> String {
    let unit: &str = if hosts == 1 { "host" } else { "hosts" };
    format!(
        "{} {}",
        branch.name.as_str().color(colors::ACCENT).bold(),
        format!("[{hosts} {unit}]").color(colors::SEPARATOR)
    )
}
