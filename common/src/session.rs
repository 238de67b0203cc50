//! # Session Hierarchy Model
//!
//! A parsed hierarchy is a tree of [`Group`] nodes:
//! * [`Group::Branch`]: a named folder holding child groups and hosts.
//! * [`Group::Leaf`]: one host with its username and port already resolved.
//!
//! Whether a node is a folder or a host is fixed when it is built, so a folder
//! with no children stays a folder.

/// Name of the synthetic branch every parse starts from.
pub const ROOT_NAME: &str = "root";

/// A node in the session hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Group {
    Leaf(Leaf),
    Branch(Branch),
}

/// A single target host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    pub host: String,
    pub username: String,
    pub port: u16,
}

/// A named folder of hosts and nested folders, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
    pub children: Vec<Group>,
}

impl Leaf {
    pub fn new(host: impl Into<String>, username: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            username: username.into(),
            port,
        }
    }

    /// A host is named after its address.
    pub fn name(&self) -> &str {
        &self.host
    }
}

impl Branch {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn root() -> Self {
        Self::new(ROOT_NAME)
    }

    pub fn push(&mut self, child: Group) {
        self.children.push(child);
    }
}

impl Group {
    pub fn name(&self) -> &str {
        match self {
            Group::Leaf(leaf) => leaf.name(),
            Group::Branch(branch) => &branch.name,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Group::Leaf(_))
    }

    /// Children in source order. Always empty for a leaf.
    pub fn children(&self) -> &[Group] {
        match self {
            Group::Leaf(_) => &[],
            Group::Branch(branch) => &branch.children,
        }
    }

    /// Number of hosts anywhere below (or at) this node.
    pub fn host_count(&self) -> usize {
        match self {
            Group::Leaf(_) => 1,
            Group::Branch(branch) => branch.children.iter().map(Group::host_count).sum(),
        }
    }

    /// Number of branches below this node, not counting the node itself.
    pub fn group_count(&self) -> usize {
        self.children()
            .iter()
            .filter(|child| !child.is_leaf())
            .map(|child| 1 + child.group_count())
            .sum()
    }

    /// Levels of nesting under this node. A leaf or an empty branch is 0.
    pub fn depth(&self) -> usize {
        self.children()
            .iter()
            .map(|child| 1 + child.depth())
            .max()
            .unwrap_or(0)
    }
}

impl From<Leaf> for Group {
    fn from(leaf: Leaf) -> Self {
        Group::Leaf(leaf)
    }
}

impl From<Branch> for Group {
    fn from(branch: Branch) -> Self {
        Group::Branch(branch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Group {
        let mut inner = Branch::new("db");
        inner.push(Leaf::new("10.0.0.5", "postgres", 22).into());

        let mut web = Branch::new("web");
        web.push(Leaf::new("10.0.0.1", "deploy", 22).into());
        web.push(inner.into());

        let mut root = Branch::root();
        root.push(web.into());
        root.push(Leaf::new("10.0.0.9", "", 2222).into());
        root.push(Branch::new("empty").into());
        root.into()
    }

    #[test]
    fn counts_hosts_and_groups() {
        let tree: Group = sample();

        assert_eq!(tree.host_count(), 3);
        assert_eq!(tree.group_count(), 3);
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.name(), ROOT_NAME);
    }

    #[test]
    fn empty_branch_is_not_a_leaf() {
        let empty: Group = Branch::new("empty").into();

        assert!(!empty.is_leaf());
        assert_eq!(empty.host_count(), 0);
        assert_eq!(empty.depth(), 0);
    }

    #[test]
    fn leaf_is_named_after_host() {
        let leaf: Group = Leaf::new("bastion.example.com", "ops", 22).into();

        assert!(leaf.is_leaf());
        assert_eq!(leaf.name(), "bastion.example.com");
        assert!(leaf.children().is_empty());
    }
}
