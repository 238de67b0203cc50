//! # Document Generator
//!
//! Maps a [`Group`] tree onto the [`Document`] layout SecureCRT imports.
//!
//! * The top-level group becomes the `Sessions` key.
//! * A branch becomes a key holding one nested key per child.
//! * A leaf becomes a key with the five session fields, always in the same order.

use crtgen_common::session::{Group, Leaf};

use crate::error::GenerateError;
use crate::markup::{Document, Key};

/// Label SecureCRT expects on the outermost key.
pub const SESSIONS_KEY: &str = "Sessions";

pub const HOSTNAME: &str = "Hostname";
pub const USERNAME: &str = "Username";
pub const OUTPUT_TRANSFORMER: &str = "Output Transformer Name";
pub const SSH2_PORT: &str = "[SSH2] Port";
pub const ANSI_COLOR: &str = "ANSI Color";

const OUTPUT_ENCODING: &str = "UTF-8";
const ANSI_COLOR_ON: u32 = 1;

/// Renders `root` as a complete session XML document.
pub fn generate(root: &Group) -> Result<String, GenerateError> {
    Ok(to_document(root).render()?)
}

/// Builds the document model without serializing it.
pub fn to_document(root: &Group) -> Document {
    let mut sessions: Key = to_key(root);
    sessions.name = SESSIONS_KEY.to_string();
    Document::new(vec![sessions])
}

fn to_key(group: &Group) -> Key {
    match group {
        Group::Leaf(leaf) => leaf_key(leaf),
        Group::Branch(branch) => {
            let mut key = Key::new(branch.name.as_str());
            key.children = branch.children.iter().map(to_key).collect();
            key
        }
    }
}

fn leaf_key(leaf: &Leaf) -> Key {
    Key::new(leaf.name())
        .string(HOSTNAME, leaf.host.as_str())
        .string(USERNAME, leaf.username.as_str())
        .string(OUTPUT_TRANSFORMER, OUTPUT_ENCODING)
        .dword(SSH2_PORT, u32::from(leaf.port))
        .dword(ANSI_COLOR, ANSI_COLOR_ON)
}
