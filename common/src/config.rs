use std::path::{Path, PathBuf};

/// Input file read when none is given on the command line.
pub const DEFAULT_INPUT: &str = "sessions.conf";

/// Port assigned to hosts that do not name one.
pub const DEFAULT_PORT: u16 = 22;

/// Extension appended to the input path to build the output path.
pub const OUTPUT_EXTENSION: &str = "xml";

/// Values a host line falls back to when it leaves a field out.
///
/// Borrowed immutably by the parser for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDefaults {
    pub username: String,
    pub port: u16,
}

impl SessionDefaults {
    pub fn new(username: impl Into<String>, port: u16) -> Self {
        Self {
            username: username.into(),
            port,
        }
    }
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            username: String::new(),
            port: DEFAULT_PORT,
        }
    }
}

pub struct Config {
    /// Hierarchy description to read.
    pub input: PathBuf,
    /// Where the generated session XML is written.
    pub output: PathBuf,
    pub defaults: SessionDefaults,
    /// Lowers log verbosity. 0 shows everything from info up.
    pub quiet: u8,
}

impl Config {
    /// Builds a config the way the command line resolves its flags.
    ///
    /// * A blank `input` falls back to [`DEFAULT_INPUT`].
    /// * A blank `username` keeps the empty default.
    /// * A `port` of 0 keeps [`DEFAULT_PORT`].
    /// * Without `output`, the path is `input` with `.xml` appended.
    pub fn resolve(
        input: &str,
        username: &str,
        port: u16,
        output: Option<PathBuf>,
        quiet: u8,
    ) -> Self {
        let input: PathBuf = match input.trim() {
            "" => PathBuf::from(DEFAULT_INPUT),
            path => PathBuf::from(path),
        };
        let port: u16 = if port > 0 { port } else { DEFAULT_PORT };
        let output: PathBuf = output.unwrap_or_else(|| output_path_for(&input));

        Self {
            input,
            output,
            defaults: SessionDefaults::new(username.trim(), port),
            quiet,
        }
    }
}

/// `sessions.conf` becomes `sessions.conf.xml`.
pub fn output_path_for(input: &Path) -> PathBuf {
    let mut path = input.as_os_str().to_owned();
    path.push(".");
    path.push(OUTPUT_EXTENSION);
    PathBuf::from(path)
}
