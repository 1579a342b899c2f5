//! Caller-supplied compile configuration

use serde::{Deserialize, Serialize};

/// Default shared prefix of virtual page paths
pub const DEFAULT_VIRTUAL_ROOT: &str = "./pages";

/// File extensions stripped from page file names unless configured otherwise
pub const DEFAULT_EXTENSIONS: [&str; 4] = ["tsx", "ts", "jsx", "js"];

/// Preferred order of route groups among their siblings
///
/// Entries match group names with or without surrounding parentheses, so
/// `"main"` and `"(main)"` both select the `(main)` group. Names that match
/// no group are ignored.
///
/// # Examples
///
/// ```
/// use pagetree::GroupOrder;
///
/// let order = GroupOrder::from_iter(["main", "(auth)"]);
/// assert_eq!(order.rank("(main)"), Some(0));
/// assert_eq!(order.rank("auth"), Some(1));
/// assert_eq!(order.rank("(admin)"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupOrder(Vec<String>);

fn bare_group_name(name: &str) -> &str {
    let name = name.trim();
    name.strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .unwrap_or(name)
}

impl GroupOrder {
    /// Position of a group in the configured order, `None` if unlisted
    pub fn rank(&self, group: &str) -> Option<usize> {
        let group = bare_group_name(group);
        self.0
            .iter()
            .position(|entry| bare_group_name(entry) == group)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for GroupOrder {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        GroupOrder(iter.into_iter().map(Into::into).collect())
    }
}

/// Options for one `compile` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileOptions {
    /// Prefix shared by every virtual path (not part of the route tree)
    #[serde(default = "default_virtual_root")]
    pub virtual_root: String,

    /// Ordering policy for route group siblings
    #[serde(default)]
    pub group_order: GroupOrder,

    /// Page file extensions; only these are stripped from a file name, and
    /// any other dotted suffix stays part of the route
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_virtual_root() -> String {
    DEFAULT_VIRTUAL_ROOT.to_string()
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            virtual_root: default_virtual_root(),
            group_order: GroupOrder::default(),
            extensions: default_extensions(),
        }
    }
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the virtual root prefix (functional builder)
    pub fn with_virtual_root(mut self, root: impl Into<String>) -> Self {
        self.virtual_root = root.into();
        self
    }

    /// Sets the preferred group order (functional builder)
    ///
    /// ```
    /// use pagetree::CompileOptions;
    ///
    /// let options = CompileOptions::new().with_group_order(["main", "(login)"]);
    /// assert_eq!(options.group_order.rank("login"), Some(1));
    /// ```
    pub fn with_group_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_order = order.into_iter().collect();
        self
    }

    /// Sets the page file extensions (functional builder)
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `path` ends in one of the configured page extensions
    pub fn has_page_extension(&self, path: &str) -> bool {
        path.rsplit_once('.').map_or(false, |(_, ext)| {
            self.extensions
                .iter()
                .any(|known| known.trim_start_matches('.') == ext)
        })
    }
}
