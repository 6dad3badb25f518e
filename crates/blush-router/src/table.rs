//! Route resolution.

use crate::error::RouteError;
use crate::layout::{Access, LayoutKind};
use crate::pattern::split_path;
use crate::route::{Element, RouteNode, Screen};
use tracing::debug;

/// Hop limit when following index redirects.
pub const MAX_REDIRECTS: usize = 8;

/// Captured path parameters, outermost first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn prepend(&mut self, mut captures: Vec<(String, String)>) {
        if !captures.is_empty() {
            captures.append(&mut self.0);
            self.0 = captures;
        }
    }
}

/// What the matched leaf asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Screen(Screen),
    /// Absolute path to go to instead.
    Redirect(String),
}

/// A resolved path: the layout stack from outermost to innermost and the
/// leaf inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// Normalized path that was resolved.
    pub path: String,
    /// Full pattern of the matched leaf, e.g. `/account/orders/:id`.
    pub pattern: String,
    pub layouts: Vec<LayoutKind>,
    pub target: Target,
    pub params: Params,
}

impl RouteMatch {
    pub fn screen(&self) -> Option<Screen> {
        match self.target {
            Target::Screen(screen) => Some(screen),
            Target::Redirect(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.screen() == Some(Screen::NotFound)
    }

    /// First non-public requirement along the layout chain.
    pub fn access(&self) -> Access {
        self.layouts
            .iter()
            .map(LayoutKind::access)
            .find(|a| !a.is_public())
            .unwrap_or(Access::Public)
    }

    /// Whether any layout in the chain renders `chrome`.
    pub fn has_chrome(&self, chrome: crate::Chrome) -> bool {
        self.layouts.iter().any(|l| l.chrome().contains(&chrome))
    }
}

/// The application's route tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteTable {
    roots: Vec<RouteNode>,
}

impl RouteTable {
    pub fn new(roots: Vec<RouteNode>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[RouteNode] {
        &self.roots
    }

    /// Resolve a path to a layout chain and leaf.
    ///
    /// Nodes are tried in declaration order, depth first. A layout only
    /// matches if one of its children matches the rest of the path, so an
    /// unknown path below a section falls back to a later catch-all.
    pub fn resolve(&self, path: &str) -> Result<RouteMatch, RouteError> {
        let segments: Vec<&str> = split_path(path).collect();
        let normalized = format!("/{}", segments.join("/"));

        let found = self
            .roots
            .iter()
            .find_map(|node| match_node(node, &segments, 0));

        match found {
            Some(mut m) => {
                m.path = normalized;
                if m.pattern.is_empty() {
                    m.pattern.push('/');
                }
                if m.is_not_found() {
                    debug!(path = %m.path, "no route matched, rendering not found");
                }
                Ok(m)
            }
            None => Err(RouteError::NoMatch(normalized)),
        }
    }

    /// Resolve, following index redirects until a screen is reached.
    pub fn resolve_final(&self, path: &str) -> Result<RouteMatch, RouteError> {
        let mut current = path.to_string();
        for _ in 0..=MAX_REDIRECTS {
            let matched = self.resolve(&current)?;
            match matched.target {
                Target::Screen(_) => return Ok(matched),
                Target::Redirect(ref to) => {
                    debug!(from = %matched.path, %to, "following index redirect");
                    current = to.clone();
                }
            }
        }
        Err(RouteError::RedirectLoop(path.to_string()))
    }

    /// Every leaf as `(full pattern, element)` in declaration order.
    pub fn leaves(&self) -> Vec<(String, Element)> {
        fn walk(node: &RouteNode, prefix: &str, out: &mut Vec<(String, Element)>) {
            let full = format!("{}{}", prefix, node.pattern());
            match node.element() {
                Element::Layout(_) => {
                    for child in node.child_nodes() {
                        walk(child, &full, out);
                    }
                }
                leaf => {
                    let shown = if full.is_empty() { "/".to_string() } else { full };
                    out.push((shown, leaf.clone()));
                }
            }
        }

        let mut out = Vec::new();
        for root in &self.roots {
            walk(root, "", &mut out);
        }
        out
    }
}

fn match_node(node: &RouteNode, path: &[&str], offset: usize) -> Option<RouteMatch> {
    let rest = path.get(offset..)?;
    let (captures, consumed) = node.pattern().match_prefix(rest)?;
    let offset = offset + consumed;

    let mut matched = match node.element() {
        Element::Layout(kind) => {
            let mut inner = node
                .child_nodes()
                .iter()
                .find_map(|child| match_node(child, path, offset))?;
            inner.layouts.insert(0, *kind);
            inner
        }
        Element::Screen(screen) => {
            if offset != path.len() {
                return None;
            }
            leaf(Target::Screen(*screen))
        }
        Element::Redirect(to) => {
            if offset != path.len() {
                return None;
            }
            let base = path.get(..offset).unwrap_or_default().join("/");
            leaf(Target::Redirect(join_relative(&base, to)))
        }
    };

    matched.params.prepend(captures);
    matched.pattern = format!("{}{}", node.pattern(), matched.pattern);
    Some(matched)
}

fn leaf(target: Target) -> RouteMatch {
    RouteMatch {
        path: String::new(),
        pattern: String::new(),
        layouts: Vec::new(),
        target,
        params: Params::default(),
    }
}

fn join_relative(base: &str, to: &str) -> String {
    if to.starts_with('/') {
        return to.to_string();
    }
    if base.is_empty() {
        format!("/{}", to)
    } else {
        format!("/{}/{}", base, to)
    }
}
