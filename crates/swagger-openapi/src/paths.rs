//! Ant-style path selection for a documentation group.
//!
//! `?` matches one character, `*` anything within a segment, `**` any number
//! of segments and `{name}` a single non-empty segment. An empty pattern
//! list selects every path.

use regex::Regex;
use utoipa::openapi::OpenApi;

use crate::descriptors::GroupedApi;

#[derive(Debug, Clone)]
pub struct PathSelector {
    select_all: bool,
    patterns: Vec<Regex>,
}

impl PathSelector {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns: Vec<String> = patterns
            .into_iter()
            .map(|pattern| pattern.as_ref().to_string())
            .collect();
        let select_all = patterns.is_empty();
        let patterns = patterns
            .iter()
            .filter_map(|pattern| match Regex::new(&ant_to_regex(pattern)) {
                Ok(re) => Some(re),
                // only reachable through the regex size limit
                Err(e) => {
                    tracing::warn!(%pattern, error = %e, "path pattern ignored");
                    None
                }
            })
            .collect();
        Self {
            select_all,
            patterns,
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        self.select_all || self.patterns.iter().any(|re| re.is_match(path))
    }
}

impl GroupedApi {
    pub fn selector(&self) -> PathSelector {
        PathSelector::new(&self.paths)
    }

    pub fn matches(&self, path: &str) -> bool {
        self.selector().matches(path)
    }

    /// Drop every documented path outside this group.
    pub fn select(&self, openapi: &mut OpenApi) {
        let selector = self.selector();
        let before = openapi.paths.paths.len();
        openapi.paths.paths.retain(|path, _| selector.matches(path));
        tracing::debug!(
            group_name = %self.group_name,
            kept = openapi.paths.paths.len(),
            dropped = before - openapi.paths.paths.len(),
            "selected documented paths"
        );
    }
}

fn ant_to_regex(pattern: &str) -> String {
    let mut re = String::from("^");
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' if chars.peek() == Some(&'*') => {
                chars.next();
                // `/**` also matches the bare parent path
                if re.ends_with('/') {
                    re.pop();
                    re.push_str("(?:/.*)?");
                } else {
                    re.push_str(".*");
                }
            }
            '*' => re.push_str("[^/]*"),
            '?' => re.push_str("[^/]"),
            '{' => {
                let mut lookahead = chars.clone();
                if lookahead.any(|next| next == '}') {
                    chars = lookahead;
                    re.push_str("[^/]+");
                } else {
                    // unterminated, so not a template variable
                    re.push_str(r"\{");
                }
            }
            other => re.push_str(&regex::escape(other.encode_utf8(&mut [0u8; 4]))),
        }
    }
    re.push('$');
    re
}
