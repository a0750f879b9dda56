//! Network geometry: the length of every link.
//!
//! The analysis only needs link lengths to turn link-enter events into
//! distance, so the scenario network is seen through [`NetworkGeometry`].
//! [`LinkNetwork`] is the in-memory implementation used by the loaders and
//! tests; build it with [`LinkNetworkBuilder`].

use std::collections::HashMap;

use crate::{CoreError, CoreResult, LinkId};

/// Read-only link-length lookup.
pub trait NetworkGeometry: Sync {
    /// Length of `link` in metres, or `None` if the network has no such link.
    fn link_length(&self, link: &LinkId) -> Option<f64>;
}

// ── LinkNetwork ───────────────────────────────────────────────────────────────

/// Link lengths keyed by `LinkId`.  Do not construct directly; use
/// [`LinkNetworkBuilder`].
#[derive(Clone, Debug, Default)]
pub struct LinkNetwork {
    link_length_m: HashMap<LinkId, f64>,
}

impl LinkNetwork {
    /// A network with no links.  Any link-enter event against it is unknown.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn link_count(&self) -> usize {
        self.link_length_m.len()
    }
}

impl NetworkGeometry for LinkNetwork {
    #[inline]
    fn link_length(&self, link: &LinkId) -> Option<f64> {
        self.link_length_m.get(link).copied()
    }
}

// ── LinkNetworkBuilder ────────────────────────────────────────────────────────

/// Incremental builder for [`LinkNetwork`].
///
/// ```rust,ignore
/// let mut b = LinkNetworkBuilder::new();
/// b.add_link("1", 300.0)?;
/// b.add_link("2", 700.0)?;
/// let network = b.build();
/// ```
#[derive(Default)]
pub struct LinkNetworkBuilder {
    link_length_m: HashMap<LinkId, f64>,
}

impl LinkNetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directed link of `length_m` metres.  Link IDs must be unique.
    pub fn add_link(&mut self, id: impl Into<LinkId>, length_m: f64) -> CoreResult<&mut Self> {
        let id = id.into();
        if self.link_length_m.contains_key(&id) {
            return Err(CoreError::DuplicateLink(id));
        }
        self.link_length_m.insert(id, length_m);
        Ok(self)
    }

    pub fn build(self) -> LinkNetwork {
        LinkNetwork { link_length_m: self.link_length_m }
    }
}
