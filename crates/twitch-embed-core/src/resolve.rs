//! Resolution with fallback
//!
//! One synchronous attempt at the page-global widget; on any failure the
//! bundled fallback is bound instead and a warning is logged. A script that
//! loads later is not picked up.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use crate::Result;

/// Which implementation a facade ended up bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleSource {
    /// The widget loaded by the page's own script tag
    Global,
    /// The stand-in shipped with this package
    Fallback,
    /// Wrapped from an existing handle, e.g. an embed's inner player
    Wrapped,
}

impl fmt::Display for HandleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandleSource::Global => write!(f, "global"),
            HandleSource::Fallback => write!(f, "fallback"),
            HandleSource::Wrapped => write!(f, "wrapped"),
        }
    }
}

/// A bound handle and where it came from
#[derive(Debug)]
pub struct Resolved<H> {
    pub handle: H,
    pub source: HandleSource,
}

/// Bind the global widget if it can be built, the fallback otherwise.
///
/// Never fails: every error from `global` is logged once at warn level and
/// answered with `fallback`.
pub fn resolve<H>(
    constructor: &'static str,
    mount_id: &str,
    global: impl FnOnce() -> Result<H>,
    fallback: impl FnOnce() -> H,
) -> Resolved<H> {
    match global() {
        Ok(handle) => {
            debug!(constructor, mount_id, "Bound page-global widget");
            Resolved {
                handle,
                source: HandleSource::Global,
            }
        }
        Err(err) => {
            warn!(
                constructor,
                mount_id,
                code = err.error_code(),
                reason = %err,
                "Widget was created using the bundled fallback. Add the Twitch embed script to the page to load the widget directly from Twitch"
            );
            Resolved {
                handle: fallback(),
                source: HandleSource::Fallback,
            }
        }
    }
}
