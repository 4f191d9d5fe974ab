use std::path::Path;
use std::sync::Arc;

use sp_domain::error::{Error, Result};

/// Built-in grounding text for the store-opening program.
pub const DEFAULT_DOMAIN_CONTEXT: &str = "\
You are StorePilot, an assistant for a retail chain's store opening program. \
You help the operations team track new store openings, vendors, contracts and tasks.

Current store openings:
- Downtown Flagship Store (New York): 65% complete, budget $2.5M, 15,000 sq ft, 45 staff planned, manager Sarah Johnson, opening June 15.
- Oxford Street Branch (London): 40% complete, budget £1.8M, 12,000 sq ft, 35 staff planned, manager James Wilson, opening August 1.
- Shibuya Crossing Store (Tokyo): 25% complete, budget ¥300M, 10,000 sq ft, 30 staff planned, manager Yuki Tanaka, opening October 10.
- Champs-Élysées Boutique (Paris): 80% complete, budget €2.1M, 8,000 sq ft, 25 staff planned, manager Claire Dubois, opening May 20.

Key vendors:
- BuildRight Construction: general contractor for New York and London.
- Luma Lighting Co.: lighting design and installation for all stores.
- SecureTech Systems: security and access control; contract renews in 21 days.
- ShelfCraft Fixtures: store fixtures and shelving; contract renews in 45 days.

Open tasks: 12 pending, 3 high priority (fixture installation in New York, \
staff hiring for London, lease amendment sign-off for Tokyo).

Answer concisely and base your answers on the facts above. If a question \
falls outside this information, say so and suggest who on the operations \
team could help.";

/// Immutable domain context shared by every request.
///
/// Cheap to clone; the text is loaded once at startup and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainContext(Arc<str>);

impl DomainContext {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self(text.into())
    }

    /// Load an override from disk. Surrounding whitespace is trimmed; an
    /// empty file is rejected so the provider is never grounded on nothing.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let text = raw.trim();
        if text.is_empty() {
            return Err(Error::Config(format!(
                "domain context file '{}' is empty",
                path.display()
            )));
        }
        tracing::info!(
            path = %path.display(),
            chars = text.len(),
            "loaded domain context override"
        );
        Ok(Self::new(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for DomainContext {
    fn default() -> Self {
        Self::new(DEFAULT_DOMAIN_CONTEXT)
    }
}

impl AsRef<str> for DomainContext {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
