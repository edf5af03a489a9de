// File: src/core/resolver.rs
use crate::core::registry::{Directive, SerialDirective, SerialTree};
use crate::error::{MintError, Result};
use std::sync::Arc;
use tracing::debug;

/// Picks the serial directive for a denomination.
///
/// 1. No denomination: the tree's default directive.
/// 2. No `serial_<denomination>` entry: the default directive.
/// 3. A concrete entry is used as is.
/// 4. A reference is followed exactly one hop; it must land on a concrete
///    entry, otherwise resolution fails with the offending name.
pub fn resolve(tree: &SerialTree, denomination: Option<&str>) -> Result<Arc<SerialDirective>> {
    let Some(denomination) = denomination.filter(|d| !d.is_empty()) else {
        return Ok(Arc::clone(&tree.root));
    };

    let key = SerialTree::key_for(denomination);
    let resolved = match tree.entries.get(&key) {
        None => {
            debug!(directive = %key, "no denomination directive, using default");
            Arc::clone(&tree.root)
        }
        Some(Directive::Concrete(directive)) => Arc::clone(directive),
        Some(Directive::Reference(name)) => match tree.entries.get(name) {
            Some(Directive::Concrete(directive)) => {
                debug!(directive = %key, target = %name, "followed directive reference");
                Arc::clone(directive)
            }
            Some(Directive::Reference(_)) => {
                return Err(MintError::UnsupportedDirectiveType(name.clone()))
            }
            None => return Err(MintError::DirectiveNotDefined(name.clone())),
        },
    };
    Ok(resolved)
}
