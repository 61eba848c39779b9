use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;

use crate::host::ResourceId;

/// Tracks which image resources have an open session.
///
/// At most one session may edit a resource at a time; a second open on the
/// same resource is refused instead of racing to overwrite it.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    held: Arc<Mutex<HashSet<ResourceId>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `resource`, or None if another session already holds it
    pub fn try_acquire(&self, resource: &ResourceId) -> Option<ResourceLease> {
        let mut held = self.held.lock();
        if !held.insert(resource.clone()) {
            return None;
        }
        Some(ResourceLease {
            registry: self.clone(),
            resource: resource.clone(),
        })
    }

    pub fn is_held(&self, resource: &ResourceId) -> bool {
        self.held.lock().contains(resource)
    }

    pub fn open_count(&self) -> usize {
        self.held.lock().len()
    }
}

/// Exclusive claim on a resource, released on drop
#[derive(Debug)]
pub struct ResourceLease {
    registry: SessionRegistry,
    resource: ResourceId,
}

impl ResourceLease {
    pub fn resource(&self) -> &ResourceId {
        &self.resource
    }
}

impl Drop for ResourceLease {
    fn drop(&mut self) {
        self.registry.held.lock().remove(&self.resource);
        log::debug!("Released lease on {}", self.resource);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_is_refused() {
        let registry = SessionRegistry::new();
        let resource = ResourceId("img/cat.png".into());

        let lease = registry.try_acquire(&resource).unwrap();
        assert!(registry.try_acquire(&resource).is_none());
        assert!(registry.is_held(&resource));
        assert_eq!(lease.resource(), &resource);

        drop(lease);
        assert!(!registry.is_held(&resource));
        assert!(registry.try_acquire(&resource).is_some());
    }

    #[test]
    fn different_resources_are_independent() {
        let registry = SessionRegistry::new();
        let _a = registry.try_acquire(&ResourceId("a.png".into())).unwrap();
        let _b = registry.try_acquire(&ResourceId("b.png".into())).unwrap();
        assert_eq!(registry.open_count(), 2);
    }
}
