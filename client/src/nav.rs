/// Routing seam.
///
/// The guard and session flows navigate through this instead of a concrete
/// router, so they stay testable and framework-independent. A navigation
/// can be superseded by a later one; implementations hold no resources on
/// behalf of callers.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}
