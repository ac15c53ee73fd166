use crate::store::Store;

/// Host-supplied persistence hooks. The core calls these at exactly two
/// points: `load` once at startup and `save` after each successful
/// mutating request, both skipped in test mode. A `save` failure is logged
/// and does not fail the request.
pub trait Persistence: Send + Sync {
    fn load(&self) -> anyhow::Result<Option<Store>>;
    fn save(&self, snapshot: &Store) -> anyhow::Result<()>;
}

/// Default when the host wires nothing in.
pub struct NoopPersistence;

impl Persistence for NoopPersistence {
    fn load(&self) -> anyhow::Result<Option<Store>> {
        Ok(None)
    }

    fn save(&self, _snapshot: &Store) -> anyhow::Result<()> {
        Ok(())
    }
}
