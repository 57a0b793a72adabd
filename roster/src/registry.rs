//! Business logic: the in-memory worker list plus persistence and audit.
//!
//! Every mutating operation follows the same sequence: mutate the list,
//! rewrite the store, append one audit line. Lookups that find nothing change
//! no state, write no files, and log nothing. Lookup is a linear scan over
//! insertion order; the first id match wins and duplicates are never checked.

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::record::Worker;
use crate::io::audit::AuditLog;
use crate::io::store::RecordStore;

pub struct Registry {
    workers: Vec<Worker>,
    store: RecordStore,
    audit: AuditLog,
}

impl Registry {
    /// Open a registry, loading its worker list from the store.
    pub fn open(store: RecordStore, audit: AuditLog) -> Result<Self> {
        let workers = store
            .load()
            .with_context(|| format!("load registry from {}", store.path().display()))?;
        debug!(store = %store.path().display(), count = workers.len(), "registry opened");
        Ok(Self {
            workers,
            store,
            audit,
        })
    }

    /// Append unconditionally: duplicate ids are accepted silently.
    pub fn hire(&mut self, worker: Worker) -> Result<()> {
        let name = worker.name.clone();
        self.workers.push(worker);
        self.save()?;
        self.audit.append(&format!("Hired {}", name))
    }

    /// Remove the first worker with this id. `Ok(None)` means not found:
    /// no state change, no save, no audit line.
    pub fn fire(&mut self, id: &str) -> Result<Option<Worker>> {
        let Some(index) = self.position_of(id) else {
            return Ok(None);
        };
        let worker = self.workers.remove(index);
        self.save()?;
        self.audit.append(&format!("Fired {}", worker.name))?;
        Ok(Some(worker))
    }

    /// Change the first matching worker's position in place. `Ok(false)`
    /// means not found.
    pub fn change_position(&mut self, id: &str, new_position: &str) -> Result<bool> {
        let Some(index) = self.position_of(id) else {
            return Ok(false);
        };
        self.workers[index].position = new_position.to_string();
        self.save()?;
        self.audit.append(&format!(
            "Changed position for {}: {}",
            self.workers[index].name, new_position
        ))?;
        Ok(true)
    }

    /// Change the first matching worker's salary in place. `Ok(false)` means
    /// not found. No bounds are enforced.
    pub fn change_salary(&mut self, id: &str, new_salary: f64) -> Result<bool> {
        let Some(index) = self.position_of(id) else {
            return Ok(false);
        };
        self.workers[index].salary = new_salary;
        self.save()?;
        self.audit.append(&format!(
            "Changed salary for {}: {}",
            self.workers[index].name, new_salary
        ))?;
        Ok(true)
    }

    /// Current workers in insertion order, modulo removals. Pure read.
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    /// Remove half of a transfer: delete and re-save, leaving the audit
    /// trail to [`transfer`] (the destination's hire line plus the source's
    /// transfer line).
    fn withdraw(&mut self, id: &str) -> Result<Option<Worker>> {
        let Some(index) = self.position_of(id) else {
            return Ok(None);
        };
        let worker = self.workers.remove(index);
        self.save()?;
        Ok(Some(worker))
    }

    fn record_transfer(&self, name: &str) -> Result<()> {
        self.audit
            .append(&format!("Transferred {} to another enterprise", name))
    }

    fn position_of(&self, id: &str) -> Option<usize> {
        self.workers.iter().position(|worker| worker.id == id)
    }

    fn save(&self) -> Result<()> {
        self.store.save(&self.workers)
    }
}

/// Move a worker between registries identified by index into `registries`.
///
/// The withdraw half saves the source store immediately, so the source file
/// never goes stale. Two audit lines result: the destination's hire entry
/// and the source's transfer entry. `source == dest` is legal (the menu
/// allows transferring to the primary registry itself) and degrades to a
/// remove-then-rehire within one registry.
///
/// `Ok(false)` means the id was not found in the source registry; nothing
/// changes anywhere.
pub fn transfer(
    registries: &mut [Registry],
    source: usize,
    dest: usize,
    id: &str,
) -> Result<bool> {
    if source == dest {
        let registry = &mut registries[source];
        let Some(worker) = registry.withdraw(id)? else {
            return Ok(false);
        };
        let name = worker.name.clone();
        registry.hire(worker)?;
        registry.record_transfer(&name)?;
        return Ok(true);
    }

    let (src, dst) = pair_mut(registries, source, dest);
    let Some(worker) = src.withdraw(id)? else {
        return Ok(false);
    };
    let name = worker.name.clone();
    dst.hire(worker)?;
    src.record_transfer(&name)?;
    Ok(true)
}

/// Disjoint mutable borrows of two registries. Callers guarantee `a != b`.
fn pair_mut(registries: &mut [Registry], a: usize, b: usize) -> (&mut Registry, &mut Registry) {
    if a < b {
        let (left, right) = registries.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = registries.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
