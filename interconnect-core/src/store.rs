//! Keyed storage for every resource collection behind one lock.
//!
//! Callers never see the maps. Single operations go through the
//! `put`/`get`/`delete`/`list` helpers; anything that must read and then
//! write atomically (admission checks, dependent scans) runs inside
//! [`ResourceStore::transaction`]. A transaction does not roll back, so a
//! closure performs all of its checks before its first write.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use interconnect_model::{
    AttachmentCircuit, Bearer, Collection, ContactWindow, Resource, ResourceId, Target,
    Transceiver, assign_name,
};
use parking_lot::Mutex;

use crate::error::{InterconnectError, Result};

/// Rows of one collection keyed by [`Stored::key`].
#[derive(Debug)]
pub struct Table<T> {
    rows: BTreeMap<String, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
        }
    }
}

/// All collections of the resource space.
#[derive(Debug, Default)]
pub struct Collections {
    transceivers: Table<Transceiver>,
    targets: Table<Target>,
    contact_windows: Table<ContactWindow>,
    bearers: Table<Bearer>,
    attachment_circuits: Table<AttachmentCircuit>,
}

/// A resource type that lives in exactly one collection of the store.
pub trait Stored: Clone + Into<Resource> + Send + 'static {
    const COLLECTION: Collection;
    /// Human readable singular, used in error messages.
    const KIND: &'static str;

    fn name(&self) -> &str;
    fn set_name(&mut self, name: String);

    /// Row key inside the collection. The resource name unless the
    /// collection needs something stronger.
    fn key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.name())
    }

    #[doc(hidden)]
    fn table(collections: &Collections) -> &Table<Self>;
    #[doc(hidden)]
    fn table_mut(collections: &mut Collections) -> &mut Table<Self>;
}

macro_rules! impl_stored {
    ($ty:ty, $collection:expr, $kind:literal, $field:ident $(, key = $key:expr)?) => {
        impl Stored for $ty {
            const COLLECTION: Collection = $collection;
            const KIND: &'static str = $kind;

            fn name(&self) -> &str {
                &self.name
            }

            fn set_name(&mut self, name: String) {
                self.name = name;
            }

            $(
                fn key(&self) -> Cow<'_, str> {
                    Cow::Owned(($key)(self))
                }
            )?

            fn table(collections: &Collections) -> &Table<Self> {
                &collections.$field
            }

            fn table_mut(collections: &mut Collections) -> &mut Table<Self> {
                &mut collections.$field
            }
        }
    };
}

impl_stored!(Transceiver, Collection::Transceivers, "transceiver", transceivers);
impl_stored!(Target, Collection::Targets, "target", targets);
impl_stored!(
    ContactWindow,
    Collection::ContactWindows,
    "contact window",
    contact_windows,
    key = |window: &ContactWindow| window_key(&window.transceiver, &window.target)
);
impl_stored!(Bearer, Collection::Bearers, "bearer", bearers);
impl_stored!(
    AttachmentCircuit,
    Collection::AttachmentCircuits,
    "attachment circuit",
    attachment_circuits
);

/// Contact windows are keyed by their link rather than their published
/// name: `contactWindow/<tid><targetId>` is not unique across transceivers.
/// Ids cannot hold whitespace, so the separator cannot appear inside either
/// half.
pub fn window_key(transceiver: &str, target: &str) -> String {
    format!("{transceiver} {target}")
}

fn not_found<T: Stored>(name: &str) -> InterconnectError {
    InterconnectError::not_found(format!("{} {name} was not found", T::KIND))
}

fn already_exists<T: Stored>(name: &str) -> InterconnectError {
    InterconnectError::already_exists(format!("{} {name} already exists", T::KIND))
}

/// Exclusive view of the resource space for the duration of one closure.
#[derive(Debug)]
pub struct Transaction<'a> {
    collections: &'a mut Collections,
}

impl Transaction<'_> {
    pub fn get<T: Stored>(&self, key: &str) -> Result<&T> {
        self.find(key).ok_or_else(|| not_found::<T>(key))
    }

    pub fn find<T: Stored>(&self, key: &str) -> Option<&T> {
        T::table(self.collections).rows.get(key)
    }

    pub fn contains<T: Stored>(&self, key: &str) -> bool {
        T::table(self.collections).rows.contains_key(key)
    }

    pub fn list<T: Stored>(&self) -> impl Iterator<Item = &T> + '_ {
        T::table(self.collections).rows.values()
    }

    pub fn len<T: Stored>(&self) -> usize {
        T::table(self.collections).rows.len()
    }

    /// Store `value` under `<collection>/<id>`, overwriting whatever name the
    /// value carried. Fails with `AlreadyExists` on an id collision.
    pub fn put<T: Stored>(&mut self, id: &ResourceId, mut value: T) -> Result<T> {
        value.set_name(assign_name(T::COLLECTION, id));
        self.insert(value.clone())?;
        Ok(value)
    }

    /// Store a value whose name was already assigned.
    pub fn insert<T: Stored>(&mut self, value: T) -> Result<()> {
        let key = value.key().into_owned();
        if self.contains::<T>(&key) {
            return Err(already_exists::<T>(value.name()));
        }
        T::table_mut(self.collections).rows.insert(key, value);
        Ok(())
    }

    /// Overwrite an existing row, returning the previous value.
    pub fn replace<T: Stored>(&mut self, value: T) -> Result<T> {
        let key = value.key().into_owned();
        match T::table_mut(self.collections).rows.get_mut(&key) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => Err(not_found::<T>(value.name())),
        }
    }

    pub fn delete<T: Stored>(&mut self, key: &str) -> Result<T> {
        T::table_mut(self.collections)
            .rows
            .remove(key)
            .ok_or_else(|| not_found::<T>(key))
    }

    /// Remove every row for which `keep` returns false.
    pub fn retain<T: Stored>(&mut self, mut keep: impl FnMut(&T) -> bool) -> Vec<T> {
        let rows = &mut T::table_mut(self.collections).rows;
        let doomed: Vec<String> = rows
            .iter()
            .filter(|(_, value)| !keep(value))
            .map(|(name, _)| name.clone())
            .collect();
        doomed
            .into_iter()
            .filter_map(|name| rows.remove(&name))
            .collect()
    }

    /// Every stored resource, collection by collection.
    pub fn snapshot(&self) -> Vec<Resource> {
        let mut resources = Vec::new();
        resources.extend(self.list::<Target>().cloned().map(Resource::from));
        resources.extend(self.list::<Transceiver>().cloned().map(Resource::from));
        resources.extend(self.list::<ContactWindow>().cloned().map(Resource::from));
        resources.extend(self.list::<Bearer>().cloned().map(Resource::from));
        resources.extend(
            self.list::<AttachmentCircuit>()
                .cloned()
                .map(Resource::from),
        );
        resources
    }
}

/// Concurrency-safe resource space. One mutex covers every collection so
/// conflict evaluation always observes a consistent view.
#[derive(Default)]
pub struct ResourceStore {
    collections: Mutex<Collections>,
}

impl fmt::Debug for ResourceStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let collections = self.collections.lock();
        f.debug_struct("ResourceStore")
            .field("transceivers", &collections.transceivers.rows.len())
            .field("targets", &collections.targets.rows.len())
            .field("contact_windows", &collections.contact_windows.rows.len())
            .field("bearers", &collections.bearers.rows.len())
            .field(
                "attachment_circuits",
                &collections.attachment_circuits.rows.len(),
            )
            .finish()
    }
}

impl ResourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transaction<R>(&self, f: impl FnOnce(&mut Transaction<'_>) -> R) -> R {
        let mut collections = self.collections.lock();
        let mut tx = Transaction {
            collections: &mut collections,
        };
        f(&mut tx)
    }

    pub fn read<R>(&self, f: impl FnOnce(&Transaction<'_>) -> R) -> R {
        self.transaction(|tx| f(tx))
    }

    pub fn put<T: Stored>(&self, id: &ResourceId, value: T) -> Result<T> {
        self.transaction(|tx| tx.put(id, value))
    }

    pub fn get<T: Stored>(&self, key: &str) -> Result<T> {
        self.read(|tx| tx.get::<T>(key).cloned())
    }

    pub fn delete<T: Stored>(&self, key: &str) -> Result<T> {
        self.transaction(|tx| tx.delete::<T>(key))
    }

    pub fn list<T: Stored>(&self) -> Vec<T> {
        self.read(|tx| tx.list::<T>().cloned().collect())
    }
}
