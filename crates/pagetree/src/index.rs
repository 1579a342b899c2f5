//! Directory index: the implicit directory tree behind a flat list of pages
//!
//! Records live in an arena and are addressed by index. A record is created
//! the first time any entry below it is inserted, so directories that hold
//! no file of their own still exist. Every record and every file takes the
//! next value of one discovery counter, which later serves as the stable
//! tie-break between siblings.

use std::collections::HashMap;

use tracing::debug;

use crate::path::join_virtual;
use crate::segment::{ParsedEntry, Segment, SpecialRole};
use crate::RoleCollision;

/// Arena id of the synthetic root directory
pub(crate) const ROOT: usize = 0;

/// A page file attached to a directory
#[derive(Debug)]
pub(crate) struct FileRef<H> {
    pub source_path: String,
    pub segment: Segment,
    pub is_sync: bool,
    pub handle: H,
    pub order: usize,
}

#[derive(Debug)]
pub(crate) struct DirectoryRecord<H> {
    /// `None` only for the root
    pub segment: Option<Segment>,
    /// Virtual path of the directory itself
    pub source_path: String,
    pub full_path: String,
    pub layout: Option<FileRef<H>>,
    pub index: Option<FileRef<H>>,
    pub leaves: Vec<FileRef<H>>,
    /// Child record ids in creation order
    pub children: Vec<usize>,
    pub order: usize,
}

impl<H> DirectoryRecord<H> {
    fn new(segment: Option<Segment>, source_path: String, full_path: String, order: usize) -> Self {
        Self {
            segment,
            source_path,
            full_path,
            layout: None,
            index: None,
            leaves: Vec::new(),
            children: Vec::new(),
            order,
        }
    }
}

#[derive(Debug)]
pub(crate) struct DirectoryIndex<H> {
    records: Vec<DirectoryRecord<H>>,
    /// (parent id, raw child name) → child id
    lookup: HashMap<(usize, String), usize>,
    next_order: usize,
    collisions: Vec<RoleCollision>,
}

impl<H> DirectoryIndex<H> {
    pub fn new(virtual_root: &str) -> Self {
        let root = DirectoryRecord::new(
            None,
            virtual_root.trim_end_matches('/').to_string(),
            String::new(),
            0,
        );
        Self {
            records: vec![root],
            lookup: HashMap::new(),
            next_order: 1,
            collisions: Vec::new(),
        }
    }

    fn bump(&mut self) -> usize {
        let order = self.next_order;
        self.next_order += 1;
        order
    }

    /// Returns the child of `parent` named by `segment`, creating it on first reference
    fn child_of(&mut self, parent: usize, segment: &Segment) -> usize {
        let key = (parent, segment.name.clone());
        if let Some(&id) = self.lookup.get(&key) {
            return id;
        }

        let order = self.bump();
        let parent_record = &self.records[parent];
        let source_path = join_virtual(&parent_record.source_path, &segment.name);
        let full_path = match segment.route_path() {
            "" => parent_record.full_path.clone(),
            label => format!("{}/{}", parent_record.full_path, label),
        };

        let id = self.records.len();
        self.records.push(DirectoryRecord::new(
            Some(segment.clone()),
            source_path,
            full_path,
            order,
        ));
        self.records[parent].children.push(id);
        self.lookup.insert(key, id);
        id
    }

    /// Files one parsed entry under its directory
    pub fn insert(&mut self, entry: ParsedEntry, handle: H) {
        let directory = entry
            .ancestors
            .iter()
            .fold(ROOT, |parent, segment| self.child_of(parent, segment));

        let file = FileRef {
            source_path: entry.source_path,
            segment: entry.leaf.segment,
            is_sync: entry.leaf.is_sync,
            handle,
            order: self.bump(),
        };

        let role = entry.leaf.role;
        let record = &mut self.records[directory];
        let slot = match role {
            SpecialRole::Layout => &mut record.layout,
            SpecialRole::Index => &mut record.index,
            SpecialRole::Regular => {
                record.leaves.push(file);
                return;
            }
        };

        if let Some(collision) = settle(slot, file) {
            let collision = RoleCollision {
                directory: record.source_path.clone(),
                role,
                kept: collision.0,
                discarded: collision.1,
            };
            debug!(%collision, "special role collision");
            self.collisions.push(collision);
        }
    }

    /// Hands the records over for synthesis; nothing is mutated afterwards
    pub fn finish(self) -> (Vec<DirectoryRecord<H>>, Vec<RoleCollision>) {
        (self.records, self.collisions)
    }
}

/// Places `incoming` into a special-role slot, returning `(kept, discarded)` on collision
///
/// Entries arrive in sorted virtual path order, so the incoming file sorts
/// after the current one. It replaces the current file unless that file is
/// sync and the incoming one is not.
fn settle<H>(slot: &mut Option<FileRef<H>>, incoming: FileRef<H>) -> Option<(String, String)> {
    match slot.take() {
        None => {
            *slot = Some(incoming);
            None
        }
        Some(current) if current.is_sync && !incoming.is_sync => {
            let outcome = (current.source_path.clone(), incoming.source_path);
            *slot = Some(current);
            Some(outcome)
        }
        Some(current) => {
            let outcome = (incoming.source_path.clone(), current.source_path);
            *slot = Some(incoming);
            Some(outcome)
        }
    }
}
