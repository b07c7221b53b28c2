// Copyright 2025 the Genoruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use genoruler_locus::format_locus;

/// Notification payload emitted whenever the visible range changes.
///
/// Coordinates are truncated to whole base pairs for display.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LocusChanged {
    /// Active chromosome.
    pub chr: String,
    /// First visible base pair.
    pub start_bp: u64,
    /// End of the visible window.
    pub end_bp: u64,
}

impl fmt::Display for LocusChanged {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_locus(&self.chr, self.start_bp, self.end_bp))
    }
}

/// Handle returned by [`crate::ViewportEngine::on_locus_changed`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&LocusChanged)>;

/// Registration list of change listeners, called in registration order.
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

impl Listeners {
    pub(crate) fn add(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn emit(&mut self, event: &LocusChanged) {
        for (_, listener) in &mut self.entries {
            listener(event);
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("next_id", &self.next_id)
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}
