// Copyright 2025 the Genoruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use genoruler_locus::{ChromosomeCatalog, ParseError, parse_locus};
use genoruler_view::{ListenerId, LocusChanged, UnknownChromosome, ViewportEngine};

/// Why a submitted locus was not applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocusInputError {
    /// The text did not parse.
    Parse(ParseError),
    /// The text parsed but names a chromosome the catalog does not know.
    UnknownChromosome(UnknownChromosome),
}

impl fmt::Display for LocusInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => fmt::Display::fmt(err, f),
            Self::UnknownChromosome(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl core::error::Error for LocusInputError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::UnknownChromosome(err) => Some(err),
        }
    }
}

impl From<ParseError> for LocusInputError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<UnknownChromosome> for LocusInputError {
    fn from(err: UnknownChromosome) -> Self {
        Self::UnknownChromosome(err)
    }
}

#[derive(Clone, Debug, Default)]
struct Field {
    text: String,
    error: Option<String>,
    listener: Option<ListenerId>,
}

/// Headless locus text field with a submit action.
///
/// The field is shared with the listener installed by
/// [`LocusInputWidget::connect`], which rewrites the text whenever the
/// viewport changes. Clones share the same field.
#[derive(Clone, Debug, Default)]
pub struct LocusInputWidget {
    field: Rc<RefCell<Field>>,
}

impl LocusInputWidget {
    /// Hint shown in an empty field.
    pub const PLACEHOLDER: &'static str = "Enter locus (e.g., chr5 or chr12:50,464,921-53,983,987)";

    /// Creates an empty field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the text, as typing would. The validation message is kept
    /// until the next submit.
    pub fn set_text(&self, text: impl Into<String>) {
        self.field.borrow_mut().text = text.into();
    }

    /// Current text.
    #[must_use]
    pub fn text(&self) -> String {
        self.field.borrow().text.clone()
    }

    /// Inline validation message from the last submit, if it failed.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.field.borrow().error.clone()
    }

    /// Parses the current text and applies it to `engine`.
    ///
    /// On failure the message is stored for [`LocusInputWidget::error`] and
    /// the viewport is left untouched.
    pub fn submit<C: ChromosomeCatalog>(
        &self,
        engine: &mut ViewportEngine<C>,
    ) -> Result<LocusChanged, LocusInputError> {
        let text = {
            let mut field = self.field.borrow_mut();
            field.error = None;
            field.text.trim().to_owned()
        };
        // The field must not be borrowed here: a connected listener writes to
        // it from inside `set_locus`.
        let result = parse_locus(&text)
            .map_err(LocusInputError::from)
            .and_then(|query| engine.set_locus(&query).map_err(LocusInputError::from));
        if let Err(err) = &result {
            log::debug!("rejected locus {text:?}: {err}");
            self.field.borrow_mut().error = Some(err.to_string());
        }
        result
    }

    /// Keeps the text in sync with `engine` by rewriting it as
    /// `chr:start-end` on every change.
    ///
    /// A widget follows one engine at a time: connecting again first removes
    /// the listener this widget registered on `engine` earlier. The listener
    /// holds a weak reference and does nothing once every clone of this
    /// widget is dropped, but it stays registered until
    /// [`LocusInputWidget::disconnect`] is called.
    pub fn connect<C: ChromosomeCatalog>(&self, engine: &mut ViewportEngine<C>) -> ListenerId {
        self.disconnect(engine);
        let field: Weak<RefCell<Field>> = Rc::downgrade(&self.field);
        let id = engine.on_locus_changed(move |event| {
            if let Some(field) = field.upgrade() {
                field.borrow_mut().text = event.to_string();
            }
        });
        self.field.borrow_mut().listener = Some(id);
        id
    }

    /// Removes the listener installed by [`LocusInputWidget::connect`] from
    /// `engine`.
    ///
    /// Returns `true` if a listener was removed.
    pub fn disconnect<C: ChromosomeCatalog>(&self, engine: &mut ViewportEngine<C>) -> bool {
        let listener = self.field.borrow_mut().listener.take();
        listener.is_some_and(|id| engine.remove_listener(id))
    }
}
