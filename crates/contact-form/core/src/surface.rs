// File: src/surface.rs
// Purpose: Capability boundary between the validator and whatever renders the form

use crate::fields::FieldKey;

/// A message region the validator can show or hide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Inline error under one input
    Error(FieldKey),
    /// The static "thanks, we got it" notice
    Success,
}

impl Region {
    /// Every region, error regions first in field order
    pub const ALL: [Region; 5] = [
        Region::Error(FieldKey::Name),
        Region::Error(FieldKey::Email),
        Region::Error(FieldKey::Subject),
        Region::Error(FieldKey::Message),
        Region::Success,
    ];
}

/// What the validator needs from a rendered form.
///
/// Regions are optional on the rendering side: an implementation that has no
/// element for a region ignores `set_hidden`/`set_text` calls for it. The four
/// inputs are required and must exist for the surface to be constructed.
pub trait FormSurface {
    /// Current raw value of an input
    fn value(&self, field: FieldKey) -> String;

    fn set_hidden(&mut self, region: Region, hidden: bool);

    fn set_text(&mut self, region: Region, text: &str);

    /// Move input focus to a field
    fn focus(&mut self, field: FieldKey);

    /// Restore every input to its default value
    fn reset_all(&mut self);
}

impl<S: FormSurface + ?Sized> FormSurface for &mut S {
    fn value(&self, field: FieldKey) -> String {
        (**self).value(field)
    }

    fn set_hidden(&mut self, region: Region, hidden: bool) {
        (**self).set_hidden(region, hidden)
    }

    fn set_text(&mut self, region: Region, text: &str) {
        (**self).set_text(region, text)
    }

    fn focus(&mut self, field: FieldKey) {
        (**self).focus(field)
    }

    fn reset_all(&mut self) {
        (**self).reset_all()
    }
}
