use std::borrow::Cow;
use std::collections::HashMap;

use crate::draw::list::FontRole;
use crate::draw::text::{FixedAdvance, TextMeasure};
use crate::foundation::core::Vec2;
use crate::foundation::error::{PortalError, PortalResult};

/// Font files the portal loads. Several roles share a face at different sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontFace {
    Body,
    Bold,
    Icons,
    Nav,
}

impl FontFace {
    pub const ALL: [FontFace; 4] = [
        FontFace::Body,
        FontFace::Bold,
        FontFace::Icons,
        FontFace::Nav,
    ];

    pub fn for_role(role: FontRole) -> Self {
        match role {
            FontRole::Body => FontFace::Body,
            FontRole::Heading | FontRole::Logo => FontFace::Bold,
            FontRole::NavIcon | FontRole::ExitIcon => FontFace::Icons,
            FontRole::Nav => FontFace::Nav,
        }
    }
}

/// Shaped single-line text. Color is applied at paint time, so layouts carry no brush.
pub type TextLayout = parley::Layout<()>;

struct LoadedFace {
    family: String,
    data: vello_cpu::peniko::FontData,
}

const LAYOUT_CACHE_LIMIT: usize = 1024;

/// Registered fonts plus a cache of shaped layouts keyed by role and text.
///
/// Roles whose face is missing fall back to [`FontFace::Body`]; with no body font either,
/// measurement falls back to [`FixedAdvance`] and nothing is shaped.
pub struct FontBook {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    faces: HashMap<FontFace, LoadedFace>,
    layouts: HashMap<(FontRole, String), TextLayout>,
}

impl Default for FontBook {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FontBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontBook")
            .field("faces", &self.loaded_faces())
            .field("cached_layouts", &self.layouts.len())
            .finish()
    }
}

impl FontBook {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            faces: HashMap::new(),
            layouts: HashMap::new(),
        }
    }

    /// Register raw font bytes as `face`.
    pub fn register(&mut self, face: FontFace, bytes: Vec<u8>) -> PortalResult<()> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            PortalError::validation(format!("no font families registered for {face:?}"))
        })?;

        let family = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| PortalError::validation("registered font family has no name"))?
            .to_string();

        let data = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0);
        self.faces.insert(face, LoadedFace { family, data });
        self.layouts.clear();
        Ok(())
    }

    pub fn has_face(&self, face: FontFace) -> bool {
        self.faces.contains_key(&face)
    }

    pub fn loaded_faces(&self) -> Vec<FontFace> {
        FontFace::ALL
            .into_iter()
            .filter(|f| self.has_face(*f))
            .collect()
    }

    /// Face actually used for `role`.
    pub fn resolve(&self, role: FontRole) -> Option<FontFace> {
        let own = FontFace::for_role(role);
        [own, FontFace::Body]
            .into_iter()
            .find(|f| self.has_face(*f))
    }

    pub fn font_data(&self, face: FontFace) -> Option<&vello_cpu::peniko::FontData> {
        self.faces.get(&face).map(|f| &f.data)
    }

    /// Shaped layout of `text` in `role`, or `None` when no usable face is loaded.
    pub fn layout(&mut self, text: &str, role: FontRole) -> Option<&TextLayout> {
        let face = self.resolve(role)?;
        let key = (role, text.to_string());
        if !self.layouts.contains_key(&key) {
            if self.layouts.len() >= LAYOUT_CACHE_LIMIT {
                self.layouts.clear();
            }
            let layout = self.build(text, role, face)?;
            self.layouts.insert(key.clone(), layout);
        }
        self.layouts.get(&key)
    }

    fn build(&mut self, text: &str, role: FontRole, face: FontFace) -> Option<TextLayout> {
        let family = self.faces.get(&face)?.family.clone();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(role.size_px()));
        if face == FontFace::Bold {
            builder.push_default(parley::style::StyleProperty::FontWeight(
                parley::style::FontWeight::BOLD,
            ));
        }

        let mut layout: TextLayout = builder.build(text);
        layout.break_all_lines(None);
        Some(layout)
    }
}

impl TextMeasure for FontBook {
    fn measure(&mut self, text: &str, role: FontRole) -> Vec2 {
        match self.layout(text, role) {
            Some(layout) => Vec2::new(f64::from(layout.width()), f64::from(layout.height())),
            None => FixedAdvance.measure(text, role),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fonts.rs"]
mod tests;
