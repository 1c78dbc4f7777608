// Copyright 2026 the Typecase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Model for font families and the read-only face catalog.

use crate::attributes::{FontStyle, FontWeight};
use hashbrown::HashMap;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// Identifier naming a concrete, renderable face.
///
/// The underlying string is owned by the platform text engine (for example
/// `Helvetica-LightOblique` or `.SFNSText-BoldItalic`) and its exact shape
/// can vary across platform versions. Treat it as opaque: match it
/// structurally, not against a full literal.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct FaceId(Arc<str>);

impl FaceId {
    /// Creates an identifier from a face name.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// Returns the face name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FaceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FaceId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single catalog entry: one face variant of a family.
#[derive(Clone, Debug)]
pub struct FaceInfo {
    weight: FontWeight,
    style: FontStyle,
    id: FaceId,
}

impl FaceInfo {
    /// Creates a face entry with the given weight class, slope and name.
    pub fn new(weight: FontWeight, style: FontStyle, id: impl Into<FaceId>) -> Self {
        Self {
            weight,
            style,
            id: id.into(),
        }
    }

    /// Returns the weight class of the face.
    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// Returns the slope of the face.
    pub fn style(&self) -> FontStyle {
        self.style
    }

    /// Returns the identifier of the face.
    pub fn id(&self) -> &FaceId {
        &self.id
    }
}

/// Named set of faces that are instances of a core design.
#[derive(Clone, Debug)]
pub struct FamilyInfo(Arc<FamilyInner>);

#[derive(Debug)]
struct FamilyInner {
    name: String,
    faces: SmallVec<[FaceInfo; 8]>,
}

impl FamilyInfo {
    /// Creates a new font family object with the given name and collection
    /// of faces.
    pub fn new(name: impl Into<String>, faces: impl IntoIterator<Item = FaceInfo>) -> Self {
        Self(Arc::new(FamilyInner {
            name: name.into(),
            faces: faces.into_iter().collect(),
        }))
    }

    /// Returns the name of the family.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Returns the faces that are members of the family.
    pub fn faces(&self) -> &[FaceInfo] {
        &self.0.faces
    }

    /// Returns the index of the best face for the given attributes.
    pub fn match_index(&self, style: FontStyle, weight: FontWeight) -> Option<usize> {
        crate::matching::match_face(self.faces(), style, weight)
    }

    /// Selects the best face for the given attributes.
    pub fn match_face(&self, style: FontStyle, weight: FontWeight) -> Option<&FaceInfo> {
        self.faces().get(self.match_index(style, weight)?)
    }
}

/// Read-only mapping of family names to their available faces.
///
/// A catalog is built once and never mutated afterward, so shared references
/// can be used from any number of threads without synchronization. Families
/// that fail to load are simply absent, which is indistinguishable from
/// "not installed" and resolves through the system-font fallback.
#[derive(Clone, Debug)]
pub struct Catalog {
    families: HashMap<String, FamilyInfo>,
}

impl Catalog {
    /// Builds a catalog from an explicit set of families.
    pub fn with_families(families: impl IntoIterator<Item = FamilyInfo>) -> Self {
        let families: HashMap<_, _> = families
            .into_iter()
            .map(|family| (family.name().to_owned(), family))
            .collect();
        log::debug!("face catalog loaded with {} families", families.len());
        Self { families }
    }

    /// Builds the catalog of faces available on the reference platform.
    pub fn builtin() -> Self {
        use crate::attributes::FontStyle::{Italic, Normal};
        use crate::attributes::FontWeight as W;

        fn family(name: &str, faces: &[(FontWeight, FontStyle, &str)]) -> FamilyInfo {
            FamilyInfo::new(
                name,
                faces
                    .iter()
                    .map(|&(weight, style, id)| FaceInfo::new(weight, style, id)),
            )
        }

        Self::with_families([
            family(
                "Helvetica",
                &[
                    (W::LIGHT, Normal, "Helvetica-Light"),
                    (W::LIGHT, Italic, "Helvetica-LightOblique"),
                    (W::NORMAL, Normal, "Helvetica"),
                    (W::NORMAL, Italic, "Helvetica-Oblique"),
                    (W::BOLD, Normal, "Helvetica-Bold"),
                    (W::BOLD, Italic, "Helvetica-BoldOblique"),
                ],
            ),
            family(
                "Helvetica Neue",
                &[
                    (W::LIGHT, Normal, "HelveticaNeue-Light"),
                    (W::LIGHT, Italic, "HelveticaNeue-LightItalic"),
                    (W::NORMAL, Normal, "HelveticaNeue"),
                    (W::NORMAL, Italic, "HelveticaNeue-Italic"),
                    (W::BOLD, Normal, "HelveticaNeue-Bold"),
                    (W::BOLD, Italic, "HelveticaNeue-BoldItalic"),
                ],
            ),
            family(
                "Georgia",
                &[
                    (W::NORMAL, Normal, "Georgia"),
                    (W::NORMAL, Italic, "Georgia-Italic"),
                    (W::BOLD, Normal, "Georgia-Bold"),
                    (W::BOLD, Italic, "Georgia-BoldItalic"),
                ],
            ),
            family("Impact", &[(W::NORMAL, Normal, "Impact")]),
        ])
    }

    /// Returns the family registered under the given name, if any.
    pub fn lookup(&self, name: &str) -> Option<&FamilyInfo> {
        self.families.get(name)
    }

    /// Returns the number of registered families.
    pub fn len(&self) -> usize {
        self.families.len()
    }

    /// Returns `true` if the catalog has no families.
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Catalog, FamilyInfo};

    #[test]
    fn builtin_families_are_present() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 4);
        assert!(!catalog.is_empty());
        for name in ["Helvetica", "Helvetica Neue", "Georgia", "Impact"] {
            let family = catalog.lookup(name).unwrap();
            assert_eq!(family.name(), name);
            assert!(!family.faces().is_empty(), "{name} has no faces");
        }
        assert!(catalog.lookup("MissingFont").is_none());
    }

    #[test]
    fn a_catalog_without_families_is_empty() {
        let catalog = Catalog::with_families(std::iter::empty::<FamilyInfo>());
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn lookup_is_exact() {
        let catalog = Catalog::builtin();
        assert!(catalog.lookup("helvetica").is_none());
    }
}
