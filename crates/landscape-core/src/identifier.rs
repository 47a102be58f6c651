//! Interned identifiers for model elements.
//!
//! Software systems are identified by their name. The [`Id`] type interns
//! those names so that identifiers are `Copy`, cheap to hash and cheap to
//! compare, while still displaying as the original string.

use std::{
    fmt,
    sync::{Mutex, OnceLock, PoisonError},
};

use serde::{Serialize, Serializer};
use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner backing every [`Id`].
///
/// The interner only ever grows; symbols are never removed, so a symbol
/// obtained from it always resolves.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

/// Runs `f` with exclusive access to the interner.
fn with_interner<R>(f: impl FnOnce(&mut DefaultStringInterner) -> R) -> R {
    let mut interner = INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    f(&mut interner)
}

/// Identifier of a model element.
///
/// # Examples
///
/// ```
/// use landscape_core::identifier::Id;
///
/// let nomis = Id::new("NOMIS");
/// assert_eq!(nomis, "NOMIS");
/// assert_eq!(nomis, Id::new("NOMIS"));
/// assert_eq!(nomis.to_string(), "NOMIS");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` for the given name, interning it on first use.
    pub fn new(name: &str) -> Self {
        Self(with_interner(|interner| interner.get_or_intern(name)))
    }

    /// Returns the `Id` of an already interned name without interning it.
    pub fn get(name: &str) -> Option<Self> {
        with_interner(|interner| interner.get(name)).map(Self)
    }

    /// Returns the interned string as an owned `String`.
    pub fn as_string(&self) -> String {
        with_interner(|interner| {
            interner
                .resolve(self.0)
                .expect("interned symbols are never removed")
                .to_string()
        })
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "NOMIS"`.
    fn eq(&self, other: &str) -> bool {
        // Only strings that were already interned can be equal.
        Self::get(other) == Some(*self)
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_string())
    }
}
