//! Strongly typed identifier wrappers.
//!
//! Ids come from the external event/user store (SQLite `INTEGER PRIMARY
//! KEY`), so they are opaque here: the core only compares, orders and hashes
//! them.  On the wire they serialise as bare integers.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        $vis struct $name(pub $inner);

        impl $name {
            /// The raw store identifier.
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }
    };
}

typed_id! {
    /// Identifier of an event in the event store.
    pub struct EventId(u32);
}

typed_id! {
    /// Identifier of the user on whose behalf routes are planned and
    /// registrations are issued.
    pub struct UserId(u32);
}
