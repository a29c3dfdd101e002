//! Serde support, encoded exactly like [`Option`].
//!
//! Reasons are not serialized. A deserialized `null` becomes an absent
//! optional with [`MissingReason::ConvertedFromNull`](crate::MissingReason).

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{none::UntypedNone, optional::Optional};

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_ref().into_option().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Optional::from)
    }
}

impl Serialize for UntypedNone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_none()
    }
}
