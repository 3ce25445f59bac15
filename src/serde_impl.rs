//! Serde support over the compact wire format (feature `serde`).

use crate::Rat;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Rat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&self.to_bytes())
    }
}

struct CompactVisitor;

impl<'de> de::Visitor<'de> for CompactVisitor {
    type Value = Rat;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a compact rational encoding")
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Rat, E>
    where
        E: de::Error,
    {
        Rat::from_bytes(v).map_err(E::custom)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Rat, A::Error>
    where
        A: de::SeqAccess<'de>,
    {
        let mut buf = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(byte) = seq.next_element::<u8>()? {
            buf.push(byte);
        }
        Rat::from_bytes(&buf).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Rat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_byte_buf(CompactVisitor)
    }
}
