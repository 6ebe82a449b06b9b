//! Serialization and deserialization.
//!
//! The count types serialize as plain `u64` integers and the rate as a
//! plain `f64`. Deserialization additionally accepts human-readable strings
//! resolved through the lenient SI parser, so configuration files may say
//! `"128 MiB"` where a number is expected.

use crate::{BitCount, BitRate, ByteCount};

macro_rules! serde_count {
    ($value:ident, $expecting:literal) => {
        impl serde::Serialize for $value {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_u64(self.raw)
            }
        }

        impl<'de> serde::Deserialize<'de> for $value {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct Visitor;

                impl serde::de::Visitor<'_> for Visitor {
                    type Value = $value;

                    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                        f.write_str($expecting)
                    }

                    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        Ok($value::new(v))
                    }

                    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        u64::try_from(v).map($value::new).map_err(|_| {
                            E::invalid_value(serde::de::Unexpected::Signed(v), &$expecting)
                        })
                    }

                    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        $value::parse(v).map_err(|_| {
                            E::invalid_value(serde::de::Unexpected::Str(v), &$expecting)
                        })
                    }
                }

                deserializer.deserialize_any(Visitor)
            }
        }
    };
}

serde_count!(BitCount, "bit count");
serde_count!(ByteCount, "byte count");

impl serde::Serialize for BitRate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.raw)
    }
}

impl<'de> serde::Deserialize<'de> for BitRate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;

        impl serde::de::Visitor<'_> for Visitor {
            type Value = BitRate;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("bit rate")
            }

            fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(BitRate::new(v))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(BitRate::new(v as f64))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(BitRate::new(v as f64))
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                BitRate::parse(v)
                    .map_err(|_| E::invalid_value(serde::de::Unexpected::Str(v), &"bit rate"))
            }
        }

        deserializer.deserialize_any(Visitor)
    }
}
