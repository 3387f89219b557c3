use serde::Deserializer;
use serde::de::{self, Visitor};
use std::fmt;

/// Deserialize an optional integer of any width.
///
/// Values too large for the resolved type still have to reach the range pass, so
/// nothing here is narrowed. Integers beyond `u64` arrive as floats from the
/// untyped YAML/JSON value and are accepted as long as they have no fraction.
pub(crate) fn deserialize_wide_int<'de, D>(deserializer: D) -> Result<Option<i128>, D::Error>
where
    D: Deserializer<'de>,
{
    struct WideIntVisitor;

    impl<'de> Visitor<'de> for WideIntVisitor {
        type Value = Option<i128>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or null")
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(i128::from(value)))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(i128::from(value)))
        }

        fn visit_i128<E>(self, value: i128) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }

        fn visit_u128<E>(self, value: u128) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(i128::try_from(value).unwrap_or(i128::MAX)))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if value.is_finite() && value.fract() == 0.0 {
                // saturating
                Ok(Some(value as i128))
            } else {
                Err(E::invalid_type(de::Unexpected::Float(value), &self))
            }
        }
    }

    deserializer.deserialize_any(WideIntVisitor)
}
