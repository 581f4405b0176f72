use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::either::Either;

//wire shape is a single-entry object, {"left": payload} or
//{"right": payload}; the key alone carries the tag
impl<L: Serialize, R: Serialize> Serialize for Either<L, R> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut record = serializer.serialize_map(Some(1))?;
        match self {
            Either::Left(left) => record.serialize_entry("left", left)?,
            Either::Right(right) => record.serialize_entry("right", right)?,
        }
        record.end()
    }
}

enum Field {
    Left,
    Right,
    Other,
}

struct FieldVisitor;

impl<'de> Visitor<'de> for FieldVisitor {
    type Value = Field;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("`left` or `right`")
    }

    fn visit_str<E>(self, key: &str) -> Result<Field, E>
    where
        E: de::Error,
    {
        Ok(match key {
            "left" => Field::Left,
            "right" => Field::Right,
            _ => Field::Other,
        })
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(FieldVisitor)
    }
}

struct EitherVisitor<L, R> {
    marker: PhantomData<(L, R)>,
}

impl<'de, L: Deserialize<'de>, R: Deserialize<'de>> Visitor<'de> for EitherVisitor<L, R> {
    type Value = Either<L, R>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object with a `left` or `right` key")
    }

    fn visit_map<M>(self, mut record: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        //the first recognized key decides the variant; a bad payload
        //under it is an error, not a reason to read further
        let value = loop {
            let Some(key) = record.next_key::<Field>()? else {
                return Err(de::Error::custom(
                    "expected an object with a `left` or `right` key",
                ));
            };
            match key {
                Field::Left => break Either::Left(record.next_value()?),
                Field::Right => break Either::Right(record.next_value()?),
                Field::Other => {
                    record.next_value::<IgnoredAny>()?;
                }
            }
        };
        while record.next_key::<IgnoredAny>()?.is_some() {
            record.next_value::<IgnoredAny>()?;
        }
        Ok(value)
    }
}

impl<'de, L: Deserialize<'de>, R: Deserialize<'de>> Deserialize<'de> for Either<L, R> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(EitherVisitor { marker: PhantomData })
    }
}
