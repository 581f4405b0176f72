use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::either::Either;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("error parsing json")]
    Json(#[from] serde_json::Error),
    #[error("expected json data to be an object")]
    NotAnObject,
    #[error("expected an object with a `left` or `right` key")]
    MissingVariant,
    #[error("error decoding `{key}` payload")]
    Payload {
        key: &'static str,
        source: serde_json::Error,
    },
}

///Decodes an already-parsed json value. `left` is always probed before
///`right`, whatever order the keys came in; a present key with a payload
///of the wrong shape is an error, not a reason to try the other key.
pub fn from_value<L, R>(value: Value) -> Result<Either<L, R>, DecodeError>
where
    L: DeserializeOwned,
    R: DeserializeOwned,
{
    let Value::Object(mut record) = value else {
        return Err(DecodeError::NotAnObject);
    };
    if let Some(payload) = record.remove("left") {
        let left = serde_json::from_value(payload)
            .map_err(|source| DecodeError::Payload { key: "left", source })?;
        return Ok(Either::Left(left));
    }
    log::trace!("no `left` key, probing `right`");
    if let Some(payload) = record.remove("right") {
        let right = serde_json::from_value(payload)
            .map_err(|source| DecodeError::Payload { key: "right", source })?;
        return Ok(Either::Right(right));
    }
    Err(DecodeError::MissingVariant)
}

pub fn from_str<L, R>(json: &str) -> Result<Either<L, R>, DecodeError>
where
    L: DeserializeOwned,
    R: DeserializeOwned,
{
    let value = serde_json::from_str::<Value>(json)?;
    from_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::either::{Left, Right};

    #[test]
    fn left_probed_first() {
        let value: Either<i32, i32> =
            from_value(serde_json::json!({"right": 5, "left": 3})).unwrap();
        assert_eq!(value, Left(3));
    }

    #[test]
    fn right_fallback() {
        let value: Either<i32, String> =
            from_value(serde_json::json!({"right": "five"})).unwrap();
        assert_eq!(value, Right(String::from("five")));
    }

    #[test]
    fn empty_object() {
        let result: Result<Either<i32, i32>, _> = from_value(serde_json::json!({}));
        assert!(matches!(result, Err(DecodeError::MissingVariant)));
    }

    #[test]
    fn non_object() {
        let result: Result<Either<i32, i32>, _> = from_value(serde_json::json!([1, 2]));
        assert!(matches!(result, Err(DecodeError::NotAnObject)));

        let result: Result<Either<i32, i32>, _> = from_value(serde_json::json!(5));
        assert!(matches!(result, Err(DecodeError::NotAnObject)));
    }

    #[test]
    fn bad_left_payload_is_not_retried_as_right() {
        let result: Result<Either<i32, i32>, _> =
            from_value(serde_json::json!({"left": "oops", "right": 2}));
        assert!(matches!(result, Err(DecodeError::Payload { key: "left", .. })));
    }

    #[test]
    fn bad_right_payload() {
        let result: Result<Either<i32, i32>, _> =
            from_value(serde_json::json!({"right": "oops"}));
        assert!(matches!(result, Err(DecodeError::Payload { key: "right", .. })));
    }

    #[test]
    fn extra_keys_ignored() {
        let value: Either<i32, i32> =
            from_value(serde_json::json!({"middle": true, "right": 2})).unwrap();
        assert_eq!(value, Right(2));
    }

    #[test]
    fn null_payload_decodes_by_key() {
        let value: Either<Option<i32>, String> =
            from_value(serde_json::json!({"left": null})).unwrap();
        assert_eq!(value, Left(None));
    }

    #[test]
    fn text_input() {
        let value: Either<i32, String> = from_str(r#"{"left":1}"#).unwrap();
        assert_eq!(value, Left(1));

        assert!(matches!(
            from_str::<i32, String>("not json"),
            Err(DecodeError::Json(_))
        ));
    }
}
