//! Structural copies between version-specific record types
//!
//! The alpha, beta and v1 compute APIs describe the same logical resources
//! with slightly different field sets. [`copy_via_json`] moves a record from
//! one shape to another by going through `serde_json::Value`, so fields are
//! matched by their serialized names and anything without a counterpart is
//! dropped.

use super::error::{CopyError, CopyResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Copy every field of `src` whose serialized name also exists on `D` into `dst`.
///
/// Fields present only on `dst` keep their current value. Fields present only
/// on `src` are ignored, unless `D` rejects unknown fields during
/// deserialization. A `null` in `src` (e.g. an unset `Option`) leaves the
/// destination field as it is. `dst` is only replaced once the merged value
/// has deserialized successfully.
///
/// `D` must be `Serialize` because the current destination is serialized to
/// seed the merge; a failure there is also reported as
/// [`CopyError::Serialize`], even though the source serialized fine.
pub fn copy_via_json<D, S>(dst: &mut D, src: &S) -> CopyResult<()>
where
    D: Serialize + DeserializeOwned,
    S: Serialize + ?Sized,
{
    let src = serde_json::to_value(src).map_err(CopyError::Serialize)?;
    let mut merged = serde_json::to_value(&*dst).map_err(CopyError::Serialize)?;

    merge_json(&mut merged, &src);

    *dst = serde_json::from_value(merged).map_err(CopyError::Deserialize)?;
    Ok(())
}

/// Overlay `src` onto `dst`.
///
/// Objects are merged key by key, recursing into nested objects. `null` in
/// `src` is skipped. Any other value (arrays, scalars) replaces the value in
/// `dst`.
pub fn merge_json(dst: &mut Value, src: &Value) {
    match (dst, src) {
        (_, Value::Null) => {}
        (Value::Object(dst_map), Value::Object(src_map)) => {
            for (field, src_value) in src_map {
                match dst_map.get_mut(field) {
                    Some(dst_value) => merge_json(dst_value, src_value),
                    None if src_value.is_null() => {}
                    None => {
                        dst_map.insert(field.clone(), src_value.clone());
                    }
                }
            }
        }
        (dst, src) => *dst = src.clone(),
    }
}
