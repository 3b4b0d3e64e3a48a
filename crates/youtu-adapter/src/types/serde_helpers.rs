/*
[INPUT]:  Response fields that the service may send as JSON null
[OUTPUT]: Zero values in place of null
[POS]:    Data layer - shared serde helpers for response decoding
[UPDATE]: When response fields need different null handling
*/

use serde::{Deserialize, Deserializer};

/// Decode `null` as the field's zero value, like a missing key
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
