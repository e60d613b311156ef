/// Builds a [`Value`](crate::Value) from JSON-like literal syntax.
///
/// Object keys must be string literals. Any other expression is converted
/// with [`to_value`](crate::to_value), falling back to `null` if it cannot be
/// represented.
///
/// ```rust
/// use safeson::{safeson, Value};
///
/// let value = safeson!({
///     "name": "Alice",
///     "tags": ["a", "b"],
///     "admin": false
/// });
/// assert_eq!(value.get("admin"), Some(&Value::Bool(false)));
/// ```
#[macro_export]
macro_rules! safeson {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::safeson!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::safeson!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($other:expr) => {
        $crate::to_value(&$other).unwrap_or($crate::Value::Null)
    };
}
