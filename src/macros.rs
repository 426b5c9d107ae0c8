/// Builds a [`ToonValue`](crate::ToonValue) from JSON-like literal syntax.
///
/// Object keys keep the order in which they are written. `undefined` builds
/// the explicit absent leaf.
///
/// Any other expression is converted with [`to_value`](crate::to_value). If
/// that conversion fails, for example past the depth limit, the macro yields
/// `null`. Call `to_value` directly to see the error.
///
/// ```rust
/// use toon_flat::{to_string, toon};
///
/// let value = toon!({"b": 1, "a": [true, null, undefined]});
/// assert_eq!(to_string(&value).unwrap(), "b:1;a.0:true;a.1:null;a.2:undefined");
/// ```
#[macro_export]
macro_rules! toon {
    (null) => {
        $crate::Value::Null
    };

    (undefined) => {
        $crate::Value::Undefined
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
        $crate::Value::Array(vec![$($crate::toon!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::ToonMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::ToonMap::new();
        $(
            object.insert($key.to_string(), $crate::toon!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Any other expression goes through `to_value`
    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}
