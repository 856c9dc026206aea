//! Trailing-options convention for argument lists.

use serde_json::Value as Json;

use crate::record::{Record, Value};

/// Split a trailing options record off an argument list.
///
/// If the last argument is a record (or a JSON object, which is converted with
/// [`Record::new_recursive`]) it is removed and returned as the options.
/// Otherwise the arguments are returned untouched with an empty record.
///
/// ```rust
/// use accrue::{Record, Value, extract_options};
/// use serde_json::json;
///
/// let args = vec![Value::from(json!(1)), Value::from(json!(2)), Value::from(json!({"x": 1}))];
/// let (rest, options) = extract_options(args);
///
/// assert_eq!(rest, vec![Value::from(json!(1)), Value::from(json!(2))]);
/// assert_eq!(options, Record::from_json(json!({"x": 1})).unwrap());
/// ```
pub fn extract_options(mut args: Vec<Value>) -> (Vec<Value>, Record) {
    let options = match args.pop() {
        Some(Value::Record(record)) => record,
        Some(Value::Scalar(Json::Object(map))) => Record::new_recursive(map),
        Some(last) => {
            args.push(last);
            Record::new()
        }
        None => Record::new(),
    };
    (args, options)
}
