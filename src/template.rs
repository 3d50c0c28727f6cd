//! Placeholder substitution for host documents.
//!
//! Hosts mark insertion points with `§key§` tokens; every occurrence of a
//! token is replaced by the value registered under `key`.

use serde::Serialize;

pub fn insert<'a, I>(template: &str, data: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut output = template.to_string();
    for (key, value) in data {
        let tag = format!("§{key}§");
        output = output.replace(&tag, value);
    }
    output
}

pub fn to_json<T: Serialize + ?Sized>(data: &T) -> serde_json::Result<String> {
    serde_json::to_string(data)
}
