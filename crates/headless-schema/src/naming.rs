//! How class names turn into GraphQL type names.

use inflector::Inflector;

/// The type name of a class: its last namespace segment.
pub fn type_name_for_class(class: &str) -> &str {
    class.rsplit('\\').next().unwrap_or(class)
}

pub fn interface_name(type_name: &str, suffix: &str) -> String {
    format!("{type_name}{suffix}")
}

/// Name of the query field listing instances of a type, e.g. `readProductPages`.
pub fn read_operation_name(type_name: &str) -> String {
    format!("read{}", plural(type_name))
}

/// Name of the query field fetching one instance of a type, e.g. `readOneProductPage`.
pub fn read_one_operation_name(type_name: &str) -> String {
    format!("readOne{type_name}")
}

/// Pluralizes the last word of a pascal cased name: `ProductPage` to `ProductPages`, `Person` to `People`.
fn plural(name: &str) -> String {
    let split = name.rfind(char::is_uppercase).unwrap_or(0);
    let (head, word) = name.split_at(split);

    let plural = word.to_lowercase().to_plural();

    if word.starts_with(char::is_uppercase) {
        format!("{head}{}", plural.to_pascal_case())
    } else {
        format!("{head}{plural}")
    }
}
