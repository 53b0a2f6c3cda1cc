// Re-export the case conversion functions exposed as template filters
pub use cruet::{
    case::{
        camel::to_camel_case, kebab::to_kebab_case, pascal::to_pascal_case,
        screaming_snake::to_screaming_snake_case, snake::to_snake_case,
        train::to_train_case,
    },
    string::{pluralize::to_plural, singularize::to_singular},
};

/// Yes/no classification usable in templates: `{% if use_db | yes %}`.
pub fn yes_filter(value: minijinja::Value) -> bool {
    if let Some(s) = value.as_str() {
        return crate::ext::yes_no_to_bool(s);
    }
    value.is_true()
}
