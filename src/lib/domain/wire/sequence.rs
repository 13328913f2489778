//! Sequence serialization helper

use serde_json::Value;

/// A model object with a provider JSON representation
pub trait ToJson {
    /// Render the object as provider-ready JSON
    fn to_json(&self) -> Value;
}

/// Map a sequence of [`ToJson`] objects to their JSON forms, keeping order.
pub fn array_to_json<T: ToJson>(items: &[T]) -> Vec<Value> {
    items.iter().map(ToJson::to_json).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    struct Numbered(u32);

    impl ToJson for Numbered {
        fn to_json(&self) -> Value {
            json!({ "n": self.0 })
        }
    }

    #[test]
    fn test_order_and_length_are_preserved() {
        let items = vec![Numbered(3), Numbered(1), Numbered(2)];

        assert_eq!(
            array_to_json(&items),
            vec![json!({"n": 3}), json!({"n": 1}), json!({"n": 2})]
        );
    }

    #[test]
    fn test_empty_sequence() {
        let items: Vec<Numbered> = vec![];

        assert!(array_to_json(&items).is_empty());
    }
}
