use schemars::r#gen::SchemaGenerator;
use schemars::schema::Schema;
use schemars::JsonSchema;

use crate::Nullable;

/// Described on the wire exactly like `Option<T>`
impl<T: JsonSchema> JsonSchema for Nullable<T> {
    fn is_referenceable() -> bool {
        false
    }

    fn schema_name() -> String {
        Option::<T>::schema_name()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        Option::<T>::json_schema(generator)
    }
}

#[cfg(test)]
mod tests {
    use schemars::schema_for;

    use crate::Nullable;

    #[test]
    fn matches_option_schema() {
        let nullable = serde_json::to_value(schema_for!(Nullable<String>)).unwrap();
        let option = serde_json::to_value(schema_for!(Option<String>)).unwrap();

        assert_eq!(nullable, option);
    }
}
