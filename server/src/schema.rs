// Maintained by hand. `diesel print-schema` would emit `Array<Nullable<Text>>`
// for the list columns; they are declared non-null here so rows load as
// `Vec<String>`, and the migration rejects NULL entries.

diesel::table! {
    recipes (id) {
        id -> Uuid,
        #[max_length = 200]
        title -> Varchar,
        description -> Text,
        ingredients -> Array<Text>,
        directions -> Array<Text>,
        image -> Nullable<Text>,
        is_public -> Bool,
        owner_id -> Nullable<Uuid>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
