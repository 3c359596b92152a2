//! Loading schema documents from JSON.

use gqlmd_schema::{
    Category, DirectiveLocation, InputValueKind, Schema, SchemaElement, SchemaError, TypeDef, TypeRef,
};

const DOCUMENT: &str = r#"{
  "types": [
    {
      "kind": "INTERFACE",
      "name": "Node",
      "fields": [
        { "name": "id", "type": { "kind": "NON_NULL", "ofType": { "kind": "NAMED", "name": "ID", "category": "scalar" } } }
      ]
    },
    {
      "kind": "OBJECT",
      "name": "User",
      "description": "A registered account.",
      "interfaces": ["Node"],
      "directives": [{ "name": "auth", "arguments": { "role": "admin" } }],
      "fields": [
        { "name": "id", "type": { "kind": "NON_NULL", "ofType": { "kind": "NAMED", "name": "ID", "category": "scalar" } } },
        {
          "name": "posts",
          "type": { "kind": "LIST", "ofType": { "kind": "NAMED", "name": "Post", "category": "object" } },
          "arguments": [
            { "name": "first", "type": { "kind": "NAMED", "name": "Int", "category": "scalar" }, "defaultValue": "10" }
          ]
        },
        {
          "name": "login",
          "type": { "kind": "NAMED", "name": "String", "category": "scalar" },
          "deprecationReason": "Use `id`."
        }
      ]
    },
    { "kind": "OBJECT", "name": "Post" },
    { "kind": "UNION", "name": "SearchResult", "members": ["User", "Post"] },
    {
      "kind": "ENUM",
      "name": "Role",
      "values": [{ "name": "ADMIN" }, { "name": "GUEST", "deprecated": true }]
    },
    {
      "kind": "INPUT_OBJECT",
      "name": "UserFilter",
      "fields": [{ "name": "role", "type": { "kind": "NAMED", "name": "Role", "category": "enum" } }]
    },
    { "kind": "SCALAR", "name": "Date", "specifiedByUrl": "https://tools.ietf.org/html/rfc3339" }
  ],
  "directives": [
    {
      "name": "auth",
      "locations": ["OBJECT", "FIELD_DEFINITION"],
      "arguments": [{ "name": "role", "type": { "kind": "NAMED", "name": "String", "category": "scalar" } }],
      "repeatable": true
    }
  ]
}"#;

#[test]
fn test_loads_types_in_declaration_order() {
    let schema = Schema::from_json(DOCUMENT).expect("valid schema");
    let names: Vec<&str> = schema.types().map(TypeDef::name).collect();
    assert_eq!(
        names,
        ["Int", "Float", "String", "Boolean", "ID", "Node", "User", "Post", "SearchResult", "Role", "UserFilter", "Date"]
    );
}

#[test]
fn test_loads_type_references() {
    let schema = Schema::from_json(DOCUMENT).expect("valid schema");
    let user = schema.get_type("User").expect("User is defined");
    assert_eq!(user.category(), Category::Object);
    assert_eq!(user.interfaces(), ["Node"]);

    let posts = &user.fields()[1];
    assert_eq!(
        posts.ty,
        TypeRef::list(TypeRef::named("Post", Category::Object))
    );
    assert_eq!(posts.arguments[0].default_value.as_deref(), Some("10"));
    assert_eq!(posts.arguments[0].kind, InputValueKind::Argument);
}

#[test]
fn test_deprecation_from_document() {
    let schema = Schema::from_json(DOCUMENT).expect("valid schema");
    let user = schema.get_type("User").expect("User is defined");
    let login = &user.fields()[2];
    assert!(login.is_deprecated());
    assert_eq!(SchemaElement::deprecation_reason(login), Some("Use `id`."));

    let Some(TypeDef::Enum(role)) = schema.get_type("Role") else {
        panic!("Role should be an enum");
    };
    assert!(!role.values[0].is_deprecated());
    assert!(role.values[1].is_deprecated());
}

#[test]
fn test_applied_directive_arguments() {
    let schema = Schema::from_json(DOCUMENT).expect("valid schema");
    let user = schema.get_type("User").expect("User is defined");
    let auth = &user.directives()[0];
    assert_eq!(auth.name, "auth");
    assert_eq!(auth.argument("role").and_then(|v| v.as_str()), Some("admin"));
}

#[test]
fn test_input_fields_have_input_location() {
    let schema = Schema::from_json(DOCUMENT).expect("valid schema");
    let Some(TypeDef::InputObject(filter)) = schema.get_type("UserFilter") else {
        panic!("UserFilter should be an input object");
    };
    assert_eq!(filter.fields[0].location(), Some(DirectiveLocation::InputFieldDefinition));
}

#[test]
fn test_directive_definitions() {
    let schema = Schema::from_json(DOCUMENT).expect("valid schema");
    let auth = schema.get_directive("auth").expect("auth is defined");
    assert!(auth.repeatable);
    assert!(auth.is_valid_location(DirectiveLocation::FieldDefinition));
    assert!(!auth.is_valid_location(DirectiveLocation::Enum));
}

#[test]
fn test_duplicate_type() {
    let document = r#"{ "types": [{ "kind": "OBJECT", "name": "User" }, { "kind": "ENUM", "name": "User" }] }"#;
    assert!(matches!(Schema::from_json(document), Err(SchemaError::DuplicateType(name)) if name == "User"));
}

#[test]
fn test_duplicate_type_after_many() {
    let types: Vec<String> = (0..200)
        .map(|index| format!(r#"{{ "kind": "OBJECT", "name": "Type{index}" }}"#))
        .chain(std::iter::once(r#"{ "kind": "SCALAR", "name": "Type150" }"#.to_string()))
        .collect();
    let document = format!(r#"{{ "types": [{}] }}"#, types.join(", "));
    assert!(matches!(Schema::from_json(&document), Err(SchemaError::DuplicateType(name)) if name == "Type150"));
}

#[test]
fn test_builtin_scalar_redefinition_is_not_a_duplicate() {
    let document = r#"{ "types": [{ "kind": "SCALAR", "name": "String", "description": "Text." }] }"#;
    let schema = Schema::from_json(document).expect("built-in scalars may be redefined");
    assert_eq!(schema.get_type("String").and_then(TypeDef::description), Some("Text."));
}

#[test]
fn test_duplicate_directive() {
    let document = r#"{ "directives": [{ "name": "auth" }, { "name": "auth" }] }"#;
    assert!(matches!(Schema::from_json(document), Err(SchemaError::DuplicateDirective(name)) if name == "auth"));
}

#[test]
fn test_invalid_document() {
    let error = Schema::from_json("{ \"types\": 1 }").expect_err("types must be a list");
    assert!(matches!(error, SchemaError::Json(_)));
    assert!(error.to_string().starts_with("invalid schema document"));
}
