//! Structural deserialization through `to_value`.

use json_coerce::{to_value, to_value_or_default, ElementExt, JsonDocument, JsonElement};
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Default)]
struct A {
    a: i32,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Order {
    order_id: u64,
    customer_name: String,
    unit_price: f64,
    lines: Vec<Line>,
    shipped: Option<bool>,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Line {
    sku: String,
    quantity: u32,
}

#[test]
fn object_maps_to_struct() {
    let doc = JsonDocument::parse(r#"{"a":1}"#).unwrap();
    assert_eq!(to_value::<A>(doc.root()).unwrap(), Some(A { a: 1 }));
}

#[test]
fn null_and_undefined_are_absent() {
    let doc = JsonDocument::parse("null").unwrap();
    assert_eq!(to_value::<A>(doc.root()).unwrap(), None);
    assert_eq!(to_value::<A>(JsonElement::undefined()).unwrap(), None);
    assert_eq!(to_value_or_default::<A>(doc.root()).unwrap(), A::default());
}

#[test]
fn web_naming_binds_camel_and_pascal_case() {
    let doc = JsonDocument::parse(
        r#"{
            "OrderId": "1001",
            "customerName": "Ada",
            "UNITPRICE": "9.5",
            "lines": [{"SKU": "x-1", "Quantity": 2}, {"sku": "y-2", "quantity": "3"}]
        }"#,
    )
    .unwrap();
    let order: Order = doc.root().to_value().unwrap().unwrap();
    assert_eq!(
        order,
        Order {
            order_id: 1001,
            customer_name: "Ada".to_string(),
            unit_price: 9.5,
            lines: vec![
                Line { sku: "x-1".to_string(), quantity: 2 },
                Line { sku: "y-2".to_string(), quantity: 3 },
            ],
            shipped: None,
        }
    );
}

#[test]
fn nested_element_deserializes_on_its_own() {
    let doc = JsonDocument::parse(r#"{"wrapper":{"inner":{"a":5}}}"#).unwrap();
    let inner = doc.root().pointer("/wrapper/inner").unwrap();
    assert_eq!(to_value::<A>(inner).unwrap(), Some(A { a: 5 }));
}

#[test]
fn scalars_and_collections() {
    let doc = JsonDocument::parse(r#"[1, "2", 3]"#).unwrap();
    assert_eq!(to_value::<Vec<i64>>(doc.root()).unwrap(), Some(vec![1, 2, 3]));
    let doc = JsonDocument::parse(r#""text""#).unwrap();
    assert_eq!(to_value::<String>(doc.root()).unwrap(), Some("text".to_string()));
}

#[test]
fn deserializer_errors_pass_through() {
    let doc = JsonDocument::parse(r#"{"a":"one"}"#).unwrap();
    let err = to_value::<A>(doc.root()).unwrap_err();
    assert!(err.is_data(), "{}", err);
    assert!(err.to_string().contains("one"), "{}", err);

    let doc = JsonDocument::parse(r#"{"b":1}"#).unwrap();
    let err = to_value::<A>(doc.root()).unwrap_err();
    assert!(err.to_string().contains("missing field `a`"), "{}", err);
}

#[derive(Debug, Deserialize, PartialEq)]
struct Session {
    user_name: String,
}

#[derive(Debug, Deserialize, PartialEq)]
enum AuthEvent {
    Login(Session),
    Logout { user_name: String },
}

#[test]
fn enum_payloads_use_web_naming() {
    let doc = JsonDocument::parse(
        r#"[{"Login": {"userName": "ada"}}, {"Logout": {"UserName": "ada"}}]"#,
    )
    .unwrap();
    let events: Vec<AuthEvent> = to_value(doc.root()).unwrap().unwrap();
    assert_eq!(
        events,
        vec![
            AuthEvent::Login(Session { user_name: "ada".to_string() }),
            AuthEvent::Logout { user_name: "ada".to_string() },
        ]
    );
}
