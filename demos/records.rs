use gconv::{cast, Map, Record, Value};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, Record)]
struct User {
    id: i64,
    name: String,
    email: String,
    is_active: bool,
}

#[derive(Debug, Default, Deserialize, Record)]
struct Product {
    id: i64,
    name: String,
    price: f64,
}

#[derive(Debug, Default, Deserialize, Record)]
struct Order {
    order_id: i64,
    quantity: i32,
    user: User,
    product: Product,
}

fn main() {
    println!("Example 1:\nMap into a record");
    let user: Value = r#"{
        "id": 123,
        "name": "Zhang San",
        "email": "zhangsan@example.com",
        "is_active": true
    }"#
    .parse()
    .unwrap_or_default();
    println!("{:#?}\n", cast::<User>(&user));

    println!("Example 2:\nAPI response with stringly typed fields");
    let response: Value = r#"{
        "code": "200",
        "success": "true",
        "data": {"id": "1001", "name": "Laptop", "price": "5999.00"}
    }"#
    .parse()
    .unwrap_or_default();
    let code = cast::<i32>(response.get("code").unwrap_or(&Value::Null));
    let success = cast::<bool>(response.get("success").unwrap_or(&Value::Null));
    let data = cast::<Map>(response.get("data").unwrap_or(&Value::Null));
    println!("code={code} success={success} keys={:?}", data.keys().collect::<Vec<_>>());
    println!("{:#?}\n", cast::<Product>(&Value::from(data)));

    println!("Example 3:\nNested records");
    let order: Value = r#"{
        "order_id": 10001,
        "quantity": "5",
        "user": {"id": 1, "name": "Alice", "email": "alice@example.com", "is_active": "1"},
        "product": {"id": 42, "name": "Keyboard", "price": 129.5}
    }"#
    .parse()
    .unwrap_or_default();
    println!("{:#?}", cast::<Order>(&order));
}
