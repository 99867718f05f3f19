use gconv::{cast, Map, Value};

fn main() {
    let v = Value::from("123");

    println!("Example 1:\nOne dynamic value, several targets");
    println!("{}", cast::<i32>(&v));
    println!("{}", cast::<f64>(&v));
    println!("{}", cast::<String>(&v));
    println!("{}\n", cast::<bool>(&Value::from("true")));

    println!("Example 2:\nMixed sequence into integers");
    let mixed = Value::from(vec![
        Value::from(1),
        Value::from("2"),
        Value::from(3.0),
        Value::from("4.5"),
        Value::from(true),
    ]);
    let ints: Vec<i32> = cast::<Vec<Value>>(&mixed).iter().map(cast).collect();
    println!("{} => {:?}\n", mixed, ints);

    println!("Example 3:\nMaps pass through, everything else is empty");
    let m: Value = [("a", 1)].into_iter().collect();
    println!("{:?}", cast::<Map>(&m));
    println!("{:?}", cast::<Map>(&Value::from(5)));
}
