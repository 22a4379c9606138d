use predswitch::switch;

fn main() {
    let name = String::from("Gerard");
    let greeting = String::from("Hello Ana");
    let mut out = String::new();
    switch!(greeting {
        case val.contains(name.as_str()) => { out = String::from("hi"); }
        case val.len() > 10 => { out = String::from("long"); }
        default => { out = format!("other: {}", greeting); }
    });
    assert_eq!(out, "other: Hello Ana");
    drop(greeting);
}
