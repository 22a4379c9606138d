use predswitch::switch;

fn label(a: i32, b: i32) -> &'static str {
    let mut out = "none";
    switch!(a {
        case *val > 0 => {
            switch!(b {
                case *val > 0 => { out = "both"; }
                default => { out = "first"; }
            });
        }
        default => {}
    });
    out
}

fn main() {
    assert_eq!(label(1, 1), "both");
    assert_eq!(label(1, -1), "first");
    assert_eq!(label(-1, 1), "none");
}
