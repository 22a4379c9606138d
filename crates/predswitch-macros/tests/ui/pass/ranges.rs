use predswitch::switch;

fn main() {
    let mut out = Vec::new();
    for n in [-5, 50, 150] {
        switch!(n {
            case *val >= 0 && *val <= 100 => { out.push("in range"); }
            case *val > 100 => { out.push("big"); }
            default => { out.push("other"); }
        });
    }
    assert_eq!(out, ["other", "in range", "big"]);
}
