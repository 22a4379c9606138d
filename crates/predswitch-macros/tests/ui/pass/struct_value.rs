use predswitch::switch;

struct Ticket {
    priority: u8,
    title: String,
}

fn main() {
    let ticket = Ticket {
        priority: 2,
        title: String::from("disk full"),
    };
    let mut lane = "";
    switch!(ticket {
        case val.priority == 1 => { lane = "page"; }
        case val.title.contains("disk") => { lane = "ops"; }
        default => { lane = "backlog"; }
    });
    assert_eq!(lane, "ops");
    assert_eq!(ticket.title, "disk full");
}
