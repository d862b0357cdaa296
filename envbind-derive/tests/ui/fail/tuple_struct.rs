use envbind::Bindable;

#[derive(Bindable)]
struct Pair(u8, u16);

fn main() {}
