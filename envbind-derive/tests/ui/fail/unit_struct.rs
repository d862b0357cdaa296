use envbind::Bindable;

#[derive(Bindable)]
struct Marker;

fn main() {}
