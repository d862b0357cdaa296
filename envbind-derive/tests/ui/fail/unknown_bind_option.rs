use envbind::Bindable;

#[derive(Bindable)]
struct Server {
    #[bind(flatten)]
    port: u16,
}

fn main() {}
