use envbind::Bindable;

#[derive(Bindable)]
struct Server {
    #[tag(env = 42)]
    port: u16,
}

fn main() {}
