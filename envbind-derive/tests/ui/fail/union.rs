use envbind::Bindable;

#[derive(Bindable)]
union Bits {
    int: u32,
    float: f32,
}

fn main() {}
