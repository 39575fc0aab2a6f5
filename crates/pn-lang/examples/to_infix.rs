fn main() {
    let tree = pn_lang::parse("+ 1 * 2 3").unwrap();

    println!("{}", tree.to_prefix());
    println!("{}", tree.to_infix());
}
