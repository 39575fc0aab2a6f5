use pn_lang::ParseOptions;

fn main() {
    let tree = pn_lang::parse("- 5 /").unwrap();
    println!("{}", tree.to_infix());

    let result = pn_lang::parse_with_options("- 5 /", ParseOptions { strict: true });
    println!("{:?}", result);
}
