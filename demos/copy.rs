use posargs::{Collection, Positional, PositionalParser, Scalar};

fn main() {
    let mut sources: Vec<String> = Vec::default();
    let mut dest: String = String::default();
    let parser = PositionalParser::new("copy")
        .add(Positional::optional(
            Collection::unbounded(&mut sources),
            "SOURCE",
        ))
        .add(Positional::required(Scalar::new(&mut dest), "DEST"))
        .build()
        .expect("Invalid PositionalParser configuration");
    parser.parse();
    println!("Copying {sources:?} into '{dest}'.");
}
