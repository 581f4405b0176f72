use either_v2::either::{Either, Left, Right};
use either_v2::either_iter::EitherIter;
use either_v2::either_parser;

fn main() -> anyhow::Result<()> {
    let decoded = either_parser::from_str::<i32, String>(r#"{"right":"hello"}"#)?;
    dbg!(&decoded);

    let values: Vec<Either<i32, &str>> = vec![Left(1), Right("a"), Left(2), Right("b")];
    let firsts: Vec<i32> = values.into_iter().lefts_iter().collect();
    dbg!(firsts);

    Ok(())
}
