use bolero::check;
use nanowork::{format_work, parse_work, BlockHash};

#[test]
fn fuzz_text_parsers_never_panic() {
    check!().with_type::<String>().for_each(|input| {
        if let Ok(work) = parse_work(input) {
            assert_eq!(format_work(work), input.to_ascii_lowercase());
        }
        if let Ok(block) = input.parse::<BlockHash>() {
            assert_eq!(block.to_string(), input.to_ascii_uppercase());
        }
    });
}
