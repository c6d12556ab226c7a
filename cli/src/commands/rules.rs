use snvet_core::{filter, flagger};

use crate::terminal::print;

/// Prints the heuristics the filter and flagger currently apply.
pub fn rules() {
    let keys: [&str; 8] = [
        "Min length",
        "Composition",
        "Date marker",
        "Spaces",
        "Prefix vote",
        "Length vote",
        "Duplicates",
        "Charset",
    ];
    let key_width: usize = keys.iter().map(|k| k.len()).max().unwrap_or(0);
    print::set_key_width(key_width);

    print::aligned_line(
        "Min length",
        format!("more than {} characters", filter::MIN_LEN),
    );
    print::aligned_line("Composition", "at least one digit and one letter");
    print::aligned_line(
        "Date marker",
        format!("must not contain \"{}\"", filter::DATE_MARKER),
    );
    print::aligned_line("Spaces", format!("at most {}", filter::MAX_SPACES));

    print::aligned_line(
        "Prefix vote",
        format!(
            "first {} characters vs the batch majority",
            flagger::PREFIX_LEN
        ),
    );
    print::aligned_line("Length vote", "character count vs the batch majority");
    print::aligned_line("Duplicates", "any batch-wide repeat is flagged");
    print::aligned_line("Charset", "ASCII letters, digits and hyphen only");
}
