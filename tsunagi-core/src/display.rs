//! Aligned-row rendering shared by the `Display` implementations.

use std::fmt;

/// Writes labelled rows of numbers with every column padded to a common
/// width, so the value for one site lines up across all rows.
///
/// Rows are separated by newlines; no trailing newline is written.
pub(crate) fn write_aligned_rows(
    f: &mut fmt::Formatter<'_>,
    rows: &[(&str, &[usize])],
) -> fmt::Result {
    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let column_width = rows
        .iter()
        .flat_map(|(_, values)| values.iter())
        .map(|value| digits(*value))
        .max()
        .unwrap_or(1);

    for (position, (label, values)) in rows.iter().enumerate() {
        if position > 0 {
            writeln!(f)?;
        }
        write!(f, "{label:<label_width$}")?;
        for value in *values {
            write!(f, " {value:>column_width$}")?;
        }
    }
    Ok(())
}

fn digits(value: usize) -> usize {
    let mut count = 1;
    let mut rest = value;
    while rest >= 10 {
        rest /= 10;
        count += 1;
    }
    count
}
