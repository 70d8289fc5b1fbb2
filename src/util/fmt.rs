//! Formatting helpers shared by the list types.

use std::fmt::{self, Display, Formatter};

/// Writes `name(a<sep>b<sep>c)`, the textual form shared by the linked collections.
#[allow(unused)]
pub(crate) fn write_sequence<I>(
    f: &mut Formatter<'_>,
    name: &str,
    items: I,
    separator: &str,
) -> fmt::Result
where
    I: IntoIterator,
    I::Item: Display,
{
    write!(f, "{name}(")?;
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{item}")?;
    }
    f.write_str(")")
}
