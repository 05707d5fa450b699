use std::fmt;

/// Column type a dataframe parser would settle on for the RUL values.
/// Informational only; values are always written back as read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Integer,
    Float,
    Text,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Text => "text",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Infer the kind of a single cell.
pub fn infer_kind_from_str(s: &str) -> ValueKind {
    let s = s.trim();
    if s.parse::<i64>().is_ok() {
        ValueKind::Integer
    } else if s.parse::<f64>().is_ok() {
        ValueKind::Float
    } else {
        ValueKind::Text
    }
}

/// Widen across a column: any text makes it text, any float makes it float.
/// An empty column counts as integer.
pub fn infer_column_kind<'a, I>(values: I) -> ValueKind
where
    I: IntoIterator<Item = &'a str>,
{
    let mut kind = ValueKind::Integer;
    for v in values {
        match infer_kind_from_str(v) {
            ValueKind::Text => return ValueKind::Text,
            ValueKind::Float => kind = ValueKind::Float,
            ValueKind::Integer => {}
        }
    }
    kind
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_inference() {
        assert_eq!(infer_kind_from_str("112"), ValueKind::Integer);
        assert_eq!(infer_kind_from_str("-3"), ValueKind::Integer);
        assert_eq!(infer_kind_from_str("98.5"), ValueKind::Float);
        assert_eq!(infer_kind_from_str("1e3"), ValueKind::Float);
        assert_eq!(infer_kind_from_str("n/a"), ValueKind::Text);
    }

    #[test]
    fn column_widens() {
        assert_eq!(infer_column_kind(["112", "98", "84"]), ValueKind::Integer);
        assert_eq!(infer_column_kind(["112", "98.5", "84"]), ValueKind::Float);
        assert_eq!(infer_column_kind(["112", "x", "84.0"]), ValueKind::Text);
        assert_eq!(infer_column_kind(Vec::<&str>::new()), ValueKind::Integer);
    }
}
