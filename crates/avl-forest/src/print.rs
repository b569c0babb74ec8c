//! Box-drawing helpers for tree printers.

/// Starts a child line below the current one: a newline, `tab`, then a
/// `├─ ` or `└─ ` connector. Returns the indentation the child's own
/// children are drawn with.
pub fn open_branch(out: &mut String, tab: &str, last: bool) -> String {
    out.push('\n');
    out.push_str(tab);
    if last {
        out.push_str("└─ ");
        format!("{tab}   ")
    } else {
        out.push_str("├─ ");
        format!("{tab}│  ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branches_use_connector_and_indent_children() {
        let mut out = String::from("root");
        let inner = open_branch(&mut out, "", false);
        out.push_str("inner");
        let leaf_tab = open_branch(&mut out, &inner, true);
        out.push_str("leaf");
        let last = open_branch(&mut out, "", true);
        out.push_str("leaf");

        assert_eq!(out, "root\n├─ inner\n│  └─ leaf\n└─ leaf");
        assert_eq!(inner, "│  ");
        assert_eq!(leaf_tab, "│     ");
        assert_eq!(last, "   ");
    }
}
